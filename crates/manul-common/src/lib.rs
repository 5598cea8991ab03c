//! # Manul Common
//!
//! Shared error types and logging setup for the Manul website tooling.
//!
//! Every other crate in the workspace converts its own errors into
//! [`SiteError`] at the boundary, and binaries initialize tracing through
//! [`logging::init_logging`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, SiteError};
pub use logging::{init_logging, LoggingConfig};
