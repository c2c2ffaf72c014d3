//! Application configuration module
//!
//! Handles environment variables and application-wide constants.

mod constants;
mod isolation;
mod settings;

pub use constants::*;
pub use isolation::ReadIsolation;
pub use settings::{Config, DatabaseConfig};
