//! Pet Registry - Owners and their pets over HTTP
//!
//! A small service exposing owners and pets stored in a relational
//! database, with explicit transaction boundaries around every use case
//! and a configurable isolation level for the pet listing.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Owner and Pet records
//! - **services**: Use cases, one transaction each
//! - **infra**: Database, migrations, repositories and Unit of Work
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Insert the demonstration owners and pets
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, ReadIsolation};
pub use domain::{NewPet, Owner, Pet};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Persistence};
