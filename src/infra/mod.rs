//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over owners and pets
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{OwnerRepository, OwnerStore, PetRepository, PetStore};
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};
