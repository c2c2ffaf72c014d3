//! Pet service - Handles pet-related use cases.
//!
//! Each operation is one transaction opened through the Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ReadIsolation;
use crate::domain::Pet;
use crate::errors::AppResult;
use crate::infra::{PetRepository, UnitOfWork};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Pet service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PetService: Send + Sync {
    /// List all pets with their owners, read at the configured isolation level
    async fn get_pets(&self) -> AppResult<Vec<Pet>>;

    /// Seed the demonstration owners and pets in a single transaction
    async fn insert_some_pets(&self) -> AppResult<()>;
}

/// Concrete implementation of PetService using Unit of Work.
pub struct PetManager<U: UnitOfWork> {
    uow: Arc<U>,
    read_isolation: ReadIsolation,
}

impl<U: UnitOfWork> PetManager<U> {
    /// Create new pet service instance with Unit of Work
    pub fn new(uow: Arc<U>, read_isolation: ReadIsolation) -> Self {
        Self {
            uow,
            read_isolation,
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> PetService for PetManager<U> {
    async fn get_pets(&self) -> AppResult<Vec<Pet>> {
        tracing::debug!(isolation = %self.read_isolation, "Listing pets");
        with_transaction!(self.uow, read(self.read_isolation.level()), |ctx| {
            ctx.pets().find_all().await
        })
    }

    async fn insert_some_pets(&self) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| ctx.pets().insert_some_pets().await)?;
        tracing::info!("Seeded demonstration owners and pets");
        Ok(())
    }
}
