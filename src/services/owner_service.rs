//! Owner service - Handles owner-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ReadIsolation;
use crate::domain::Pet;
use crate::errors::{AppError, AppResult};
use crate::infra::{OwnerRepository, PetRepository, UnitOfWork};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Owner service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OwnerService: Send + Sync {
    /// Delete an owner together with its pets.
    ///
    /// Pets are removed first, then the owner, in one transaction.
    /// An unknown id removes nothing and still succeeds.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Pets currently assigned to the owner (empty for an unknown id)
    async fn get_owner_pets(&self, id: i64) -> AppResult<Vec<Pet>>;
}

/// Concrete implementation of OwnerService using Unit of Work.
pub struct OwnerManager<U: UnitOfWork> {
    uow: Arc<U>,
    read_isolation: ReadIsolation,
}

impl<U: UnitOfWork> OwnerManager<U> {
    /// Create new owner service instance with Unit of Work
    pub fn new(uow: Arc<U>, read_isolation: ReadIsolation) -> Self {
        Self {
            uow,
            read_isolation,
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> OwnerService for OwnerManager<U> {
    async fn delete(&self, id: i64) -> AppResult<()> {
        let (pets_removed, owners_removed) = with_transaction!(self.uow, |ctx| {
            // Pets reference the owner, so they must go first
            let pets_removed = ctx.pets().delete_all_by_owner_id(id).await?;
            let owners_removed = ctx.owners().delete_by_id(id).await?;
            Ok::<_, AppError>((pets_removed, owners_removed))
        })?;

        tracing::info!(owner_id = id, pets_removed, owners_removed, "Deleted owner");
        Ok(())
    }

    async fn get_owner_pets(&self, id: i64) -> AppResult<Vec<Pet>> {
        with_transaction!(self.uow, read(self.read_isolation.level()), |ctx| {
            ctx.pets().find_by_owner_id(id).await
        })
    }
}
