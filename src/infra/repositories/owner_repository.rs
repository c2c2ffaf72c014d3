//! Owner repository implementation.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Set};

use super::base::{DeleteRepository, ReadRepository, Repository, WriteRepository};
use super::entities::owner::{self, ActiveModel, Entity as OwnerEntity};
use crate::domain::Owner;
use crate::errors::AppResult;

/// Owner repository trait for dependency injection.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// List every owner, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Owner>>;

    /// Find owner by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Owner>>;

    /// Persist a new owner with its caller-assigned id.
    ///
    /// Fails with a constraint violation when the id is already taken.
    async fn insert(&self, owner: Owner) -> AppResult<Owner>;

    /// Merge an owner: rename it if the id exists, insert it otherwise
    async fn save(&self, owner: Owner) -> AppResult<Owner>;

    /// Delete owner by id, returning the number of rows removed (0 when absent)
    async fn delete_by_id(&self, id: i64) -> AppResult<u64>;
}

/// Concrete implementation of OwnerRepository over any connection or transaction
pub struct OwnerStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerStore<'a, C> {
    /// Create new repository instance
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

impl<C: ConnectionTrait> Repository for OwnerStore<'_, C> {
    type Conn = C;

    fn conn(&self) -> &C {
        self.conn
    }
}

impl<C: ConnectionTrait> ReadRepository<OwnerEntity> for OwnerStore<'_, C> {}
impl<C: ConnectionTrait> WriteRepository<OwnerEntity, ActiveModel> for OwnerStore<'_, C> {}
impl<C: ConnectionTrait> DeleteRepository<OwnerEntity> for OwnerStore<'_, C> {}

#[async_trait]
impl<'a, C: ConnectionTrait> OwnerRepository for OwnerStore<'a, C> {
    async fn find_all(&self) -> AppResult<Vec<Owner>> {
        let models = OwnerEntity::find()
            .order_by_asc(owner::Column::Id)
            .all(self.conn)
            .await?;

        Ok(models.into_iter().map(Owner::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Owner>> {
        let result = <Self as ReadRepository<OwnerEntity>>::find_by_id(self, id).await?;
        Ok(result.map(Owner::from))
    }

    async fn insert(&self, owner: Owner) -> AppResult<Owner> {
        let active_model = ActiveModel {
            id: Set(owner.id),
            name: Set(owner.name),
        };

        let model =
            <Self as WriteRepository<OwnerEntity, ActiveModel>>::insert(self, active_model).await?;
        Ok(Owner::from(model))
    }

    async fn save(&self, owner: Owner) -> AppResult<Owner> {
        let exists = <Self as ReadRepository<OwnerEntity>>::find_by_id(self, owner.id)
            .await?
            .is_some();

        let active_model = ActiveModel {
            id: Set(owner.id),
            name: Set(owner.name),
        };

        let model = if exists {
            <Self as WriteRepository<OwnerEntity, ActiveModel>>::update(self, active_model).await?
        } else {
            <Self as WriteRepository<OwnerEntity, ActiveModel>>::insert(self, active_model).await?
        };

        Ok(Owner::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        <Self as DeleteRepository<OwnerEntity>>::delete_by_id(self, id).await
    }
}
