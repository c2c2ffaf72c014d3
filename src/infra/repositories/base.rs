//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! These traits provide a foundation for all repositories with
//! common CRUD operations that can be composed as needed. They are generic
//! over the connection, so the same repository runs on a pooled connection
//! or inside a transaction.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PaginatorTrait, PrimaryKeyTrait,
};
use std::fmt::Debug;

use crate::errors::AppResult;

/// Access to the connection a repository issues its queries on
pub trait Repository: Send + Sync {
    type Conn: ConnectionTrait;

    fn conn(&self) -> &Self::Conn;
}

/// Read operations (Query) - Single Responsibility
#[async_trait]
pub trait ReadRepository<E>: Repository
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Find entity by primary key
    async fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<E::Model>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send,
    {
        E::find_by_id(id).one(self.conn()).await.map_err(Into::into)
    }

    /// Find all entities
    async fn find_all(&self) -> AppResult<Vec<E::Model>> {
        E::find().all(self.conn()).await.map_err(Into::into)
    }

    /// Count all entities
    async fn count(&self) -> AppResult<u64> {
        E::find().count(self.conn()).await.map_err(Into::into)
    }
}

/// Write operations (Command) - Single Responsibility
#[async_trait]
pub trait WriteRepository<E, A>: Repository
where
    E: EntityTrait,
    E::Model: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Insert new entity
    async fn insert(&self, model: A) -> AppResult<E::Model>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        model.insert(self.conn()).await.map_err(Into::into)
    }

    /// Update existing entity
    async fn update(&self, model: A) -> AppResult<E::Model>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        model.update(self.conn()).await.map_err(Into::into)
    }
}

/// Delete operations - Single Responsibility
#[async_trait]
pub trait DeleteRepository<E>: Repository
where
    E: EntityTrait,
{
    /// Delete entity by primary key, returning the number of rows removed
    async fn delete_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<u64>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send + Debug,
    {
        let result = E::delete_by_id(id).exec(self.conn()).await?;
        Ok(result.rows_affected)
    }
}

/// Full CRUD repository - Combines all operations
/// Follows Open/Closed Principle: extend by implementing individual traits
pub trait CrudRepository<E, A>:
    ReadRepository<E> + WriteRepository<E, A> + DeleteRepository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

// Auto-implement CrudRepository for types implementing all traits
impl<T, E, A> CrudRepository<E, A> for T
where
    T: ReadRepository<E> + WriteRepository<E, A> + DeleteRepository<E>,
    E: EntityTrait,
    E::Model: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}
