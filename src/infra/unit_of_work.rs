//! Unit of Work pattern implementation.
//!
//! Manages the transaction lifecycle and hands out repositories bound to the
//! running transaction:
//! - `transaction` opens a read-write transaction at the store's default isolation
//! - `read_transaction` opens a read-only transaction at a chosen isolation
//! - the closure's result decides the outcome: `Ok` commits, `Err` rolls back

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;

use super::repositories::{OwnerStore, PetStore};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transactional closures
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Note: This trait is not object safe due to generic methods.
/// Services take it as a type parameter.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Execute a closure within a read-write transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    /// No isolation level is requested, so the store default applies.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;

    /// Execute a closure within a read-only transaction at `isolation`.
    ///
    /// `None` keeps the store default. Engines that cannot honour a level
    /// upgrade it (PostgreSQL runs read-uncommitted as read-committed).
    async fn read_transaction<F, T>(&self, isolation: Option<IsolationLevel>, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    /// Create a new transaction context
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Owner repository for this transaction
    pub fn owners(&self) -> OwnerStore<'a, DatabaseTransaction> {
        OwnerStore::new(self.txn)
    }

    /// Pet repository for this transaction
    pub fn pets(&self) -> PetStore<'a, DatabaseTransaction> {
        PetStore::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Internal transaction execution with configurable isolation level and access mode
    async fn execute_transaction<F, T>(
        &self,
        isolation: Option<IsolationLevel>,
        access: Option<AccessMode>,
        f: F,
    ) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(isolation, access)
            .await
            .map_err(AppError::from)?;

        // Create context with borrowed transaction
        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(None, None, f).await
    }

    async fn read_transaction<F, T>(&self, isolation: Option<IsolationLevel>, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(isolation, Some(AccessMode::ReadOnly), f)
            .await
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions:
/// `with_transaction!(uow, |ctx| body)` runs read-write,
/// `with_transaction!(uow, read(isolation), |ctx| body)` runs read-only.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
    ($uow:expr, read($isolation:expr), |$ctx:ident| $body:expr) => {
        $uow.read_transaction($isolation, |$ctx| Box::pin(async move { $body }))
            .await
    };
}
