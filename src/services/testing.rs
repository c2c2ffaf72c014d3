//! Unit of Work double that records how each transaction was opened.

use async_trait::async_trait;
use sea_orm::IsolationLevel;
use std::sync::Mutex;

use crate::errors::{AppError, AppResult};
use crate::infra::{TransactionContext, TxFuture, UnitOfWork};

/// How a service asked for its transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Opened {
    ReadWrite,
    ReadOnly(Option<IsolationLevel>),
}

/// Records every transaction request and fails it without running the closure
#[derive(Default)]
pub(crate) struct RecordingUnitOfWork {
    opened: Mutex<Vec<Opened>>,
}

impl RecordingUnitOfWork {
    pub(crate) fn opened(&self) -> Vec<Opened> {
        self.opened.lock().unwrap().clone()
    }

    fn record<T>(&self, opened: Opened) -> AppResult<T> {
        self.opened.lock().unwrap().push(opened);
        Err(AppError::internal("no store behind this unit of work"))
    }
}

#[async_trait]
impl UnitOfWork for RecordingUnitOfWork {
    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.record(Opened::ReadWrite)
    }

    async fn read_transaction<F, T>(&self, isolation: Option<IsolationLevel>, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.record(Opened::ReadOnly(isolation))
    }
}
