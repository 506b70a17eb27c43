//! Request-scoped database session.
//!
//! A `Session` owns one database transaction. Repositories obtained from
//! it run every statement inside that transaction. Changes become durable
//! only through [`Session::commit`]; dropping an uncommitted session rolls
//! it back and hands the connection back to the pool, so release happens
//! on every exit path, including early returns through `?`.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::repositories::{ProductStore, UserStore};
use crate::errors::{AppError, AppResult};

pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    /// Borrow a pooled connection and open a transaction on it.
    pub async fn begin(db: &DatabaseConnection) -> AppResult<Self> {
        let txn = db.begin().await.map_err(AppError::from)?;
        Ok(Self { txn })
    }

    /// User repository scoped to this session
    pub fn users(&self) -> UserStore<'_> {
        UserStore::new(&self.txn)
    }

    /// Product repository scoped to this session
    pub fn products(&self) -> ProductStore<'_> {
        ProductStore::new(&self.txn)
    }

    /// Make this session's writes durable and release the connection.
    pub async fn commit(self) -> AppResult<()> {
        self.txn.commit().await.map_err(AppError::from)
    }

    /// Discard this session's writes and release the connection.
    pub async fn rollback(self) -> AppResult<()> {
        self.txn.rollback().await.map_err(AppError::from)
    }
}
