use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use sqlx::{Pool, Sqlite, SqliteConnection, Transaction};
use tokio::sync::Mutex;

use crate::application::{app_error::AppResult, interface::db::DBSession};

/// Takes the write lock up front so a transaction never has to upgrade a
/// read lock, which SQLite refuses with `SQLITE_BUSY` under contention.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

struct UnitOfWork {
    pool: Pool<Sqlite>,
    transaction: Option<Transaction<'static, Sqlite>>,
}

/// Unit of work shared by the gateways of one use case.
///
/// Reads issued before the first write run in autocommit mode on a pooled
/// connection. The first write opens a `BEGIN IMMEDIATE` transaction that
/// every later read and write joins until `commit` or `rollback`. Dropping
/// an uncommitted session rolls the transaction back.
#[derive(Clone)]
pub struct SqlxSession {
    inner: Arc<Mutex<UnitOfWork>>,
}

impl SqlxSession {
    pub fn new_lazy(pool: Pool<Sqlite>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(UnitOfWork {
                pool,
                transaction: None,
            })),
        }
    }

    pub async fn read<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a mut SqliteConnection) -> BoxFuture<'a, AppResult<T>>,
    {
        let mut inner = self.inner.lock().await;
        if let Some(tx) = inner.transaction.as_mut() {
            return f(tx.as_mut()).await;
        }
        let mut conn = inner.pool.acquire().await?;
        f(conn.as_mut()).await
    }

    pub async fn write<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a mut SqliteConnection) -> BoxFuture<'a, AppResult<T>>,
    {
        let mut inner = self.inner.lock().await;
        let tx = match inner.transaction.take() {
            Some(tx) => tx,
            None => inner.pool.begin_with(BEGIN_WRITE).await?,
        };
        let tx = inner.transaction.insert(tx);
        f(tx.as_mut()).await
    }

    #[cfg(test)]
    pub async fn in_transaction(&self) -> bool {
        self.inner.lock().await.transaction.is_some()
    }
}

#[async_trait]
impl DBSession for SqlxSession {
    async fn commit(&self) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        if let Some(tx) = inner.transaction.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    async fn rollback(&self) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        if let Some(tx) = inner.transaction.take() {
            tx.rollback().await?;
        }
        Ok(())
    }
}
