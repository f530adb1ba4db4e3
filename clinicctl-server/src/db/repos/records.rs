//! Generic dated-record repository
//!
//! One implementation serves every table:
//! - list: full-table read, natural scan order
//! - create: insert + commit inside a transaction, then reload by id

use std::marker::PhantomData;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use crate::models::Record;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Storage mapping for a record kind.
///
/// Joins a plain model from [`crate::models`] to its table.
pub trait Table: Record + for<'r> FromRow<'r, SqliteRow> {
    const TABLE: &'static str;
    const INSERT: &'static str;
    const SELECT_ALL: &'static str;
    const SELECT_BY_ID: &'static str;

    /// Bind the new record's fields to [`Self::INSERT`], in column order.
    fn bind_new<'q>(
        new: Self::New,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>>;
}

/// Record repository
pub struct RecordRepo<'a, R> {
    pool: &'a SqlitePool,
    _kind: PhantomData<fn() -> R>,
}

impl<'a, R: Table> RecordRepo<'a, R> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    /// All rows of the table. Order is unspecified.
    pub async fn list(&self) -> Result<Vec<R>, DbError> {
        let records = sqlx::query_as::<_, R>(R::SELECT_ALL)
            .fetch_all(self.pool)
            .await?;
        Ok(records)
    }

    /// Get a single record by id.
    pub async fn get(&self, id: i64) -> Result<R, DbError> {
        sqlx::query_as::<_, R>(R::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: R::KIND,
                id: id.to_string(),
            })
    }

    /// Insert a new record and return it with its assigned id.
    ///
    /// The transaction rolls back on drop, so any failure before commit
    /// leaves the table untouched and returns the connection to the pool.
    pub async fn create(&self, new: R::New) -> Result<R, DbError> {
        let mut tx = self.pool.begin().await?;

        let id = R::bind_new(new, sqlx::query(R::INSERT))
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        tx.commit().await?;

        // The row was just committed, so a miss here is a storage fault
        // rather than a lookup miss.
        let record = sqlx::query_as::<_, R>(R::SELECT_BY_ID)
            .bind(id)
            .fetch_one(self.pool)
            .await?;
        tracing::info!(kind = R::KIND, table = R::TABLE, id, "record created");
        Ok(record)
    }
}
