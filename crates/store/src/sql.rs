// SPDX-License-Identifier: LGPL-2.1-or-later
// Copyright (C) 2025 Shahzad A. Bhatti <bhatti@plexobject.com>
//
// This file is part of PlexLocks.
//
// PlexLocks is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 2.1 of the License, or
// (at your option) any later version.
//
// PlexLocks is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with PlexLocks. If not, see <https://www.gnu.org/licenses/>.

//! SQL-based lock record store (SQLite).
//!
//! This module provides a relational database backend for the generic
//! [`LockStore`](crate::LockStore) trait:
//!
//! - One row per namespaced lock key
//! - `PRIMARY KEY` on the key column enforces the insert-if-absent contract
//! - A unique index on `uid` keeps capability tokens unique across records
//!
//! Currently we implement a **SQLite** backend. PostgreSQL can be added by
//! following the same pattern with a `PgPool`.

use crate::{LockRecord, LockStore, StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::{Acquire, Row, SqlitePool};
use tracing::instrument;

/// SQLite-based lock record store.
///
/// This backend uses a single `locks` table with the following schema:
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS locks (
///   lock_key TEXT PRIMARY KEY,
///   uid TEXT NOT NULL,
///   metadata TEXT NOT NULL,
///   expires_at INTEGER
/// );
/// CREATE UNIQUE INDEX IF NOT EXISTS idx_locks_uid ON locks(uid);
/// ```
///
/// - `expires_at` is stored as UNIX epoch milliseconds (NULL = never expires)
/// - `metadata` is the JSON string produced by the lock codec
#[derive(Clone)]
pub struct SqliteLockStore {
    pool: SqlitePool,
}

impl SqliteLockStore {
    /// Create a new SQLite lock record store.
    ///
    /// `database_url` is any valid `sqlx` SQLite URL, e.g.:
    /// - `sqlite::memory:` (in-memory)
    /// - `sqlite://locks.db`
    #[instrument(skip(database_url))]
    pub async fn new(database_url: &str) -> StoreResult<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| StoreError::BackendError(format!("failed to connect SQLite: {e}")))?;

        // Initialize schema lazily
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS locks (
              lock_key TEXT PRIMARY KEY,
              uid TEXT NOT NULL,
              metadata TEXT NOT NULL,
              expires_at INTEGER
            );
        "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::BackendError(format!("failed to create locks table: {e}")))?;

        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_locks_uid ON locks(uid);
        "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::BackendError(format!("failed to create index: {e}")))?;

        Ok(Self { pool })
    }

    fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> LockRecord {
        LockRecord {
            uid: row.get("uid"),
            key: row.get("lock_key"),
            metadata: row.get("metadata"),
            expires_at: row.get("expires_at"),
        }
    }
}

#[async_trait]
impl LockStore for SqliteLockStore {
    #[instrument(skip(self), fields(key = %key))]
    async fn find_one(&self, key: &str) -> StoreResult<Option<LockRecord>> {
        let row = sqlx::query(
            r#"SELECT lock_key, uid, metadata, expires_at FROM locks WHERE lock_key = ?1"#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::BackendError(format!("select lock: {e}")))?;

        Ok(row.as_ref().map(Self::record_from_row))
    }

    #[instrument(skip(self, record), fields(key = %record.key, uid = %record.uid))]
    async fn create(&self, record: LockRecord) -> StoreResult<LockRecord> {
        let result = sqlx::query(
            r#"INSERT INTO locks (lock_key, uid, metadata, expires_at)
               VALUES (?1, ?2, ?3, ?4)"#,
        )
        .bind(&record.key)
        .bind(&record.uid)
        .bind(&record.metadata)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(record),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::DuplicateKey(record.key))
            }
            Err(e) => Err(StoreError::BackendError(format!("insert lock: {e}"))),
        }
    }

    #[instrument(skip(self), fields(key = %key, uid = %uid))]
    async fn delete(&self, key: &str, uid: &str) -> StoreResult<Option<LockRecord>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| StoreError::BackendError(format!("acquire conn: {e}")))?;
        let mut tx = conn
            .begin()
            .await
            .map_err(|e| StoreError::BackendError(format!("begin tx: {e}")))?;

        let row = sqlx::query(
            r#"SELECT lock_key, uid, metadata, expires_at
               FROM locks WHERE lock_key = ?1 AND uid = ?2"#,
        )
        .bind(key)
        .bind(uid)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::BackendError(format!("select lock: {e}")))?;

        let record = match row {
            Some(r) => Self::record_from_row(&r),
            None => return Ok(None),
        };

        sqlx::query(r#"DELETE FROM locks WHERE lock_key = ?1 AND uid = ?2"#)
            .bind(key)
            .bind(uid)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::BackendError(format!("delete lock: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| StoreError::BackendError(format!("commit tx: {e}")))?;

        Ok(Some(record))
    }
}
