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

//! # PlexLocks Record Store
//!
//! ## Purpose
//! Persistence boundary for lock records. The lock manager in
//! `plexlocks-core` stores one record per held key and mutates state only by
//! replacing whole records (delete-then-create), so the store contract is
//! deliberately small: exact-key lookup, insert-if-absent, and a delete
//! qualified by both key and uid.
//!
//! ## Backend Support
//!
//! - **InMemory**: HashMap-based (always available, for testing)
//! - **SQLite**: Persistent, single-node (feature: `sqlite-backend`)
//!
//! Every backend MUST reject a `create` for an already-present key with
//! [`StoreError::DuplicateKey`]. The manager relies on that constraint as the
//! backstop against two concurrent acquisitions of the same key.
//!
//! ## Examples
//!
//! ```rust
//! use plexlocks_store::{InMemoryLockStore, LockRecord, LockStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryLockStore::new();
//!
//! store.create(LockRecord {
//!     uid: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
//!     key: "content-manager::edit:article:1".to_string(),
//!     metadata: "{}".to_string(),
//!     expires_at: Some(1_700_000_000_000),
//! }).await?;
//!
//! let found = store.find_one("content-manager::edit:article:1").await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod memory;

#[cfg(feature = "sqlite-backend")]
pub mod sql;

pub use config::{create_store_from_config, create_store_from_env, BackendType, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryLockStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Physical lock record as persisted by a backend.
///
/// `key` is already namespaced by the lock manager, `metadata` is the
/// JSON-encoded metadata string, and `expires_at` is an absolute expiry in
/// milliseconds since the UNIX epoch (`None` means the lock never expires).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// Capability token identifying one acquisition of the key
    pub uid: String,
    /// Namespaced lock key (unique per store)
    pub key: String,
    /// JSON-encoded caller metadata
    pub metadata: String,
    /// Absolute expiry in epoch milliseconds, `None` = never expires
    pub expires_at: Option<i64>,
}

/// Trait for lock record persistence backends.
///
/// ## Purpose
/// The manager performs a read-then-delete-then-create sequence per mutation;
/// the store does not need multi-call atomicity, but each individual call
/// must be atomic and `create` must enforce key uniqueness.
#[async_trait]
pub trait LockStore: Send + Sync {
    /// Look up the record for an exact (namespaced) key.
    ///
    /// ## Returns
    /// - `Ok(Some(record))`: a record exists for the key (live or expired)
    /// - `Ok(None)`: no record for the key
    async fn find_one(&self, key: &str) -> StoreResult<Option<LockRecord>>;

    /// Insert a new record.
    ///
    /// ## Returns
    /// - `Ok(record)`: the record as persisted
    /// - `Err(StoreError::DuplicateKey)`: a record with the same key exists
    async fn create(&self, record: LockRecord) -> StoreResult<LockRecord>;

    /// Delete the record matching both `key` and `uid`.
    ///
    /// The uid qualification narrows delete races: a caller can only remove
    /// the exact record instance it previously observed, never a fresher
    /// record created by a rival in the meantime.
    ///
    /// ## Returns
    /// - `Ok(Some(record))`: the record that was deleted
    /// - `Ok(None)`: nothing matched (zero rows affected)
    async fn delete(&self, key: &str, uid: &str) -> StoreResult<Option<LockRecord>>;
}
