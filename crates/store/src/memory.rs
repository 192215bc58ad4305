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

//! In-memory lock record store (for testing).

use crate::{LockRecord, LockStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory lock record store (for testing).
///
/// ## Purpose
/// Provides a simple in-memory implementation of `LockStore` for testing and
/// single-process scenarios. Each trait call holds the map lock for its full
/// duration, so individual calls are atomic.
///
/// ## Limitations
/// - Not persistent (records lost on restart)
/// - Not distributed (single process only)
/// - No TTL cleanup (expired records remain until replaced)
#[derive(Clone, Default)]
pub struct InMemoryLockStore {
    records: Arc<RwLock<HashMap<String, LockRecord>>>,
}

impl InMemoryLockStore {
    /// Create a new in-memory lock record store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl LockStore for InMemoryLockStore {
    async fn find_one(&self, key: &str) -> StoreResult<Option<LockRecord>> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn create(&self, record: LockRecord) -> StoreResult<LockRecord> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.key) {
            return Err(StoreError::DuplicateKey(record.key));
        }
        records.insert(record.key.clone(), record.clone());
        Ok(record)
    }

    async fn delete(&self, key: &str, uid: &str) -> StoreResult<Option<LockRecord>> {
        let mut records = self.records.write().await;
        match records.get(key) {
            Some(existing) if existing.uid == uid => Ok(records.remove(key)),
            _ => Ok(None),
        }
    }
}
