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

//! Lock manager: acquire, inspect, extend, and release TTL-based locks.

use crate::{codec, Lock, LockError, LockResult};
use chrono::Utc;
use plexlocks_store::{LockStore, StoreError};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Current state of a key as reported by [`LockManager::inspect`].
#[derive(Debug, Clone, PartialEq)]
pub struct LockStatus {
    /// Whether the key can be acquired without force
    pub is_free: bool,
    /// The current record, decoded, if one exists (live or expired)
    pub lock: Option<Lock>,
}

/// Result of a mutating lock operation.
///
/// `success: false` with a lock attached means a live holder blocked the
/// operation; `success: false` with no lock means the operation raced with a
/// concurrent mutation and was abandoned without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct LockOutcome {
    /// Whether the operation won
    pub success: bool,
    /// The resulting lock on success; the blocking holder on conflict
    pub lock: Option<Lock>,
}

/// Options for [`LockManager::acquire`].
#[derive(Debug, Clone, Default)]
pub struct AcquireOptions {
    /// Caller-supplied metadata, stored with the lock and round-tripped on read
    pub metadata: Value,
    /// Time-to-live; `None` means the lock never expires
    pub ttl: Option<Duration>,
    /// Steal the key even from a live holder
    pub force: bool,
}

/// Options for [`LockManager::extend`].
#[derive(Debug, Clone)]
pub struct ExtendOptions {
    /// Capability token of the acquisition being extended
    pub uid: String,
    /// New time-to-live, measured from now; `None` means no expiry
    pub ttl: Option<Duration>,
    /// Replacement metadata; when omitted the current metadata is carried forward
    pub metadata: Option<Value>,
}

/// TTL-based, force-overridable lock manager over a shared record store.
///
/// ## Purpose
/// Coordinates concurrent editors of the same resource: at most one live
/// lock record exists per key, a crashed holder is tolerated through expiry,
/// and a holder can be overridden explicitly (`force`). Each successful
/// acquisition or extension produces a fresh `uid`; the uid is the
/// capability required to extend or release.
///
/// ## Design
/// The manager is stateless: all state lives in the store, every operation
/// reads the wall clock once at its start, and records are only ever mutated
/// by replacement (delete-then-create), never in place. The store offers no
/// compare-and-swap, so races are handled two ways:
/// - deletes are qualified by the exact `uid` observed at read time, which
///   turns a lost race into a reported failure instead of a double win;
/// - the store's unique-key constraint rejects the second of two blind
///   creates, which the manager reports as `success: false`.
///
/// A caller that loses such a race simply retries; the manager itself never
/// retries.
///
/// ## Example
/// ```rust
/// use plexlocks_core::{AcquireOptions, LockManager};
/// use plexlocks_store::InMemoryLockStore;
/// use serde_json::json;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let manager = LockManager::new(Arc::new(InMemoryLockStore::new()), "content-manager")?;
///
/// let outcome = manager.acquire("edit:article:1", AcquireOptions {
///     metadata: json!({ "editor": "alice" }),
///     ttl: Some(Duration::from_secs(30)),
///     force: false,
/// }).await?;
/// assert!(outcome.success);
///
/// let lock = outcome.lock.unwrap();
/// manager.release("edit:article:1", &lock.uid).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LockManager {
    store: Arc<dyn LockStore>,
    prefix: String,
}

impl LockManager {
    /// Create a lock manager over `store`, namespacing every key with
    /// `prefix` so independent managers can share one physical store.
    pub fn new(store: Arc<dyn LockStore>, prefix: impl Into<String>) -> LockResult<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(LockError::InvalidArgument(
                "prefix must be a non-empty string".to_string(),
            ));
        }
        Ok(Self { store, prefix })
    }

    fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }

    fn prefixed_key(&self, key: &str) -> String {
        format!("{}::{}", self.prefix, key)
    }

    fn ensure_key(key: &str) -> LockResult<()> {
        if key.is_empty() {
            return Err(LockError::InvalidArgument(
                "key must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }

    fn ensure_uid(uid: &str) -> LockResult<()> {
        if uid.is_empty() {
            return Err(LockError::InvalidArgument(
                "uid must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }

    /// Report the current state of `key` without mutating anything.
    ///
    /// ## Returns
    /// - `{is_free: true, lock: None}`: no record exists
    /// - `{is_free: true, lock: Some(..)}`: an expired record remains; its
    ///   stale metadata is still readable
    /// - `{is_free: false, lock: Some(..)}`: a live holder
    #[instrument(skip(self), fields(prefix = %self.prefix, key = %key))]
    pub async fn inspect(&self, key: &str) -> LockResult<LockStatus> {
        Self::ensure_key(key)?;

        let now = Self::now_ms();
        let record = self.store.find_one(&self.prefixed_key(key)).await?;
        let is_free = !codec::is_live(record.as_ref(), now);

        Ok(LockStatus {
            is_free,
            lock: codec::decode(record, &self.prefix)?,
        })
    }

    /// Try to take `key`.
    ///
    /// ## Behavior
    /// - No record: create one and win.
    /// - Expired record, or `force`: delete the observed record by its exact
    ///   uid, then create. A zero-row delete means a rival replaced the
    ///   record first; the acquisition is abandoned rather than risking two
    ///   winners.
    /// - Live record without `force`: fail, returning the holder so the
    ///   caller can see who blocks it.
    ///
    /// ## Returns
    /// - `Ok(LockOutcome { success: true, lock: Some(new) })`: acquired
    /// - `Ok(LockOutcome { success: false, lock: Some(holder) })`: blocked
    /// - `Ok(LockOutcome { success: false, lock: None })`: lost a race
    #[instrument(skip(self, options), fields(prefix = %self.prefix, key = %key, force = options.force))]
    pub async fn acquire(&self, key: &str, options: AcquireOptions) -> LockResult<LockOutcome> {
        Self::ensure_key(key)?;

        let prefixed = self.prefixed_key(key);
        let now = Self::now_ms();
        // The candidate is built before the read so the acquisition instant
        // is the instant the caller asked, not the instant the store answered.
        let candidate = codec::encode(&prefixed, &options.metadata, options.ttl, now)?;
        let status = self.inspect(key).await?;

        let existing = match status.lock {
            None => {
                return self.create_candidate(candidate).await;
            }
            Some(existing) => existing,
        };

        if status.is_free || options.force {
            if !status.is_free {
                debug!(holder = %existing.uid, "forcing takeover of live lock");
            }
            let deleted = self.store.delete(&prefixed, &existing.uid).await?;
            if deleted.is_none() {
                warn!("observed record already replaced, abandoning acquisition");
                return Ok(LockOutcome {
                    success: false,
                    lock: None,
                });
            }
            return self.create_candidate(candidate).await;
        }

        // Live holder, not forced
        Ok(LockOutcome {
            success: false,
            lock: Some(existing),
        })
    }

    /// Renew the expiry of a held lock, proving ownership with `uid`.
    ///
    /// ## Behavior
    /// Succeeds only against a live record whose uid matches. The record is
    /// replaced (fresh uid, `expires_at = now + ttl`), with the previous
    /// metadata carried forward unless a replacement is supplied. On a wrong
    /// or stale uid, an expired record, or no record, nothing is mutated and
    /// the current lock (if any) is returned with `success: false`.
    #[instrument(skip(self, options), fields(prefix = %self.prefix, key = %key))]
    pub async fn extend(&self, key: &str, options: ExtendOptions) -> LockResult<LockOutcome> {
        Self::ensure_key(key)?;
        Self::ensure_uid(&options.uid)?;

        let prefixed = self.prefixed_key(key);
        let now = Self::now_ms();
        let status = self.inspect(key).await?;

        let current = match status.lock {
            Some(current) if !status.is_free && current.uid == options.uid => current,
            other => {
                return Ok(LockOutcome {
                    success: false,
                    lock: other,
                });
            }
        };

        let metadata = options.metadata.unwrap_or(current.metadata);
        let candidate = codec::encode(&prefixed, &metadata, options.ttl, now)?;

        let deleted = self.store.delete(&prefixed, &options.uid).await?;
        if deleted.is_none() {
            warn!("held record already replaced, abandoning extension");
            return Ok(LockOutcome {
                success: false,
                lock: None,
            });
        }

        self.create_candidate(candidate).await
    }

    /// Release the acquisition identified by `uid`.
    ///
    /// Deletes the record matching both key and uid; succeeds exactly once
    /// per uid. A wrong uid fails without touching whatever lock currently
    /// holds the key, so a caller can never release a lock it does not hold.
    ///
    /// ## Returns
    /// - `Ok(LockOutcome { success: true, lock: Some(released) })`
    /// - `Ok(LockOutcome { success: false, lock: None })`: nothing matched
    #[instrument(skip(self), fields(prefix = %self.prefix, key = %key))]
    pub async fn release(&self, key: &str, uid: &str) -> LockResult<LockOutcome> {
        Self::ensure_key(key)?;
        Self::ensure_uid(uid)?;

        let deleted = self.store.delete(&self.prefixed_key(key), uid).await?;

        Ok(LockOutcome {
            success: deleted.is_some(),
            lock: codec::decode(deleted, &self.prefix)?,
        })
    }

    /// Insert the candidate record, treating a unique-key rejection as a
    /// lost race rather than an error.
    async fn create_candidate(&self, candidate: plexlocks_store::LockRecord) -> LockResult<LockOutcome> {
        match self.store.create(candidate).await {
            Ok(created) => Ok(LockOutcome {
                success: true,
                lock: codec::decode(Some(created), &self.prefix)?,
            }),
            Err(StoreError::DuplicateKey(key)) => {
                debug!(%key, "key created concurrently, abandoning");
                Ok(LockOutcome {
                    success: false,
                    lock: None,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
