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

//! # PlexLocks Core
//!
//! TTL-based, force-overridable locks over a shared record store.
//!
//! ## Purpose
//! Provides the [`LockManager`], which coordinates concurrent access to
//! string-keyed resources. A lock is advisory: it does not block anything by
//! itself, it records who holds a key, with what metadata, until when. The
//! manager guarantees at most one live lock per key and tolerates crashed
//! holders through expiry and explicit takeover (`force`).
//!
//! ## Lock Lifecycle
//! - `acquire` creates a lock with a fresh uid; the uid is the capability
//!   needed to extend or release it
//! - `inspect` reports the current holder without mutating anything
//! - `extend` replaces the record with a renewed expiry and a fresh uid
//! - `release` deletes the record, ending the acquisition
//!
//! Records are never updated in place. Every mutation is a replacement, so a
//! uid observed before a mutation is never valid after it.
//!
//! ## Examples
//! ```rust,no_run
//! use plexlocks_core::{AcquireOptions, LockManager};
//! use plexlocks_store::InMemoryLockStore;
//! use serde_json::json;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = LockManager::new(Arc::new(InMemoryLockStore::new()), "content-manager")?;
//!
//!     let outcome = manager.acquire("edit:article:1", AcquireOptions {
//!         metadata: json!({ "editor": "alice" }),
//!         ttl: Some(Duration::from_secs(30)),
//!         force: false,
//!     }).await?;
//!
//!     if let Some(lock) = outcome.lock {
//!         println!("holding {} until {:?}", lock.key, lock.expires_at);
//!         manager.release("edit:article:1", &lock.uid).await?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod codec;
pub mod error;
pub mod manager;

pub use error::{LockError, LockResult};
pub use manager::{AcquireOptions, ExtendOptions, LockManager, LockOutcome, LockStatus};

/// A lock as callers see it: namespaced key stripped back to the caller's
/// key, metadata decoded from its stored JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lock {
    /// Capability token of this acquisition, rotated on every extension
    pub uid: String,
    /// The key as the caller supplied it
    pub key: String,
    /// Caller-supplied metadata, round-tripped verbatim
    pub metadata: Value,
    /// Expiry instant in epoch milliseconds; `None` never expires
    pub expires_at: Option<i64>,
}

impl Lock {
    /// Whether this lock is still live at `now_ms` (epoch milliseconds).
    pub fn is_live(&self, now_ms: i64) -> bool {
        self.expires_at.is_none_or(|at| at > now_ms)
    }
}
