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

//! PlexLocks: TTL-based editing locks over pluggable stores
//!
//! A lock here is advisory bookkeeping, not mutual exclusion: it records who
//! is editing a resource, with what metadata, until when. Holders renew by
//! extending, vanished holders age out through expiry, and takeover is an
//! explicit `force`, never a silent overwrite.
//!
//! The crates layer bottom-up:
//! 1. `store`: record persistence behind the [`store::LockStore`] trait,
//!    with in-memory and SQLite backends
//! 2. `core`: the [`core::LockManager`] with acquire, inspect, extend, and
//!    release semantics
//! 3. `editing`: an entity-scoped facade with input validation, permission
//!    checks, and client-safe responses

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Independent crates - re-export them here
pub use plexlocks_core as core; // Lock manager and lock semantics
pub use plexlocks_editing as editing; // Entity editing-lock facade
pub use plexlocks_store as store; // Record stores (in-memory, SQLite)

// Re-export the most used types for convenience
pub use plexlocks_core::{
    AcquireOptions, ExtendOptions, Lock, LockManager, LockOutcome, LockStatus,
};
pub use plexlocks_editing::{Editor, EditingLockService};
pub use plexlocks_store::{InMemoryLockStore, LockStore};
