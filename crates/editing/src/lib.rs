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

//! # PlexLocks Editing
//!
//! Collaborative-editing locks for entities, built on the PlexLocks core.
//!
//! ## Purpose
//! Content tools let several editors open the same entity. This crate gives
//! each entity an editing lock: the first editor takes it, everyone else is
//! shown who holds it, and a holder that disappears is aged out by the
//! lock's TTL. Takeover is explicit (`force`), never silent.
//!
//! The facade validates request inputs, enforces permissions through a
//! pluggable [`PermissionChecker`], and sanitizes responses so storage keys
//! and foreign capability tokens never reach a client.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

pub mod error;
pub mod permission;
pub mod service;
pub mod validation;

pub use error::{EditingLockError, EditingResult};
pub use permission::{AllowAll, PermissionChecker};
pub use service::{
    EditingLockService, LockActionInfo, LockMetadata, LockStatusInfo, SanitizedLock,
    DEFAULT_LOCK_TTL,
};
pub use validation::{
    validate_extend_lock_input, validate_set_lock_input, validate_unlock_input, ExtendLockInput,
    LockMetadataInput, SetLockInput, UnlockInput,
};

/// The person holding or requesting an editing lock.
///
/// Serialized into lock metadata as `lockedBy`, so other editors can see who
/// is working on an entity. `username` is kept even when absent, serialized
/// as `null`, because clients display it in place of the name when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Editor {
    /// Stable account id
    pub id: i64,
    /// Given name
    pub firstname: String,
    /// Family name
    pub lastname: String,
    /// Display handle, when the account has one
    pub username: Option<String>,
}
