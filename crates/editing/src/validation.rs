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

//! Typed request inputs for the editing-lock facade.
//!
//! Each input rejects unknown fields, so a misspelled field in a client
//! payload fails loudly instead of being silently dropped.

use crate::error::{EditingLockError, EditingResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Client-reported editing activity attached to a lock request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LockMetadataInput {
    /// When the editor last interacted with the entity
    #[serde(default)]
    pub last_activity_date: Option<DateTime<Utc>>,
}

/// Body of a lock request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetLockInput {
    /// Optional activity metadata
    #[serde(default)]
    pub metadata: Option<LockMetadataInput>,
    /// Take the lock even from a live holder
    #[serde(default)]
    pub force: bool,
}

/// Body of an extend-lock request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtendLockInput {
    /// Capability token returned by the lock or previous extension
    pub uid: String,
    /// Optional activity metadata, merged into the stored metadata
    #[serde(default)]
    pub metadata: Option<LockMetadataInput>,
}

/// Body of an unlock request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UnlockInput {
    /// Capability token returned by the lock or latest extension
    pub uid: String,
}

fn validate<T: serde::de::DeserializeOwned>(value: Value) -> EditingResult<T> {
    serde_json::from_value(value).map_err(|e| EditingLockError::Validation(e.to_string()))
}

/// Parse and validate a lock request body.
pub fn validate_set_lock_input(value: Value) -> EditingResult<SetLockInput> {
    validate(value)
}

/// Parse and validate an extend-lock request body.
pub fn validate_extend_lock_input(value: Value) -> EditingResult<ExtendLockInput> {
    validate(value)
}

/// Parse and validate an unlock request body.
pub fn validate_unlock_input(value: Value) -> EditingResult<UnlockInput> {
    validate(value)
}
