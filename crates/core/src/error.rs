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

//! Error types for lock operations.

use plexlocks_store::StoreError;
use thiserror::Error;

/// Result type for lock operations.
pub type LockResult<T> = Result<T, LockError>;

/// Errors that can occur during lock operations.
#[derive(Error, Debug)]
pub enum LockError {
    /// Invalid argument (empty key, uid, or prefix); raised before any store access
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Metadata could not be encoded; raised before any store mutation
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A stored record failed to decode; surfaced, never treated as absent
    #[error("Corrupt lock record for key {key}: {detail}")]
    CorruptRecord { key: String, detail: String },

    /// Store failure, passed through unchanged (no retries)
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for LockError {
    fn from(err: serde_json::Error) -> Self {
        LockError::SerializationError(err.to_string())
    }
}
