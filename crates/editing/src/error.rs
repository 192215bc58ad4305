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

//! Error types for the editing-lock facade.

use plexlocks_core::LockError;
use thiserror::Error;

/// Result type for editing-lock operations
pub type EditingResult<T> = Result<T, EditingLockError>;

/// Errors raised by the editing-lock facade
#[derive(Error, Debug)]
pub enum EditingLockError {
    /// Request input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Editor is not allowed to edit the entity
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Underlying lock operation failed
    #[error("Lock error: {0}")]
    Lock(#[from] LockError),
}

impl From<serde_json::Error> for EditingLockError {
    fn from(err: serde_json::Error) -> Self {
        EditingLockError::Lock(LockError::SerializationError(err.to_string()))
    }
}
