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

//! Conversions between domain locks and physical store records.
//!
//! Pure functions; the clock value is always passed in so one `now` read at
//! the start of a manager operation governs every comparison inside it.

use crate::{Lock, LockError, LockResult};
use plexlocks_store::LockRecord;
use serde_json::Value;
use std::time::Duration;
use ulid::Ulid;

/// Build a new physical record for an acquisition or extension.
///
/// Generates a fresh `uid`, serializes the metadata, and computes the
/// absolute expiry from `ttl` (`None` means the lock never expires).
pub fn encode(
    key: &str,
    metadata: &Value,
    ttl: Option<Duration>,
    now_ms: i64,
) -> LockResult<LockRecord> {
    let metadata = serde_json::to_string(metadata)?;

    Ok(LockRecord {
        uid: Ulid::new().to_string(),
        key: key.to_string(),
        metadata,
        expires_at: ttl.map(|ttl| now_ms + ttl.as_millis() as i64),
    })
}

/// Decode a record read back from the store.
///
/// `None` passes through ("no lock exists"). The namespace prefix is
/// stripped from the key and the metadata string is deserialized; a record
/// whose metadata no longer parses is reported as corrupt rather than
/// treated as absent.
pub fn decode(record: Option<LockRecord>, prefix: &str) -> LockResult<Option<Lock>> {
    let record = match record {
        Some(record) => record,
        None => return Ok(None),
    };

    let namespace = format!("{prefix}::");
    let key = record
        .key
        .strip_prefix(&namespace)
        .unwrap_or(&record.key)
        .to_string();

    let metadata = serde_json::from_str(&record.metadata).map_err(|e| LockError::CorruptRecord {
        key: record.key.clone(),
        detail: e.to_string(),
    })?;

    Ok(Some(Lock {
        uid: record.uid,
        key,
        metadata,
        expires_at: record.expires_at,
    }))
}

/// Whether a record currently holds its key.
///
/// Absent records are not live; `expires_at = None` is live forever; an
/// expiry equal to `now_ms` is already past.
pub fn is_live(record: Option<&LockRecord>, now_ms: i64) -> bool {
    match record {
        None => false,
        Some(record) => record.expires_at.is_none_or(|at| at > now_ms),
    }
}
