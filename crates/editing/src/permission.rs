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

//! Permission boundary for editing-lock operations.

use crate::error::EditingResult;
use crate::Editor;
use async_trait::async_trait;

/// Decides whether an editor may touch the lock of an entity.
///
/// Every facade operation, reads included, consults this before going
/// anywhere near the store. Implementations typically delegate to an
/// application's access-control layer.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// Whether `editor` may edit entity `entity_id` of `model`.
    async fn can_edit(&self, editor: &Editor, model: &str, entity_id: &str)
        -> EditingResult<bool>;
}

/// Checker that admits every editor. Useful for tests and single-user
/// deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl PermissionChecker for AllowAll {
    async fn can_edit(
        &self,
        _editor: &Editor,
        _model: &str,
        _entity_id: &str,
    ) -> EditingResult<bool> {
        Ok(true)
    }
}
