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

//! Editing-lock service: entity-scoped locks for collaborative editing.

use crate::error::{EditingLockError, EditingResult};
use crate::permission::PermissionChecker;
use crate::validation::{ExtendLockInput, SetLockInput, UnlockInput};
use crate::Editor;
use chrono::{DateTime, Utc};
use plexlocks_core::{AcquireOptions, ExtendOptions, Lock, LockManager, LockOutcome};
use plexlocks_store::LockStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// How long an editing lock lives unless extended.
pub const DEFAULT_LOCK_TTL: Duration = Duration::from_secs(30);

/// Namespace under which all editing locks are stored.
const LOCK_PREFIX: &str = "content-manager";

/// Metadata the facade stores with every editing lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockMetadata {
    /// The editor holding the lock
    pub locked_by: Editor,
    /// When the lock was taken or last refreshed
    pub last_updated_at: DateTime<Utc>,
    /// Client-reported editing activity, when the client sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<DateTime<Utc>>,
}

/// Lock details exposed to clients.
///
/// The storage key never leaves the service, and the uid is present only in
/// the response that granted it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedLock {
    /// Capability token; only returned to the editor that just won it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Stored metadata, decoded
    pub metadata: Value,
    /// Expiry instant in epoch milliseconds; `None` never expires
    pub expires_at: Option<i64>,
}

/// Response of a lock status query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStatusInfo {
    /// Whether the entity can be locked without force
    pub is_lock_free: bool,
    /// The current lock, live or expired, if any
    pub lock_info: Option<SanitizedLock>,
}

/// Response of a lock, extend-lock, or unlock action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockActionInfo {
    /// Whether the action won
    pub success: bool,
    /// The resulting lock on success; the blocking lock otherwise
    pub lock_info: Option<SanitizedLock>,
}

fn sanitize(lock: Lock, with_uid: bool) -> SanitizedLock {
    SanitizedLock {
        uid: with_uid.then_some(lock.uid),
        metadata: lock.metadata,
        expires_at: lock.expires_at,
    }
}

/// Entity-scoped editing locks with permission checks and client-safe
/// responses.
///
/// ## Purpose
/// Lets collaborative editors see who is working on an entity and prevents
/// silent overwrites: the first editor takes the lock, later editors are
/// told who holds it and may take it over explicitly. Locks expire after
/// [`DEFAULT_LOCK_TTL`] unless the holding client keeps extending them, so a
/// closed browser tab never strands an entity.
///
/// ## Unlock Semantics
/// Unlocking does not erase the lock. It replaces it with an already-expired
/// record carrying the same metadata, so "who edited this last" stays
/// readable until another editor takes the entity.
///
/// ## Example
/// ```rust,no_run
/// use plexlocks_editing::{AllowAll, Editor, EditingLockService, SetLockInput};
/// use plexlocks_store::InMemoryLockStore;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = EditingLockService::new(Arc::new(InMemoryLockStore::new()), Arc::new(AllowAll))?;
/// let editor = Editor {
///     id: 1,
///     firstname: "admin".to_string(),
///     lastname: "admin".to_string(),
///     username: None,
/// };
///
/// let result = service
///     .set_lock(&editor, "application::product.product", "1", SetLockInput::default())
///     .await?;
/// assert!(result.success);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EditingLockService {
    manager: LockManager,
    permissions: Arc<dyn PermissionChecker>,
    ttl: Duration,
}

impl EditingLockService {
    /// Create a service over `store`, guarding every operation with
    /// `permissions`.
    pub fn new(
        store: Arc<dyn LockStore>,
        permissions: Arc<dyn PermissionChecker>,
    ) -> EditingResult<Self> {
        Ok(Self {
            manager: LockManager::new(store, LOCK_PREFIX)?,
            permissions,
            ttl: DEFAULT_LOCK_TTL,
        })
    }

    /// Override the lock lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    fn entity_key(model: &str, entity_id: &str) -> String {
        format!("edit:{}:{}", model, entity_id)
    }

    fn ensure_target(model: &str, entity_id: &str) -> EditingResult<()> {
        if model.is_empty() || entity_id.is_empty() {
            return Err(EditingLockError::Validation(
                "model and entityId must be non-empty strings".to_string(),
            ));
        }
        Ok(())
    }

    fn ensure_uid(uid: &str) -> EditingResult<()> {
        if uid.is_empty() {
            return Err(EditingLockError::Validation(
                "uid must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }

    async fn check_permission(
        &self,
        editor: &Editor,
        model: &str,
        entity_id: &str,
    ) -> EditingResult<()> {
        if self.permissions.can_edit(editor, model, entity_id).await? {
            Ok(())
        } else {
            Err(EditingLockError::Forbidden(format!(
                "editor {} may not edit entity {} of {}",
                editor.id, entity_id, model
            )))
        }
    }

    fn action_info(outcome: LockOutcome) -> LockActionInfo {
        let with_uid = outcome.success;
        LockActionInfo {
            success: outcome.success,
            lock_info: outcome.lock.map(|lock| sanitize(lock, with_uid)),
        }
    }

    /// Report whether `entity_id` of `model` is locked, and by whom.
    #[instrument(skip(self, editor), fields(model = %model, entity_id = %entity_id))]
    pub async fn get_lock(
        &self,
        editor: &Editor,
        model: &str,
        entity_id: &str,
    ) -> EditingResult<LockStatusInfo> {
        Self::ensure_target(model, entity_id)?;
        self.check_permission(editor, model, entity_id).await?;

        let status = self
            .manager
            .inspect(&Self::entity_key(model, entity_id))
            .await?;

        Ok(LockStatusInfo {
            is_lock_free: status.is_free,
            lock_info: status.lock.map(|lock| sanitize(lock, false)),
        })
    }

    /// Take the editing lock for `editor`.
    ///
    /// The stored metadata records who locked the entity and when. With
    /// `force` the lock is taken even from a live holder, whose uid stops
    /// working at that instant.
    #[instrument(skip(self, editor, input), fields(model = %model, entity_id = %entity_id, editor_id = editor.id, force = input.force))]
    pub async fn set_lock(
        &self,
        editor: &Editor,
        model: &str,
        entity_id: &str,
        input: SetLockInput,
    ) -> EditingResult<LockActionInfo> {
        Self::ensure_target(model, entity_id)?;
        self.check_permission(editor, model, entity_id).await?;

        let metadata = LockMetadata {
            locked_by: editor.clone(),
            last_updated_at: Utc::now(),
            last_activity_date: input.metadata.and_then(|m| m.last_activity_date),
        };

        let outcome = self
            .manager
            .acquire(
                &Self::entity_key(model, entity_id),
                AcquireOptions {
                    metadata: serde_json::to_value(&metadata)?,
                    ttl: Some(self.ttl),
                    force: input.force,
                },
            )
            .await?;

        if !outcome.success {
            debug!("entity already locked");
        }
        Ok(Self::action_info(outcome))
    }

    /// Renew the lock held with `input.uid`.
    ///
    /// When the client reports activity, it is merged into the stored
    /// metadata; everything else the holder wrote stays as is.
    #[instrument(skip(self, editor, input), fields(model = %model, entity_id = %entity_id, editor_id = editor.id))]
    pub async fn extend_lock(
        &self,
        editor: &Editor,
        model: &str,
        entity_id: &str,
        input: ExtendLockInput,
    ) -> EditingResult<LockActionInfo> {
        Self::ensure_target(model, entity_id)?;
        Self::ensure_uid(&input.uid)?;
        self.check_permission(editor, model, entity_id).await?;

        let key = Self::entity_key(model, entity_id);

        let metadata = match input.metadata.and_then(|m| m.last_activity_date) {
            None => None,
            Some(date) => {
                let status = self.manager.inspect(&key).await?;
                let mut map = match status.lock.map(|lock| lock.metadata) {
                    Some(Value::Object(map)) => map,
                    _ => serde_json::Map::new(),
                };
                map.insert("lastActivityDate".to_string(), serde_json::to_value(date)?);
                Some(Value::Object(map))
            }
        };

        let outcome = self
            .manager
            .extend(
                &key,
                ExtendOptions {
                    uid: input.uid,
                    ttl: Some(self.ttl),
                    metadata,
                },
            )
            .await?;

        if !outcome.success {
            debug!("extension refused");
        }
        Ok(Self::action_info(outcome))
    }

    /// Release the lock held with `input.uid`.
    ///
    /// Only the live holder can unlock. On success the record is replaced
    /// with an already-expired one carrying the same metadata, so the last
    /// editor stays visible; on failure the current lock is reported.
    #[instrument(skip(self, editor, input), fields(model = %model, entity_id = %entity_id, editor_id = editor.id))]
    pub async fn unlock(
        &self,
        editor: &Editor,
        model: &str,
        entity_id: &str,
        input: UnlockInput,
    ) -> EditingResult<LockActionInfo> {
        Self::ensure_target(model, entity_id)?;
        Self::ensure_uid(&input.uid)?;
        self.check_permission(editor, model, entity_id).await?;

        let key = Self::entity_key(model, entity_id);
        let status = self.manager.inspect(&key).await?;

        let holder = match status.lock {
            Some(current) if !status.is_free && current.uid == input.uid => current,
            other => {
                debug!("unlock refused, caller does not hold the lock");
                return Ok(LockActionInfo {
                    success: false,
                    lock_info: other.map(|lock| sanitize(lock, false)),
                });
            }
        };

        let released = self.manager.release(&key, &input.uid).await?;
        if !released.success {
            return Ok(LockActionInfo {
                success: false,
                lock_info: None,
            });
        }

        // Leave an expired record with the holder's metadata behind so the
        // last editor stays visible until someone takes the entity again.
        let tombstone = self
            .manager
            .acquire(
                &key,
                AcquireOptions {
                    metadata: holder.metadata,
                    ttl: Some(Duration::ZERO),
                    force: false,
                },
            )
            .await?;

        let lock_info = if tombstone.success {
            tombstone.lock.map(|lock| sanitize(lock, false))
        } else {
            None
        };

        Ok(LockActionInfo {
            success: true,
            lock_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::AllowAll;
    use async_trait::async_trait;
    use plexlocks_store::InMemoryLockStore;
    use serde_json::json;
    use tokio::time::sleep;

    const MODEL: &str = "application::product.product";

    fn editor() -> Editor {
        Editor {
            id: 1,
            firstname: "admin".to_string(),
            lastname: "admin".to_string(),
            username: None,
        }
    }

    fn service() -> EditingLockService {
        EditingLockService::new(Arc::new(InMemoryLockStore::new()), Arc::new(AllowAll)).unwrap()
    }

    #[tokio::test]
    async fn test_set_lock_records_editor_and_expiry() {
        let service = service();
        let before = Utc::now().timestamp_millis();

        let result = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap();

        assert!(result.success);
        let info = result.lock_info.unwrap();
        assert!(info.uid.is_some());
        assert!(info.expires_at.unwrap() >= before + DEFAULT_LOCK_TTL.as_millis() as i64);

        assert_eq!(info.metadata["lockedBy"]["id"], json!(1));
        assert_eq!(info.metadata["lockedBy"]["firstname"], json!("admin"));
        assert_eq!(info.metadata["lockedBy"]["lastname"], json!("admin"));
        assert_eq!(info.metadata["lockedBy"]["username"], Value::Null);
        assert!(info.metadata.get("lastUpdatedAt").is_some());
        assert!(info.metadata.get("lastActivityDate").is_none());
    }

    #[tokio::test]
    async fn test_set_lock_stores_reported_activity() {
        let service = service();

        let result = service
            .set_lock(
                &editor(),
                MODEL,
                "1",
                SetLockInput {
                    metadata: Some(crate::validation::LockMetadataInput {
                        last_activity_date: Some(Utc::now()),
                    }),
                    force: false,
                },
            )
            .await
            .unwrap();

        let info = result.lock_info.unwrap();
        assert!(info.metadata.get("lastActivityDate").is_some());
    }

    #[tokio::test]
    async fn test_get_lock_reports_holder_without_uid() {
        let service = service();
        let set = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap();
        let held = set.lock_info.unwrap();

        let status = service.get_lock(&editor(), MODEL, "1").await.unwrap();

        assert!(!status.is_lock_free);
        let info = status.lock_info.unwrap();
        assert_eq!(info.uid, None);
        assert_eq!(info.metadata, held.metadata);
        assert_eq!(info.expires_at, held.expires_at);
    }

    #[tokio::test]
    async fn test_get_lock_on_free_entity() {
        let service = service();
        let status = service.get_lock(&editor(), MODEL, "1").await.unwrap();

        assert!(status.is_lock_free);
        assert_eq!(status.lock_info, None);
    }

    #[tokio::test]
    async fn test_second_set_lock_fails_without_force() {
        let service = service();
        let held = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap()
            .lock_info
            .unwrap();

        let result = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap();

        assert!(!result.success);
        let info = result.lock_info.unwrap();
        // The holder is reported, but its uid is not leaked
        assert_eq!(info.uid, None);
        assert_eq!(info.metadata, held.metadata);
        assert_eq!(info.expires_at, held.expires_at);
    }

    #[tokio::test]
    async fn test_forced_set_lock_takes_over() {
        let service = service();
        let old = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap()
            .lock_info
            .unwrap();

        let result = service
            .set_lock(
                &editor(),
                MODEL,
                "1",
                SetLockInput {
                    metadata: None,
                    force: true,
                },
            )
            .await
            .unwrap();

        assert!(result.success);
        let new = result.lock_info.unwrap();
        assert!(new.uid.is_some());
        assert_ne!(new.uid, old.uid);
    }

    #[tokio::test]
    async fn test_extend_lock_rotates_uid_and_pushes_expiry() {
        let service = service();
        let held = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap()
            .lock_info
            .unwrap();

        sleep(Duration::from_millis(20)).await;

        let result = service
            .extend_lock(
                &editor(),
                MODEL,
                "1",
                ExtendLockInput {
                    uid: held.uid.clone().unwrap(),
                    metadata: None,
                },
            )
            .await
            .unwrap();

        assert!(result.success);
        let extended = result.lock_info.unwrap();
        assert!(extended.uid.is_some());
        assert_ne!(extended.uid, held.uid);
        assert!(extended.expires_at.unwrap() > held.expires_at.unwrap());
        assert_eq!(extended.metadata, held.metadata);
    }

    #[tokio::test]
    async fn test_extend_lock_merges_reported_activity() {
        let service = service();
        let held = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap()
            .lock_info
            .unwrap();

        let activity = Utc::now();
        let result = service
            .extend_lock(
                &editor(),
                MODEL,
                "1",
                ExtendLockInput {
                    uid: held.uid.unwrap(),
                    metadata: Some(crate::validation::LockMetadataInput {
                        last_activity_date: Some(activity),
                    }),
                },
            )
            .await
            .unwrap();

        assert!(result.success);
        let info = result.lock_info.unwrap();
        // Activity lands next to the untouched holder metadata
        assert_eq!(info.metadata["lockedBy"], held.metadata["lockedBy"]);
        assert_eq!(info.metadata["lastUpdatedAt"], held.metadata["lastUpdatedAt"]);
        assert_eq!(
            info.metadata["lastActivityDate"],
            serde_json::to_value(activity).unwrap()
        );
    }

    #[tokio::test]
    async fn test_extend_lock_wrong_uid_reports_holder() {
        let service = service();
        let held = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap()
            .lock_info
            .unwrap();

        let result = service
            .extend_lock(
                &editor(),
                MODEL,
                "1",
                ExtendLockInput {
                    uid: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
                    metadata: None,
                },
            )
            .await
            .unwrap();

        assert!(!result.success);
        let info = result.lock_info.unwrap();
        assert_eq!(info.uid, None);
        assert_eq!(info.metadata, held.metadata);
        assert_eq!(info.expires_at, held.expires_at);
    }

    #[tokio::test]
    async fn test_unlock_leaves_expired_record_behind() {
        let service = service();
        let held = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap()
            .lock_info
            .unwrap();

        let result = service
            .unlock(
                &editor(),
                MODEL,
                "1",
                UnlockInput {
                    uid: held.uid.unwrap(),
                },
            )
            .await
            .unwrap();

        assert!(result.success);
        let info = result.lock_info.unwrap();
        assert_eq!(info.uid, None);
        assert_eq!(info.metadata, held.metadata);
        assert!(info.expires_at.unwrap() <= Utc::now().timestamp_millis());

        // The entity is free again, but the last editor stays readable
        let status = service.get_lock(&editor(), MODEL, "1").await.unwrap();
        assert!(status.is_lock_free);
        assert_eq!(status.lock_info.unwrap().metadata, info.metadata);
    }

    #[tokio::test]
    async fn test_unlock_twice_fails_with_expired_record() {
        let service = service();
        let held = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap()
            .lock_info
            .unwrap();
        let uid = held.uid.unwrap();

        let first = service
            .unlock(&editor(), MODEL, "1", UnlockInput { uid: uid.clone() })
            .await
            .unwrap();
        assert!(first.success);

        let second = service
            .unlock(&editor(), MODEL, "1", UnlockInput { uid })
            .await
            .unwrap();

        assert!(!second.success);
        let info = second.lock_info.unwrap();
        assert_eq!(info.metadata, held.metadata);
        assert_eq!(info.expires_at, first.lock_info.unwrap().expires_at);
    }

    #[tokio::test]
    async fn test_unlock_wrong_uid_reports_holder() {
        let service = service();
        let held = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap()
            .lock_info
            .unwrap();

        let result = service
            .unlock(
                &editor(),
                MODEL,
                "1",
                UnlockInput {
                    uid: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(!result.success);
        let info = result.lock_info.unwrap();
        assert_eq!(info.metadata, held.metadata);
        assert_eq!(info.expires_at, held.expires_at);

        // The holder's uid still works
        let status = service.get_lock(&editor(), MODEL, "1").await.unwrap();
        assert!(!status.is_lock_free);
    }

    #[tokio::test]
    async fn test_lock_expires_after_ttl() {
        let service = service().with_ttl(Duration::from_millis(10));
        service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap();

        sleep(Duration::from_millis(50)).await;

        let status = service.get_lock(&editor(), MODEL, "1").await.unwrap();
        assert!(status.is_lock_free);
        assert!(status.lock_info.is_some());

        // And another editor can now take it without force
        let result = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap();
        assert!(result.success);
    }

    #[tokio::test]
    async fn test_entities_locked_independently() {
        let service = service();

        let one = service
            .set_lock(&editor(), MODEL, "1", SetLockInput::default())
            .await
            .unwrap();
        let two = service
            .set_lock(&editor(), MODEL, "2", SetLockInput::default())
            .await
            .unwrap();
        let other_model = service
            .set_lock(&editor(), "application::page.page", "1", SetLockInput::default())
            .await
            .unwrap();

        assert!(one.success);
        assert!(two.success);
        assert!(other_model.success);
    }

    #[tokio::test]
    async fn test_extend_merges_activity_into_foreign_metadata() {
        let store = Arc::new(InMemoryLockStore::new());
        let service =
            EditingLockService::new(store.clone(), Arc::new(AllowAll)).unwrap();

        // A lock written through the manager directly, with free-form metadata
        let manager = LockManager::new(store, "content-manager").unwrap();
        let held = manager
            .acquire(
                "edit:application::product.product:9",
                AcquireOptions {
                    metadata: json!("free text"),
                    ttl: Some(Duration::from_secs(30)),
                    force: false,
                },
            )
            .await
            .unwrap()
            .lock
            .unwrap();

        let result = service
            .extend_lock(
                &editor(),
                MODEL,
                "9",
                ExtendLockInput {
                    uid: held.uid,
                    metadata: Some(crate::validation::LockMetadataInput {
                        last_activity_date: Some(Utc::now()),
                    }),
                },
            )
            .await
            .unwrap();

        assert!(result.success);
        let info = result.lock_info.unwrap();
        // Non-object metadata is replaced by just the reported activity
        assert!(info.metadata.is_object());
        assert!(info.metadata.get("lastActivityDate").is_some());
    }

    struct DenyAll;

    #[async_trait]
    impl PermissionChecker for DenyAll {
        async fn can_edit(
            &self,
            _editor: &Editor,
            _model: &str,
            _entity_id: &str,
        ) -> EditingResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_permission_denied_blocks_every_operation() {
        let service =
            EditingLockService::new(Arc::new(InMemoryLockStore::new()), Arc::new(DenyAll))
                .unwrap();
        let editor = editor();

        assert!(matches!(
            service.get_lock(&editor, MODEL, "1").await,
            Err(EditingLockError::Forbidden(_))
        ));
        assert!(matches!(
            service
                .set_lock(&editor, MODEL, "1", SetLockInput::default())
                .await,
            Err(EditingLockError::Forbidden(_))
        ));
        assert!(matches!(
            service
                .extend_lock(
                    &editor,
                    MODEL,
                    "1",
                    ExtendLockInput {
                        uid: "u".to_string(),
                        metadata: None,
                    }
                )
                .await,
            Err(EditingLockError::Forbidden(_))
        ));
        assert!(matches!(
            service
                .unlock(
                    &editor,
                    MODEL,
                    "1",
                    UnlockInput {
                        uid: "u".to_string(),
                    }
                )
                .await,
            Err(EditingLockError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_target_rejected() {
        let service = service();
        let editor = editor();

        assert!(matches!(
            service.get_lock(&editor, "", "1").await,
            Err(EditingLockError::Validation(_))
        ));
        assert!(matches!(
            service
                .set_lock(&editor, MODEL, "", SetLockInput::default())
                .await,
            Err(EditingLockError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_uid_rejected() {
        let service = service();
        let editor = editor();

        assert!(matches!(
            service
                .extend_lock(
                    &editor,
                    MODEL,
                    "1",
                    ExtendLockInput {
                        uid: String::new(),
                        metadata: None,
                    }
                )
                .await,
            Err(EditingLockError::Validation(_))
        ));
        assert!(matches!(
            service
                .unlock(
                    &editor,
                    MODEL,
                    "1",
                    UnlockInput {
                        uid: String::new(),
                    }
                )
                .await,
            Err(EditingLockError::Validation(_))
        ));
    }
}
