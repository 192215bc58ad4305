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

//! Configuration support for lock record store backends.
//!
//! ## Purpose
//! Provides environment-based configuration for selecting and configuring
//! different lock record store backends (InMemory, SQLite).
//!
//! ## Environment Variables
//!
//! ### Backend Selection
//! - `PLEXLOCKS_STORE_BACKEND`: Backend type (default: "in-memory")
//!   - "in-memory" | "memory" → InMemoryLockStore
//!   - "sqlite" → SqliteLockStore
//!
//! ### SQLite Configuration
//! - `PLEXLOCKS_STORE_SQLITE_PATH`: Database file path (default: ":memory:")
//!
//! ## Examples
//!
//! ### In-Memory (Default)
//! ```bash
//! # No environment variables needed
//! cargo run
//! ```
//!
//! ### SQLite
//! ```bash
//! export PLEXLOCKS_STORE_BACKEND=sqlite
//! export PLEXLOCKS_STORE_SQLITE_PATH=/tmp/plexlocks.db
//! cargo run
//! ```

use crate::{InMemoryLockStore, LockStore, StoreError, StoreResult};
use std::sync::Arc;

/// Backend type configuration.
#[derive(Debug, Clone)]
pub enum BackendType {
    /// In-memory HashMap backend (default, always available)
    InMemory,
    /// SQLite backend (requires sqlite-backend feature)
    Sqlite {
        /// Path to SQLite database file
        path: String,
    },
}

#[allow(clippy::derivable_impls)]
impl Default for BackendType {
    fn default() -> Self {
        Self::InMemory
    }
}

/// Lock record store configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Backend type
    pub backend: BackendType,
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// ## Environment Variables
    /// See module documentation for complete list.
    ///
    /// ## Examples
    /// ```rust
    /// use plexlocks_store::StoreConfig;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = StoreConfig::from_env()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> StoreResult<Self> {
        let backend_str = std::env::var("PLEXLOCKS_STORE_BACKEND")
            .unwrap_or_else(|_| "in-memory".to_string())
            .to_lowercase();

        let backend = match backend_str.as_str() {
            "in-memory" | "memory" => BackendType::InMemory,

            "sqlite" => {
                let path = std::env::var("PLEXLOCKS_STORE_SQLITE_PATH")
                    .unwrap_or_else(|_| ":memory:".to_string());
                BackendType::Sqlite { path }
            }

            other => {
                return Err(StoreError::ConfigError(format!(
                    "Unknown backend type: {}. Valid options: in-memory, sqlite",
                    other
                )));
            }
        };

        Ok(Self { backend })
    }

    /// Create configuration with explicit backend.
    ///
    /// ## Examples
    /// ```rust
    /// use plexlocks_store::{BackendType, StoreConfig};
    ///
    /// let config = StoreConfig::new(BackendType::Sqlite {
    ///     path: ":memory:".to_string(),
    /// });
    /// ```
    pub fn new(backend: BackendType) -> Self {
        Self { backend }
    }
}

/// Create a lock record store from environment configuration.
///
/// ## Examples
/// ```rust,no_run
/// use plexlocks_store::create_store_from_env;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = create_store_from_env().await?;
/// let found = store.find_one("content-manager::edit:article:1").await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_store_from_env() -> StoreResult<Arc<dyn LockStore>> {
    let config = StoreConfig::from_env()?;
    create_store_from_config(config).await
}

/// Create a lock record store from explicit configuration.
///
/// ## Examples
/// ```rust
/// use plexlocks_store::{create_store_from_config, BackendType, StoreConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoreConfig::new(BackendType::InMemory);
/// let store = create_store_from_config(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_store_from_config(config: StoreConfig) -> StoreResult<Arc<dyn LockStore>> {
    match config.backend {
        BackendType::InMemory => Ok(Arc::new(InMemoryLockStore::new())),

        #[cfg(feature = "sqlite-backend")]
        BackendType::Sqlite { path } => {
            use crate::sql::SqliteLockStore;
            let url = if path == ":memory:" {
                "sqlite::memory:".to_string()
            } else {
                format!("sqlite:{}?mode=rwc", path)
            };
            let store = SqliteLockStore::new(&url).await?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "sqlite-backend"))]
        BackendType::Sqlite { .. } => Err(StoreError::ConfigError(
            "SQLite backend requires 'sqlite-backend' feature".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LockRecord;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        match config.backend {
            BackendType::InMemory => {}
            _ => panic!("Default should be InMemory"),
        }
    }

    // Env mutation is unsafe because it is process-global; #[serial] keeps
    // these tests from interleaving.
    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    #[serial]
    fn test_config_from_env_default() {
        remove_env("PLEXLOCKS_STORE_BACKEND");

        let config = StoreConfig::from_env().unwrap();
        match config.backend {
            BackendType::InMemory => {}
            _ => panic!("Default should be InMemory"),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_sqlite() {
        set_env("PLEXLOCKS_STORE_BACKEND", "sqlite");
        set_env("PLEXLOCKS_STORE_SQLITE_PATH", "/tmp/plexlocks-test.db");

        let config = StoreConfig::from_env().unwrap();
        match config.backend {
            BackendType::Sqlite { path } => {
                assert_eq!(path, "/tmp/plexlocks-test.db".to_string());
            }
            _ => panic!("Expected Sqlite backend"),
        }

        remove_env("PLEXLOCKS_STORE_BACKEND");
        remove_env("PLEXLOCKS_STORE_SQLITE_PATH");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_backend() {
        set_env("PLEXLOCKS_STORE_BACKEND", "invalid");

        let result = StoreConfig::from_env();
        match result {
            Err(e) => {
                let error_msg = format!("{}", e);
                assert!(error_msg.contains("Unknown backend type"));
            }
            Ok(_) => panic!("Expected error for invalid backend"),
        }

        remove_env("PLEXLOCKS_STORE_BACKEND");
    }

    #[tokio::test]
    async fn test_create_store_in_memory() {
        let config = StoreConfig::new(BackendType::InMemory);
        let store = create_store_from_config(config).await.unwrap();

        store
            .create(LockRecord {
                uid: "uid-1".to_string(),
                key: "ns::edit:article:1".to_string(),
                metadata: "{}".to_string(),
                expires_at: None,
            })
            .await
            .unwrap();

        let found = store.find_one("ns::edit:article:1").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    #[serial]
    async fn test_create_store_from_env_default() {
        remove_env("PLEXLOCKS_STORE_BACKEND");

        let store = create_store_from_env().await.unwrap();
        let found = store.find_one("ns::missing").await.unwrap();
        assert!(found.is_none());
    }
}
