//! 存储模块
//!
//! 根据 `RealmStoreConfig` 打开配置存储，并注入默认授权范围

use realm_configuration::{ConfigurationReaderModule, DatabaseBackend, StorageBackend};
use tracing::info;

use crate::config::RealmStoreConfig;
use crate::error::Result;
use crate::security::ActionsIndex;

/// 配置存储模块的具体类型
pub type RealmStore = ConfigurationReaderModule<DatabaseBackend>;

/// 打开配置存储
///
/// SQLite 后端会在 `sqlite_path` 不存在时创建该目录。
pub async fn open_store(config: &RealmStoreConfig, index: &ActionsIndex) -> Result<RealmStore> {
    if config.storage.backend == StorageBackend::Sqlite {
        std::fs::create_dir_all(&config.sqlite_path)?;
    }

    let backend = DatabaseBackend::from_config(&config.storage, &config.sqlite_path).await?;
    let scope = config.authorization.build_scope(index);

    info!(
        backend = backend.backend_name(),
        restricted = scope.is_restricted(),
        "Configuration store opened"
    );

    Ok(ConfigurationReaderModule::new(backend).with_scope(scope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthorizationConfig, ScopeConfig};
    use crate::security::{Api, Service};

    #[tokio::test]
    async fn test_open_sqlite_store_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RealmStoreConfig {
            sqlite_path: temp_dir.path().join("nested").join("db"),
            ..Default::default()
        };

        let store = open_store(&config, &ActionsIndex::standard()).await.unwrap();
        assert!(config.sqlite_path.join("realmstore.db").exists());
        assert!(!store.authorization_scope().is_restricted());
        assert!(store.get_context_keys("customer").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_store_applies_configured_scope() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RealmStoreConfig {
            sqlite_path: temp_dir.path().to_path_buf(),
            authorization: AuthorizationConfig {
                scopes: vec![ScopeConfig {
                    service: Service::Bridge,
                    apis: vec![Api::Statistic],
                }],
            },
            ..Default::default()
        };

        let store = open_store(&config, &ActionsIndex::standard()).await.unwrap();
        assert!(store.authorization_scope().allows("ST_GetStatistics"));
        assert!(!store.authorization_scope().allows("MGMT_GetUser"));
    }
}
