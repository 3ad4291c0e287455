//! 配置数据库模块
//!
//! 提供多种存储后端支持：SQLite, PostgreSQL
//!
//! # 设计
//!
//! - `ConfigurationDatabase` / `DatabaseTransaction` trait 定义数据库边界
//! - `DatabaseBackend` enum 封装不同的后端实现
//! - 通过 `StorageConfig` 配置选择和初始化后端

use std::path::Path;

use async_trait::async_trait;

pub mod backend;
pub mod config;
pub mod sqlite;

#[cfg(feature = "backend-postgres")]
pub mod postgres;

pub use backend::{ConfigurationDatabase, DatabaseTransaction, Row, RowStream, Statement};
pub use config::{PostgresConfig, SqliteConfig, StorageBackend, StorageConfig};
pub use sqlite::SqliteDatabase;

#[cfg(feature = "backend-postgres")]
pub use postgres::PostgresDatabase;

use crate::error::{ConfigurationError, ConfigurationResult};

/// 数据库后端统一入口
#[derive(Clone, Debug)]
pub enum DatabaseBackend {
    /// SQLite 存储后端（始终可用）
    Sqlite(SqliteDatabase),

    /// PostgreSQL 存储后端
    #[cfg(feature = "backend-postgres")]
    Postgres(PostgresDatabase),
}

impl DatabaseBackend {
    /// 从配置创建存储实例
    ///
    /// # Arguments
    /// * `config` - 存储配置
    /// * `db_path` - SQLite 数据库文件目录（当 backend = "sqlite" 时使用）
    ///
    /// # Errors
    /// - 缺少对应后端的配置
    /// - 后端初始化失败
    /// - 后端功能未启用（feature flag）
    pub async fn from_config<P: AsRef<Path>>(
        config: &StorageConfig,
        db_path: P,
    ) -> ConfigurationResult<Self> {
        match config.backend {
            StorageBackend::Sqlite => {
                let database = SqliteDatabase::new(db_path.as_ref(), &config.sqlite).await?;
                Ok(Self::Sqlite(database))
            }

            #[cfg(feature = "backend-postgres")]
            StorageBackend::Postgres => {
                let cfg = config
                    .postgres
                    .as_ref()
                    .ok_or_else(|| ConfigurationError::store("Missing PostgreSQL config"))?;
                Ok(Self::Postgres(PostgresDatabase::new(cfg).await?))
            }

            #[cfg(not(feature = "backend-postgres"))]
            StorageBackend::Postgres => Err(ConfigurationError::store(
                "PostgreSQL backend not enabled. Compile with --features backend-postgres",
            )),
        }
    }

    /// 获取后端类型名称
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "SQLite",

            #[cfg(feature = "backend-postgres")]
            Self::Postgres(_) => "Postgres",
        }
    }
}

#[async_trait]
impl ConfigurationDatabase for DatabaseBackend {
    async fn query_row(
        &self,
        statement: Statement,
        params: &[&str],
    ) -> ConfigurationResult<Option<Row>> {
        match self {
            Self::Sqlite(db) => db.query_row(statement, params).await,

            #[cfg(feature = "backend-postgres")]
            Self::Postgres(db) => db.query_row(statement, params).await,
        }
    }

    fn query<'a>(&'a self, statement: Statement, params: &[&str]) -> RowStream<'a> {
        match self {
            Self::Sqlite(db) => db.query(statement, params),

            #[cfg(feature = "backend-postgres")]
            Self::Postgres(db) => db.query(statement, params),
        }
    }

    async fn begin(&self) -> ConfigurationResult<Box<dyn DatabaseTransaction>> {
        match self {
            Self::Sqlite(db) => db.begin().await,

            #[cfg(feature = "backend-postgres")]
            Self::Postgres(db) => db.begin().await,
        }
    }
}
