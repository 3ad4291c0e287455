//! 存储后端配置

use serde::{Deserialize, Serialize};

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// 存储后端类型
    #[serde(default)]
    pub backend: StorageBackend,

    /// SQLite 配置（当 backend = "sqlite" 时使用，缺省取默认值）
    #[serde(default)]
    pub sqlite: SqliteConfig,

    /// PostgreSQL 配置（当 backend = "postgres" 时必需）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postgres: Option<PostgresConfig>,
}

/// 存储后端类型枚举
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite 数据库
    #[default]
    Sqlite,
    /// PostgreSQL 数据库
    Postgres,
}

/// SQLite 配置
///
/// 数据库文件位置由 `sqlite_path` 决定，这里只保留连接参数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteConfig {
    /// 连接池大小
    #[serde(default = "default_sqlite_max_connections")]
    pub max_connections: u32,

    /// 数据库忙等待超时（秒）
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            max_connections: default_sqlite_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

fn default_sqlite_max_connections() -> u32 {
    10
}

fn default_busy_timeout_secs() -> u64 {
    5
}

/// PostgreSQL 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    /// 数据库主机地址
    pub host: String,

    /// 数据库端口
    #[serde(default = "default_postgres_port")]
    pub port: u16,

    /// 数据库名称
    pub database: String,

    /// 用户名
    pub username: String,

    /// 密码
    pub password: String,

    /// 连接池大小
    #[serde(default = "default_postgres_pool_size")]
    pub pool_size: u32,

    /// 连接最大生命周期（秒）
    #[serde(default = "default_max_lifetime_secs")]
    pub max_lifetime_secs: u64,
}

fn default_postgres_port() -> u16 {
    5432
}

fn default_postgres_pool_size() -> u32 {
    10
}

fn default_max_lifetime_secs() -> u64 {
    1800
}
