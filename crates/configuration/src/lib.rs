//! Realm Configuration - Realm 配置与访问策略存储
//!
//! 提供以下功能：
//! 1. 按 realm 读取配置和管理端配置（含旧字段迁移）
//! 2. 按 customer realm 读取 context key，并以单个事务同步为目标集合
//! 3. 读取授权元组，并按构造时确定的 action 范围过滤
//! 4. 多存储后端支持：SQLite, PostgreSQL

pub mod authorization;
pub mod codec;
pub mod database;
pub mod dto;
pub mod error;
pub mod reader;
pub mod reconcile;
pub mod scope;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use codec::StructuredRecord;
pub use database::{
    ConfigurationDatabase, DatabaseBackend, DatabaseTransaction, Row, RowStream, SqliteDatabase,
    Statement, StorageBackend, StorageConfig,
};
pub use dto::{
    Authorization, ContextKeyConfiguration, RealmAdminAccreditation, RealmAdminConfiguration,
    RealmConfiguration, RealmContextKey,
};
pub use error::{ConfigurationError, ConfigurationResult};
pub use reader::ConfigurationReaderModule;
pub use scope::AuthorizationScope;
