//! Realm 配置存储错误定义
//!
//! 四类错误对调用方都是可区分的：
//! - `NotFound`: 单 realm 配置查询没有匹配行
//! - `MalformedInput`: 存储的 payload 无法解析为预期的结构化记录
//! - `Store`: 其它数据库错误（连接、查询、事务生命周期）
//! - `Scan`: 结果行与预期的列形状不符

use thiserror::Error;

/// 配置存储错误类型
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// 没有匹配的配置行
    #[error("Configuration not found for realm {realm_id}")]
    NotFound { realm_id: String },

    /// 存储的 JSON 无法解析
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// 数据库错误
    #[error("Database error: {message}")]
    Store { message: String },

    /// 行扫描错误
    #[error("Scan error: {message}")]
    Scan { message: String },
}

impl ConfigurationError {
    pub fn not_found(realm_id: impl Into<String>) -> Self {
        Self::NotFound {
            realm_id: realm_id.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn scan(message: impl Into<String>) -> Self {
        Self::Scan {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for ConfigurationError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => Self::scan(err.to_string()),
            other => Self::store(other.to_string()),
        }
    }
}

/// 配置存储结果类型别名
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
