//! 顶层错误枚举
//!
//! 聚合配置存储和基础设施的错误类型，提供统一的错误处理接口

use super::{ConfigError, SerializationError};
use realm_configuration::ConfigurationError;
use thiserror::Error;

/// 顶层错误枚举
#[derive(Error, Debug)]
pub enum BaseError {
    // ========== 存储错误 ==========
    /// 配置存储错误，保留原始种类（NotFound / MalformedInput / Store / Scan）
    #[error("Configuration store error: {0}")]
    Store(#[from] ConfigurationError),

    // ========== 基础设施错误 ==========
    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

impl BaseError {
    /// 是否为"配置不存在"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }
}

impl From<serde_json::Error> for BaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(SerializationError::Json(err))
    }
}

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, BaseError>;
