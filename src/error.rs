//! 统一错误处理模型
//!
//! 提供主应用 realmstore 的顶层错误类型

use thiserror::Error;

/// 主应用的统一错误枚举
#[derive(Debug, Error)]
pub enum Error {
    // ========== 配置相关错误 ==========
    /// 配置文件相关错误
    #[error("Configuration error: {0}")]
    Config(#[from] realmstore_common::ConfigError),

    // ========== 基础库错误 ==========
    /// Common crate 聚合错误
    #[error("{0}")]
    Base(Box<realmstore_common::BaseError>),

    // ========== 系统级错误 ==========
    /// I/O 操作错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 序列化/反序列化错误
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // ========== 通用错误 ==========
    /// Anyhow 错误兼容层
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),

    /// 自定义错误消息
    #[error("Application error: {message}")]
    Custom { message: String },
}

impl From<realmstore_common::BaseError> for Error {
    fn from(err: realmstore_common::BaseError) -> Self {
        Error::Base(Box::new(err))
    }
}

impl From<realm_configuration::ConfigurationError> for Error {
    fn from(err: realm_configuration::ConfigurationError) -> Self {
        realmstore_common::BaseError::from(err).into()
    }
}

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 创建自定义错误
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::custom("test error");
        assert!(matches!(err, Error::Custom { .. }));
    }

    #[test]
    fn test_validation_problems_are_reported() {
        let err: Error =
            realmstore_common::ConfigError::from(vec!["Invalid environment 'staging'".to_string()])
                .into();
        assert!(matches!(
            err,
            Error::Config(realmstore_common::ConfigError::Invalid { .. })
        ));
        assert!(err.to_string().contains("Invalid environment 'staging'"));
    }

    #[test]
    fn test_store_error_is_wrapped() {
        let err: Error = realm_configuration::ConfigurationError::not_found("myrealm").into();
        assert!(matches!(err, Error::Base(_)));
        assert!(err.to_string().contains("Configuration not found for realm myrealm"));
    }
}
