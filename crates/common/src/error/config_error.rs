//! 配置相关错误类型
//!
//! 定义所有与配置文件加载、解析、校验相关的错误

use thiserror::Error;

/// 配置相关错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Configuration validation failed: {}", problems.join("; "))]
    Invalid { problems: Vec<String> },
}

impl From<Vec<String>> for ConfigError {
    fn from(problems: Vec<String>) -> Self {
        Self::Invalid { problems }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_problems_are_joined() {
        let err = ConfigError::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Configuration validation failed: a; b");
    }
}
