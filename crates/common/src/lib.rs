//! realmstore 基础设施库
//!
//! 为 realm 配置存储提供配置文件、错误聚合、权限目录和存储初始化

pub mod config;
pub mod error;
pub mod security;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::{AuthorizationConfig, LogConfig, ObservabilityConfig, RealmStoreConfig};
pub use error::{BaseError, ConfigError, Result, SerializationError};
pub use security::{Action, ActionScope, ActionsIndex, Api, Service};
pub use storage::{RealmStore, open_store};
