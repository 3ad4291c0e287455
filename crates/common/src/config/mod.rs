//! 统一配置管理
//!
//! realmstore 的全部配置项定义、默认值和校验逻辑都在这里。
//! 配置文件使用 TOML 格式。

pub mod authorization;

pub use crate::config::authorization::{AuthorizationConfig, ScopeConfig};
use crate::error::{ConfigError, SerializationError};
use crate::security::ActionsIndex;
use realm_configuration::{StorageBackend, StorageConfig};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};

/// realmstore 主配置结构体
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RealmStoreConfig {
    /// 实例名称
    ///
    /// 出现在启动日志中，用于区分同一数据库的多个部署。
    pub name: String,

    /// 运行环境标识
    ///
    /// - "dev": 开发环境
    /// - "prod": 生产环境，要求文件日志
    /// - "test": 测试环境，用于自动化测试
    pub env: String,

    /// SQLite 数据库文件存储目录路径
    ///
    /// 数据库文件为 `{sqlite_path}/realmstore.db`，仅在 `storage.backend = "sqlite"` 时使用。
    #[serde(
        serialize_with = "serialize_pathbuf",
        deserialize_with = "deserialize_pathbuf"
    )]
    pub sqlite_path: PathBuf,

    /// 存储后端配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 可观测性配置（日志）
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// 列出授权时使用的默认授权范围
    #[serde(default)]
    pub authorization: AuthorizationConfig,
}

/// 可观测性配置
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ObservabilityConfig {
    /// 过滤级别
    ///
    /// 支持 EnvFilter 语法（如 "info,sqlx=warn"）。默认值 "info"。
    #[serde(default = "default_filter_level")]
    pub filter_level: String,

    #[serde(default)]
    pub log: LogConfig,
}

/// 日志配置
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    /// 日志输出目标
    ///
    /// - "console": 仅输出到控制台（默认）
    /// - "file": 输出到文件
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志轮转开关
    ///
    /// 当 output = "file" 时有效：true 按天轮转，false 追加到单个文件
    #[serde(default)]
    pub rotate: bool,

    /// 日志文件目录
    #[serde(default = "default_log_path")]
    pub path: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter_level: default_filter_level(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: default_log_output(),
            rotate: false,
            path: default_log_path(),
        }
    }
}

fn default_log_output() -> String {
    "console".to_string()
}

fn default_log_path() -> String {
    "logs/".to_string()
}

fn default_filter_level() -> String {
    "info".to_string()
}

fn serialize_pathbuf<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    path.display().to_string().serialize(serializer)
}

fn deserialize_pathbuf<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
}

impl Default for RealmStoreConfig {
    fn default() -> Self {
        Self {
            name: "realmstore-default".to_string(),
            env: "dev".to_string(),
            sqlite_path: PathBuf::from("database"),
            storage: StorageConfig::default(),
            observability: ObservabilityConfig::default(),
            authorization: AuthorizationConfig::default(),
        }
    }
}

impl RealmStoreConfig {
    /// 返回日志配置引用
    pub fn log_config(&self) -> &LogConfig {
        &self.observability.log
    }

    /// 检查是否使用控制台日志输出
    pub fn is_console_logging(&self) -> bool {
        self.observability.log.output == "console"
    }

    /// 检查是否应该轮转日志
    pub fn should_rotate_logs(&self) -> bool {
        self.observability.log.output == "file" && self.observability.log.rotate
    }

    /// 获取日志过滤级别，优先使用 RUST_LOG
    pub fn get_filter_level(&self) -> String {
        std::env::var("RUST_LOG")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.observability.filter_level.clone())
    }

    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();

        if !path_ref.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path_ref.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;

        Self::from_toml(&content).map_err(|e| ConfigError::ParseError {
            source: Box::new(SerializationError::Toml(e)),
        })
    }

    /// 从 TOML 字符串加载配置
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 将配置序列化为 TOML 字符串
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// 校验配置，只把不以 "Warning:" 开头的问题当作错误
    ///
    /// 成功时返回警告列表，失败时 `ConfigError::Invalid` 只包含严重问题。
    pub fn check(&self) -> Result<Vec<String>, ConfigError> {
        let Err(problems) = self.validate() else {
            return Ok(Vec::new());
        };
        let (warnings, critical): (Vec<String>, Vec<String>) = problems
            .into_iter()
            .partition(|p| p.starts_with("Warning:"));

        if critical.is_empty() {
            Ok(warnings)
        } else {
            Err(critical.into())
        }
    }

    /// 验证配置有效性
    ///
    /// 返回发现的全部问题，而不是在第一个问题处停止。
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Instance name cannot be empty".to_string());
        }

        if !["dev", "prod", "test"].contains(&self.env.as_str()) {
            errors.push(format!(
                "Invalid environment '{}', must be one of: dev, prod, test",
                self.env
            ));
        }

        // 验证过滤级别（EnvFilter 语法）
        {
            let main_level = self
                .observability
                .filter_level
                .split(',')
                .next()
                .unwrap_or("")
                .trim();
            if !["trace", "debug", "info", "warn", "error"].contains(&main_level) {
                errors.push(format!(
                    "Invalid filter level '{}', must start with one of: trace, debug, info, warn, error",
                    self.observability.filter_level
                ));
            }
        }

        if !["console", "file"].contains(&self.observability.log.output.as_str()) {
            errors.push(format!(
                "Invalid log output '{}' (observability.log.output), must be 'console' or 'file'",
                self.observability.log.output
            ));
        }

        match self.storage.backend {
            StorageBackend::Sqlite => {
                if self
                    .sqlite_path
                    .to_str()
                    .map(|s| s.trim().is_empty())
                    .unwrap_or(true)
                {
                    errors.push("SQLite database path cannot be empty".to_string());
                }
                if self.storage.sqlite.max_connections == 0 {
                    errors.push("storage.sqlite.max_connections must be greater than 0".to_string());
                }
            }
            StorageBackend::Postgres => match &self.storage.postgres {
                Some(pg) => {
                    if pg.host.trim().is_empty() || pg.database.trim().is_empty() {
                        errors.push(
                            "storage.postgres.host and storage.postgres.database are required"
                                .to_string(),
                        );
                    }
                    if pg.pool_size == 0 {
                        errors.push("storage.postgres.pool_size must be greater than 0".to_string());
                    }
                }
                None => errors.push(
                    "Storage is configured to use PostgreSQL but postgres config is missing"
                        .to_string(),
                ),
            },
        }

        if let Err(scope_errors) = self.authorization.validate(&ActionsIndex::standard()) {
            errors.extend(
                scope_errors
                    .into_iter()
                    .map(|e| format!("Authorization scope error: {e}")),
            );
        }

        // 生产环境额外检查
        if self.env == "prod" {
            if self.observability.log.output == "console" {
                errors.push("Warning: Production environment should use file logging (observability.log.output = \"file\")".to_string());
            }
            if self.observability.log.output == "file" && !self.observability.log.rotate {
                errors.push("Warning: Production environment should enable log rotation (observability.log.rotate = true)".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
