//! 命令行界面定义
//!
//! 定义了主程序的命令行参数和子命令
use clap::{Parser, Subcommand};
use realmstore_common::security::{Api, Service};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "realmstore")]
#[command(version)]
#[command(about = "Realm-scoped configuration and access-policy store")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Configuration file path (defaults to searching standard locations)
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub(crate) config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Test configuration file
    Test {
        /// Configuration file path (optional, defaults to config.toml)
        #[arg(index = 1)]
        config_file: Option<PathBuf>,
    },

    /// Print the configuration of a realm
    GetConfig { realm: String },

    /// Print the admin configuration of a realm
    GetAdminConfig { realm: String },

    /// Print both configurations of a realm (requires both to be set)
    GetConfigs { realm: String },

    /// Print the context keys of a customer realm
    GetContextKeys { customer_realm: String },

    /// Replace the context keys of a customer realm with the content of a JSON file
    SetContextKeys {
        customer_realm: String,

        /// JSON file holding an array of context keys
        file: PathBuf,
    },

    /// Print the authorizations visible in the configured scope
    ListAuthorizations {
        /// Restrict the scope to the actions of this service
        #[arg(long)]
        service: Option<Service>,

        /// Restrict the scope to the actions of these APIs (repeatable)
        #[arg(long = "api", requires = "service")]
        apis: Vec<Api>,
    },

    /// Print the permission catalog
    ListActions {
        #[arg(long)]
        service: Option<Service>,
    },
}

impl Commands {
    /// 是否需要打开配置存储
    pub(crate) fn needs_store(&self) -> bool {
        !matches!(self, Self::Test { .. } | Self::ListActions { .. })
    }
}
