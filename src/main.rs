//! realmstore 主程序
//!
//! 读取配置文件，打开 realm 配置存储并执行一个子命令，结果以 JSON 打印到标准输出

mod cli;
mod commands;
mod error;
mod observability;

use clap::Parser;
use observability::init_observability;
use realmstore_common::{ConfigError, RealmStoreConfig};
use realmstore_common::security::ActionsIndex;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

// 标准输出留给命令结果，启动信息一律写到 stderr
macro_rules! bootstrap_info {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

macro_rules! bootstrap_error {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

use cli::{Cli, Commands};
use error::{Error, Result};

/// Application launcher utilities
struct ApplicationLauncher;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Test { config_file } => {
            let config_path =
                ApplicationLauncher::find_config_file(config_file.as_ref().unwrap_or(&cli.config))?;
            ApplicationLauncher::test_config_file(&config_path)
        }
        command => {
            let config_path = ApplicationLauncher::find_config_file(&cli.config)?;

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;

            runtime.block_on(ApplicationLauncher::run_command(&config_path, command))
        }
    }
}

impl ApplicationLauncher {
    /// Find config file with fallback locations
    fn find_config_file(provided_path: &PathBuf) -> Result<PathBuf> {
        if provided_path != Path::new("config.toml") {
            if provided_path.exists() {
                return Ok(provided_path.clone());
            } else {
                bootstrap_error!("Provided config file not found: {:?}", provided_path);
                return Err(Error::custom(format!(
                    "Config file not found: {provided_path:?}"
                )));
            }
        }

        let fallback_paths = [
            // 1. Current working directory
            PathBuf::from("config.toml"),
            // 2. System config directory
            PathBuf::from("/etc/realmstore/config.toml"),
        ];

        for path in &fallback_paths {
            if path.exists() {
                return Ok(path.clone());
            }
        }

        bootstrap_error!("No configuration file found!");
        bootstrap_error!("Please create a config file in one of these locations:");
        for (i, path) in fallback_paths.iter().enumerate() {
            bootstrap_error!("  {}. {:?}", i + 1, path);
        }
        bootstrap_error!("Or specify a custom path with: realmstore --config <path>");

        Err(Error::custom(
            "No configuration file found. Please create one or specify path with --config",
        ))
    }

    /// 加载并校验配置
    ///
    /// 警告只打印，不导致失败。
    fn load_config(config_path: &Path) -> Result<RealmStoreConfig> {
        let config = RealmStoreConfig::from_file(config_path).map_err(|e| {
            bootstrap_error!("❌ 配置加载失败: {}", e);
            Error::from(e)
        })?;

        match config.check() {
            Ok(warnings) => {
                for (i, warning) in warnings.iter().enumerate() {
                    bootstrap_info!("  {}. ⚠️  {}", i + 1, warning);
                }
            }
            Err(e) => {
                if let ConfigError::Invalid { problems } = &e {
                    for (i, problem) in problems.iter().enumerate() {
                        bootstrap_error!("  {}. ❌ {}", i + 1, problem);
                    }
                }
                return Err(e.into());
            }
        }

        Ok(config)
    }

    /// 测试配置文件是否有效
    fn test_config_file(config_path: &Path) -> Result<()> {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();

        match Self::load_config(config_path) {
            Ok(config) => {
                info!(name = %config.name, "✅ 配置验证通过: {:?}", config_path);
                Ok(())
            }
            Err(e) => {
                error!("❌ 配置验证失败: {}", e);
                Err(e)
            }
        }
    }

    /// 执行一个子命令
    async fn run_command(config_path: &Path, command: &Commands) -> Result<()> {
        let config = Self::load_config(config_path)?;
        let _guard = init_observability(&config)?;

        info!(
            name = %config.name,
            env = %config.env,
            config = %config_path.display(),
            "realmstore starting"
        );

        let index = ActionsIndex::standard();
        match commands::execute(command, &config, &index).await {
            Ok(output) => {
                println!("{output}");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                Err(e)
            }
        }
    }
}
