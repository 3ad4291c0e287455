use realmstore_common::config::{LogConfig, ObservabilityConfig, RealmStoreConfig};
use std::fs;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::error::Result;

/// 日志文件名
const LOG_FILE: &str = "realmstore.log";

/// Guard for the non-blocking log writer
///
/// 文件日志在 guard 被 drop 时刷新。
#[derive(Default)]
pub struct ObservabilityGuard {
    _log_guard: Option<WorkerGuard>,
}

/// Initialize logging based on configuration
///
/// 标准输出保留给命令结果，控制台日志写到 stderr。
pub fn init_observability(config: &RealmStoreConfig) -> Result<ObservabilityGuard> {
    let mut guard = ObservabilityGuard::default();
    let log_config = config.log_config();

    match log_config.output.as_str() {
        "file" => {
            fs::create_dir_all(&log_config.path)?;
            let (non_blocking, worker_guard) =
                build_file_writer(log_config, config.should_rotate_logs())?;
            guard._log_guard = Some(worker_guard);

            init_subscriber_with_writer(non_blocking, false, &config.observability);
        }
        _ => {
            init_subscriber_with_writer(std::io::stderr, true, &config.observability);
        }
    }

    Ok(guard)
}

/// Create an EnvFilter from config, with RUST_LOG taking precedence
fn create_env_filter(config: &ObservabilityConfig) -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| config.filter_level.clone());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        eprintln!("Failed to parse filter directive: {directive}. Falling back to default: info");
        EnvFilter::new("info")
    })
}

fn init_subscriber_with_writer<W>(writer: W, use_ansi: bool, config: &ObservabilityConfig)
where
    W: for<'a> fmt::MakeWriter<'a> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(use_ansi)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(create_env_filter(config))
        .with(fmt_layer)
        .try_init()
        .ok();
}

fn build_file_writer(log_config: &LogConfig, rotate: bool) -> Result<(NonBlocking, WorkerGuard)> {
    if rotate {
        let file_appender = tracing_appender::rolling::daily(&log_config.path, LOG_FILE);
        Ok(tracing_appender::non_blocking(file_appender))
    } else {
        let log_file_path = std::path::Path::new(&log_config.path).join(LOG_FILE);
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path)?;
        Ok(tracing_appender::non_blocking(file))
    }
}
