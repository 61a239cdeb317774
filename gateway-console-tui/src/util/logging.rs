//! 日志初始化
//!
//! 标准输出被 TUI 占用，日志写入按天滚动的文件。
//! `RUST_LOG` 优先于配置文件中的级别；核心库的 `log` 记录经 tracing-log 桥接进入同一个订阅者。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "gateway-console.log";

/// 安装全局日志订阅者
///
/// 返回的 guard 必须持有到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging(directory: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("a global logger is already installed")?;

    tracing::info!(
        "Logging to {} (level: {level})",
        directory.join(LOG_FILE_PREFIX).display()
    );
    Ok(guard)
}
