//! 日志初始化
//!
//! TUI 占用了整个屏幕，日志只能写入文件：
//! <data_local_dir>/roster/logs/roster.log.YYYY-MM-DD
//!
//! roster-core 使用 `log` 门面，由 tracing-subscriber 的 tracing-log 桥接进来。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster")
        .join("logs")
}

/// 构造日志过滤器：RUST_LOG 优先，其次是配置中的级别，最后回退到 info
fn build_filter(configured: &str) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(from_env.as_deref(), configured)
}

fn resolve_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .filter(|directive| !directive.trim().is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// 初始化日志
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging(configured_level: &str) -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&dir, "roster.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(build_filter(configured_level))
        .with(file_layer)
        .try_init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_used_without_env() {
        assert_eq!(resolve_filter(None, "debug").to_string(), "debug");
    }

    #[test]
    fn env_directive_takes_precedence() {
        assert_eq!(resolve_filter(Some("warn"), "debug").to_string(), "warn");
        assert_eq!(resolve_filter(Some("  "), "debug").to_string(), "debug");
    }

    #[test]
    fn invalid_level_falls_back_to_info() {
        assert_eq!(resolve_filter(None, "roster=loud").to_string(), "info");
        assert_eq!(
            resolve_filter(Some("roster=loud"), "roster=loud").to_string(),
            "info"
        );
    }

    #[test]
    fn log_dir_is_namespaced() {
        assert!(log_dir().ends_with("roster/logs"));
    }
}
