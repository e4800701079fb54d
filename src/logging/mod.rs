// src/logging/mod.rs

use std::path::Path;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter, Registry};

pub const LOG_FILE_NAME: &str = "campaign_log.json";

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("failed to open log directory")]
    Appender(#[from] InitError),

    #[error("failed to install global tracing subscriber")]
    Subscriber(#[from] TryInitError),
}

/// 初始化全局 tracing 日志：JSON 格式，按小时滚动写入 `log_dir`
///
/// 返回的 guard 必须在进程退出前一直持有，否则缓冲中的日志会丢失。
pub fn init(log_dir: &Path) -> Result<WorkerGuard, LogInitError> {
    let log_file = RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default()
        .with(filter)
        .with(fmt::layer().json().with_writer(non_blocking))
        .try_init()?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_log_dir_is_an_error() {
        // 用一个普通文件充当父目录，创建日志目录必然失败
        let blocker = std::env::temp_dir().join(format!("impact_campaign_log_blocker_{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = init(&blocker.join("logs"));
        std::fs::remove_file(&blocker).unwrap();

        assert!(matches!(result, Err(LogInitError::Appender(_))));
    }
}
