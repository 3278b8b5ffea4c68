//! 文件日志
//!
//! 按 `LogConfig` 启动 flexi_logger：按大小轮转，异步写入。

use crate::config::LogConfig;
use crate::core::error::{GraphKitError, GraphKitResult};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 进程内唯一的 logger 句柄，`shutdown` 时取出
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 启动文件日志
///
/// 已经启动过时直接返回 `Ok`，不会替换第一次的配置。
///
/// # Examples
/// ```no_run
/// use graphkit::config::Config;
/// use graphkit::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config.log).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> GraphKitResult<()> {
    let mut guard = LOGGER_HANDLE
        .lock()
        .map_err(|e| GraphKitError::Config(format!("日志句柄锁失效: {}", e)))?;
    if guard.is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;

    *guard = Some(handle);

    log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    Ok(())
}

/// 刷新缓冲并释放句柄
///
/// 之后 `is_initialized` 返回 `false`；未启动时调用无副作用
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

/// 当前是否持有 logger 句柄
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
