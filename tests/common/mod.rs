//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::path::PathBuf;

use graphkit::config::LogConfig;
use tempfile::TempDir;

/// 在临时目录下构造日志配置
///
/// 返回的 TempDir 需要在测试期间保持存活，drop 时目录会被删除
pub fn temp_log_config(level: &str) -> (TempDir, LogConfig) {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let config = LogConfig {
        level: level.to_string(),
        dir: dir.path().to_string_lossy().into_owned(),
        file: "graphkit_test".to_string(),
        max_file_size: 1024 * 1024,
        max_files: 2,
    };
    (dir, config)
}

/// 列出目录下的所有日志文件
pub fn log_files(dir: &TempDir) -> Vec<PathBuf> {
    std::fs::read_dir(dir.path())
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.extension().map(|ext| ext == "log").unwrap_or(false))
                .collect()
        })
        .unwrap_or_default()
}
