use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::collections::{hash_map, min_heap};
use crate::core::error::{GraphKitError, GraphKitResult};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub algorithm: AlgorithmConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

/// 算法运行时的临时结构尺寸
///
/// 只影响访问集合、距离表和优先队列的初始容量，不影响结果。
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AlgorithmConfig {
    pub hash_initial_capacity: usize,
    pub heap_initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            algorithm: AlgorithmConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphkit".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            hash_initial_capacity: hash_map::INITIAL_CAPACITY,
            heap_initial_capacity: min_heap::INITIAL_CAPACITY,
        }
    }
}

impl AlgorithmConfig {
    pub fn validate(&self) -> GraphKitResult<()> {
        if self.hash_initial_capacity < hash_map::MIN_CAPACITY {
            return Err(GraphKitError::Config(format!(
                "hash_initial_capacity 不能小于 {}",
                hash_map::MIN_CAPACITY
            )));
        }
        if self.heap_initial_capacity < min_heap::MIN_CAPACITY {
            return Err(GraphKitError::Config(format!(
                "heap_initial_capacity 不能小于 {}",
                min_heap::MIN_CAPACITY
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> GraphKitResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphKitResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> GraphKitResult<()> {
        if self.log.max_files == 0 {
            return Err(GraphKitError::Config("log.max_files 必须大于 0".to_string()));
        }
        self.algorithm.validate()
    }
}
