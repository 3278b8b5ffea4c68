//! 统一错误处理系统
//!
//! ## 设计理念
//!
//! 1. **分层设计**：
//!    - 集合层（哈希表、堆、并查集）使用 `CollectionError`
//!    - 图层（构造校验、算法）使用 `GraphError`，通过 `#[from]` 吸收集合层错误
//!
//! 2. **统一接口**：`GraphKitResult<T>` 为配置加载、日志初始化等外围操作
//!    提供统一的返回类型

use thiserror::Error;

pub mod collection;
pub mod graph;

pub use collection::{CollectionError, CollectionResult};
pub use graph::{GraphError, GraphResult};

/// 统一的顶层错误类型
#[derive(Error, Debug)]
pub enum GraphKitError {
    #[error("图错误: {0}")]
    Graph(#[from] GraphError),

    #[error("集合错误: {0}")]
    Collection(#[from] CollectionError),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("日志错误: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

/// 统一的结果类型
pub type GraphKitResult<T> = Result<T, GraphKitError>;

impl From<toml::de::Error> for GraphKitError {
    fn from(e: toml::de::Error) -> Self {
        GraphKitError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for GraphKitError {
    fn from(e: toml::ser::Error) -> Self {
        GraphKitError::Config(e.to_string())
    }
}
