//! 集合层错误类型
//!
//! 涵盖哈希表、最小堆、并查集等基础数据结构的错误

use thiserror::Error;

/// 集合操作结果类型
pub type CollectionResult<T> = Result<T, CollectionError>;

/// 集合层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("键未找到: {0}")]
    NotFound(String),
}

impl CollectionError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CollectionError::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        CollectionError::NotFound(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::NotFound(_))
    }
}
