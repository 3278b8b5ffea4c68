//! 图层错误类型
//!
//! 涵盖图构造校验和图算法执行过程中的错误

use thiserror::Error;

use super::collection::CollectionError;

/// 图操作结果类型
pub type GraphResult<T> = Result<T, GraphError>;

/// 图层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// 参数不合法，例如起点不在图中
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 边引用了顶点集合之外的顶点，只在构造时检测
    #[error("图结构无效: {0}")]
    StructuralInvalid(String),

    /// 从起点可达的负权环，仅 Bellman-Ford 产生
    #[error("存在从 {0} 可达的负权环")]
    NegativeCycle(String),

    #[error("集合错误: {0}")]
    Collection(#[from] CollectionError),
}

impl GraphError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        GraphError::InvalidArgument(msg.into())
    }

    pub fn structural_invalid(msg: impl Into<String>) -> Self {
        GraphError::StructuralInvalid(msg.into())
    }

    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, GraphError::NegativeCycle(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GraphError::InvalidArgument(_))
    }
}
