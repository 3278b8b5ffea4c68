pub mod collections;
pub mod error;
pub mod graph;
pub mod murmur;
pub mod vertex_edge;

// 错误和结果类型
pub use error::{
    CollectionError, CollectionResult, GraphError, GraphKitError, GraphKitResult, GraphResult,
};

// 图模型
pub use graph::Graph;
pub use vertex_edge::{Edge, Vertex, VertexDistance};

// 基础数据结构
pub use collections::{DisjointSet, HashMap, HashSet, MinHeap};
