//! 算法模块
//!
//! 包含基于 `core::graph::Graph` 的遍历、最短路径和最小生成树算法

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod graph;
pub mod kruskal;
pub mod prim;
mod shared;

// 重新导出常用算法结构体
pub use bellman_ford::BellmanFord;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use graph::GraphAlgorithms;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use shared::INFINITY;
