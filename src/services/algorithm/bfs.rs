//! BFS算法模块
//!
//! 广度优先遍历，按首次发现的顺序输出可达顶点

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use log::debug;

use super::shared::validate_start;
use crate::config::AlgorithmConfig;
use crate::core::collections::HashSet;
use crate::core::error::GraphResult;
use crate::core::graph::Graph;
use crate::core::vertex_edge::Vertex;

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 从起点出发的广度优先遍历
    ///
    /// 每个可达顶点恰好出现一次；同一层内按邻接表顺序入队。
    pub fn traverse<T>(
        graph: &Graph<T>,
        start: &Vertex<T>,
        config: &AlgorithmConfig,
    ) -> GraphResult<Vec<Vertex<T>>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        validate_start(graph, start)?;

        let mut visited = HashSet::with_capacity(config.hash_initial_capacity);
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        visited.add(start.clone());
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            for neighbor in graph.neighbors(&current) {
                if !visited.contains(neighbor.vertex()) {
                    visited.add(neighbor.vertex().clone());
                    queue.push_back(neighbor.vertex().clone());
                }
            }
            result.push(current);
        }

        debug!(
            "BFS 从 {:?} 出发访问了 {}/{} 个顶点",
            start.data(),
            result.len(),
            graph.vertex_count()
        );
        Ok(result)
    }
}
