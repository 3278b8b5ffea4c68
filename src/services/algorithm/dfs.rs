//! DFS算法模块
//!
//! 深度优先遍历，使用显式栈避免深图上的递归栈溢出

use std::fmt;
use std::hash::Hash;

use log::debug;

use super::shared::validate_start;
use crate::config::AlgorithmConfig;
use crate::core::collections::HashSet;
use crate::core::error::GraphResult;
use crate::core::graph::Graph;
use crate::core::vertex_edge::Vertex;

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 从起点出发的前序深度优先遍历
    ///
    /// 输出与按邻接表顺序递归访问的结果一致。
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
        let mut stack = vec![start.clone()];
        let mut result = Vec::new();

        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            visited.add(current.clone());

            // 逆序入栈，使第一个邻居最先出栈
            for neighbor in graph.neighbors(&current).iter().rev() {
                if !visited.contains(neighbor.vertex()) {
                    stack.push(neighbor.vertex().clone());
                }
            }
            result.push(current);
        }

        debug!(
            "DFS 从 {:?} 出发访问了 {}/{} 个顶点",
            start.data(),
            result.len(),
            graph.vertex_count()
        );
        Ok(result)
    }
}
