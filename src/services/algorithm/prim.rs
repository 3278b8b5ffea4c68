//! Prim算法模块
//!
//! 从起点生长最小生成树，输入视为无向图（每条边需双向提供）

use std::fmt;
use std::hash::Hash;

use log::{debug, warn};

use super::shared::{validate_start, Prioritized};
use crate::config::AlgorithmConfig;
use crate::core::collections::{HashSet, MinHeap};
use crate::core::error::GraphResult;
use crate::core::graph::Graph;
use crate::core::vertex_edge::{Edge, Vertex};

/// Prim算法结构体
pub struct Prim;

impl Prim {
    /// 计算包含起点的最小生成树
    ///
    /// 树中每条边以两个方向存储。图不连通时返回 `Ok(None)`，
    /// 单顶点图返回空集合。
    pub fn minimum_spanning_tree<T>(
        graph: &Graph<T>,
        start: &Vertex<T>,
        config: &AlgorithmConfig,
    ) -> GraphResult<Option<HashSet<Edge<T>>>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        validate_start(graph, start)?;

        let mut visited = HashSet::with_capacity(config.hash_initial_capacity);
        let mut tree = HashSet::with_capacity(config.hash_initial_capacity);
        let mut frontier = MinHeap::with_capacity(config.heap_initial_capacity);

        Self::push_frontier(graph, start, &visited, &mut frontier);
        visited.add(start.clone());

        while visited.len() < graph.vertex_count() {
            let Some(Prioritized { item: edge, .. }) = frontier.remove_min() else {
                break;
            };
            if visited.contains(edge.v()) {
                continue;
            }
            let reached = edge.v().clone();
            tree.add(edge.reversed());
            tree.add(edge);
            Self::push_frontier(graph, &reached, &visited, &mut frontier);
            visited.add(reached);
        }

        let required = 2 * graph.vertex_count().saturating_sub(1);
        if tree.len() < required {
            warn!(
                "Prim 从 {:?} 出发只连通了 {}/{} 个顶点，图不连通",
                start.data(),
                visited.len(),
                graph.vertex_count()
            );
            return Ok(None);
        }

        debug!("Prim 生成树包含 {} 条有向边", tree.len());
        Ok(Some(tree))
    }

    fn push_frontier<T>(
        graph: &Graph<T>,
        from: &Vertex<T>,
        visited: &HashSet<Vertex<T>>,
        frontier: &mut MinHeap<Prioritized<Edge<T>>>,
    ) where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        for neighbor in graph.neighbors(from) {
            if !visited.contains(neighbor.vertex()) {
                let edge = Edge::new(from.clone(), neighbor.vertex().clone(), neighbor.distance());
                frontier.add(Prioritized::new(neighbor.distance(), edge));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::algorithm::shared::fixtures::{directed, undirected, v};

    fn weight_sum(edges: &HashSet<Edge<char>>) -> i64 {
        edges.iter().map(|e| i64::from(e.weight())).sum()
    }

    #[test]
    fn test_prim_undirected_random() {
        let graph = undirected(
            "ABCDEFGHI",
            &[
                ('A', 'B', 4),
                ('A', 'H', 8),
                ('B', 'H', 11),
                ('B', 'C', 8),
                ('C', 'I', 2),
                ('H', 'I', 7),
                ('I', 'G', 6),
                ('G', 'H', 1),
                ('G', 'F', 2),
                ('C', 'F', 4),
                ('C', 'D', 7),
                ('D', 'F', 14),
                ('D', 'E', 9),
                ('F', 'E', 10),
            ],
        );
        let tree = Prim::minimum_spanning_tree(&graph, &v('A'), &AlgorithmConfig::default())
            .expect("start is in graph")
            .expect("graph is connected");
        assert_eq!(tree.len(), 16);
        assert_eq!(weight_sum(&tree), 74);
        for edge in &tree {
            assert!(tree.contains(&edge.reversed()));
        }
    }

    #[test]
    fn test_prim_single_vertex() {
        let graph = directed("A", &[]);
        let tree = Prim::minimum_spanning_tree(&graph, &v('A'), &AlgorithmConfig::default())
            .expect("start is in graph");
        assert_eq!(tree.map(|t| t.len()), Some(0));
    }

    #[test]
    fn test_prim_disconnected() {
        let graph = undirected("ABCD", &[('A', 'B', 1), ('C', 'D', 1)]);
        let tree = Prim::minimum_spanning_tree(&graph, &v('A'), &AlgorithmConfig::default())
            .expect("start is in graph");
        assert!(tree.is_none());
    }

    #[test]
    fn test_prim_unknown_start() {
        let graph = directed("A", &[]);
        assert!(Prim::minimum_spanning_tree(&graph, &v('Z'), &AlgorithmConfig::default()).is_err());
    }
}
