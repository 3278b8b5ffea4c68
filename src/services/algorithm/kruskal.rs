//! Kruskal算法模块
//!
//! 按权重从小到大合并连通分量，输入视为无向图

use std::fmt;
use std::hash::Hash;

use log::{debug, trace};

use super::shared::Prioritized;
use crate::config::AlgorithmConfig;
use crate::core::collections::{DisjointSet, HashSet, MinHeap};
use crate::core::error::GraphResult;
use crate::core::graph::Graph;
use crate::core::vertex_edge::Edge;

/// Kruskal算法结构体
pub struct Kruskal;

impl Kruskal {
    /// 计算最小生成森林
    ///
    /// 图连通时即为最小生成树；不连通时返回各分量的生成树之并。
    /// 每条边以两个方向存储。
    pub fn minimum_spanning_forest<T>(
        graph: &Graph<T>,
        config: &AlgorithmConfig,
    ) -> GraphResult<HashSet<Edge<T>>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        let mut components = DisjointSet::from_set(graph.vertices());
        let mut forest = HashSet::with_capacity(config.hash_initial_capacity);

        let candidates: Vec<Prioritized<Edge<T>>> = graph
            .edges()
            .iter()
            .map(|edge| Prioritized::new(edge.weight(), edge.clone()))
            .collect();
        let mut queue = MinHeap::from_vec(candidates);

        let required = 2 * graph.vertex_count().saturating_sub(1);
        while forest.len() < required {
            let Some(Prioritized { item: edge, .. }) = queue.remove_min() else {
                break;
            };
            if components.same_set(edge.u(), edge.v())? {
                continue;
            }
            trace!(
                "Kruskal 接受边 {:?} -> {:?} ({})",
                edge.u().data(),
                edge.v().data(),
                edge.weight()
            );
            components.union(edge.u(), edge.v())?;
            forest.add(edge.reversed());
            forest.add(edge);
        }

        debug!(
            "Kruskal 生成森林包含 {} 条有向边（连通图需要 {} 条）",
            forest.len(),
            required
        );
        Ok(forest)
    }
}
