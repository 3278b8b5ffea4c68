//! Bellman-Ford算法模块
//!
//! 支持负权边的单源最短距离，并检测从起点可达的负权环

use std::fmt;
use std::hash::Hash;

use log::{debug, trace, warn};

use super::shared::{add_distance, validate_start, INFINITY};
use crate::config::AlgorithmConfig;
use crate::core::collections::HashMap;
use crate::core::error::{GraphError, GraphResult};
use crate::core::graph::Graph;
use crate::core::vertex_edge::Vertex;

/// Bellman-Ford算法结构体
pub struct BellmanFord;

impl BellmanFord {
    /// 计算从起点到所有顶点的最短距离
    ///
    /// 最多进行 |V|-1 轮松弛，某一轮没有变化时提前结束。
    /// 之后仍能松弛的边说明存在从起点可达的负权环，返回 `NegativeCycle`。
    /// 起点不可达的负权环不会被发现。
    pub fn shortest_distances<T>(
        graph: &Graph<T>,
        start: &Vertex<T>,
        config: &AlgorithmConfig,
    ) -> GraphResult<HashMap<Vertex<T>, i32>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        validate_start(graph, start)?;

        let mut distances = HashMap::with_capacity(config.hash_initial_capacity);
        for vertex in graph.vertices() {
            distances.put(vertex.clone(), INFINITY);
        }
        distances.put(start.clone(), 0);

        let passes = graph.vertex_count().saturating_sub(1);
        for pass in 0..passes {
            if !Self::relax_all(graph, &mut distances)? {
                debug!("Bellman-Ford 在第 {} 轮收敛", pass + 1);
                return Ok(distances);
            }
        }

        for edge in graph.edges() {
            let source = *distances.get(edge.u())?;
            if source == INFINITY {
                continue;
            }
            if add_distance(source, edge.weight()) < *distances.get(edge.v())? {
                warn!(
                    "Bellman-Ford 检测到负权环: 边 {:?} -> {:?} 在 {} 轮后仍可松弛",
                    edge.u().data(),
                    edge.v().data(),
                    passes
                );
                return Err(GraphError::NegativeCycle(format!("{:?}", start.data())));
            }
        }

        debug!("Bellman-Ford 完成 {} 轮松弛", passes);
        Ok(distances)
    }

    /// 对所有边做一轮松弛，返回是否有距离被更新
    fn relax_all<T>(graph: &Graph<T>, distances: &mut HashMap<Vertex<T>, i32>) -> GraphResult<bool>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        let mut changed = false;
        for edge in graph.edges() {
            let source = *distances.get(edge.u())?;
            if source == INFINITY {
                continue;
            }
            let new_distance = add_distance(source, edge.weight());
            if new_distance < *distances.get(edge.v())? {
                trace!(
                    "松弛 {:?} -> {:?}: {}",
                    edge.u().data(),
                    edge.v().data(),
                    new_distance
                );
                distances.put(edge.v().clone(), new_distance);
                changed = true;
            }
        }
        Ok(changed)
    }
}
