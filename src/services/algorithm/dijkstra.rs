//! Dijkstra算法模块
//!
//! 单源最短距离，要求边权非负（不做检查）

use std::fmt;
use std::hash::Hash;

use log::{debug, trace};

use super::shared::{add_distance, validate_start, Prioritized, INFINITY};
use crate::config::AlgorithmConfig;
use crate::core::collections::{HashMap, HashSet, MinHeap};
use crate::core::error::GraphResult;
use crate::core::graph::Graph;
use crate::core::vertex_edge::Vertex;

/// Dijkstra算法结构体
pub struct Dijkstra;

impl Dijkstra {
    /// 计算从起点到所有顶点的最短距离
    ///
    /// 结果包含图中每个顶点，不可达顶点的距离为 [`INFINITY`]。
    /// 堆中的过期条目在弹出时丢弃。
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
        let mut visited = HashSet::with_capacity(config.hash_initial_capacity);
        let mut to_visit = MinHeap::with_capacity(config.heap_initial_capacity);

        // 初始化距离
        for vertex in graph.vertices() {
            distances.put(vertex.clone(), INFINITY);
        }
        distances.put(start.clone(), 0);
        to_visit.add(Prioritized::new(0, start.clone()));

        while visited.len() < graph.vertex_count() {
            let Some(Prioritized {
                priority: distance,
                item: current,
            }) = to_visit.remove_min()
            else {
                break;
            };
            if visited.contains(&current) {
                continue;
            }
            trace!("Dijkstra 确定 {:?} 的距离为 {}", current.data(), distance);

            for neighbor in graph.neighbors(&current) {
                if visited.contains(neighbor.vertex()) {
                    continue;
                }
                let new_distance = add_distance(distance, neighbor.distance());
                if new_distance < *distances.get(neighbor.vertex())? {
                    distances.put(neighbor.vertex().clone(), new_distance);
                    to_visit.add(Prioritized::new(new_distance, neighbor.vertex().clone()));
                }
            }
            visited.add(current);
        }

        debug!(
            "Dijkstra 从 {:?} 出发确定了 {}/{} 个顶点",
            start.data(),
            visited.len(),
            graph.vertex_count()
        );
        Ok(distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::algorithm::shared::fixtures::{directed, undirected, v};

    fn distance(map: &HashMap<Vertex<char>, i32>, name: char) -> i32 {
        *map.get(&v(name)).expect("every vertex has a distance")
    }

    #[test]
    fn test_dijkstra_zero_weight_edges() {
        let graph = directed(
            "ABCDEFGHI",
            &[
                ('A', 'B', 1),
                ('A', 'I', 0),
                ('B', 'C', 3),
                ('B', 'I', 2),
                ('C', 'D', 2),
                ('C', 'H', 1),
                ('D', 'E', 0),
                ('D', 'F', 3),
                ('E', 'F', 1),
                ('F', 'C', 0),
                ('F', 'G', 2),
                ('G', 'H', 0),
                ('H', 'I', 1),
                ('I', 'G', 0),
            ],
        );
        let result = Dijkstra::shortest_distances(&graph, &v('A'), &AlgorithmConfig::default())
            .expect("start is in graph");
        let expected = [
            ('A', 0),
            ('B', 1),
            ('C', 4),
            ('D', 6),
            ('E', 6),
            ('F', 7),
            ('G', 0),
            ('H', 0),
            ('I', 0),
        ];
        assert_eq!(result.len(), expected.len());
        for (name, d) in expected {
            assert_eq!(distance(&result, name), d, "distance to {}", name);
        }
    }

    #[test]
    fn test_dijkstra_unreachable_is_infinity() {
        let graph = undirected("ABCDEFG", &[('A', 'B', 1), ('A', 'E', 2), ('F', 'G', 10)]);
        let result = Dijkstra::shortest_distances(&graph, &v('A'), &AlgorithmConfig::default())
            .expect("start is in graph");
        assert_eq!(distance(&result, 'B'), 1);
        assert_eq!(distance(&result, 'E'), 2);
        for name in ['C', 'D', 'F', 'G'] {
            assert_eq!(distance(&result, name), INFINITY);
        }
    }

    #[test]
    fn test_dijkstra_prefers_longer_cheaper_path() {
        let graph = directed("ABC", &[('A', 'C', 10), ('A', 'B', 1), ('B', 'C', 2)]);
        let result = Dijkstra::shortest_distances(&graph, &v('A'), &AlgorithmConfig::default())
            .expect("start is in graph");
        assert_eq!(distance(&result, 'C'), 3);
    }

    #[test]
    fn test_dijkstra_saturates_large_weights() {
        let graph = directed("ABC", &[('A', 'B', i32::MAX - 1), ('B', 'C', 5)]);
        let result = Dijkstra::shortest_distances(&graph, &v('A'), &AlgorithmConfig::default())
            .expect("start is in graph");
        assert_eq!(distance(&result, 'B'), i32::MAX - 1);
        assert_eq!(distance(&result, 'C'), INFINITY);
    }

    #[test]
    fn test_dijkstra_unknown_start() {
        let graph = directed("AB", &[]);
        let err = Dijkstra::shortest_distances(&graph, &v('Q'), &AlgorithmConfig::default())
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
