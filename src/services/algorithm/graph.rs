use std::fmt;
use std::hash::Hash;

use super::{BellmanFord, Bfs, Dfs, Dijkstra, Kruskal, Prim};
use crate::config::AlgorithmConfig;
use crate::core::collections::{HashMap, HashSet};
use crate::core::error::GraphResult;
use crate::core::graph::Graph;
use crate::core::vertex_edge::{Edge, Vertex};

/// Graph algorithm entry point
///
/// Holds only the scratch sizing configuration, so one value can serve any
/// number of graphs and calls. None of the methods mutate the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphAlgorithms {
    config: AlgorithmConfig,
}

impl GraphAlgorithms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AlgorithmConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    /// Breadth-first traversal from `start`, in first-discovered order
    pub fn bfs<T>(&self, start: &Vertex<T>, graph: &Graph<T>) -> GraphResult<Vec<Vertex<T>>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        Bfs::traverse(graph, start, &self.config)
    }

    /// Depth-first preorder traversal from `start`
    pub fn dfs<T>(&self, start: &Vertex<T>, graph: &Graph<T>) -> GraphResult<Vec<Vertex<T>>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        Dfs::traverse(graph, start, &self.config)
    }

    /// Shortest distances from `start` assuming non-negative weights
    pub fn dijkstra<T>(
        &self,
        start: &Vertex<T>,
        graph: &Graph<T>,
    ) -> GraphResult<HashMap<Vertex<T>, i32>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        Dijkstra::shortest_distances(graph, start, &self.config)
    }

    /// Shortest distances from `start`, failing on a reachable negative cycle
    pub fn bellman_ford<T>(
        &self,
        start: &Vertex<T>,
        graph: &Graph<T>,
    ) -> GraphResult<HashMap<Vertex<T>, i32>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        BellmanFord::shortest_distances(graph, start, &self.config)
    }

    /// Minimum spanning tree grown from `start`; `None` when disconnected
    pub fn prims<T>(
        &self,
        start: &Vertex<T>,
        graph: &Graph<T>,
    ) -> GraphResult<Option<HashSet<Edge<T>>>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        Prim::minimum_spanning_tree(graph, start, &self.config)
    }

    /// Minimum spanning forest over every component
    pub fn kruskals<T>(&self, graph: &Graph<T>) -> GraphResult<HashSet<Edge<T>>>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        Kruskal::minimum_spanning_forest(graph, &self.config)
    }

    /// Total weight of an edge set as stored, so each undirected edge counts twice
    pub fn mst_weight<T>(edges: &HashSet<Edge<T>>) -> i64 {
        edges.iter().map(|edge| i64::from(edge.weight())).sum()
    }
}
