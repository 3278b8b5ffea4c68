//! 图模型
//!
//! 顶点集合、边集合以及由边集合一次性推导出的邻接表。
//! 构造完成后只读，不提供任何增删操作。

use std::fmt;
use std::hash::Hash;

use log::debug;

use crate::core::collections::{HashMap, HashSet};
use crate::core::error::{GraphError, GraphResult};
use crate::core::vertex_edge::{Edge, Vertex, VertexDistance};

/// 带权有向图
///
/// 邻接表中每个顶点的邻居顺序与构造时边的提供顺序一致，
/// 重复的边只保留第一次出现。
#[derive(Clone)]
pub struct Graph<T> {
    vertices: HashSet<Vertex<T>>,
    edges: HashSet<Edge<T>>,
    adj_list: HashMap<Vertex<T>, Vec<VertexDistance<T>>>,
}

impl<T: Clone + Eq + Hash + fmt::Debug> Graph<T> {
    /// 由完整的顶点集合和边集合构造图
    ///
    /// 任意一条边的端点不在顶点集合中时返回 `StructuralInvalid`。
    pub fn new<V, E>(vertices: V, edges: E) -> GraphResult<Self>
    where
        V: IntoIterator<Item = Vertex<T>>,
        E: IntoIterator<Item = Edge<T>>,
    {
        let vertices: HashSet<Vertex<T>> = vertices.into_iter().collect();

        let mut adj_list = HashMap::with_capacity(vertices.capacity());
        for vertex in &vertices {
            adj_list.put(vertex.clone(), Vec::new());
        }

        let mut edge_set = HashSet::new();
        for edge in edges {
            if !vertices.contains(edge.u()) || !vertices.contains(edge.v()) {
                return Err(GraphError::structural_invalid(format!(
                    "边 {:?} -> {:?} 引用了不存在的顶点",
                    edge.u().data(),
                    edge.v().data()
                )));
            }
            if edge_set.contains(&edge) {
                continue;
            }
            adj_list
                .get_mut(edge.u())?
                .push(VertexDistance::new(edge.v().clone(), edge.weight()));
            edge_set.add(edge);
        }

        debug!(
            "构建图完成: {} 个顶点, {} 条边",
            vertices.len(),
            edge_set.len()
        );

        Ok(Self {
            vertices,
            edges: edge_set,
            adj_list,
        })
    }

    /// 顶点的出边邻居，顶点不在图中时为空
    pub fn neighbors(&self, vertex: &Vertex<T>) -> &[VertexDistance<T>] {
        self.adj_list
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn contains_edge(&self, edge: &Edge<T>) -> bool {
        self.edges.contains(edge)
    }
}

impl<T> Graph<T> {
    pub fn vertices(&self) -> &HashSet<Vertex<T>> {
        &self.vertices
    }

    pub fn edges(&self) -> &HashSet<Edge<T>> {
        &self.edges
    }

    pub fn adj_list(&self) -> &HashMap<Vertex<T>, Vec<VertexDistance<T>>> {
        &self.adj_list
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}
