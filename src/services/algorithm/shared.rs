//! 图算法共享工具

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::core::error::{GraphError, GraphResult};
use crate::core::graph::Graph;
use crate::core::vertex_edge::Vertex;

/// 不可达顶点的距离
pub const INFINITY: i32 = i32::MAX;

/// 优先队列中的元素，只按优先级比较
#[derive(Debug, Clone)]
pub(crate) struct Prioritized<T> {
    pub priority: i32,
    pub item: T,
}

impl<T> Prioritized<T> {
    pub fn new(priority: i32, item: T) -> Self {
        Self { priority, item }
    }
}

impl<T> PartialEq for Prioritized<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T> Eq for Prioritized<T> {}

impl<T> PartialOrd for Prioritized<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Prioritized<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// 检查起始顶点是否属于图
pub(crate) fn validate_start<T>(graph: &Graph<T>, start: &Vertex<T>) -> GraphResult<()>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    if graph.contains_vertex(start) {
        Ok(())
    } else {
        Err(GraphError::invalid_argument(format!(
            "起始顶点 {:?} 不存在于图中",
            start.data()
        )))
    }
}

/// 距离相加，任一侧为 INFINITY 或溢出时结果为 INFINITY
pub(crate) fn add_distance(distance: i32, weight: i32) -> i32 {
    if distance == INFINITY {
        return INFINITY;
    }
    distance.saturating_add(weight)
}
