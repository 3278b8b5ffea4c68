//! 基础数据结构模块
//!
//! 图算法依赖的三类底层结构：
//! - 开放寻址哈希表（映射与集合）
//! - 数组实现的二叉最小堆
//! - 并查集

pub mod disjoint_set;
pub mod hash_map;
pub mod hash_set;
pub mod min_heap;

pub use disjoint_set::DisjointSet;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use min_heap::MinHeap;
