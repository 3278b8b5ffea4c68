//! GraphKit - Hand-built collections and classic graph algorithms in Rust
//!
//! This crate provides an open-addressing hash table and set, a binary
//! min-heap, a disjoint-set forest, an immutable weighted directed graph,
//! and traversal, shortest-path and minimum-spanning-tree algorithms on top.

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::config::{AlgorithmConfig, Config, LogConfig};
pub use crate::core::{
    CollectionError, CollectionResult, DisjointSet, Edge, Graph, GraphError, GraphKitError,
    GraphKitResult, GraphResult, HashMap, HashSet, MinHeap, Vertex, VertexDistance,
};
pub use crate::services::{GraphAlgorithms, INFINITY};
