//! 测试数据生成模块
//!
//! 提供各种测试用图，顶点以单个字符命名

use graphkit::{Edge, Graph, Vertex};

pub fn v(name: char) -> Vertex<char> {
    Vertex::new(name)
}

/// 按给定顺序构造有向图
pub fn directed(vertices: &str, edges: &[(char, char, i32)]) -> Graph<char> {
    Graph::new(
        vertices.chars().map(v),
        edges
            .iter()
            .map(|&(u, w, weight)| Edge::new(v(u), v(w), weight)),
    )
    .expect("测试图应该合法")
}

/// 每条边同时提供两个方向，构造无向图
pub fn undirected(vertices: &str, edges: &[(char, char, i32)]) -> Graph<char> {
    Graph::new(
        vertices.chars().map(v),
        edges.iter().flat_map(|&(u, w, weight)| {
            [Edge::new(v(u), v(w), weight), Edge::new(v(w), v(u), weight)]
        }),
    )
    .expect("测试图应该合法")
}

/// 单个顶点，没有边
pub fn single_vertex() -> Graph<char> {
    directed("A", &[])
}

/// 带零权边和环的有向图
pub fn directed_random() -> Graph<char> {
    directed(
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
    )
}

pub fn directed_branched() -> Graph<char> {
    directed(
        "ABCDEFG",
        &[
            ('A', 'B', 1),
            ('C', 'A', 2),
            ('A', 'G', 3),
            ('B', 'D', 4),
            ('C', 'G', 5),
            ('D', 'E', 0),
            ('D', 'F', 0),
            ('F', 'B', 6),
            ('G', 'C', 7),
        ],
    )
}

pub fn directed_complete() -> Graph<char> {
    directed(
        "ABCDE",
        &[
            ('A', 'B', 0),
            ('A', 'C', 1),
            ('A', 'D', 2),
            ('A', 'E', 3),
            ('B', 'A', 0),
            ('B', 'C', 1),
            ('B', 'D', 2),
            ('B', 'E', 2),
            ('C', 'A', 0),
            ('C', 'B', 1),
            ('C', 'D', 2),
            ('C', 'E', 3),
            ('D', 'A', 0),
            ('D', 'B', 1),
            ('D', 'C', 2),
            ('D', 'E', 3),
            ('E', 'A', 0),
            ('E', 'B', 1),
            ('E', 'C', 2),
            ('E', 'D', 3),
        ],
    )
}

/// A 没有出边，其余顶点只能到达 A
pub fn directed_inescapable() -> Graph<char> {
    directed("ABC", &[('B', 'A', 0), ('C', 'A', 0)])
}

pub fn directed_unreachable() -> Graph<char> {
    directed(
        "ABCDEFG",
        &[
            ('A', 'B', 1),
            ('A', 'E', 2),
            ('C', 'B', 3),
            ('C', 'D', 4),
            ('D', 'B', 3),
            ('F', 'G', 0),
        ],
    )
}

pub fn undirected_random() -> Graph<char> {
    undirected(
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
    )
}

pub fn undirected_disconnected() -> Graph<char> {
    undirected(
        "ABCDEFG",
        &[
            ('A', 'B', 1),
            ('A', 'E', 2),
            ('C', 'B', 3),
            ('C', 'D', 4),
            ('D', 'B', 3),
            ('F', 'G', 10),
        ],
    )
}

pub fn undirected_complete() -> Graph<char> {
    undirected(
        "ABCDEF",
        &[
            ('A', 'B', 10),
            ('A', 'C', 15),
            ('A', 'D', 5),
            ('A', 'E', 1),
            ('A', 'F', 20),
            ('B', 'C', 4),
            ('B', 'D', 5),
            ('B', 'E', 5),
            ('B', 'F', 15),
            ('C', 'D', 5),
            ('C', 'E', 8),
            ('C', 'F', 10),
            ('D', 'E', 15),
            ('D', 'F', 1),
            ('E', 'F', 5),
        ],
    )
}

/// 含负权边但没有负权环；`c_to_b` 为负时形成 B -> D -> C -> B 负权环
pub fn directed_negative(c_to_b: i32) -> Graph<char> {
    directed(
        "ABCDEF",
        &[
            ('A', 'B', 10),
            ('A', 'F', 8),
            ('F', 'E', 1),
            ('E', 'B', -4),
            ('E', 'D', -1),
            ('B', 'D', 2),
            ('D', 'C', -2),
            ('C', 'B', c_to_b),
        ],
    )
}

/// 无向负权边本身就构成负权环
pub fn undirected_negative() -> Graph<char> {
    undirected("ABC", &[('A', 'B', -2), ('A', 'C', 1), ('B', 'C', 5)])
}

/// 18 个顶点的综合无向图
pub fn ultimate() -> Graph<char> {
    undirected(
        "ABCDEFGHIJKLMNOPQR",
        &[
            ('A', 'B', 4),
            ('B', 'C', 6),
            ('C', 'E', 40),
            ('E', 'D', 30),
            ('D', 'B', 20),
            ('A', 'F', 3),
            ('F', 'H', 1),
            ('F', 'I', 20),
            ('A', 'G', 2),
            ('G', 'J', 2),
            ('A', 'K', 1),
            ('K', 'L', 1),
            ('L', 'M', 2),
            ('M', 'P', 1),
            ('P', 'Q', 50),
            ('K', 'R', 2),
            ('R', 'P', 2),
            ('K', 'N', 3),
            ('N', 'L', 4),
            ('N', 'R', 2),
            ('N', 'O', 1),
            ('O', 'L', 3),
            ('O', 'R', 2),
            ('O', 'M', 3),
            ('O', 'P', 2),
            ('P', 'E', 44),
        ],
    )
}

/// 以整数为顶点的随机图，用于性质测试
pub fn random_graph(
    rng: &mut impl rand::Rng,
    vertex_count: u32,
    edge_count: usize,
    max_weight: i32,
    undirected: bool,
) -> Graph<u32> {
    let vertices: Vec<Vertex<u32>> = (0..vertex_count).map(Vertex::new).collect();
    let mut edges = Vec::with_capacity(edge_count * 2);
    for _ in 0..edge_count {
        let u = rng.gen_range(0..vertex_count);
        let w = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(0..=max_weight);
        edges.push(Edge::new(Vertex::new(u), Vertex::new(w), weight));
        if undirected {
            edges.push(Edge::new(Vertex::new(w), Vertex::new(u), weight));
        }
    }
    Graph::new(vertices, edges).expect("随机图应该合法")
}
