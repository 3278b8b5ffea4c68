//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graphkit::{Edge, HashMap, HashSet, Vertex, INFINITY};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言遍历结果与按顺序排列的顶点名一致
pub fn assert_visit_order(actual: &[Vertex<char>], expected: &str) {
    let names: String = actual.iter().map(|v| *v.data()).collect();
    assert_eq!(names, expected, "遍历顺序不匹配");
}

/// 断言距离表与期望值一致
///
/// `expected` 中未列出的顶点必须为 INFINITY
pub fn assert_distances(actual: &HashMap<Vertex<char>, i32>, expected: &[(char, i32)]) {
    for (vertex, distance) in actual {
        let want = expected
            .iter()
            .find(|(name, _)| name == vertex.data())
            .map(|&(_, d)| d)
            .unwrap_or(INFINITY);
        assert_eq!(
            *distance,
            want,
            "顶点 {} 的距离不匹配: 期望 {}, 实际 {}",
            vertex,
            want,
            distance
        );
    }
}

/// 断言边集合的规模和总权重，并且每条边都双向存储
pub fn assert_spanning_edges(edges: &HashSet<Edge<char>>, count: usize, weight: i64) {
    assert_eq!(edges.len(), count, "边数量不匹配: {}", edges);
    let total: i64 = edges.iter().map(|e| i64::from(e.weight())).sum();
    assert_eq!(total, weight, "总权重不匹配: {}", edges);
    for edge in edges {
        assert!(edges.contains(&edge.reversed()), "缺少反向边: {}", edge);
    }
}
