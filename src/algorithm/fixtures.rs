//! 测试用图

use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 四个顶点的完全图，权重互不相同；从 A 出发的最优环为 A B D C A，代价 12
pub(crate) fn complete_four() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for key in ["A", "B", "C", "D"] {
        graph.add_vertex(key);
    }
    let edges = [
        ("A", "B", 1.0),
        ("B", "A", 2.0),
        ("A", "C", 15.0),
        ("C", "A", 3.0),
        ("A", "D", 6.0),
        ("D", "A", 4.0),
        ("B", "C", 7.0),
        ("C", "B", 8.0),
        ("B", "D", 3.0),
        ("D", "B", 9.0),
        ("C", "D", 12.0),
        ("D", "C", 5.0),
    ];
    for (a, b, w) in edges {
        graph.add_edge(&a, &b, w);
    }
    graph
}

/// 随机权重的完全有向图（无自环、无平行边）
pub(crate) fn random_complete(n: usize, seed: u64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for a in 0..n {
        for b in 0..n {
            if a != b {
                let w: u32 = rng.gen_range(1..100);
                graph.add_edge(&a, &b, w as f64);
            }
        }
    }
    graph
}
