//! 单源最短路径
//!
//! 提供两种松弛顺序：
//! - `Enumeration`：按图的枚举顺序对全部顶点做一次松弛。只有当每个顶点都在其所有
//!   前驱定稿之后才被处理时结果才正确，例如枚举顺序恰好是拓扑序的 DAG。
//! - `Priority`：经典的优先队列 Dijkstra，非负权重下总是正确。

use super::common::{resolve_pair, Route};
use crate::error::Result;
use crate::graph::{Graph, VertexId, VertexKey};
use crate::types::{Cost, Weight, INFINITY};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// 松弛顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelaxationOrder {
    /// 按顶点枚举顺序单次遍历
    #[default]
    Enumeration,
    /// 每次取出暂定距离最小的顶点
    Priority,
}

/// 距离表和前驱表
struct Distances {
    dist: HashMap<VertexId, Weight>,
    prev: HashMap<VertexId, VertexId>,
}

impl Distances {
    fn new(graph_size: usize, source: VertexId) -> Self {
        let mut dist = HashMap::with_capacity(graph_size);
        dist.insert(source, 0.0);
        Self {
            dist,
            prev: HashMap::new(),
        }
    }

    fn get(&self, id: VertexId) -> Weight {
        self.dist.get(&id).copied().unwrap_or(INFINITY)
    }

    /// 尝试松弛 `from -> to`，成功时返回新距离
    fn relax(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Option<Weight> {
        let candidate = self.get(from) + weight;
        if candidate < self.get(to) {
            self.dist.insert(to, candidate);
            self.prev.insert(to, from);
            Some(candidate)
        } else {
            None
        }
    }
}

/// 最短路径计算器
pub struct ShortestPath<'g, K> {
    graph: &'g Graph<K>,
    order: RelaxationOrder,
}

impl<'g, K: VertexKey> ShortestPath<'g, K> {
    /// 创建计算器（默认按枚举顺序松弛）
    pub fn new(graph: &'g Graph<K>) -> Self {
        Self {
            graph,
            order: RelaxationOrder::default(),
        }
    }

    /// 设置松弛顺序
    pub fn with_order(mut self, order: RelaxationOrder) -> Self {
        self.order = order;
        self
    }

    /// 当前松弛顺序
    pub fn order(&self) -> RelaxationOrder {
        self.order
    }

    /// 从 `src` 到 `dst` 的最短路径
    ///
    /// 终点不可达时距离为无穷大，路径退化为 `[src, dst]`。
    pub fn shortest_path(&self, src: &K, dst: &K) -> Result<Route<K>> {
        let (start, end) = resolve_pair(self.graph, src, dst)?;

        let table = match self.order {
            RelaxationOrder::Enumeration => self.relax_in_enumeration_order(start),
            RelaxationOrder::Priority => self.relax_by_priority(start),
        };

        let path = reconstruct(&table, start, end);
        let cost = table.get(end);
        tracing::debug!(?src, ?dst, cost, order = ?self.order, "shortest path computed");

        Ok(Route::new(self.graph.keys_of(&path), cost))
    }

    /// 按枚举顺序处理工作表中的每个顶点，恰好一次
    fn relax_in_enumeration_order(&self, source: VertexId) -> Distances {
        let mut table = Distances::new(self.graph.vertex_count(), source);

        for current in self.graph.list_vertices() {
            for edge in self.graph.edges(current) {
                if let Some(d) = table.relax(current, edge.dst(), edge.weight()) {
                    tracing::trace!(from = current.index(), to = edge.dst().index(), d, "relaxed");
                }
            }
        }

        table
    }

    fn relax_by_priority(&self, source: VertexId) -> Distances {
        let mut table = Distances::new(self.graph.vertex_count(), source);
        let mut queue = PriorityQueue::new();
        queue.push(source, Reverse(Cost::new(0.0)));

        while let Some((current, Reverse(cost))) = queue.pop() {
            if cost.value() > table.get(current) {
                continue;
            }

            for edge in self.graph.edges(current) {
                if let Some(d) = table.relax(current, edge.dst(), edge.weight()) {
                    tracing::trace!(from = current.index(), to = edge.dst().index(), d, "relaxed");
                    queue.push_increase(edge.dst(), Reverse(Cost::new(d)));
                }
            }
        }

        table
    }
}

/// 沿前驱链从终点回溯到起点
fn reconstruct(table: &Distances, start: VertexId, end: VertexId) -> Vec<VertexId> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        match table.prev.get(&current) {
            Some(&prev) if !path.contains(&prev) => {
                path.push(prev);
                current = prev;
            }
            _ => {
                // 没有前驱链：路径退化为终点和起点
                path.push(start);
                break;
            }
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A -> B (1), B -> C (1), A -> C (5)，按给定顺序插入顶点
    fn abc(insert_order: [&'static str; 3]) -> Graph<&'static str> {
        let mut graph = Graph::new();
        for key in insert_order {
            graph.add_vertex(key);
        }
        graph.add_edge(&"A", &"B", 1.0);
        graph.add_edge(&"B", &"C", 1.0);
        graph.add_edge(&"A", &"C", 5.0);
        graph
    }

    #[test]
    fn test_enumeration_order_correct_on_topological_dag() {
        // 后插入者先枚举：插入 C, B, A 得到枚举顺序 A, B, C
        let graph = abc(["C", "B", "A"]);
        let route = ShortestPath::new(&graph).shortest_path(&"A", &"C").unwrap();

        assert_eq!(route.cost, 2.0);
        assert_eq!(route.path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_enumeration_order_known_limitation() {
        // 枚举顺序 C, B, A：处理 B 时它尚未被松弛，最终只找到直连边
        let graph = abc(["A", "B", "C"]);
        let route = ShortestPath::new(&graph).shortest_path(&"A", &"C").unwrap();

        assert_eq!(route.cost, 5.0);
        assert_eq!(route.path, vec!["A", "C"]);
    }

    #[test]
    fn test_priority_order_is_correct() {
        for order in [["A", "B", "C"], ["C", "B", "A"], ["B", "A", "C"]] {
            let graph = abc(order);
            let route = ShortestPath::new(&graph)
                .with_order(RelaxationOrder::Priority)
                .shortest_path(&"A", &"C")
                .unwrap();

            assert_eq!(route.cost, 2.0);
            assert_eq!(route.path, vec!["A", "B", "C"]);
        }
    }

    #[test]
    fn test_unreachable_degenerates() {
        let graph = abc(["C", "B", "A"]);

        for order in [RelaxationOrder::Enumeration, RelaxationOrder::Priority] {
            let route = ShortestPath::new(&graph)
                .with_order(order)
                .shortest_path(&"C", &"A")
                .unwrap();
            assert!(route.cost.is_infinite());
            assert!(!route.is_reachable());
            assert_eq!(route.path, vec!["C", "A"]);
        }
    }

    #[test]
    fn test_source_equals_destination() {
        let graph = abc(["A", "B", "C"]);
        let route = ShortestPath::new(&graph).shortest_path(&"B", &"B").unwrap();
        assert_eq!(route.cost, 0.0);
        assert_eq!(route.path, vec!["B"]);
    }

    #[test]
    fn test_missing_endpoint() {
        let graph = abc(["A", "B", "C"]);
        let err = ShortestPath::new(&graph).shortest_path(&"A", &"X").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_priority_on_larger_graph() {
        let mut graph = Graph::new();
        for key in 0..6 {
            graph.add_vertex(key);
        }
        let edges = [
            (0, 1, 7.0),
            (0, 2, 9.0),
            (0, 5, 14.0),
            (1, 2, 10.0),
            (1, 3, 15.0),
            (2, 3, 11.0),
            (2, 5, 2.0),
            (3, 4, 6.0),
            (5, 4, 9.0),
        ];
        for (a, b, w) in edges {
            graph.add_edge(&a, &b, w);
        }

        let route = ShortestPath::new(&graph)
            .with_order(RelaxationOrder::Priority)
            .shortest_path(&0, &4)
            .unwrap();
        assert_eq!(route.cost, 20.0);
        assert_eq!(route.path, vec![0, 2, 5, 4]);
    }
}
