//! 穷举环游搜索
//!
//! 枚举除起点外所有顶点的全排列并逐一计算环游代价。阶乘复杂度，
//! 只用作小规模输入上 [`TourSearch`](super::TourSearch) 的正确性与性能基准。

use super::common::resolve;
use super::tour::TourResult;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, VertexKey};
use crate::types::{Weight, INFINITY};
use std::time::Instant;

/// 穷举环游搜索
pub struct BruteForceTour<'g, K> {
    graph: &'g Graph<K>,
}

impl<'g, K: VertexKey> BruteForceTour<'g, K> {
    /// 创建搜索器
    pub fn new(graph: &'g Graph<K>) -> Self {
        Self { graph }
    }

    /// 枚举全部排列，返回从 `start` 出发的最小代价环游
    pub fn best_tour_bruteforce(&self, start: &K) -> Result<TourResult<K>> {
        let begin = Instant::now();
        let origin = resolve(self.graph, start)?;

        let rest: Vec<VertexId> = self
            .graph
            .list_vertices()
            .into_iter()
            .filter(|&id| id != origin)
            .collect();

        let mut order: Vec<usize> = (0..rest.len()).collect();
        let mut route = Vec::with_capacity(rest.len() + 2);
        let mut best_cost = INFINITY;
        let mut best_route = Vec::new();
        let mut explored = 0u64;

        loop {
            route.clear();
            route.push(origin);
            route.extend(order.iter().map(|&i| rest[i]));
            route.push(origin);

            explored += 1;
            let cost = self.route_cost(&route);
            if cost < best_cost {
                tracing::trace!(cost, explored, "better permutation");
                best_cost = cost;
                best_route = route.clone();
            }

            if !next_permutation(&mut order) {
                break;
            }
        }

        if best_cost.is_infinite() {
            tracing::debug!(?start, explored, "no tour exists");
            return Err(Error::NoPath(format!(
                "从 {} 出发不存在经过所有顶点的环",
                Graph::describe(start)
            )));
        }

        let elapsed_ms = begin.elapsed().as_millis() as u64;
        tracing::debug!(?start, cost = best_cost, explored, elapsed_ms, "exhaustive tour finished");

        Ok(TourResult {
            route: self.graph.keys_of(&best_route),
            cost: best_cost,
            explored,
            elapsed_ms,
        })
    }

    /// 闭合路线的总代价（平行边取最小权重）；任一段缺边则为无穷大
    fn route_cost(&self, route: &[VertexId]) -> Weight {
        let mut total = 0.0;
        for pair in route.windows(2) {
            match self.graph.min_edge_weight(pair[0], pair[1]) {
                Some(w) => total += w,
                None => return INFINITY,
            }
        }
        total
    }
}

/// 原地生成字典序的下一个排列，已是最后一个时返回 `false`
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::fixtures::{complete_four, random_complete};
    use crate::algorithm::TourSearch;

    #[test]
    fn test_next_permutation_count() {
        let mut items: Vec<usize> = (0..4).collect();
        let mut count = 1;
        while next_permutation(&mut items) {
            count += 1;
        }
        assert_eq!(count, 24);
        assert_eq!(items, vec![3, 2, 1, 0]);

        let mut empty: Vec<usize> = Vec::new();
        assert!(!next_permutation(&mut empty));
    }

    #[test]
    fn test_bruteforce_complete_four() {
        let graph = complete_four();
        let tour = BruteForceTour::new(&graph).best_tour_bruteforce(&"A").unwrap();

        assert_eq!(tour.cost, 12.0);
        assert_eq!(tour.route, vec!["A", "B", "D", "C", "A"]);
        assert_eq!(tour.explored, 6);
    }

    #[test]
    fn test_matches_exact_search_on_random_complete_graphs() {
        for (n, seed) in [(2, 1), (3, 2), (5, 3), (6, 4), (7, 5)] {
            let graph = random_complete(n, seed);
            let exact = TourSearch::new(&graph).best_tour(&0).unwrap();
            let brute = BruteForceTour::new(&graph).best_tour_bruteforce(&0).unwrap();

            assert_eq!(exact.cost, brute.cost, "n = {}, seed = {}", n, seed);
            assert_eq!(brute.route.len(), n + 1);
        }
    }

    #[test]
    fn test_missing_edge_disqualifies_route() {
        let mut graph = Graph::new();
        for key in ["A", "B", "C"] {
            graph.add_vertex(key);
        }
        graph.add_edge(&"A", &"B", 1.0);
        graph.add_edge(&"B", &"C", 1.0);
        graph.add_edge(&"C", &"A", 1.0);
        graph.add_edge(&"A", &"C", 1.0);

        let tour = BruteForceTour::new(&graph).best_tour_bruteforce(&"A").unwrap();
        assert_eq!(tour.cost, 3.0);
        assert_eq!(tour.route, vec!["A", "B", "C", "A"]);

        let mut open = Graph::new();
        for key in ["A", "B", "C"] {
            open.add_vertex(key);
        }
        open.add_edge(&"A", &"B", 1.0);
        let err = BruteForceTour::new(&open).best_tour_bruteforce(&"A").unwrap_err();
        assert!(err.is_no_path());
    }

    #[test]
    fn test_parallel_edges_match_exact_search() {
        let mut graph = complete_four();
        graph.add_edge(&"C", &"A", 0.5);
        graph.add_edge(&"B", &"D", 9.0);

        let exact = TourSearch::new(&graph).best_tour(&"A").unwrap();
        let brute = BruteForceTour::new(&graph).best_tour_bruteforce(&"A").unwrap();
        // A -> B -> D -> C -> A = 1 + 3 + 5 + 0.5
        assert_eq!(brute.cost, 9.5);
        assert_eq!(exact.cost, brute.cost);
        assert_eq!(brute.route, vec!["A", "B", "D", "C", "A"]);
    }

    #[test]
    fn test_missing_start() {
        let graph = complete_four();
        let err = BruteForceTour::new(&graph).best_tour_bruteforce(&"X").unwrap_err();
        assert!(err.is_not_found());
    }
}
