//! 最优环游搜索（精确分支探索）
//!
//! 从起点出发深度优先地探索所有简单路径，找到经过每个顶点恰好一次并回到起点的
//! 最小代价环。复杂度随顶点数指数增长。

use super::common::resolve;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, VertexKey};
use crate::types::{Weight, INFINITY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

/// 环游结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourResult<K> {
    /// 环游路线（起点同时出现在首尾）
    pub route: Vec<K>,
    /// 总代价
    pub cost: Weight,
    /// 探索的状态数（递归调用次数或评估的排列数）
    pub explored: u64,
    /// 耗时（毫秒）
    pub elapsed_ms: u64,
}

/// 搜索过程中的可变状态
struct TourState {
    visited: HashSet<VertexId>,
    path: Vec<VertexId>,
    best_cost: Weight,
    best_path: Vec<VertexId>,
    explored: u64,
}

/// 精确环游搜索
pub struct TourSearch<'g, K> {
    graph: &'g Graph<K>,
}

impl<'g, K: VertexKey> TourSearch<'g, K> {
    /// 创建搜索器
    pub fn new(graph: &'g Graph<K>) -> Self {
        Self { graph }
    }

    /// 从 `start` 出发的最小代价环游
    pub fn best_tour(&self, start: &K) -> Result<TourResult<K>> {
        let begin = Instant::now();
        let origin = resolve(self.graph, start)?;

        let mut state = TourState {
            visited: HashSet::with_capacity(self.graph.vertex_count()),
            path: vec![origin],
            best_cost: INFINITY,
            best_path: Vec::new(),
            explored: 0,
        };
        state.visited.insert(origin);

        self.explore(origin, origin, 0.0, &mut state);

        if state.best_cost.is_infinite() {
            tracing::debug!(?start, explored = state.explored, "no tour exists");
            return Err(Error::NoPath(format!(
                "从 {} 出发不存在经过所有顶点的环",
                Graph::describe(start)
            )));
        }

        let elapsed_ms = begin.elapsed().as_millis() as u64;
        tracing::debug!(
            ?start,
            cost = state.best_cost,
            explored = state.explored,
            elapsed_ms,
            "tour search finished"
        );

        Ok(TourResult {
            route: self.graph.keys_of(&state.best_path),
            cost: state.best_cost,
            explored: state.explored,
            elapsed_ms,
        })
    }

    fn explore(&self, origin: VertexId, current: VertexId, cost: Weight, state: &mut TourState) {
        state.explored += 1;

        if state.visited.len() == self.graph.vertex_count() {
            if let Some(back) = self.graph.min_edge_weight(current, origin) {
                let total = cost + back;
                if total < state.best_cost {
                    state.best_cost = total;
                    state.best_path = state.path.clone();
                    state.best_path.push(origin);
                }
            }
            return;
        }

        for edge in self.graph.edges(current) {
            let next = edge.dst();
            if state.visited.contains(&next) {
                continue;
            }

            state.visited.insert(next);
            state.path.push(next);
            self.explore(origin, next, cost + edge.weight(), state);
            state.path.pop();
            state.visited.remove(&next);
        }
    }
}
