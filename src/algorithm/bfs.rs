//! 广度优先最少跳数搜索
//!
//! 只关心边是否存在及其方向，忽略权重。

use super::common::resolve_pair;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexKey};
use std::collections::{HashSet, VecDeque};

/// 最少跳数查找器
pub struct HopSearch<'g, K> {
    graph: &'g Graph<K>,
}

impl<'g, K: VertexKey> HopSearch<'g, K> {
    /// 创建查找器
    pub fn new(graph: &'g Graph<K>) -> Self {
        Self { graph }
    }

    /// 从 `src` 到 `dst` 的最少边数
    ///
    /// 顶点在入队时标记为已访问，同一顶点不会以不同跳数重复入队。
    pub fn shortest_hop_count(&self, src: &K, dst: &K) -> Result<usize> {
        let (start, end) = resolve_pair(self.graph, src, dst)?;

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back((start, 0usize));

        while let Some((current, hops)) = queue.pop_front() {
            if current == end {
                tracing::debug!(?src, ?dst, hops, "hop search finished");
                return Ok(hops);
            }

            for edge in self.graph.edges(current) {
                let neighbor = edge.dst();
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, hops + 1));
                }
            }
        }

        tracing::debug!(?src, ?dst, visited = visited.len(), "hop search exhausted");
        Err(Error::NoPath(format!(
            "{} -> {}",
            Graph::describe(src),
            Graph::describe(dst)
        )))
    }
}
