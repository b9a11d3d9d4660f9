//! 深度优先最长代价路径
//!
//! 枚举起点到终点的所有简单路径（顶点不重复），记录总权重最大的一条。

use super::common::{resolve_pair, Route};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, VertexKey};
use crate::types::Weight;
use std::collections::HashSet;

/// 当前最优路径
struct Best {
    cost: Weight,
    path: Vec<VertexId>,
}

/// 最长路径查找器
pub struct LongestPathSearch<'g, K> {
    graph: &'g Graph<K>,
}

impl<'g, K: VertexKey> LongestPathSearch<'g, K> {
    /// 创建查找器
    pub fn new(graph: &'g Graph<K>) -> Self {
        Self { graph }
    }

    /// 从 `src` 到 `dst` 代价最大的简单路径
    ///
    /// 起点等于终点时返回代价 0、路径只含起点。
    pub fn longest_path(&self, src: &K, dst: &K) -> Result<Route<K>> {
        let (start, end) = resolve_pair(self.graph, src, dst)?;

        let mut visited = HashSet::new();
        let mut path = vec![start];
        let mut best = None;

        self.dfs(start, end, 0.0, &mut visited, &mut path, &mut best);

        match best {
            Some(Best { cost, path }) => {
                tracing::debug!(?src, ?dst, cost, hops = path.len() - 1, "longest path found");
                Ok(Route::new(self.graph.keys_of(&path), cost))
            }
            None => Err(Error::NoPath(format!(
                "{} -> {}",
                Graph::describe(src),
                Graph::describe(dst)
            ))),
        }
    }

    fn dfs(
        &self,
        current: VertexId,
        end: VertexId,
        cost: Weight,
        visited: &mut HashSet<VertexId>,
        path: &mut Vec<VertexId>,
        best: &mut Option<Best>,
    ) {
        if current == end {
            let improved = best.as_ref().map_or(true, |b| cost > b.cost);
            if improved {
                *best = Some(Best {
                    cost,
                    path: path.clone(),
                });
            }
            // 终点已在路径上，继续深入不会再回到终点
            return;
        }

        visited.insert(current);

        for edge in self.graph.edges(current) {
            let neighbor = edge.dst();
            if !visited.contains(&neighbor) {
                path.push(neighbor);
                self.dfs(neighbor, end, cost + edge.weight(), visited, path, best);
                path.pop();
            }
        }

        visited.remove(&current);
    }
}
