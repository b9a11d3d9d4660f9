//! 算法公共类型

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, VertexKey};
use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<K> {
    /// 路径上的顶点键（起点在前）
    pub path: Vec<K>,
    /// 路径总权重
    pub cost: Weight,
}

impl<K> Route<K> {
    pub fn new(path: Vec<K>, cost: Weight) -> Self {
        Self { path, cost }
    }

    /// 路径经过的边数
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// 代价是否有限（终点可达）
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// 解析单个顶点键
pub(crate) fn resolve<K: VertexKey>(graph: &Graph<K>, key: &K) -> Result<VertexId> {
    graph
        .find(key)
        .ok_or_else(|| Error::VertexNotFound(Graph::describe(key)))
}

/// 解析起点和终点
pub(crate) fn resolve_pair<K: VertexKey>(
    graph: &Graph<K>,
    src: &K,
    dst: &K,
) -> Result<(VertexId, VertexId)> {
    match (graph.find(src), graph.find(dst)) {
        (Some(s), Some(d)) => Ok((s, d)),
        _ => Err(Error::VertexNotFound(format!(
            "{} -> {}",
            Graph::describe(src),
            Graph::describe(dst)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_hops_and_reachability() {
        let route = Route::new(vec!["A", "B", "C"], 2.0);
        assert_eq!(route.hops(), 2);
        assert!(route.is_reachable());

        let unreachable: Route<&str> = Route::new(vec!["A", "C"], f64::INFINITY);
        assert!(!unreachable.is_reachable());
    }

    #[test]
    fn test_route_json() {
        let route = Route::new(vec!["A".to_string(), "C".to_string()], 5.0);
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"path":["A","C"],"cost":5.0}"#);
    }

    #[test]
    fn test_resolve_pair_reports_missing() {
        let mut graph = Graph::new();
        graph.add_vertex("A");

        assert!(resolve_pair(&graph, &"A", &"A").is_ok());
        let err = resolve_pair(&graph, &"A", &"B").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("\"B\""));
    }
}
