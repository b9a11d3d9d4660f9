//! WayGraph - 有向带权图引擎
//!
//! 支持增量构建的小型图引擎，提供：
//! - 最少跳数搜索（BFS）
//! - 最长代价简单路径（DFS）
//! - 单源最短路径（Dijkstra，枚举顺序与优先队列两种松弛顺序）
//! - 最优环游搜索（分支探索与全排列穷举）

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod logging;
pub mod render;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    BruteForceTour, HopSearch, LongestPathSearch, RelaxationOrder, Route, ShortestPath,
    TourResult, TourSearch,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexId, VertexKey};
pub use types::{Cost, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
