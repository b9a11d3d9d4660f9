//! 顶点定义

use super::edge::Edge;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// 顶点键
///
/// 任何可比较、可哈希的标签都可以作为顶点键，例如城市名或编号。
pub trait VertexKey: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexKey for T {}

/// 顶点 ID（图内稳定的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 顶点
///
/// 顶点独占自己的出边列表；键由所属的图保存。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// 出边（按插入顺序）
    edges: Vec<Edge>,
}

impl Vertex {
    /// 创建新顶点
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// 追加一条出边
    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// 获取所有出边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// 查找第一条指向 `dst` 的出边
    pub fn edge_to(&self, dst: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.dst() == dst)
    }
}
