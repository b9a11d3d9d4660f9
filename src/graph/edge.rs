//! 边定义

use crate::graph::vertex::VertexId;
use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 有向带权边
///
/// 边归源顶点所有，只通过 ID 引用目标顶点。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 目标顶点 ID
    dst: VertexId,
    /// 权重
    weight: Weight,
}

impl Edge {
    /// 创建新边
    pub fn new(dst: VertexId, weight: Weight) -> Self {
        Self { dst, weight }
    }

    /// 获取目标顶点 ID
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    /// 获取边的权重
    pub fn weight(&self) -> Weight {
        self.weight
    }
}
