//! 图数据结构
//!
//! 内存中的有向带权图。顶点按键唯一，存放在 `IndexMap` 中，
//! 下标即 `VertexId`，因此边可以用稳定的 ID 引用目标顶点。

use super::edge::Edge;
use super::vertex::{Vertex, VertexId, VertexKey};
use crate::types::Weight;
use indexmap::IndexMap;

/// 有向带权图
#[derive(Debug, Clone)]
pub struct Graph<K = String> {
    /// 键 -> 顶点（插入顺序即 ID）
    vertices: IndexMap<K, Vertex>,
    /// 边总数
    edge_count: usize,
}

impl<K: VertexKey> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey> Graph<K> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            edge_count: 0,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 键已存在时不做任何修改，返回已有顶点的 ID。
    pub fn add_vertex(&mut self, key: K) -> VertexId {
        if let Some(existing) = self.vertices.get_index_of(&key) {
            return VertexId::new(existing);
        }

        let (index, _) = self.vertices.insert_full(key, Vertex::new());
        tracing::trace!(vertex = index, "vertex added");
        VertexId::new(index)
    }

    /// 按键查找顶点
    pub fn find(&self, key: &K) -> Option<VertexId> {
        self.vertices.get_index_of(key).map(VertexId::new)
    }

    /// 是否包含该键
    pub fn contains(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get_index(id.index()).map(|(_, v)| v)
    }

    /// 获取顶点的键
    pub fn key(&self, id: VertexId) -> Option<&K> {
        self.vertices.get_index(id.index()).map(|(k, _)| k)
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 是否为空图
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 列出所有顶点
    ///
    /// 枚举顺序为“后插入者在前”，在同一个图实例中保持稳定。
    pub fn list_vertices(&self) -> Vec<VertexId> {
        (0..self.vertices.len()).rev().map(VertexId::new).collect()
    }

    /// 按枚举顺序列出所有顶点的键
    pub fn keys(&self) -> Vec<&K> {
        self.list_vertices()
            .into_iter()
            .filter_map(|id| self.key(id))
            .collect()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 任一端点不存在时静默丢弃，返回 `false`。平行边不去重。
    pub fn add_edge(&mut self, src: &K, dst: &K, weight: Weight) -> bool {
        let (src_id, dst_id) = match (self.find(src), self.find(dst)) {
            (Some(s), Some(d)) => (s, d),
            _ => {
                tracing::warn!(?src, ?dst, "edge dropped: endpoint does not exist");
                return false;
            }
        };

        if let Some((_, vertex)) = self.vertices.get_index_mut(src_id.index()) {
            vertex.push_edge(Edge::new(dst_id, weight));
            self.edge_count += 1;
            tracing::trace!(src = src_id.index(), dst = dst_id.index(), weight, "edge added");
            return true;
        }
        false
    }

    /// 获取顶点的所有出边
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        self.vertex(id).map(Vertex::edges).unwrap_or(&[])
    }

    /// 两个顶点之间第一条边的权重
    pub fn edge_weight(&self, src: VertexId, dst: VertexId) -> Option<Weight> {
        self.vertex(src)?.edge_to(dst).map(Edge::weight)
    }

    /// 两个顶点之间所有平行边中的最小权重
    pub fn min_edge_weight(&self, src: VertexId, dst: VertexId) -> Option<Weight> {
        self.edges(src)
            .iter()
            .filter(|e| e.dst() == dst)
            .map(Edge::weight)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ==================== 辅助 ====================

    /// 将顶点 ID 序列转换为键序列
    pub fn keys_of(&self, ids: &[VertexId]) -> Vec<K> {
        ids.iter().filter_map(|&id| self.key(id).cloned()).collect()
    }

    /// 顶点键的调试表示（用于错误信息）
    pub(crate) fn describe(key: &K) -> String {
        format!("{:?}", key)
    }
}
