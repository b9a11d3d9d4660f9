//! 基础类型定义

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 边权重
///
/// 预期为非负数，但图本身不做校验。
pub type Weight = f64;

/// 不可达时的距离
pub const INFINITY: Weight = f64::INFINITY;

/// 具有全序的代价值（用于优先队列）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cost(pub Weight);

impl Cost {
    pub fn new(value: Weight) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Weight {
        self.0
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Weight> for Cost {
    fn from(value: Weight) -> Self {
        Self(value)
    }
}
