//! 边定义
//!
//! 邻接表中的边条目，只存目标索引和权重

use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 邻接表边条目
///
/// 无向图中每条逻辑边会在两个端点各生成一个条目，权重相同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjEdge {
    /// 目标顶点索引
    pub to: usize,
    /// 边权重
    pub weight: Weight,
}

impl AdjEdge {
    pub fn new(to: usize, weight: Weight) -> Self {
        Self { to, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adj_edge() {
        let e = AdjEdge::new(3, 7);
        assert_eq!(e.to, 3);
        assert_eq!(e.weight, 7);
    }
}
