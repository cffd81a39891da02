//! 通用类型定义
//!
//! 边权、无穷大哨兵值和图类型

use serde::{Deserialize, Serialize};

/// 边权重
pub type Weight = i64;

/// 无穷大哨兵值（表示无边）
///
/// 取 `i64::MAX / 2`，两个 INF 相加不会回绕
pub const INF: Weight = i64::MAX / 2;

/// 查询结果中的不可达哨兵值
///
/// 与内部的 [`INF`] 区分开，对外统一报告为 -1
pub const UNREACHABLE: Weight = -1;

/// 图类型（有向/无向）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    /// 无向图
    Undirected,
    /// 有向图
    Directed,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }

    pub fn is_undirected(&self) -> bool {
        matches!(self, GraphKind::Undirected)
    }
}

impl Default for GraphKind {
    fn default() -> Self {
        GraphKind::Undirected
    }
}
