//! AtlasGraph - 内存图结构与经典图算法库
//!
//! 提供邻接表/邻接矩阵双存储的图结构，支持：
//! - 遍历（BFS、递归/迭代 DFS）
//! - 最短路径（Dijkstra、Floyd-Warshall）
//! - 最小生成树（Prim、Kruskal）
//! - 关节点与双连通分量（Tarjan）

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    Biconnectivity, BiconnectivityResult, MinSpanningTree, MstEdge, MstResult, ShortestPaths,
    Traverser,
};
pub use error::{Error, Result};
pub use graph::{AdjEdge, Graph, VertexRegistry};
pub use types::{GraphKind, Weight, INF, UNREACHABLE};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
