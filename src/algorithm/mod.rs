//! 图算法模块
//!
//! 遍历、最短路径、最小生成树与双连通性分析

mod biconnectivity;
mod mst;
mod shortest_path;
mod traversal;

pub use biconnectivity::{Biconnectivity, BiconnectivityResult};
pub use mst::{MinSpanningTree, MstEdge, MstResult};
pub use shortest_path::ShortestPaths;
pub use traversal::Traverser;
