//! 最小生成树算法
//!
//! Prim（key 数组逐点选入，O(V²)，适合稠密图）
//! Kruskal（边按权排序 + 并查集，适合稀疏图）
//!
//! 两者都只对顶点数 >= 2 的无向图有意义，其余情况返回空结果；
//! 不连通图的调用方通过 `edges.len() < n - 1` 识别

use crate::graph::Graph;
use crate::types::{Weight, INF};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 最小生成树中的一条边
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: Weight,
}

/// 最小生成树结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult<V> {
    /// 选中的边
    pub edges: Vec<MstEdge<V>>,
    /// 总权重
    pub total_weight: Weight,
}

impl<V> MstResult<V> {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// 是否为覆盖 n 个顶点的生成树
    pub fn spans(&self, vertex_count: usize) -> bool {
        vertex_count > 0 && self.edges.len() + 1 == vertex_count
    }
}

/// 并查集（路径压缩 + 按秩合并）
#[derive(Debug)]
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// 合并两个集合，已在同一集合返回 false
    fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        if self.rank[x_root] < self.rank[y_root] {
            self.parent[x_root] = y_root;
        } else {
            self.parent[y_root] = x_root;
            if self.rank[x_root] == self.rank[y_root] {
                self.rank[x_root] += 1;
            }
        }
        true
    }
}

/// 最小生成树计算器
pub struct MinSpanningTree<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> MinSpanningTree<'a, V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建最小生成树计算器
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    fn push_edge(&self, result: &mut MstResult<V>, u: usize, v: usize, weight: Weight) {
        if let (Some(from), Some(to)) = (self.graph.label_at(u), self.graph.label_at(v)) {
            result.edges.push(MstEdge {
                from: from.clone(),
                to: to.clone(),
                weight,
            });
            result.total_weight += weight;
        }
    }

    /// Prim 算法
    ///
    /// 固定从索引 0 的顶点开始；不连通图只覆盖起点所在分量
    pub fn prim(&self) -> MstResult<V> {
        let n = self.graph.vertex_count();
        let mut result = MstResult::empty();
        if n < 2 || self.graph.kind().is_directed() {
            return result;
        }

        let mut in_mst = vec![false; n];
        let mut key = vec![INF; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        key[0] = 0;

        for _ in 0..n {
            // 找未加入 MST 且 key 最小的顶点
            let mut u = None;
            for j in 0..n {
                if !in_mst[j] && u.map_or(true, |best: usize| key[j] < key[best]) {
                    u = Some(j);
                }
            }
            let u = match u {
                Some(u) => u,
                None => break,
            };
            // 剩余顶点均不可达，起点所在分量已覆盖完
            if key[u] == INF {
                break;
            }
            in_mst[u] = true;

            if let Some(p) = parent[u] {
                self.push_edge(&mut result, p, u, key[u]);
            }

            // 更新邻接顶点的 key 值
            for e in self.graph.neighbors(u) {
                if !in_mst[e.to] && e.weight < key[e.to] {
                    key[e.to] = e.weight;
                    parent[e.to] = Some(u);
                }
            }
        }

        debug!(edges = result.edges.len(), total = result.total_weight, "Prim 完成");
        result
    }

    /// Kruskal 算法
    pub fn kruskal(&self) -> MstResult<V> {
        let n = self.graph.vertex_count();
        let mut result = MstResult::empty();
        if n < 2 || self.graph.kind().is_directed() {
            return result;
        }

        // 每条无向边只收集一次（u < v 去重）
        let mut edges: Vec<(usize, usize, Weight)> = Vec::new();
        for (u, adj) in self.graph.adj_list().iter().enumerate() {
            for e in adj {
                if u < e.to {
                    edges.push((u, e.to, e.weight));
                }
            }
        }

        // 按权重升序
        edges.sort_by_key(|&(_, _, w)| w);

        let mut uf = UnionFind::new(n);
        for (u, v, w) in edges {
            if uf.union(u, v) {
                self.push_edge(&mut result, u, v, w);
                if result.edges.len() == n - 1 {
                    break;
                }
            }
        }

        debug!(edges = result.edges.len(), total = result.total_weight, "Kruskal 完成");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphKind;

    fn connected() -> Graph<&'static str> {
        let mut g = Graph::with_vertices(vec!["A", "B", "C", "D", "E"], GraphKind::Undirected);
        g.add_edge(&"A", &"B", 2).unwrap();
        g.add_edge(&"A", &"C", 3).unwrap();
        g.add_edge(&"B", &"C", 1).unwrap();
        g.add_edge(&"B", &"D", 4).unwrap();
        g.add_edge(&"C", &"D", 5).unwrap();
        g.add_edge(&"D", &"E", 6).unwrap();
        g
    }

    #[test]
    fn test_prim_known_tree() {
        let g = connected();
        let mst = MinSpanningTree::new(&g).prim();

        assert_eq!(mst.total_weight, 13); // B-C(1) + A-B(2) + B-D(4) + D-E(6)
        assert_eq!(mst.edges.len(), 4);
        assert!(mst.spans(g.vertex_count()));
    }

    #[test]
    fn test_kruskal_known_tree() {
        let g = connected();
        let mst = MinSpanningTree::new(&g).kruskal();

        assert_eq!(mst.total_weight, 13);
        assert_eq!(mst.edges.len(), 4);
        // 选边按权重升序
        let weights: Vec<_> = mst.edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![1, 2, 4, 6]);
    }

    #[test]
    fn test_prim_kruskal_equal_weight() {
        let g = connected();
        let mst = MinSpanningTree::new(&g);
        assert_eq!(mst.prim().total_weight, mst.kruskal().total_weight);
    }

    #[test]
    fn test_directed_graph_empty_result() {
        let mut g = Graph::with_vertices(vec!["A", "B"], GraphKind::Directed);
        g.add_edge(&"A", &"B", 1).unwrap();

        let mst = MinSpanningTree::new(&g);
        assert!(mst.prim().is_empty());
        assert!(mst.kruskal().is_empty());
    }

    #[test]
    fn test_too_small_graph_empty_result() {
        let g: Graph<&str> = Graph::with_vertices(vec!["A"], GraphKind::Undirected);
        let mst = MinSpanningTree::new(&g);
        assert!(mst.prim().is_empty());
        assert!(mst.kruskal().is_empty());
    }

    #[test]
    fn test_disconnected_graph_partial_cover() {
        // {A,B,C} 和 {D,E} 两个分量
        let mut g = Graph::with_vertices(vec!["A", "B", "C", "D", "E"], GraphKind::Undirected);
        g.add_edge(&"A", &"B", 1).unwrap();
        g.add_edge(&"B", &"C", 2).unwrap();
        g.add_edge(&"D", &"E", 3).unwrap();

        let mst = MinSpanningTree::new(&g);

        // Prim 只覆盖起点（索引 0）所在分量
        let prim = mst.prim();
        assert_eq!(prim.edges.len(), 2);
        assert_eq!(prim.total_weight, 3);
        assert!(!prim.spans(g.vertex_count()));

        // Kruskal 产出横跨所有分量的生成森林
        let kruskal = mst.kruskal();
        assert_eq!(kruskal.edges.len(), 3);
        assert!(!kruskal.spans(g.vertex_count()));
    }

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.find(0), uf.find(1));
        assert_ne!(uf.find(1), uf.find(2));
        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
    }
}
