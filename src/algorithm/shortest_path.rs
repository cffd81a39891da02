//! 最短路径算法
//!
//! Dijkstra（单源，小根堆 + 过期条目剪枝）
//! Floyd-Warshall（多源，邻接矩阵副本上的动态规划）

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Weight, INF, UNREACHABLE};
use indexmap::IndexMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 最短路径计算器
pub struct ShortestPaths<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> ShortestPaths<'a, V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建最短路径计算器
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    fn label_str(&self, index: usize) -> String {
        self.graph
            .label_at(index)
            .map(|l| format!("{:?}", l))
            .unwrap_or_else(|| index.to_string())
    }

    /// Dijkstra 单源最短路径
    ///
    /// 起点未知返回空映射；不可达顶点报告为 [`UNREACHABLE`]（-1）。
    /// 图中存在负权边时报错，Dijkstra 对负权不成立
    pub fn dijkstra(&self, start: &V) -> Result<IndexMap<V, Weight>> {
        let mut dist = IndexMap::new();
        let s = match self.graph.index_of(start) {
            Some(s) => s,
            None => return Ok(dist),
        };

        for (u, edges) in self.graph.adj_list().iter().enumerate() {
            for e in edges {
                if e.weight < 0 {
                    return Err(Error::NegativeWeight(format!(
                        "{} -> {}",
                        self.label_str(u),
                        self.label_str(e.to)
                    )));
                }
            }
        }

        let n = self.graph.vertex_count();
        let mut distance = vec![INF; n];
        distance[s] = 0;

        // 小根堆，存 (当前距离, 顶点索引)
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, s)));

        while let Some(Reverse((d, u))) = heap.pop() {
            // 剪枝：过期条目，已有更短路径
            if d > distance[u] {
                continue;
            }
            for e in self.graph.neighbors(u) {
                let next = d + e.weight;
                if next < distance[e.to] {
                    distance[e.to] = next;
                    heap.push(Reverse((next, e.to)));
                }
            }
        }

        debug!(start = s, "Dijkstra 完成");

        // 转换为标签 -> 距离映射
        for (i, label) in self.graph.labels().enumerate() {
            let d = if distance[i] == INF {
                UNREACHABLE
            } else {
                distance[i]
            };
            dist.insert(label.clone(), d);
        }
        Ok(dist)
    }

    /// Floyd-Warshall 多源最短路径
    ///
    /// 支持负权边；不检测负环，存在负环时结果未定义。
    /// 不可达的顶点对报告为 [`UNREACHABLE`]（-1）
    pub fn floyd(&self) -> IndexMap<V, IndexMap<V, Weight>> {
        let n = self.graph.vertex_count();
        let mut dist: Vec<Vec<Weight>> = self.graph.adj_matrix().to_vec();

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    // 两个 INF 相加会回绕，先排除
                    if dist[i][k] != INF
                        && dist[k][j] != INF
                        && dist[i][k] + dist[k][j] < dist[i][j]
                    {
                        dist[i][j] = dist[i][k] + dist[k][j];
                    }
                }
            }
        }

        let mut map = IndexMap::new();
        for (i, u) in self.graph.labels().enumerate() {
            let mut row = IndexMap::new();
            for (j, v) in self.graph.labels().enumerate() {
                let d = if dist[i][j] == INF {
                    UNREACHABLE
                } else {
                    dist[i][j]
                };
                row.insert(v.clone(), d);
            }
            map.insert(u.clone(), row);
        }
        map
    }
}
