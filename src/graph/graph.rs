//! 图数据结构
//!
//! 顶点注册表 + 邻接表/邻接矩阵双存储
//! 每次增删边同时更新两种表示：邻接表供遍历/最短路/MST 使用，
//! 邻接矩阵供 O(1) 边存在性检查和 Floyd 使用

use crate::error::{Error, Result};
use crate::graph::edge::AdjEdge;
use crate::graph::registry::VertexRegistry;
use crate::types::{GraphKind, Weight, INF};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 图
///
/// 不变式：
/// - 邻接矩阵始终为 n×n，对角线为 0，无边处为 [`INF`]
/// - 无向图满足 `adj_matrix[u][v] == adj_matrix[v][u]`
/// - `edge_count` 统计逻辑边（无向边只计一次）
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// 图类型
    kind: GraphKind,
    /// 顶点注册表
    registry: VertexRegistry<V>,
    /// 邻接表（主存储）
    adj_list: Vec<Vec<AdjEdge>>,
    /// 邻接矩阵（辅助存储）
    adj_matrix: Vec<Vec<Weight>>,
    /// 逻辑边数
    edge_count: usize,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建空图
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            registry: VertexRegistry::new(),
            adj_list: Vec::new(),
            adj_matrix: Vec::new(),
            edge_count: 0,
        }
    }

    /// 从初始顶点列表创建（重复标签只注册一次）
    pub fn with_vertices<I: IntoIterator<Item = V>>(vertices: I, kind: GraphKind) -> Self {
        let mut graph = Self::new(kind);
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，返回其索引（幂等，已存在返回原索引）
    ///
    /// 新顶点会同步扩容邻接表和邻接矩阵，新矩阵单元填 [`INF`]，对角线为 0
    pub fn add_vertex(&mut self, label: V) -> usize {
        let (idx, inserted) = self.registry.get_or_insert(label);
        if inserted {
            let n = self.registry.len();
            self.adj_list.push(Vec::new());
            for row in self.adj_matrix.iter_mut() {
                row.push(INF);
            }
            self.adj_matrix.push(vec![INF; n]);
            self.adj_matrix[n - 1][n - 1] = 0;
            debug!(index = idx, "新增顶点");
        }
        idx
    }

    /// 查找标签对应的索引
    pub fn index_of(&self, label: &V) -> Option<usize> {
        self.registry.index_of(label)
    }

    /// 查找索引对应的标签
    pub fn label_at(&self, index: usize) -> Option<&V> {
        self.registry.label_at(index)
    }

    /// 是否包含顶点
    pub fn contains_vertex(&self, label: &V) -> bool {
        self.registry.contains(label)
    }

    /// 按索引顺序迭代顶点标签
    pub fn labels(&self) -> impl Iterator<Item = &V> {
        self.registry.iter()
    }

    // ==================== 边操作 ====================

    /// 添加边 from -> to（无向图自动添加反向条目）
    ///
    /// 顶点不存在、自环、边已存在均报错且不改变图
    pub fn add_edge(&mut self, from: &V, to: &V, weight: Weight) -> Result<()> {
        let u = self
            .index_of(from)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", from)))?;
        let v = self
            .index_of(to)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", to)))?;
        if u == v {
            return Err(Error::SelfLoop(format!("{:?}", from)));
        }
        // 通过矩阵哨兵检测重复边
        if self.adj_matrix[u][v] != INF {
            return Err(Error::EdgeAlreadyExists(
                format!("{:?}", from),
                format!("{:?}", to),
            ));
        }

        // 更新邻接表
        self.adj_list[u].push(AdjEdge::new(v, weight));
        if self.kind.is_undirected() {
            self.adj_list[v].push(AdjEdge::new(u, weight));
        }

        // 更新邻接矩阵
        self.adj_matrix[u][v] = weight;
        if self.kind.is_undirected() {
            self.adj_matrix[v][u] = weight;
        }

        self.edge_count += 1;
        debug!(from = u, to = v, weight, "新增边");
        Ok(())
    }

    /// 删除边 from -> to（无向图同时删除反向条目）
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<()> {
        let u = self
            .index_of(from)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", from)))?;
        let v = self
            .index_of(to)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", to)))?;
        if self.adj_matrix[u][v] == INF {
            return Err(Error::EdgeNotFound(
                format!("{:?}", from),
                format!("{:?}", to),
            ));
        }

        self.adj_list[u].retain(|e| e.to != v);
        self.adj_matrix[u][v] = INF;
        if self.kind.is_undirected() {
            self.adj_list[v].retain(|e| e.to != u);
            self.adj_matrix[v][u] = INF;
        }

        self.edge_count -= 1;
        debug!(from = u, to = v, "删除边");
        Ok(())
    }

    /// 边是否存在（O(1)，矩阵查询）
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(u), Some(v)) => self.adj_matrix[u][v] != INF,
            _ => false,
        }
    }

    /// 查询边权重（无边返回 None）
    pub fn weight_between(&self, from: &V, to: &V) -> Option<Weight> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        let w = self.adj_matrix[u][v];
        (w != INF && u != v).then_some(w)
    }

    // ==================== 查询 ====================

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    /// 获取逻辑边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 获取图类型
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// 顶点的邻接条目（邻接表插入顺序）
    pub fn neighbors(&self, index: usize) -> &[AdjEdge] {
        &self.adj_list[index]
    }

    /// 邻接表只读视图
    pub fn adj_list(&self) -> &[Vec<AdjEdge>] {
        &self.adj_list
    }

    /// 邻接矩阵只读视图
    pub fn adj_matrix(&self) -> &[Vec<Weight>] {
        &self.adj_matrix
    }

    /// 清空图（保留图类型）
    pub fn clear(&mut self) {
        self.registry.clear();
        self.adj_list.clear();
        self.adj_matrix.clear();
        self.edge_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<&'static str> {
        let mut g = Graph::with_vertices(vec!["A", "B", "C", "D"], GraphKind::Undirected);
        g.add_edge(&"A", &"B", 1).unwrap();
        g.add_edge(&"B", &"C", 2).unwrap();
        g.add_edge(&"C", &"D", 3).unwrap();
        g.add_edge(&"A", &"D", 4).unwrap();
        g
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g: Graph<&str> = Graph::new(GraphKind::Undirected);
        assert_eq!(g.add_vertex("A"), 0);
        assert_eq!(g.add_vertex("B"), 1);
        assert_eq!(g.add_vertex("A"), 0);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_matrix_invariants_after_growth() {
        let g = diamond();
        let n = g.vertex_count();
        let m = g.adj_matrix();

        assert_eq!(m.len(), n);
        for (i, row) in m.iter().enumerate() {
            assert_eq!(row.len(), n);
            assert_eq!(row[i], 0);
        }
        // 无边处为 INF
        assert_eq!(m[0][2], INF);
        assert_eq!(m[2][0], INF);
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut g = diamond();
        let before = g.edge_count();

        let err = g.add_edge(&"A", &"B", 9).unwrap_err();
        assert!(matches!(err, Error::EdgeAlreadyExists(_, _)));
        // 状态未被改变
        assert_eq!(g.edge_count(), before);
        assert_eq!(g.weight_between(&"A", &"B"), Some(1));
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = diamond();
        assert!(matches!(
            g.add_edge(&"A", &"A", 1),
            Err(Error::SelfLoop(_))
        ));
    }

    #[test]
    fn test_unknown_vertex_rejected() {
        let mut g = diamond();
        assert!(matches!(
            g.add_edge(&"A", &"X", 1),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(
            g.remove_edge(&"X", &"A"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_undirected_symmetry() {
        let g = diamond();
        for u in g.labels() {
            for v in g.labels() {
                assert_eq!(g.weight_between(u, v), g.weight_between(v, u));
            }
        }
        // 邻接表双向条目
        let a = g.index_of(&"A").unwrap();
        let b = g.index_of(&"B").unwrap();
        assert!(g.neighbors(a).iter().any(|e| e.to == b && e.weight == 1));
        assert!(g.neighbors(b).iter().any(|e| e.to == a && e.weight == 1));
    }

    #[test]
    fn test_directed_one_way() {
        let mut g = Graph::with_vertices(vec!["A", "B"], GraphKind::Directed);
        g.add_edge(&"A", &"B", 5).unwrap();

        assert!(g.has_edge(&"A", &"B"));
        assert!(!g.has_edge(&"B", &"A"));
        // 反向可以再加一条独立的边
        g.add_edge(&"B", &"A", 7).unwrap();
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = diamond();
        g.remove_edge(&"B", &"C").unwrap();

        assert_eq!(g.edge_count(), 3);
        assert!(!g.has_edge(&"B", &"C"));
        assert!(!g.has_edge(&"C", &"B"));

        let err = g.remove_edge(&"B", &"C").unwrap_err();
        assert!(matches!(err, Error::EdgeNotFound(_, _)));

        // 删除后可重新添加
        g.add_edge(&"B", &"C", 8).unwrap();
        assert_eq!(g.weight_between(&"B", &"C"), Some(8));
    }

    #[test]
    fn test_clear() {
        let mut g = diamond();
        g.clear();

        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.kind(), GraphKind::Undirected);
        assert_eq!(g.adj_matrix().len(), 0);
    }
}
