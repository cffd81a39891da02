//! 结果打印器
//!
//! 邻接矩阵/邻接表和各算法结果的表格化输出

use crate::algorithm::{BiconnectivityResult, MstResult};
use crate::graph::Graph;
use crate::types::{Weight, INF, UNREACHABLE};
use indexmap::IndexMap;
use prettytable::{format, row, Cell, Row, Table};
use std::fmt;
use std::hash::Hash;

/// 结果打印器
#[derive(Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    fn matrix_cell(w: Weight) -> String {
        if w == INF {
            "∞".to_string()
        } else {
            w.to_string()
        }
    }

    fn distance_cell(d: Weight) -> String {
        if d == UNREACHABLE {
            "不可达".to_string()
        } else {
            d.to_string()
        }
    }

    /// 邻接矩阵表格（无边处显示 ∞）
    pub fn adj_matrix<V>(&self, graph: &Graph<V>) -> String
    where
        V: Clone + Eq + Hash + fmt::Debug + fmt::Display,
    {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut header = vec![Cell::new("")];
        header.extend(graph.labels().map(|v| Cell::new(&v.to_string())));
        table.set_titles(Row::new(header));

        for (i, u) in graph.labels().enumerate() {
            let mut cells = vec![Cell::new(&u.to_string())];
            for w in &graph.adj_matrix()[i] {
                cells.push(Cell::new(&Self::matrix_cell(*w)));
            }
            table.add_row(Row::new(cells));
        }
        table.to_string()
    }

    /// 邻接表文本：A -> (B, 1) (C, 3)
    pub fn adj_list<V>(&self, graph: &Graph<V>) -> String
    where
        V: Clone + Eq + Hash + fmt::Debug + fmt::Display,
    {
        let mut output = String::new();
        for (i, u) in graph.labels().enumerate() {
            output.push_str(&format!("{} ->", u));
            for e in graph.neighbors(i) {
                if let Some(v) = graph.label_at(e.to) {
                    output.push_str(&format!(" ({}, {})", v, e.weight));
                }
            }
            output.push('\n');
        }
        output
    }

    /// 遍历序列：A -> B -> C
    pub fn traversal<V: fmt::Display>(&self, seq: &[V]) -> String {
        seq.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// 单源最短路径表
    pub fn distances<V: fmt::Display>(&self, start: &V, dist: &IndexMap<V, Weight>) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["终点", "距离"]);
        for (v, d) in dist {
            table.add_row(row![v.to_string(), Self::distance_cell(*d)]);
        }
        format!("从 {} 出发的最短路径:\n{}", start, table)
    }

    /// 多源最短路径矩阵
    pub fn all_pairs<V: fmt::Display>(
        &self,
        dist: &IndexMap<V, IndexMap<V, Weight>>,
    ) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut header = vec![Cell::new("")];
        header.extend(dist.keys().map(|v| Cell::new(&v.to_string())));
        table.set_titles(Row::new(header));

        for (u, targets) in dist {
            let mut cells = vec![Cell::new(&u.to_string())];
            for d in targets.values() {
                cells.push(Cell::new(&Self::distance_cell(*d)));
            }
            table.add_row(Row::new(cells));
        }
        table.to_string()
    }

    /// 最小生成树边表与总权重
    pub fn mst<V: fmt::Display>(&self, result: &MstResult<V>) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["边", "权重"]);
        for e in &result.edges {
            table.add_row(row![
                format!("{} - {}", e.from, e.to),
                e.weight.to_string()
            ]);
        }
        format!("{}总权重: {}\n", table, result.total_weight)
    }

    /// 关节点与双连通分量
    pub fn biconnectivity<V: fmt::Display>(&self, result: &BiconnectivityResult<V>) -> String {
        let mut output = String::new();
        output.push_str("关节点（割点）: ");
        if result.articulation_points.is_empty() {
            output.push_str("无");
        } else {
            let points: Vec<_> = result
                .articulation_points
                .iter()
                .map(|v| v.to_string())
                .collect();
            output.push_str(&points.join(" "));
        }
        output.push('\n');

        output.push_str("双连通分量:\n");
        for (i, component) in result.components.iter().enumerate() {
            let members: Vec<_> = component.iter().map(|v| v.to_string()).collect();
            output.push_str(&format!("  分量 {}: {}\n", i + 1, members.join(" ")));
        }
        output
    }

    /// 图统计信息
    pub fn stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphKind;

    #[test]
    fn test_adj_matrix_marks_missing_edges() {
        let mut g = Graph::with_vertices(vec!["A", "B", "C"], GraphKind::Undirected);
        g.add_edge(&"A", &"B", 5).unwrap();

        let p = Printer::new();
        let out = p.adj_matrix(&g);
        assert!(out.contains('∞'));
        assert!(out.contains('5'));
    }

    #[test]
    fn test_traversal_join() {
        let p = Printer::new();
        assert_eq!(p.traversal(&["A", "B", "C"]), "A -> B -> C");
        assert_eq!(p.traversal::<&str>(&[]), "");
    }

    #[test]
    fn test_adj_list_entries() {
        let mut g = Graph::with_vertices(vec!["A", "B"], GraphKind::Undirected);
        g.add_edge(&"A", &"B", 2).unwrap();

        let p = Printer::new();
        let out = p.adj_list(&g);
        assert!(out.contains("A -> (B, 2)"));
        assert!(out.contains("B -> (A, 2)"));
    }
}
