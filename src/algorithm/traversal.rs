//! 遍历算法
//!
//! BFS 与递归/迭代两种 DFS，均产出访问顺序序列。
//! 邻接顶点统一按索引升序访问，保证遍历顺序稳定；
//! 迭代版 DFS 逆序入栈，与递归版产出相同序列

use crate::graph::Graph;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

/// 遍历器
pub struct Traverser<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> Traverser<'a, V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建遍历器
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    /// 邻接顶点按索引升序
    fn sorted_neighbors(&self, u: usize) -> Vec<usize> {
        let mut adj: Vec<usize> = self.graph.neighbors(u).iter().map(|e| e.to).collect();
        adj.sort_unstable();
        adj
    }

    /// BFS 访问器版本：对访问到的每个顶点调用一次 visit
    ///
    /// 起点未知时不调用 visit
    pub fn bfs_visit<F>(&self, start: &V, mut visit: F)
    where
        F: FnMut(&V),
    {
        let s = match self.graph.index_of(start) {
            Some(s) => s,
            None => return,
        };

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut queue = VecDeque::new();
        visited[s] = true;
        queue.push_back(s);

        while let Some(u) = queue.pop_front() {
            if let Some(label) = self.graph.label_at(u) {
                visit(label);
            }
            for v in self.sorted_neighbors(u) {
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }

    /// BFS 遍历序列（起点未知返回空序列）
    pub fn bfs(&self, start: &V) -> Vec<V> {
        let mut result = Vec::new();
        self.bfs_visit(start, |v| result.push(v.clone()));
        result
    }

    /// DFS 访问器版本（递归先序）
    pub fn dfs_visit<F>(&self, start: &V, mut visit: F)
    where
        F: FnMut(&V),
    {
        let s = match self.graph.index_of(start) {
            Some(s) => s,
            None => return,
        };

        let mut visited = vec![false; self.graph.vertex_count()];
        self.dfs_inner(s, &mut visited, &mut visit);
    }

    fn dfs_inner<F>(&self, u: usize, visited: &mut [bool], visit: &mut F)
    where
        F: FnMut(&V),
    {
        visited[u] = true;
        if let Some(label) = self.graph.label_at(u) {
            visit(label);
        }
        for v in self.sorted_neighbors(u) {
            if !visited[v] {
                self.dfs_inner(v, visited, visit);
            }
        }
    }

    /// DFS 遍历序列，递归版（起点未知返回空序列）
    pub fn dfs_recursive(&self, start: &V) -> Vec<V> {
        let mut result = Vec::new();
        self.dfs_visit(start, |v| result.push(v.clone()));
        result
    }

    /// DFS 遍历序列，迭代版
    ///
    /// 逆序入栈，保证遍历顺序与递归版一致
    pub fn dfs_iterative(&self, start: &V) -> Vec<V> {
        let mut result = Vec::new();
        let s = match self.graph.index_of(start) {
            Some(s) => s,
            None => return result,
        };

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut stack = vec![s];
        visited[s] = true;

        while let Some(u) = stack.pop() {
            if let Some(label) = self.graph.label_at(u) {
                result.push(label.clone());
            }
            for v in self.sorted_neighbors(u).into_iter().rev() {
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        result
    }
}
