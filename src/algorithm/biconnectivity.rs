//! 关节点与双连通分量
//!
//! Tarjan 单趟 DFS：维护发现时间、low-link 和显式边栈。
//! 关节点判定：根顶点有 >= 2 个 DFS 子节点，或非根顶点 u
//! 存在子节点 v 满足 low[v] >= disc[u]。
//! 每次判定成立时弹栈到 (u, v) 树边为止，收集一个双连通分量；
//! 每个连通分量根的子树收尾后，栈中剩余边构成最后一个分量

use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 关节点与双连通分量结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiconnectivityResult<V> {
    /// 关节点（割点），按顶点索引顺序
    pub articulation_points: Vec<V>,
    /// 双连通分量，每个分量为一组顶点
    pub components: Vec<Vec<V>>,
}

/// Tarjan DFS 的共享状态
struct TarjanState {
    time: usize,
    disc: Vec<usize>,
    low: Vec<usize>,
    visited: Vec<bool>,
    is_articulation: Vec<bool>,
    edge_stack: Vec<(usize, usize)>,
    components: Vec<Vec<usize>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            time: 0,
            disc: vec![0; n],
            low: vec![0; n],
            visited: vec![false; n],
            is_articulation: vec![false; n],
            edge_stack: Vec::new(),
            components: Vec::new(),
        }
    }

    /// 弹栈到 (u, v) 树边为止，收集一个双连通分量
    ///
    /// v 为 None 时清空整个栈（连通分量根的收尾）
    fn extract_component(&mut self, u: usize, v: Option<usize>) {
        let mut component = BTreeSet::new();
        while let Some((a, b)) = self.edge_stack.pop() {
            component.insert(a);
            component.insert(b);
            if let Some(v) = v {
                if a == u && b == v {
                    break;
                }
            }
        }
        if !component.is_empty() {
            self.components.push(component.into_iter().collect());
        }
    }
}

/// 双连通性分析器
pub struct Biconnectivity<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> Biconnectivity<'a, V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建双连通性分析器
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    /// 查找关节点和双连通分量
    ///
    /// 只对无向图有意义，有向图或空图返回空结果。
    /// 逐个未访问顶点启动 DFS，自然处理非连通图
    pub fn find(&self) -> BiconnectivityResult<V> {
        let n = self.graph.vertex_count();
        if n == 0 || self.graph.kind().is_directed() {
            return BiconnectivityResult {
                articulation_points: Vec::new(),
                components: Vec::new(),
            };
        }

        let mut state = TarjanState::new(n);
        for i in 0..n {
            if !state.visited[i] {
                self.tarjan(i, None, &mut state);
                if !state.edge_stack.is_empty() {
                    state.extract_component(i, None);
                }
            }
        }

        debug!(
            articulation = state.is_articulation.iter().filter(|&&a| a).count(),
            components = state.components.len(),
            "双连通性分析完成"
        );

        let articulation_points = (0..n)
            .filter(|&i| state.is_articulation[i])
            .filter_map(|i| self.graph.label_at(i).cloned())
            .collect();
        let components = state
            .components
            .iter()
            .map(|c| {
                c.iter()
                    .filter_map(|&i| self.graph.label_at(i).cloned())
                    .collect()
            })
            .collect();

        BiconnectivityResult {
            articulation_points,
            components,
        }
    }

    fn tarjan(&self, u: usize, parent: Option<usize>, st: &mut TarjanState) {
        let mut children = 0;
        st.time += 1;
        st.disc[u] = st.time;
        st.low[u] = st.time;
        st.visited[u] = true;

        for e in self.graph.neighbors(u) {
            let v = e.to;
            if !st.visited[v] {
                children += 1;
                st.edge_stack.push((u, v));
                self.tarjan(v, Some(u), st);

                st.low[u] = st.low[u].min(st.low[v]);

                // 根顶点：DFS 子节点数 >= 2
                if parent.is_none() && children > 1 {
                    st.is_articulation[u] = true;
                    st.extract_component(u, Some(v));
                }
                // 非根顶点：low[v] >= disc[u]
                if parent.is_some() && st.low[v] >= st.disc[u] {
                    st.is_articulation[u] = true;
                    st.extract_component(u, Some(v));
                }
            } else if Some(v) != parent && st.disc[v] < st.low[u] {
                // 回边
                st.low[u] = st.disc[v];
                st.edge_stack.push((u, v));
            }
        }
    }
}
