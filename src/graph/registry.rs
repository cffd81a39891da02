//! 顶点注册表
//!
//! 外部顶点标签到稠密整数索引的 1:1 映射，插入顺序即索引顺序

use indexmap::IndexSet;
use std::hash::Hash;

/// 顶点注册表
///
/// 索引从 0 开始连续分配，顶点只增不删
#[derive(Debug, Clone, Default)]
pub struct VertexRegistry<V> {
    labels: IndexSet<V>,
}

impl<V> VertexRegistry<V>
where
    V: Clone + Eq + Hash,
{
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            labels: IndexSet::new(),
        }
    }

    /// 从初始顶点列表创建（重复标签只注册一次）
    pub fn with_labels<I: IntoIterator<Item = V>>(labels: I) -> Self {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    /// 注册标签，返回其索引（已存在返回原索引）
    pub fn get_or_insert(&mut self, label: V) -> (usize, bool) {
        self.labels.insert_full(label)
    }

    /// 查找标签对应的索引
    pub fn index_of(&self, label: &V) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    /// 查找索引对应的标签
    pub fn label_at(&self, index: usize) -> Option<&V> {
        self.labels.get_index(index)
    }

    /// 是否包含标签
    pub fn contains(&self, label: &V) -> bool {
        self.labels.contains(label)
    }

    /// 按索引顺序迭代标签
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.labels.iter()
    }

    /// 顶点数量
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 清空注册表
    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_dense_indices() {
        let mut reg = VertexRegistry::new();

        assert_eq!(reg.get_or_insert("A"), (0, true));
        assert_eq!(reg.get_or_insert("B"), (1, true));
        // 重复注册返回原索引
        assert_eq!(reg.get_or_insert("A"), (0, false));

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.index_of(&"B"), Some(1));
        assert_eq!(reg.label_at(0), Some(&"A"));
        assert_eq!(reg.index_of(&"C"), None);
    }

    #[test]
    fn test_registry_with_labels_dedup() {
        let reg = VertexRegistry::with_labels(vec!["A", "B", "A", "C"]);

        assert_eq!(reg.len(), 3);
        assert_eq!(reg.index_of(&"C"), Some(2));
    }
}
