//! 并查集
//!
//! 父指针存放在开放寻址 [`HashMap`] 中。`find` 带路径压缩，
//! `union` 总是把第一个元素的根挂到第二个元素的根下，不使用按秩合并。

use std::hash::Hash;

use super::hash_map::HashMap;
use super::hash_set::HashSet;
use crate::core::error::CollectionResult;

#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    parents: HashMap<T, T>,
}

impl<T: Hash + Eq + Clone> DisjointSet<T> {
    /// 以给定元素为全集初始化，每个元素自成一个集合
    pub fn new<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut parents = HashMap::new();
        for element in elements {
            parents.put(element.clone(), element);
        }
        Self { parents }
    }

    pub fn from_set(elements: &HashSet<T>) -> Self {
        let mut parents = HashMap::with_capacity(elements.capacity());
        for element in elements {
            parents.put(element.clone(), element.clone());
        }
        Self { parents }
    }

    /// 查找元素所在集合的根，并把路径上的节点直接指向根
    ///
    /// 元素不在全集中时返回 `NotFound`。
    pub fn find(&mut self, element: &T) -> CollectionResult<T> {
        let mut root = self.parents.get(element)?.clone();
        loop {
            let parent = self.parents.get(&root)?;
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut current = element.clone();
        while current != root {
            let parent = self.parents.get_mut(&current)?;
            let next = std::mem::replace(parent, root.clone());
            current = next;
        }

        Ok(root)
    }

    /// 合并两个元素所在的集合：`a` 的根挂到 `b` 的根下
    pub fn union(&mut self, a: &T, b: &T) -> CollectionResult<()> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a != root_b {
            *self.parents.get_mut(&root_a)? = root_b;
        }
        Ok(())
    }

    pub fn same_set(&mut self, a: &T, b: &T) -> CollectionResult<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.parents.contains(element)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
