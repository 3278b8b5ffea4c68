//! 开放寻址哈希集合
//!
//! 基于 [`HashMap<K, ()>`] 实现，探测、墓碑和扩容规则与映射完全一致

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::hash_map::{self, HashMap};
use crate::core::error::CollectionResult;

/// 开放寻址哈希集合
#[derive(Clone)]
pub struct HashSet<K> {
    map: HashMap<K, ()>,
}

impl<K: Hash + Eq> HashSet<K> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// 添加元素；已存在时不做任何修改并返回 `false`
    pub fn add(&mut self, key: K) -> bool {
        self.map.put(key, ()).is_none()
    }

    pub fn remove<Q>(&mut self, key: &Q) -> CollectionResult<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains(key)
    }

    pub fn resize_backing_table(&mut self, length: usize) -> CollectionResult<()> {
        self.map.resize_backing_table(length)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K> HashSet<K> {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// 按物理槽位顺序遍历
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.map.iter(),
        }
    }

    /// 收集为 `Vec`，顺序与 [`HashSet::iter`] 相同
    pub fn to_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<K: Hash + Eq> Default for HashSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, K> {
    inner: hash_map::Iter<'a, K, ()>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

pub struct IntoIter<K> {
    inner: hash_map::IntoIter<K, ()>,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<K> IntoIterator for HashSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, K> IntoIterator for &'a HashSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq> FromIterator<K> for HashSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Hash + Eq> Extend<K> for HashSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K: Hash + Eq> PartialEq for HashSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Hash + Eq> Eq for HashSet<K> {}

impl<K: Hash> Hash for HashSet<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<K: fmt::Debug> fmt::Debug for HashSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display> fmt::Display for HashSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, k) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", k)?;
        }
        write!(f, "]")
    }
}
