//! 开放寻址哈希映射
//!
//! 线性探测 + 墓碑删除。槽位使用显式的三态枚举表示，
//! 删除只把槽位标记为墓碑，不做压缩，其他键的探测链因此保持完整。

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::core::error::{CollectionError, CollectionResult};
use crate::core::murmur::hash_key;

/// 默认初始容量
pub const INITIAL_CAPACITY: usize = 13;
/// 触发扩容的负载因子阈值
pub const MAX_LOAD_FACTOR: f64 = 0.67;
/// 最小槽位数
pub const MIN_CAPACITY: usize = 3;

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied(K, V),
}

impl<K, V> Slot<K, V> {
    fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied(k, v) => Some((k, v)),
            _ => None,
        }
    }
}

fn empty_table<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    (0..capacity).map(|_| Slot::Empty).collect()
}

fn home_index<Q: Hash + ?Sized>(key: &Q, capacity: usize) -> usize {
    (hash_key(key) % capacity as u64) as usize
}

fn missing_key() -> CollectionError {
    CollectionError::not_found("哈希表中不存在该键")
}

/// 开放寻址哈希映射
#[derive(Clone)]
pub struct HashMap<K, V> {
    table: Vec<Slot<K, V>>,
    size: usize,
}

impl<K: Hash + Eq, V> HashMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// 创建指定槽位数的映射，不足 [`MIN_CAPACITY`] 时按最小值处理
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: empty_table(capacity.max(MIN_CAPACITY)),
            size: 0,
        }
    }

    /// 插入或替换键值对，返回被替换的旧值
    ///
    /// 插入前若 `(size + 1) / capacity` 超过 [`MAX_LOAD_FACTOR`]，
    /// 先扩容到 `2 * capacity + 1`。新条目优先复用探测路径上的第一个墓碑。
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if (self.size + 1) as f64 / self.table.len() as f64 > MAX_LOAD_FACTOR {
            self.rehash(2 * self.table.len() + 1);
        }

        let capacity = self.table.len();
        let mut index = home_index(&key, capacity);
        let mut first_tombstone = None;
        let mut first_empty = None;

        for _ in 0..capacity {
            match &mut self.table[index] {
                Slot::Empty => {
                    first_empty = Some(index);
                    break;
                }
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Slot::Occupied(k, v) if *k == key => {
                    return Some(mem::replace(v, value));
                }
                Slot::Occupied(..) => {}
            }
            index = (index + 1) % capacity;
        }

        match first_tombstone.or(first_empty) {
            Some(target) => {
                self.table[target] = Slot::Occupied(key, value);
                self.size += 1;
                None
            }
            None => {
                // 负载因子低于 1 时不会走到这里
                self.rehash(2 * capacity + 1);
                self.put(key, value)
            }
        }
    }

    /// 删除键并返回其值，槽位留下墓碑
    pub fn remove<Q>(&mut self, key: &Q) -> CollectionResult<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key).ok_or_else(missing_key)?;
        match mem::replace(&mut self.table[index], Slot::Tombstone) {
            Slot::Occupied(_, value) => {
                self.size -= 1;
                Ok(value)
            }
            other => {
                self.table[index] = other;
                Err(missing_key())
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> CollectionResult<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index(key)
            .and_then(|index| self.table[index].entry())
            .map(|(_, v)| v)
            .ok_or_else(missing_key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> CollectionResult<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key).ok_or_else(missing_key)?;
        match &mut self.table[index] {
            Slot::Occupied(_, v) => Ok(v),
            _ => Err(missing_key()),
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index(key).is_some()
    }

    /// 将全部存活条目重新散列到 `length` 个槽位中
    pub fn resize_backing_table(&mut self, length: usize) -> CollectionResult<()> {
        if length == 0 || length < self.size {
            return Err(CollectionError::invalid_argument(format!(
                "新容量 {} 小于当前元素数量 {}",
                length, self.size
            )));
        }
        self.rehash(length);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.table = empty_table(self.table.len());
        self.size = 0;
    }

    /// 探测键所在槽位；遇到空槽或扫完整表即停止，墓碑被跳过
    fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.table.len();
        let mut index = home_index(key, capacity);
        for _ in 0..capacity {
            match &self.table[index] {
                Slot::Empty => return None,
                Slot::Occupied(k, _) if k.borrow() == key => return Some(index),
                _ => {}
            }
            index = (index + 1) % capacity;
        }
        None
    }

    fn rehash(&mut self, length: usize) {
        let old = mem::replace(&mut self.table, empty_table(length));
        for slot in old {
            if let Slot::Occupied(key, value) = slot {
                let mut index = home_index(&key, length);
                while !matches!(self.table[index], Slot::Empty) {
                    index = (index + 1) % length;
                }
                self.table[index] = Slot::Occupied(key, value);
            }
        }
    }
}

impl<K, V> HashMap<K, V> {
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// 当前槽位总数
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// 按物理槽位顺序遍历存活条目
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.table.iter(),
            remaining: self.size,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// 存活条目的借用迭代器
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.slots.by_ref().find_map(Slot::entry)?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// 存活条目的所有权迭代器
pub struct IntoIter<K, V> {
    slots: std::vec::IntoIter<Slot<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(|slot| match slot {
            Slot::Occupied(k, v) => Some((k, v)),
            _ => None,
        })
    }
}

impl<K, V> IntoIterator for HashMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.table.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a HashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for HashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// 结构相等：元素数量相同且存活键值对一致，与槽位布局无关
impl<K: Hash + Eq, V: PartialEq> PartialEq for HashMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |ov| ov == v))
    }
}

impl<K: Hash + Eq, V: Eq> Eq for HashMap<K, V> {}

/// 存活键哈希值的异或，与遍历顺序无关
impl<K: Hash, V> Hash for HashMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let code = self.keys().fold(0u64, |acc, k| acc ^ hash_key(k));
        state.write_u64(code);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for HashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for HashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        write!(f, "]")
    }
}
