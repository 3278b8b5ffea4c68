//! 数组实现的二叉最小堆
//!
//! 堆内位置按 1 起始编号：根在位置 1，位置 `i` 的子节点为 `2i` 和 `2i + 1`。
//! 元素实际存放在 `data[i - 1]`，所有下标换算都集中在 `at`/`swap` 中。

use std::fmt;

/// 默认初始容量（含未使用的 0 号位置）
pub const INITIAL_CAPACITY: usize = 9;
/// 最小容量
pub const MIN_CAPACITY: usize = 2;

/// 二叉最小堆
#[derive(Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            data: Vec::with_capacity(capacity - 1),
            capacity,
        }
    }

    /// 自底向上建堆，Θ(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        let capacity = (2 * data.len()).max(MIN_CAPACITY);
        let mut heap = Self { data, capacity };
        for i in (1..=heap.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn add(&mut self, item: T) {
        if self.data.len() + 1 >= self.capacity {
            self.grow();
        }
        self.data.push(item);
        self.sift_up(self.data.len());
    }

    /// 弹出最小元素：根与最后一个元素交换，缩小堆后从根下沉
    pub fn remove_min(&mut self) -> Option<T> {
        let last = self.data.len();
        if last == 0 {
            return None;
        }
        self.swap(1, last);
        let min = self.data.pop();
        self.sift_down(1);
        min
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// 依次弹出所有元素，得到升序序列
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.remove_min() {
            sorted.push(item);
        }
        sorted
    }

    fn grow(&mut self) {
        self.capacity *= 2;
        self.data.reserve_exact(self.capacity - 1 - self.data.len());
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 1 && self.at(i) < self.at(i / 2) {
            self.swap(i, i / 2);
            i /= 2;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let size = self.data.len();
        while 2 * i <= size {
            let mut child = 2 * i;
            if child < size && self.at(child + 1) < self.at(child) {
                child += 1;
            }
            if self.at(i) <= self.at(child) {
                return;
            }
            self.swap(i, child);
            i = child;
        }
    }

    fn at(&self, position: usize) -> &T {
        &self.data[position - 1]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a - 1, b - 1);
    }
}

impl<T> MinHeap<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 清空元素，保留当前容量
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}
