//! MurmurHash2 哈希模块
//!
//! 为开放寻址哈希表提供确定性的键哈希：同一个键在任何表、任何进程中
//! 都得到相同的哈希值。

use std::hash::{BuildHasher, Hash, Hasher};

const M: u32 = 0x5bd1e995;
const R: u32 = 24;

/// 默认种子
pub const DEFAULT_SEED: u32 = 0;

/// 32 位 MurmurHash2，按小端序读取 4 字节块
pub fn murmurhash2(data: &[u8], seed: u32) -> u32 {
    let mut h: u32 = seed ^ (data.len() as u32);

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);
        h = h.wrapping_mul(M) ^ k;
    }

    let tail = chunks.remainder();
    if tail.len() >= 3 {
        h ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        h ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        h ^= tail[0] as u32;
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^ (h >> 15)
}

/// 基于 MurmurHash2 的 `Hasher`
///
/// 写入的字节先缓存，`finish` 时一次性计算。整数统一按小端序写入，
/// 保证跨平台结果一致。
#[derive(Debug, Clone)]
pub struct MurmurHasher {
    seed: u32,
    buffer: Vec<u8>,
}

impl MurmurHasher {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u32) -> Self {
        MurmurHasher {
            seed,
            buffer: Vec::with_capacity(16),
        }
    }
}

impl Default for MurmurHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for MurmurHasher {
    fn finish(&self) -> u64 {
        murmurhash2(&self.buffer, self.seed) as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn write_u8(&mut self, i: u8) {
        self.buffer.push(i);
    }

    fn write_u16(&mut self, i: u16) {
        self.buffer.extend_from_slice(&i.to_le_bytes());
    }

    fn write_u32(&mut self, i: u32) {
        self.buffer.extend_from_slice(&i.to_le_bytes());
    }

    fn write_u64(&mut self, i: u64) {
        self.buffer.extend_from_slice(&i.to_le_bytes());
    }

    fn write_usize(&mut self, i: usize) {
        // 固定写入 8 字节
        self.buffer.extend_from_slice(&(i as u64).to_le_bytes());
    }
}

/// `BuildHasher` for [`MurmurHasher`] with a fixed seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MurmurState {
    seed: u32,
}

impl MurmurState {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl Default for MurmurState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl BuildHasher for MurmurState {
    type Hasher = MurmurHasher;

    fn build_hasher(&self) -> MurmurHasher {
        MurmurHasher::with_seed(self.seed)
    }
}

/// 使用默认种子计算任意可哈希值的哈希
pub fn hash_key<K: Hash + ?Sized>(key: &K) -> u64 {
    MurmurState::default().hash_one(key)
}
