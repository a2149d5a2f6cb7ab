//! 题目选取
//!
//! 题库只取前缀，保持原有顺序；唯一的随机排列（配对题选项）使用固定种子。

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// 配对题选项打乱使用的固定种子
pub const MATCHING_SEED: u64 = 42;

/// 取题库前 `count` 项；超出题库长度时取整个题库
pub fn take_prefix<T>(bank: &[T], count: usize) -> &[T] {
    if count > bank.len() {
        debug!("请求 {} 题，题库仅有 {} 题，取全部", count, bank.len());
    }
    &bank[..count.min(bank.len())]
}

/// 以固定种子打乱，返回新的排列
///
/// ChaCha8 的输出由算法固定，不随 rand 版本变化。
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);
    shuffled
}
