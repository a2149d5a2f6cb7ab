//! 题量解析 - 业务能力层
//!
//! 按 (天数, 版本) 查表给出每个大题的题量，顺序与该天大题顺序一致。

use crate::error::ConfigError;
use crate::models::Tier;

/// 一天三个版本的题量表
struct TierTable {
    day: u8,
    concise: &'static [usize],
    complete: &'static [usize],
    enriched: &'static [usize],
}

impl TierTable {
    fn counts(&self, tier: Tier) -> &'static [usize] {
        match tier {
            Tier::Concise => self.concise,
            Tier::Complete => self.complete,
            Tier::Enriched => self.enriched,
        }
    }
}

#[rustfmt::skip]
static TIER_TABLES: [TierTable; 9] = [
    // 短语汉译英, 选词填空, 短语辨析(组), 完成句子
    TierTable { day: 2, concise: &[4, 4, 2, 3], complete: &[8, 8, 4, 6], enriched: &[20, 15, 5, 10] },
    // 句型判断, 转疑问句, 转否定句, be/do 填空, 句型转换
    TierTable { day: 3, concise: &[4, 4, 4, 4, 4], complete: &[8, 8, 8, 8, 8], enriched: &[15, 15, 15, 15, 15] },
    // 三单形式, 动词填空, 单项选择, 改错
    TierTable { day: 4, concise: &[4, 4, 3, 3], complete: &[8, 8, 6, 6], enriched: &[12, 12, 10, 10] },
    // 现在分词, 进行时填空, 完成句子, 情景对话
    TierTable { day: 5, concise: &[4, 4, 3, 2], complete: &[8, 8, 6, 4], enriched: &[12, 12, 10, 6] },
    // 过去式, 动词填空, 单项选择, 改写句子
    TierTable { day: 6, concise: &[5, 4, 3, 3], complete: &[10, 8, 6, 6], enriched: &[15, 12, 10, 10] },
    // be going to, will, 改写句子, 情景对话
    TierTable { day: 7, concise: &[3, 3, 3, 2], complete: &[6, 6, 6, 3], enriched: &[10, 10, 10, 5] },
    // 名词复数, 代词填空, 单项选择, 改错
    TierTable { day: 8, concise: &[5, 4, 3, 2], complete: &[10, 8, 6, 5], enriched: &[15, 12, 10, 8] },
    // in/on/at, 英汉配对, 单项选择, 完成句子
    TierTable { day: 9, concise: &[5, 4, 3, 3], complete: &[10, 6, 6, 6], enriched: &[15, 10, 10, 10] },
    // 判断正误(篇), 回答问题(篇), 补全对话
    TierTable { day: 10, concise: &[1, 1, 2], complete: &[2, 2, 3], enriched: &[3, 3, 4] },
];

/// 某天某版本的各大题题量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    day: u8,
    counts: &'static [usize],
}

impl SectionCounts {
    pub fn as_slice(&self) -> &'static [usize] {
        self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 按大题数量解构，长度不符时报错
    pub fn take<const N: usize>(&self) -> Result<[usize; N], ConfigError> {
        <[usize; N]>::try_from(self.counts).map_err(|_| ConfigError::SectionCountMismatch {
            day: self.day,
            expected: N,
            actual: self.counts.len(),
        })
    }
}

/// 按版本名称解析题量
pub fn resolve(day: u8, tier_name: &str) -> Result<SectionCounts, ConfigError> {
    let tier = Tier::from_label(tier_name)?;
    resolve_tier(day, tier)
}

/// 按版本解析题量
pub fn resolve_tier(day: u8, tier: Tier) -> Result<SectionCounts, ConfigError> {
    TIER_TABLES
        .iter()
        .find(|table| table.day == day)
        .map(|table| SectionCounts {
            day,
            counts: table.counts(tier),
        })
        .ok_or(ConfigError::UnknownDay { day })
}

/// 课程表中的所有天数（升序）
pub fn scheduled_days() -> impl Iterator<Item = u8> {
    TIER_TABLES.iter().map(|table| table.day)
}
