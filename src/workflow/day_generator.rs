//! 每日练习题生成流程 - 流程层
//!
//! 流程顺序：
//! 1. 按 (天数, 版本) 解析各大题题量
//! 2. 写入标题、副标题、分节标题
//! 3. 按固定顺序写入每个大题（取题库前 N 题）
//! 4. 分页写入参考答案

use crate::error::AppResult;
use crate::models::Tier;
use crate::services::{tier_resolver, SectionCounts};
use crate::workflow::worksheet::{GeneratedWorksheet, Worksheet};
use tracing::debug;

/// 一天的练习题生成器
pub trait DayGenerator {
    /// 第几天
    fn day(&self) -> u8;

    /// 文件名中的主题，如 "词汇基础"
    fn topic(&self) -> &'static str;

    /// 文档主标题
    fn title(&self) -> &'static str;

    /// 分节标题
    fn section_title(&self) -> &'static str;

    /// 按题量写入全部大题
    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()>;
}

/// 生成一份 (天数, 版本) 练习题
pub fn generate_worksheet(
    generator: &dyn DayGenerator,
    tier: Tier,
) -> AppResult<GeneratedWorksheet> {
    let counts = tier_resolver::resolve_tier(generator.day(), tier)?;
    debug!("第{}天 {} 题量: {:?}", generator.day(), tier, counts.as_slice());

    let subtitle = format!("（基础+提升）第{}天 - {}", generator.day(), tier.label());
    let mut sheet = Worksheet::new(generator.title(), &subtitle);
    sheet.section_title(generator.section_title());

    generator.write_sections(&counts, &mut sheet)?;

    Ok(sheet.finish())
}

/// 输出文件名：`第{N}天_{主题}_{版本}.docx`
pub fn output_file_name(generator: &dyn DayGenerator, tier: Tier) -> String {
    format!("第{}天_{}_{}.docx", generator.day(), generator.topic(), tier.label())
}
