//! 第3天：句型基础

use crate::content::day03::{BE_DO_FILL, SENTENCE_JUDGE, TO_NEGATIVE, TO_QUESTION, TRANSFORM};
use crate::error::AppResult;
use crate::services::{take_prefix, SectionCounts};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{write_fill_in, write_rewrite, write_transforms};
use crate::workflow::worksheet::Worksheet;

pub struct SentencePatternDay;

impl DayGenerator for SentencePatternDay {
    fn day(&self) -> u8 {
        3
    }

    fn topic(&self) -> &'static str {
        "句型基础"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【句型基础】"
    }

    fn section_title(&self) -> &'static str {
        "陈述句、一般疑问句与否定句专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [judge_count, quest_count, neg_count, fill_count, trans_count] = counts.take()?;

        let mut section = sheet.section(
            "一",
            "句型判断（判断下列句子是\"主系表\"还是\"主谓宾\"结构）",
            "句型判断",
        );
        for item in take_prefix(SENTENCE_JUDGE, judge_count) {
            section.question(
                &format!("{}  （        ）", item.prompt),
                item.answer,
                item.rationale,
            );
        }
        section.finish();

        let mut section = sheet.section("二", "陈述句转一般疑问句", "陈述句转一般疑问句");
        write_rewrite(&mut section, take_prefix(TO_QUESTION, quest_count));
        section.finish();

        let mut section = sheet.section("三", "陈述句转否定句", "陈述句转否定句");
        write_rewrite(&mut section, take_prefix(TO_NEGATIVE, neg_count));
        section.finish();

        let mut section = sheet.section("四", "be动词与do/does选择填空", "be动词与do/does选择填空");
        write_fill_in(&mut section, take_prefix(BE_DO_FILL, fill_count));
        section.finish();

        let mut section = sheet.section(
            "五",
            "句型转换综合练习（按要求改写句子）",
            "句型转换综合练习",
        );
        write_transforms(&mut section, take_prefix(TRANSFORM, trans_count), "改为");
        section.finish();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tier;
    use crate::workflow::day_generator::generate_worksheet;

    #[test]
    fn test_section_names_in_order() {
        let done = generate_worksheet(&SentencePatternDay, Tier::Complete).unwrap();
        assert_eq!(
            done.answer_key.section_names(),
            [
                "一、句型判断",
                "二、陈述句转一般疑问句",
                "三、陈述句转否定句",
                "四、be动词与do/does选择填空",
                "五、句型转换综合练习"
            ]
        );
        assert!(done.answer_key.iter().all(|(_, answers)| answers.len() == 8));
    }

    #[test]
    fn test_answers_carry_rules() {
        let done = generate_worksheet(&SentencePatternDay, Tier::Concise).unwrap();
        assert_eq!(
            done.answer_key.get("二、陈述句转一般疑问句").unwrap()[3],
            "4. Does he like apples?（加 Does，动词变原形）"
        );
        // 句型转换的答案不带解析
        assert_eq!(
            done.answer_key.get("五、句型转换综合练习").unwrap()[0],
            "1. Is he a good boy?"
        );
    }
}
