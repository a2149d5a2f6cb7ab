//! 第2天：词汇基础

use crate::content::day02::{COMPLETE, DISTINGUISH, FILL_BLANKS, PHRASES_TRANSLATE, WORD_BANK};
use crate::error::AppResult;
use crate::services::{take_prefix, SectionCounts};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{write_fill_in, write_guided_sentences};
use crate::workflow::worksheet::Worksheet;

pub struct VocabularyDay;

impl DayGenerator for VocabularyDay {
    fn day(&self) -> u8 {
        2
    }

    fn topic(&self) -> &'static str {
        "词汇基础"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【词汇基础】"
    }

    fn section_title(&self) -> &'static str {
        "短语与固定搭配专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [trans_count, fill_count, dist_count, comp_count] = counts.take()?;

        // 一、短语汉译英
        let mut section = sheet.section("一", "短语汉译英（根据中文写出英文短语）", "短语汉译英");
        for phrase in take_prefix(PHRASES_TRANSLATE, trans_count) {
            section.question(
                &format!("{} _______________________", phrase.prompt),
                phrase.answer,
                None,
            );
        }
        section.finish();

        // 二、选词填空（词库比题目多两个干扰项）
        let mut section = sheet.section(
            "二",
            "选词填空（从词库中选择正确短语填入句子）",
            "选词填空",
        );
        let words = take_prefix(WORD_BANK, fill_count + 2);
        section.note(&format!("词库：{}", words.join(", ")), true);
        section.blank();
        for item in take_prefix(FILL_BLANKS, fill_count) {
            section.question(item.prompt, item.answer, None);
        }
        section.finish();

        // 三、短语辨析，题号跨组连续
        let mut section = sheet.section("三", "短语辨析（选择正确的短语填空）", "短语辨析");
        for group in take_prefix(DISTINGUISH, dist_count) {
            section.note(&format!("【{}】", group.label), false);
            write_fill_in(&mut section, group.items);
        }
        section.finish();

        // 四、完成句子
        let mut section = sheet.section("四", "完成句子（根据中文提示完成英文句子）", "完成句子");
        write_guided_sentences(&mut section, take_prefix(COMPLETE, comp_count));
        section.finish();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Block;
    use crate::models::Tier;
    use crate::workflow::day_generator::generate_worksheet;

    #[test]
    fn test_word_bank_has_two_extra_words() {
        let done = generate_worksheet(&VocabularyDay, Tier::Concise).unwrap();
        let bank_line = done
            .document
            .blocks()
            .iter()
            .find_map(|b| match b {
                Block::Question { text, .. } if text.starts_with("词库：") => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            bank_line,
            "词库：look for, look after, get up, put on, turn off, at night"
        );
    }

    #[test]
    fn test_enriched_word_bank_is_clamped() {
        let done = generate_worksheet(&VocabularyDay, Tier::Enriched).unwrap();
        let bank_line = done
            .document
            .blocks()
            .iter()
            .find_map(|b| match b {
                Block::Question { text, .. } if text.starts_with("词库：") => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(bank_line.split(", ").count(), WORD_BANK.len());
    }

    #[test]
    fn test_distinguish_groups_share_numbering() {
        let done = generate_worksheet(&VocabularyDay, Tier::Concise).unwrap();
        // 简洁版取前两组：3 + 2 题
        assert_eq!(
            done.answer_key.get("三、短语辨析").unwrap(),
            [
                "1. look at",
                "2. looking for",
                "3. look after",
                "4. Put on",
                "5. take off"
            ]
        );
    }

    #[test]
    fn test_complete_sentence_has_two_lines() {
        let done = generate_worksheet(&VocabularyDay, Tier::Concise).unwrap();
        let texts: Vec<_> = done
            .document
            .blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Question { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        let first = texts.iter().position(|t| *t == "1. 我每天早上六点半起床。").unwrap();
        assert_eq!(texts[first + 1], "   I _______ _______ at 6:30 every morning.");
    }
}
