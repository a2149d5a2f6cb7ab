//! 第5天：现在进行时

use crate::content::day05::{COMPLETE, DIALOGUES, PRESENT_PARTICIPLES, PROGRESSIVE_FILL};
use crate::error::AppResult;
use crate::services::{take_prefix, SectionCounts};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{
    write_dialogues, write_fill_in, write_guided_sentences, write_word_forms,
};
use crate::workflow::worksheet::Worksheet;

pub struct PresentProgressiveDay;

impl DayGenerator for PresentProgressiveDay {
    fn day(&self) -> u8 {
        5
    }

    fn topic(&self) -> &'static str {
        "现在进行时"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【现在进行时】"
    }

    fn section_title(&self) -> &'static str {
        "现在进行时专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [form_count, fill_count, comp_count, dialogue_count] = counts.take()?;

        let mut section = sheet.section("一", "写出下列动词的现在分词", "现在分词");
        write_word_forms(&mut section, take_prefix(PRESENT_PARTICIPLES, form_count));
        section.finish();

        let mut section = sheet.section("二", "用现在进行时填空", "现在进行时填空");
        write_fill_in(&mut section, take_prefix(PROGRESSIVE_FILL, fill_count));
        section.finish();

        let mut section = sheet.section("三", "根据中文完成句子", "完成句子");
        write_guided_sentences(&mut section, take_prefix(COMPLETE, comp_count));
        section.finish();

        let mut section = sheet.section("四", "情景对话（补全对话）", "情景对话");
        write_dialogues(&mut section, take_prefix(DIALOGUES, dialogue_count));
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
    fn test_dialogue_block_is_one_numbered_question() {
        let done = generate_worksheet(&PresentProgressiveDay, Tier::Concise).unwrap();
        let blocks = done.document.blocks();
        let start = blocks
            .iter()
            .position(|b| matches!(b, Block::QuestionHeader { ordinal, .. } if ordinal == "四"))
            .unwrap();
        let end = blocks.iter().position(|b| *b == Block::PageBreak).unwrap();

        let dialogue = &blocks[start + 1..end];
        let numbered = dialogue
            .iter()
            .filter(|b| matches!(b, Block::Question { number: Some(_), .. }))
            .count();
        assert_eq!(numbered, 2);
        assert_eq!(dialogue.len(), 2 + DIALOGUES[0].lines.len() + DIALOGUES[1].lines.len());
        assert_eq!(done.answer_key.get("四、情景对话").unwrap()[1], "2. isn't, riding");
    }
}
