//! 第10天：阅读理解

use crate::content::day10::{DIALOGUES, QUESTIONS, TRUE_FALSE};
use crate::error::AppResult;
use crate::services::{take_prefix, SectionCounts};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{write_dialogues, write_reading_questions, write_true_false};
use crate::workflow::worksheet::Worksheet;

pub struct ReadingDay;

impl DayGenerator for ReadingDay {
    fn day(&self) -> u8 {
        10
    }

    fn topic(&self) -> &'static str {
        "阅读理解"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【阅读理解】"
    }

    fn section_title(&self) -> &'static str {
        "阅读理解专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [tf_count, qa_count, dialogue_count] = counts.take()?;

        let mut section = sheet.section("一", "阅读短文，判断正(T)误(F)", "判断正误");
        write_true_false(&mut section, take_prefix(TRUE_FALSE, tf_count));
        section.finish();

        let mut section = sheet.section("二", "阅读短文，回答问题", "回答问题");
        write_reading_questions(&mut section, take_prefix(QUESTIONS, qa_count));
        section.finish();

        let mut section = sheet.section("三", "补全对话", "补全对话");
        write_dialogues(&mut section, take_prefix(DIALOGUES, dialogue_count));
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
    fn test_counts_are_passages_not_questions() {
        let done = generate_worksheet(&ReadingDay, Tier::Concise).unwrap();
        assert_eq!(
            done.answer_key.get("一、判断正误").unwrap().len(),
            TRUE_FALSE[0].questions.len()
        );
        assert_eq!(
            done.answer_key.get("二、回答问题").unwrap()[0],
            "1. He gets up at 6:30."
        );
    }
}
