//! 第7天：一般将来时

use crate::content::day07::{DIALOGUES, GOING_TO_FILL, TRANSFORM, WILL_COMPLETE};
use crate::error::AppResult;
use crate::services::{take_prefix, SectionCounts};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{
    write_dialogues, write_fill_in, write_guided_sentences, write_transforms,
};
use crate::workflow::worksheet::Worksheet;

pub struct SimpleFutureDay;

impl DayGenerator for SimpleFutureDay {
    fn day(&self) -> u8 {
        7
    }

    fn topic(&self) -> &'static str {
        "一般将来时"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【一般将来时】"
    }

    fn section_title(&self) -> &'static str {
        "一般将来时专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [going_count, will_count, trans_count, dialogue_count] = counts.take()?;

        let mut section = sheet.section("一", "用 be going to 填空", "be going to 填空");
        write_fill_in(&mut section, take_prefix(GOING_TO_FILL, going_count));
        section.finish();

        let mut section = sheet.section("二", "用 will 完成句子（根据中文提示）", "will 完成句子");
        write_guided_sentences(&mut section, take_prefix(WILL_COMPLETE, will_count));
        section.finish();

        let mut section = sheet.section("三", "按要求改写句子", "改写句子");
        write_transforms(&mut section, take_prefix(TRANSFORM, trans_count), "");
        section.finish();

        let mut section = sheet.section("四", "情景对话（补全对话）", "情景对话");
        write_dialogues(&mut section, take_prefix(DIALOGUES, dialogue_count));
        section.finish();

        Ok(())
    }
}
