//! 第6天：一般过去时

use crate::content::day06::{CHOICES, PAST_FORMS, TRANSFORM, VERB_FILL};
use crate::error::AppResult;
use crate::services::{take_prefix, SectionCounts};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{write_choices, write_fill_in, write_transforms, write_word_forms};
use crate::workflow::worksheet::Worksheet;

pub struct SimplePastDay;

impl DayGenerator for SimplePastDay {
    fn day(&self) -> u8 {
        6
    }

    fn topic(&self) -> &'static str {
        "一般过去时"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【一般过去时】"
    }

    fn section_title(&self) -> &'static str {
        "一般过去时专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [form_count, fill_count, choice_count, trans_count] = counts.take()?;

        let mut section = sheet.section("一", "写出下列动词的过去式", "动词过去式");
        write_word_forms(&mut section, take_prefix(PAST_FORMS, form_count));
        section.finish();

        let mut section = sheet.section("二", "用所给动词的适当形式填空", "动词填空");
        write_fill_in(&mut section, take_prefix(VERB_FILL, fill_count));
        section.finish();

        let mut section = sheet.section("三", "单项选择", "单项选择");
        write_choices(&mut section, take_prefix(CHOICES, choice_count));
        section.finish();

        let mut section = sheet.section("四", "按要求改写句子", "改写句子");
        write_transforms(&mut section, take_prefix(TRANSFORM, trans_count), "");
        section.finish();

        Ok(())
    }
}
