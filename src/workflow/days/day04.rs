//! 第4天：一般现在时

use crate::content::day04::{CHOICES, CORRECTIONS, THIRD_PERSON, VERB_FILL};
use crate::error::AppResult;
use crate::services::{take_prefix, SectionCounts};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{write_choices, write_corrections, write_fill_in, write_word_forms};
use crate::workflow::worksheet::Worksheet;

pub struct SimplePresentDay;

impl DayGenerator for SimplePresentDay {
    fn day(&self) -> u8 {
        4
    }

    fn topic(&self) -> &'static str {
        "一般现在时"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【一般现在时】"
    }

    fn section_title(&self) -> &'static str {
        "一般现在时专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [form_count, fill_count, choice_count, fix_count] = counts.take()?;

        let mut section = sheet.section("一", "写出下列动词的第三人称单数形式", "第三人称单数");
        write_word_forms(&mut section, take_prefix(THIRD_PERSON, form_count));
        section.finish();

        let mut section = sheet.section("二", "用括号内动词的适当形式填空", "动词填空");
        write_fill_in(&mut section, take_prefix(VERB_FILL, fill_count));
        section.finish();

        let mut section = sheet.section("三", "单项选择", "单项选择");
        write_choices(&mut section, take_prefix(CHOICES, choice_count));
        section.finish();

        let mut section = sheet.section("四", "改错（找出句中错误并改正）", "改错");
        write_corrections(&mut section, take_prefix(CORRECTIONS, fix_count));
        section.finish();

        Ok(())
    }
}
