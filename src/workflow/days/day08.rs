//! 第8天：名词与代词

use crate::content::day08::{CHOICES, CORRECTIONS, PLURALS, PRONOUN_FILL};
use crate::error::AppResult;
use crate::services::{take_prefix, SectionCounts};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{write_choices, write_corrections, write_fill_in, write_word_forms};
use crate::workflow::worksheet::Worksheet;

pub struct NounPronounDay;

impl DayGenerator for NounPronounDay {
    fn day(&self) -> u8 {
        8
    }

    fn topic(&self) -> &'static str {
        "名词与代词"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【名词与代词】"
    }

    fn section_title(&self) -> &'static str {
        "名词复数与代词专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [plural_count, pronoun_count, choice_count, fix_count] = counts.take()?;

        let mut section = sheet.section("一", "写出下列名词的复数形式", "名词复数");
        write_word_forms(&mut section, take_prefix(PLURALS, plural_count));
        section.finish();

        let mut section = sheet.section("二", "用括号内代词的适当形式填空", "代词填空");
        write_fill_in(&mut section, take_prefix(PRONOUN_FILL, pronoun_count));
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
