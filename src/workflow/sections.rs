//! 大题的固定版式
//!
//! 版式按大题固定，不按题目变化。每个函数只负责写入已截取好的题目。

use crate::models::{ChoiceItem, CuedItem, DialogueItem, ExerciseItem, Passage};
use crate::workflow::worksheet::{SectionWriter, ANSWER_LINE};

/// 单行填空：`{n}. {prompt}`
pub fn write_fill_in(section: &mut SectionWriter<'_>, items: &[ExerciseItem]) {
    for item in items {
        section.question(item.prompt, item.answer, item.rationale);
    }
}

/// 单词变形：`{n}. {word} → ____________`
pub fn write_word_forms(section: &mut SectionWriter<'_>, items: &[ExerciseItem]) {
    for item in items {
        section.question(
            &format!("{} → ____________", item.prompt),
            item.answer,
            item.rationale,
        );
    }
}

/// 句子 + 答题横线
pub fn write_rewrite(section: &mut SectionWriter<'_>, items: &[ExerciseItem]) {
    for item in items {
        section.question(item.prompt, item.answer, item.rationale);
        section.follow_up(ANSWER_LINE);
    }
}

/// 单项选择：题干 + 选项行，答案为选项字母
pub fn write_choices(section: &mut SectionWriter<'_>, items: &[ChoiceItem]) {
    for item in items {
        let letter = item.answer_letter().to_string();
        section.question(item.stem, &letter, item.rationale);
        section.follow_up(&format!("   {}", item.options_line()));
    }
}

/// 改错：原句 + 错误/改正横线
pub fn write_corrections(section: &mut SectionWriter<'_>, items: &[ExerciseItem]) {
    for item in items {
        section.question(item.prompt, item.answer, item.rationale);
        section.follow_up("   错误：________  改正：________");
    }
}

/// 根据中文完成句子：中文一行，英文句子一行
pub fn write_guided_sentences(section: &mut SectionWriter<'_>, items: &[CuedItem]) {
    for item in items {
        section.question(item.cue, item.answer, None);
        section.follow_up(&format!("   {}", item.prompt));
    }
}

/// 按要求改写：`{n}. {sentence}（{prefix}{cue}）` + 答题横线
pub fn write_transforms(section: &mut SectionWriter<'_>, items: &[CuedItem], cue_prefix: &str) {
    for item in items {
        section.question(
            &format!("{}（{}{}）", item.prompt, cue_prefix, item.cue),
            item.answer,
            None,
        );
        section.follow_up(ANSWER_LINE);
    }
}

/// 情景对话：`{n}. 【场景】` + 对话各行
pub fn write_dialogues(section: &mut SectionWriter<'_>, items: &[DialogueItem]) {
    for item in items {
        section.question(&format!("【{}】", item.scene), item.answer, None);
        for line in item.lines {
            section.follow_up(&format!("   {}", line));
        }
    }
}

/// 阅读短文，判断正误；题号跨短文连续
pub fn write_true_false(section: &mut SectionWriter<'_>, passages: &[Passage]) {
    for passage in passages {
        write_passage_text(section, passage);
        for statement in passage.questions {
            section.question(
                &format!("{}  （    ）", statement.prompt),
                statement.answer,
                statement.rationale,
            );
        }
    }
}

/// 阅读短文，回答问题；题号跨短文连续
pub fn write_reading_questions(section: &mut SectionWriter<'_>, passages: &[Passage]) {
    for passage in passages {
        write_passage_text(section, passage);
        for question in passage.questions {
            section.question(question.prompt, question.answer, question.rationale);
            section.follow_up(ANSWER_LINE);
        }
    }
}

fn write_passage_text(section: &mut SectionWriter<'_>, passage: &Passage) {
    section.note(&format!("【{}】", passage.title), false);
    for line in passage.lines {
        section.note(line, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::day10;
    use crate::infrastructure::Block;
    use crate::workflow::worksheet::Worksheet;

    fn lines(sheet: Worksheet) -> Vec<String> {
        sheet
            .finish()
            .document
            .blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Question { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_choice_layout() {
        let items = [ChoiceItem::new(
            "He _______ to school every day.",
            ["go", "goes", "going"],
            1,
            "主语 He 是第三人称单数",
        )];
        let mut sheet = Worksheet::new("t", "s");
        let mut section = sheet.section("三", "单项选择", "单项选择");
        write_choices(&mut section, &items);
        section.finish();

        assert_eq!(
            lines(sheet),
            [
                "1. He _______ to school every day.",
                "   A. go    B. goes    C. going"
            ]
        );
    }

    #[test]
    fn test_true_false_numbering_spans_passages() {
        let mut sheet = Worksheet::new("t", "s");
        let mut section = sheet.section("一", "阅读短文，判断正(T)误(F)", "判断正误");
        write_true_false(&mut section, &day10::TRUE_FALSE[..2]);
        assert_eq!(section.len(), 8);
        section.finish();

        let done = sheet.finish();
        let answers = done.answer_key.get("一、判断正误").unwrap();
        assert!(answers[4].starts_with("5. F"));
        assert!(done
            .document
            .blocks()
            .contains(&Block::Question {
                text: "【Tom's School】".to_string(),
                indented: false,
                number: None,
            }));
    }

    #[test]
    fn test_transform_cue_prefix() {
        let items = [CuedItem::new("否定句", "She likes reading.", "She does not like reading.")];
        let mut sheet = Worksheet::new("t", "s");
        let mut section = sheet.section("五", "句型转换", "句型转换");
        write_transforms(&mut section, &items, "改为");
        section.finish();

        assert_eq!(lines(sheet)[0], "1. She likes reading.（改为否定句）");
    }
}
