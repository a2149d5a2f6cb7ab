//! 第9天：介词与短语搭配

use crate::content::day09::{CHOICES, COMPLETE, IN_ON_AT, MATCHING};
use crate::error::AppResult;
use crate::models::MatchPair;
use crate::services::{seeded_shuffle, take_prefix, SectionCounts, MATCHING_SEED};
use crate::workflow::day_generator::DayGenerator;
use crate::workflow::sections::{write_choices, write_fill_in, write_guided_sentences};
use crate::workflow::worksheet::{SectionWriter, Worksheet};

pub struct PrepositionDay;

impl DayGenerator for PrepositionDay {
    fn day(&self) -> u8 {
        9
    }

    fn topic(&self) -> &'static str {
        "介词与短语搭配"
    }

    fn title(&self) -> &'static str {
        "小学六年级英语练习题【介词与短语搭配】"
    }

    fn section_title(&self) -> &'static str {
        "介词与短语搭配专项练习"
    }

    fn write_sections(&self, counts: &SectionCounts, sheet: &mut Worksheet) -> AppResult<()> {
        let [prep_count, match_count, choice_count, comp_count] = counts.take()?;

        let mut section = sheet.section("一", "用 in / on / at 填空", "in / on / at 填空");
        write_fill_in(&mut section, take_prefix(IN_ON_AT, prep_count));
        section.finish();

        let mut section = sheet.section(
            "二",
            "英汉配对（为左栏短语选择正确的中文意思）",
            "英汉配对",
        );
        write_matching(&mut section, take_prefix(MATCHING, match_count));
        section.finish();

        let mut section = sheet.section("三", "单项选择", "单项选择");
        write_choices(&mut section, take_prefix(CHOICES, choice_count));
        section.finish();

        let mut section = sheet.section("四", "根据中文完成句子", "完成句子");
        write_guided_sentences(&mut section, take_prefix(COMPLETE, comp_count));
        section.finish();

        Ok(())
    }
}

/// 配对题选项字母，选项数不超过字母数
const MATCHING_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 配对题：中文意思按固定种子打乱后编字母，短语按原顺序出题
fn write_matching(section: &mut SectionWriter<'_>, pairs: &[MatchPair]) {
    let pairs = take_prefix(pairs, MATCHING_LETTERS.len());
    let options = seeded_shuffle(pairs, MATCHING_SEED);
    let letters = MATCHING_LETTERS.iter().copied().map(char::from);
    for (option, letter) in options.iter().zip(letters) {
        section.note(&format!("{}. {}", letter, option.right), true);
    }
    section.blank();

    for pair in pairs {
        let Some(letter) = options
            .iter()
            .position(|option| option == pair)
            .and_then(option_letter)
        else {
            continue;
        };
        section.question(
            &format!("{}  （    ）", pair.left),
            &letter.to_string(),
            Some(pair.right),
        );
    }
}

/// 选项字母：0 → A, 1 → B ...，超出 Z 返回 None
fn option_letter(idx: usize) -> Option<char> {
    MATCHING_LETTERS.get(idx).copied().map(char::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Block;
    use crate::models::Tier;
    use crate::workflow::day_generator::generate_worksheet;

    #[test]
    fn test_matching_answers_point_at_right_option() {
        let done = generate_worksheet(&PrepositionDay, Tier::Enriched).unwrap();
        let option_lines: Vec<String> = done
            .document
            .blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Question {
                    text,
                    number: None,
                    indented: true,
                } if text.len() > 3 && text.as_bytes()[1] == b'.' => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(option_lines.len(), MATCHING.len());

        let answers = done.answer_key.get("二、英汉配对").unwrap();
        for (answer, pair) in answers.iter().zip(MATCHING) {
            // 答案形如 "3. D（紧挨着）"
            let letter = answer.split(". ").nth(1).unwrap().chars().next().unwrap();
            let option = option_lines
                .iter()
                .find(|line| line.starts_with(letter))
                .unwrap();
            assert_eq!(option, &format!("{}. {}", letter, pair.right));
        }
    }

    #[test]
    fn test_matching_is_reproducible() {
        let first = generate_worksheet(&PrepositionDay, Tier::Complete).unwrap();
        let second = generate_worksheet(&PrepositionDay, Tier::Complete).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), Some('A'));
        assert_eq!(option_letter(9), Some('J'));
        assert_eq!(option_letter(25), Some('Z'));
        assert_eq!(option_letter(26), None);
        assert_eq!(option_letter(300), None);
    }

    #[test]
    fn test_matching_caps_options_at_alphabet() {
        let pairs: Vec<MatchPair> = (0..30)
            .map(|i| {
                let left: &'static str = Box::leak(format!("phrase {}", i).into_boxed_str());
                let right: &'static str = Box::leak(format!("意思{}", i).into_boxed_str());
                MatchPair::new(left, right)
            })
            .collect();
        let mut sheet = Worksheet::new("标题", "副标题");
        let mut section = sheet.section("二", "英汉配对", "英汉配对");
        write_matching(&mut section, &pairs);
        assert_eq!(section.len(), MATCHING_LETTERS.len());
        section.finish();

        let done = sheet.finish();
        let answers = done.answer_key.get("二、英汉配对").unwrap();
        assert_eq!(answers.len(), 26);
        for answer in answers {
            let letter = answer.split(". ").nth(1).unwrap().chars().next().unwrap();
            assert!(letter.is_ascii_uppercase(), "{}", answer);
        }
    }
}
