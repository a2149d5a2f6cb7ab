//! 题库数据结构
//!
//! 所有题库都是 `'static` 只读切片，程序启动即存在，从不修改。

/// 选择题选项字母
pub const OPTION_LETTERS: [char; 3] = ['A', 'B', 'C'];

/// 基本题目：题干 + 答案 + 可选解析
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseItem {
    pub prompt: &'static str,
    pub answer: &'static str,
    pub rationale: Option<&'static str>,
}

impl ExerciseItem {
    pub const fn new(prompt: &'static str, answer: &'static str) -> Self {
        Self {
            prompt,
            answer,
            rationale: None,
        }
    }

    pub const fn explained(
        prompt: &'static str,
        answer: &'static str,
        rationale: &'static str,
    ) -> Self {
        Self {
            prompt,
            answer,
            rationale: Some(rationale),
        }
    }
}

/// 带提示的题目，例如"中文提示 + 英文句子"或"原句 + 改写要求"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuedItem {
    pub cue: &'static str,
    pub prompt: &'static str,
    pub answer: &'static str,
}

impl CuedItem {
    pub const fn new(cue: &'static str, prompt: &'static str, answer: &'static str) -> Self {
        Self { cue, prompt, answer }
    }
}

/// 短语辨析组：一组易混短语及其例句
#[derive(Debug, Clone, Copy)]
pub struct PhraseGroup {
    pub label: &'static str,
    pub items: &'static [ExerciseItem],
}

/// 单项选择题（三个选项）
#[derive(Debug, Clone, Copy)]
pub struct ChoiceItem {
    pub stem: &'static str,
    pub options: [&'static str; 3],
    /// 正确选项下标（0 = A）
    pub correct: usize,
    pub rationale: Option<&'static str>,
}

impl ChoiceItem {
    pub const fn new(
        stem: &'static str,
        options: [&'static str; 3],
        correct: usize,
        rationale: &'static str,
    ) -> Self {
        Self {
            stem,
            options,
            correct,
            rationale: Some(rationale),
        }
    }

    /// 正确选项字母
    pub fn answer_letter(&self) -> char {
        OPTION_LETTERS[self.correct]
    }

    /// 选项行：`A. xx    B. xx    C. xx`
    pub fn options_line(&self) -> String {
        OPTION_LETTERS
            .iter()
            .zip(self.options.iter())
            .map(|(letter, option)| format!("{}. {}", letter, option))
            .collect::<Vec<_>>()
            .join("    ")
    }
}

/// 情景对话：多行对话中含空格，答案按空格顺序给出
#[derive(Debug, Clone, Copy)]
pub struct DialogueItem {
    pub scene: &'static str,
    pub lines: &'static [&'static str],
    pub answer: &'static str,
}

/// 阅读短文及其题目
#[derive(Debug, Clone, Copy)]
pub struct Passage {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    pub questions: &'static [ExerciseItem],
}

/// 配对题：左栏短语与右栏释义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPair {
    pub left: &'static str,
    pub right: &'static str,
}

impl MatchPair {
    pub const fn new(left: &'static str, right: &'static str) -> Self {
        Self { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_letter_and_options_line() {
        let item = ChoiceItem::new(
            "He _______ to school every day.",
            ["go", "goes", "going"],
            1,
            "第三人称单数",
        );
        assert_eq!(item.answer_letter(), 'B');
        assert_eq!(item.options_line(), "A. go    B. goes    C. going");
    }
}
