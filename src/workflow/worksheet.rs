//! 练习题组装上下文
//!
//! 持有一份文档及其参考答案。每个大题通过 [`SectionWriter`] 写入，
//! 题目行与答案在同一次调用中产生，保证一一对应。

use crate::infrastructure::WorksheetDocument;
use crate::models::{format_answer, AnswerKey};

/// 填写横线
pub const ANSWER_LINE: &str = "   _______________________________________";

/// 正在组装的练习题
pub struct Worksheet {
    document: WorksheetDocument,
    answer_key: AnswerKey,
}

/// 组装完成的练习题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWorksheet {
    pub document: WorksheetDocument,
    pub answer_key: AnswerKey,
}

impl Worksheet {
    /// 新建并写入标题、副标题
    pub fn new(title: &str, subtitle: &str) -> Self {
        let mut document = WorksheetDocument::new();
        document.add_title(title, subtitle);
        Self {
            document,
            answer_key: AnswerKey::new(),
        }
    }

    pub fn section_title(&mut self, text: &str) {
        self.document.add_section_title(text);
    }

    /// 开始一个大题
    ///
    /// # 参数
    /// - `ordinal`: 大题序号，如 "一"
    /// - `header`: 题目中显示的大题标题
    /// - `key_name`: 参考答案中的大题名称
    pub fn section(&mut self, ordinal: &str, header: &str, key_name: &str) -> SectionWriter<'_> {
        self.document.add_question_header(ordinal, header);
        SectionWriter {
            sheet: self,
            key_name: format!("{}、{}", ordinal, key_name),
            answers: Vec::new(),
        }
    }

    /// 写入参考答案并结束组装
    pub fn finish(mut self) -> GeneratedWorksheet {
        self.document.add_answer_key(&self.answer_key);
        GeneratedWorksheet {
            document: self.document,
            answer_key: self.answer_key,
        }
    }
}

/// 单个大题的写入器，题号在大题内从 1 开始
#[must_use = "调用 finish() 才会写入参考答案"]
pub struct SectionWriter<'a> {
    sheet: &'a mut Worksheet,
    key_name: String,
    answers: Vec<String>,
}

impl SectionWriter<'_> {
    /// 写入一道带题号的题目并记录答案，返回题号
    pub fn question(&mut self, text: &str, answer: &str, rationale: Option<&str>) -> usize {
        let number = self.answers.len() + 1;
        self.sheet.document.add_numbered_question(number, text);
        self.answers.push(format_answer(number, answer, rationale));
        number
    }

    /// 题目的续行（缩进，无题号）
    pub fn follow_up(&mut self, text: &str) {
        self.sheet.document.add_question_line(text, true);
    }

    /// 说明行，如词库、短文、分组标题
    pub fn note(&mut self, text: &str, indented: bool) {
        self.sheet.document.add_question_line(text, indented);
    }

    pub fn blank(&mut self) {
        self.sheet.document.add_blank_line();
    }

    /// 已写入的题目数
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// 结束本大题，答案按顺序并入参考答案
    pub fn finish(self) {
        self.sheet.answer_key.push(self.key_name, self.answers);
    }
}
