//! 文档构建器 - 基础设施层
//!
//! 唯一直接接触 docx-rs 的模块。上层只追加语义块（[`Block`]），
//! 渲染时统一套用字体、字号、颜色、缩进和对齐规则。

use crate::error::{AppError, AppResult};
use crate::models::AnswerKey;
use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

const HEITI: &str = "黑体";
const SONGTI: &str = "宋体";
const RED: &str = "FF0000";
/// 0.3 英寸（单位 twip）
const BODY_INDENT: i32 = 432;
/// 参考答案标题
pub const ANSWER_KEY_HEADING: &str = "参考答案";

/// 文档中的一个语义块
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// 主标题
    Title(String),
    /// 副标题
    Subtitle(String),
    /// 空行
    Blank,
    /// 分节标题（加粗下划线）
    SectionTitle(String),
    /// 大题标题，如 "一、短语汉译英"
    QuestionHeader { ordinal: String, text: String },
    /// 题目行；`number` 为题号，说明行/续行为 `None`
    Question {
        text: String,
        indented: bool,
        number: Option<usize>,
    },
    /// 分页符
    PageBreak,
    /// "参考答案" 标题
    AnswerKeyHeading,
    /// 参考答案中的大题名称
    AnswerSection(String),
    /// 参考答案中的一条答案
    AnswerLine(String),
}

/// 练习题文档累加器
///
/// 所有操作只追加，不读取也不修改已写入的块。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorksheetDocument {
    blocks: Vec<Block>,
}

impl WorksheetDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的块
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// 主标题 + 副标题 + 空行
    pub fn add_title(&mut self, title: &str, subtitle: &str) {
        self.blocks.push(Block::Title(title.to_string()));
        self.blocks.push(Block::Subtitle(subtitle.to_string()));
        self.blocks.push(Block::Blank);
    }

    /// 分节标题
    pub fn add_section_title(&mut self, text: &str) {
        self.blocks.push(Block::SectionTitle(text.to_string()));
    }

    /// 大题标题，渲染为 `{ordinal}、{text}`
    pub fn add_question_header(&mut self, ordinal: &str, text: &str) {
        self.blocks.push(Block::QuestionHeader {
            ordinal: ordinal.to_string(),
            text: text.to_string(),
        });
    }

    /// 题目正文行（不带题号）
    pub fn add_question_line(&mut self, text: &str, indented: bool) {
        self.blocks.push(Block::Question {
            text: text.to_string(),
            indented,
            number: None,
        });
    }

    /// 带题号的题目行，渲染为 `{number}. {text}`
    pub fn add_numbered_question(&mut self, number: usize, text: &str) {
        self.blocks.push(Block::Question {
            text: format!("{}. {}", number, text),
            indented: true,
            number: Some(number),
        });
    }

    pub fn add_blank_line(&mut self) {
        self.blocks.push(Block::Blank);
    }

    /// 分页后写入参考答案
    pub fn add_answer_key(&mut self, answer_key: &AnswerKey) {
        self.blocks.push(Block::PageBreak);
        self.blocks.push(Block::AnswerKeyHeading);
        self.blocks.push(Block::Blank);

        for (section, answers) in answer_key.iter() {
            self.blocks.push(Block::AnswerSection(section.to_string()));
            for answer in answers {
                self.blocks.push(Block::AnswerLine(answer.clone()));
            }
        }
    }

    /// 渲染为 docx-rs 文档
    pub fn render(&self) -> Docx {
        self.blocks
            .iter()
            .fold(Docx::new(), |docx, block| docx.add_paragraph(render_block(block)))
    }

    /// 打包为 .docx 字节
    pub fn to_bytes(&self) -> AppResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.render()
            .build()
            .pack(&mut cursor)
            .map_err(AppError::pack_failed)?;
        Ok(cursor.into_inner())
    }

    /// 保存到文件（已存在则覆盖）
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let bytes = self.to_bytes()?;
        fs::write(path, &bytes).map_err(|e| AppError::write_failed(path.display().to_string(), e))?;
        debug!("写入 {} 字节: {}", bytes.len(), path.display());
        Ok(())
    }
}

fn render_block(block: &Block) -> Paragraph {
    match block {
        Block::Title(text) => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(styled_run(text, HEITI, 18).bold().color(RED)),
        Block::Subtitle(text) => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(styled_run(text, SONGTI, 14)),
        Block::Blank => Paragraph::new(),
        Block::SectionTitle(text) => {
            Paragraph::new().add_run(styled_run(text, HEITI, 14).bold().underline("single"))
        }
        Block::QuestionHeader { ordinal, text } => Paragraph::new()
            .add_run(styled_run(&format!("{}、{}", ordinal, text), SONGTI, 12).bold()),
        Block::Question { text, indented, .. } => {
            let paragraph = Paragraph::new().add_run(styled_run(text, SONGTI, 11));
            if *indented {
                paragraph.indent(Some(BODY_INDENT), None, None, None)
            } else {
                paragraph
            }
        }
        Block::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
        Block::AnswerKeyHeading => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(styled_run(ANSWER_KEY_HEADING, HEITI, 16).bold().color(RED)),
        Block::AnswerSection(text) => Paragraph::new().add_run(styled_run(text, SONGTI, 12).bold()),
        Block::AnswerLine(text) => Paragraph::new()
            .indent(Some(BODY_INDENT), None, None, None)
            .add_run(styled_run(text, SONGTI, 11)),
    }
}

/// 设置中英文字体与字号（docx 字号单位为半磅）
fn styled_run(text: &str, font: &str, point_size: usize) -> Run {
    Run::new()
        .add_text(text)
        .size(point_size * 2)
        .fonts(RunFonts::new().ascii(font).hi_ansi(font).east_asia(font))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_block_order() {
        let mut doc = WorksheetDocument::new();
        doc.add_title("标题", "副标题");
        assert_eq!(
            doc.blocks(),
            [
                Block::Title("标题".to_string()),
                Block::Subtitle("副标题".to_string()),
                Block::Blank
            ]
        );
    }

    #[test]
    fn test_numbered_question_text() {
        let mut doc = WorksheetDocument::new();
        doc.add_numbered_question(3, "寻找 ____");
        doc.add_question_line("【look at / look for】", false);

        assert_eq!(
            doc.blocks()[0],
            Block::Question {
                text: "3. 寻找 ____".to_string(),
                indented: true,
                number: Some(3),
            }
        );
        assert!(matches!(
            doc.blocks()[1],
            Block::Question {
                indented: false,
                number: None,
                ..
            }
        ));
    }

    #[test]
    fn test_answer_key_starts_with_page_break() {
        let mut key = AnswerKey::new();
        key.push("一、短语汉译英", vec!["1. look for".to_string(), "2. look at".to_string()]);
        key.push("二、选词填空", vec!["1. looking for".to_string()]);

        let mut doc = WorksheetDocument::new();
        doc.add_section_title("短语与固定搭配专项练习");
        doc.add_answer_key(&key);

        assert_eq!(
            &doc.blocks()[1..],
            [
                Block::PageBreak,
                Block::AnswerKeyHeading,
                Block::Blank,
                Block::AnswerSection("一、短语汉译英".to_string()),
                Block::AnswerLine("1. look for".to_string()),
                Block::AnswerLine("2. look at".to_string()),
                Block::AnswerSection("二、选词填空".to_string()),
                Block::AnswerLine("1. looking for".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_bytes_is_zip_archive() {
        let mut doc = WorksheetDocument::new();
        doc.add_title("小学六年级英语练习题【词汇基础】", "（基础+提升）第2天 - 简洁版");
        doc.add_numbered_question(1, "寻找 _______________________");

        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("第2天_词汇基础_简洁版.docx");
        fs::write(&path, b"stale").unwrap();

        let mut doc = WorksheetDocument::new();
        doc.add_section_title("短语与固定搭配专项练习");
        doc.save(&path).unwrap();

        assert!(fs::read(&path).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("不存在").join("a.docx");

        let err = WorksheetDocument::new().save(&path).unwrap_err();
        assert!(matches!(err, AppError::File(_)));
    }
}
