//! # English Exercise Generator
//!
//! 小学六年级英语分级练习题生成器：第2天到第10天，每天三个版本
//! （简洁版 / 完整版 / 充实版），共 27 份带参考答案的 .docx 文档。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 段落模型与 docx 渲染、写文件
//! - `WorksheetDocument` - 唯一接触 docx-rs 的类型
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 题量解析、题库取题、生成记录
//! - `tier_resolver` - (天数, 版本) → 各大题题量
//! - `selection` - 前缀取题与固定种子打乱
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 一份练习题的组装流程
//! - `Worksheet` / `SectionWriter` - 题目与答案同时写入
//! - `DayGenerator` - 每天一个实现，描述大题顺序与题型
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 全部天数 × 版本的批量生成
//! - `orchestrator/worksheet_processor` - 单份文档生成与保存
//!
//! 题库数据位于 `content/`，按天划分，只读。

pub mod config;
pub mod content;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::WorksheetDocument;
pub use models::{AnswerKey, Tier};
pub use orchestrator::{process_worksheet, App};
pub use workflow::{all_generators, generate_worksheet, DayGenerator, GeneratedWorksheet};
