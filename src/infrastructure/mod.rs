//! 基础设施层：持有 docx 渲染与文件写入能力

pub mod document_builder;

pub use document_builder::{Block, WorksheetDocument};
