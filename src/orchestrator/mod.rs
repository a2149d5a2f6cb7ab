//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量生成器
//! - 管理应用生命周期（初始化、运行）
//! - 按天数和版本顺序调度，汇总统计
//!
//! ### `worksheet_processor` - 单份文档处理器
//! - 生成一份练习题并写入输出目录
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (全部天数 × 版本)
//!     ↓
//! worksheet_processor (单个 (天数, 版本))
//!     ↓
//! workflow::DayGenerator (题目内容)
//!     ↓
//! services (题量解析 / 取题)
//!     ↓
//! infrastructure (WorksheetDocument)
//! ```

pub mod batch_processor;
pub mod worksheet_processor;

pub use batch_processor::App;
pub use worksheet_processor::process_worksheet;
