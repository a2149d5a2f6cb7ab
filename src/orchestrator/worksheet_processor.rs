//! 单份文档处理器 - 编排层
//!
//! ## 职责
//!
//! 处理一个 (天数, 版本) 组合：生成内容、确定文件名、写入磁盘。

use crate::error::AppResult;
use crate::models::Tier;
use crate::workflow::{generate_worksheet, output_file_name, DayGenerator};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 生成并保存一份练习题
///
/// # 参数
/// - `generator`: 当天的生成器
/// - `tier`: 版本
/// - `output_dir`: 输出目录（需已存在）
///
/// # 返回
/// 返回写入的文件路径
pub fn process_worksheet(
    generator: &dyn DayGenerator,
    tier: Tier,
    output_dir: &Path,
) -> AppResult<PathBuf> {
    let worksheet = generate_worksheet(generator, tier)?;
    debug!(
        "第{}天 {}: {} 个段落, {} 条答案",
        generator.day(),
        tier,
        worksheet.document.blocks().len(),
        worksheet.answer_key.total_answers()
    );

    let path = output_dir.join(output_file_name(generator, tier));
    worksheet.document.save(&path)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::days::ReadingDay;

    #[test]
    fn test_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = process_worksheet(&ReadingDay, Tier::Complete, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "第10天_阅读理解_完整版.docx");
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_missing_directory_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = process_worksheet(&ReadingDay, Tier::Concise, &dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, crate::error::AppError::File(_)));
    }
}
