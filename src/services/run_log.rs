//! 生成记录写入服务 - 业务能力层
//!
//! 只负责把每份文档的生成结果追加到记录文件，不关心流程

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 生成记录
///
/// 职责：
/// - 启动时写入带时间戳的文件头
/// - 每份文档追加一行结果
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// 创建记录文件并写入文件头（覆盖旧记录）
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let header = format!(
            "{}\n练习题生成记录 - {}\n{}\n\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        fs::write(&path, header)
            .with_context(|| format!("无法创建生成记录: {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加一条记录
    ///
    /// # 参数
    /// - `day`: 天数
    /// - `tier`: 版本标签
    /// - `outcome`: 结果描述（输出路径或错误信息）
    pub fn record(&self, day: u8, tier: &str, outcome: &str) -> Result<()> {
        debug!("写入记录: 第{}天 | {} | {}", day, tier, outcome);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "第{}天 | {} | {}", day, tier, outcome)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_appended_after_header() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::create(dir.path().join("log.txt")).unwrap();
        log.record(2, "简洁版", "已生成").unwrap();
        log.record(3, "充实版", "失败").unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("练习题生成记录"));
        let lines: Vec<_> = content.lines().filter(|l| l.starts_with("第")).collect();
        assert_eq!(lines, ["第2天 | 简洁版 | 已生成", "第3天 | 充实版 | 失败"]);
    }
}
