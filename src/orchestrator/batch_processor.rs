//! 批量生成器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责全部 (天数, 版本) 组合的调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建输出目录、生成记录文件
//! 2. **顺序生成**：第2天到第10天，每天依次生成三个版本
//! 3. **失败处理**：记录出错的天数和版本，按配置继续或停止
//! 4. **全局统计**：汇总成功和失败数量

use crate::config::Config;
use crate::error::AppError;
use crate::models::Tier;
use crate::orchestrator::worksheet_processor::process_worksheet;
use crate::services::RunLog;
use crate::utils::logging;
use crate::workflow::{all_generators, DayGenerator};
use anyhow::{bail, Result};
use std::fs;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    generators: Vec<Box<dyn DayGenerator>>,
    run_log: Option<RunLog>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.output_dir).map_err(|e| {
            AppError::create_dir_failed(config.output_dir.display().to_string(), e)
        })?;

        let run_log = config
            .output_log_file
            .as_ref()
            .map(|path| RunLog::create(path.clone()))
            .transpose()?;

        let generators = all_generators();
        logging::log_startup(&config, generators.len() * Tier::ALL.len());

        Ok(Self {
            config,
            generators,
            run_log,
        })
    }

    /// 运行应用主逻辑
    ///
    /// 有任何一份文档失败时返回错误，错误信息列出失败的组合
    pub fn run(&self) -> Result<()> {
        let mut stats = ProcessingStats {
            total: self.generators.len() * Tier::ALL.len(),
            ..Default::default()
        };

        'days: for generator in &self.generators {
            logging::log_day_start(generator.day(), generator.topic());

            for tier in Tier::ALL {
                match process_worksheet(generator.as_ref(), tier, &self.config.output_dir) {
                    Ok(path) => {
                        info!("已生成: {}", path.display());
                        stats.success += 1;
                        self.record(generator.day(), tier, &path.display().to_string());
                    }
                    Err(e) => {
                        error!("❌ 第{}天 {} 生成失败: {}", generator.day(), tier, e);
                        stats.failed.push((generator.day(), tier));
                        self.record(generator.day(), tier, &format!("失败: {}", e));

                        if self.config.stop_on_error {
                            warn!("⚠️ 已配置 stop_on_error，停止后续生成");
                            break 'days;
                        }
                    }
                }
            }
        }

        logging::print_final_stats(stats.success, stats.failed.len(), stats.total);
        if let Some(run_log) = &self.run_log {
            info!("\n记录已保存至: {}", run_log.path().display());
        }

        if !stats.failed.is_empty() {
            let failed: Vec<String> = stats
                .failed
                .iter()
                .map(|(day, tier)| format!("第{}天 {}", day, tier))
                .collect();
            bail!("{} 份文档生成失败: {}", failed.len(), failed.join(", "));
        }

        Ok(())
    }

    fn record(&self, day: u8, tier: Tier, outcome: &str) {
        if let Some(run_log) = &self.run_log {
            if let Err(e) = run_log.record(day, tier.label(), outcome) {
                warn!("写入生成记录失败: {}", e);
            }
        }
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: Vec<(u8, Tier)>,
    total: usize,
}
