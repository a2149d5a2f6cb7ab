use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 可选配置文件名（位于当前工作目录）
pub const CONFIG_FILE_NAME: &str = "worksheets.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 练习题文档输出目录
    pub output_dir: PathBuf,
    /// 某份文档生成失败时是否立即停止整批生成
    pub stop_on_error: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 生成记录文件（不设置则不写）
    pub output_log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            stop_on_error: false,
            verbose_logging: false,
            output_log_file: None,
        }
    }
}

impl Config {
    /// 从当前目录的 `worksheets.toml` 加载配置，文件不存在时使用默认值
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file(Path::new(CONFIG_FILE_NAME))
    }

    /// 从指定 TOML 文件加载配置
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 指定输出目录
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
