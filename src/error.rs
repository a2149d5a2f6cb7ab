use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 文档生成错误
    #[error("文档错误: {0}")]
    Document(#[from] DocumentError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 无法识别的版本名称
    #[error("无法识别的版本: '{name}'（可选：简洁版 / 完整版 / 充实版）")]
    InvalidTier { name: String },
    /// 课程表中不存在的天数
    #[error("第{day}天不在课程表中")]
    UnknownDay { day: u8 },
    /// 题量表与大题数量不一致
    #[error("第{day}天题量表长度不符: 需要 {expected} 项，实际 {actual} 项")]
    SectionCountMismatch {
        day: u8,
        expected: usize,
        actual: usize,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 文档生成错误
#[derive(Debug, Error)]
pub enum DocumentError {
    /// docx 打包失败
    #[error("docx 打包失败: {source}")]
    PackFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建目录创建错误
    pub fn create_dir_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::CreateDirFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 docx 打包错误
    pub fn pack_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Document(DocumentError::PackFailed {
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tier_message_names_the_tier() {
        let err = AppError::from(ConfigError::InvalidTier {
            name: "豪华版".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.starts_with("配置错误"));
        assert!(msg.contains("豪华版"));
    }

    #[test]
    fn test_write_failed_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::write_failed("out/第2天.docx", io);
        assert!(err.to_string().contains("out/第2天.docx"));
        assert!(err.source().is_some());
    }
}
