//! 错误处理模块

use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("无效的生成策略: {0}")]
    InvalidPolicy(String),

    #[error("验证错误: {0}")]
    Validation(String),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("配置校验失败: {0}")]
    ConfigValidation(#[from] validator::ValidationErrors),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 创建生成策略错误
    pub fn invalid_policy<T: Into<String>>(msg: T) -> Self {
        Self::InvalidPolicy(msg.into())
    }

    /// 创建验证错误
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    /// 是否为生成策略错误
    pub fn is_invalid_policy(&self) -> bool {
        matches!(self, Self::InvalidPolicy(_))
    }
}

/// 应用程序Result类型
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::invalid_policy("至少需要启用一种字符类型");
        assert!(err.is_invalid_policy());
        assert_eq!(err.to_string(), "无效的生成策略: 至少需要启用一种字符类型");

        let err = AppError::validation("长度必须大于0");
        assert!(!err.is_invalid_policy());
        assert!(err.to_string().contains("长度必须大于0"));
    }

    #[test]
    fn test_io_error_conversion() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.json")?)
        }

        assert!(matches!(read_missing(), Err(AppError::Io(_))));
    }
}
