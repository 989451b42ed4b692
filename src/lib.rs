//! Web Toolkit 核心库
//!
//! 浏览器小工具集的核心计算逻辑：
//! - 按字符类型策略生成随机密码，并评估强度与熵
//! - 可读用户名生成
//! - 字符/单词/行数统计
//! - 百分比计算与数字格式化

pub mod config;
pub mod error;
pub mod gen_password;
pub mod types;
pub mod utils;

// 重新导出常用类型
pub use crate::config::{AppConfig, ConfigManager};
pub use crate::error::{AppError, Result};
pub use crate::gen_password::{
    score_strength, score_strength_with_patterns, CredentialStringGenerator, UsernameGenerator,
    MAX_PASSWORD_LENGTH,
};
pub use crate::types::{
    CharacterClass, GeneratedCredential, GenerationPolicy, StrengthLabel, StrengthReport,
    UsernameOptions,
};
pub use crate::utils::TextStats;
