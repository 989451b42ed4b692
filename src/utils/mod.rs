//! 工具模块

pub mod demo_framework;
pub mod gen_password;
pub mod percentage;
pub mod text_stats;
pub mod ui_utils;

// 重新导出常用功能
pub use gen_password::{
    generate_credential,
    generate_username,
    score_strength,
    score_strength_with_patterns,
    CredentialStringGenerator,
    UsernameGenerator,
};
pub use percentage::{format_change, format_number, percent_change, percent_of, what_percent, Trend};
pub use text_stats::TextStats;
