//! 密码与用户名生成算法
//!
//! 1. 随机密码 - 按字符类型策略生成，保证每种启用类型至少出现一次
//! 2. 强度评估 - 基于长度与字符组成的0-7分评分及熵估算
//! 3. 用户名 - 辅音元音交替的可读用户名

pub mod credential;
pub mod strength;
pub mod username;

pub use credential::{
    generate_credential, validate_policy, CredentialStringGenerator, MAX_PASSWORD_LENGTH,
};
pub use strength::{score_strength, score_strength_with_patterns, MAX_SCORE};
pub use username::{generate_username, UsernameGenerator};
