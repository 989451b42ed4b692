//! 随机密码生成
//!
//! 每种启用的字符类型先各取一个字符，其余位置从合并字符集中均匀抽取，
//! 最后整体洗牌，保证所有启用类型都出现且位置不固定。

use super::strength::score_strength;
use crate::error::{AppError, Result};
use crate::types::{CharacterClass, GeneratedCredential, GenerationPolicy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 允许的最大密码长度，与配置中的上限一致
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// 密码生成器
///
/// 随机源通过泛型注入，默认使用从系统熵初始化的 `StdRng`。
pub struct CredentialStringGenerator<R: Rng = StdRng> {
    rng: R,
}

impl CredentialStringGenerator<StdRng> {
    /// 创建新的密码生成器实例
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// 使用固定种子创建，生成结果可复现
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CredentialStringGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CredentialStringGenerator<R> {
    /// 使用指定随机源创建
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// 根据策略生成密码
    pub fn generate(&mut self, policy: &GenerationPolicy) -> Result<GeneratedCredential> {
        validate_policy(policy)?;

        log::debug!(
            "🔐 生成密码: 长度 {}, 字符类型 {:?}",
            policy.length,
            policy.classes
        );

        let mut chars: Vec<char> = Vec::with_capacity(policy.length);

        // 每种类型至少一个
        for class in &policy.classes {
            chars.push(pick(&mut self.rng, class.chars()));
        }

        let charset: Vec<char> = policy
            .classes
            .iter()
            .flat_map(|class| class.chars().chars())
            .collect();

        while chars.len() < policy.length {
            chars.push(charset[self.rng.gen_range(0..charset.len())]);
        }

        chars.shuffle(&mut self.rng);

        if policy.avoid_edge_symbols && policy.has_class(CharacterClass::Symbol) {
            relocate_edge_symbols(&mut chars);
        }

        let value: String = chars.into_iter().collect();
        let report = score_strength(&value);

        Ok(GeneratedCredential::new(value, report))
    }

    /// 批量生成密码
    pub fn generate_many(
        &mut self,
        policy: &GenerationPolicy,
        count: usize,
    ) -> Result<Vec<GeneratedCredential>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.generate(policy)?);
        }
        Ok(results)
    }
}

/// 检查生成策略
pub fn validate_policy(policy: &GenerationPolicy) -> Result<()> {
    if policy.classes.is_empty() {
        log::warn!("拒绝生成: 未启用任何字符类型");
        return Err(AppError::invalid_policy("至少需要启用一种字符类型"));
    }

    if policy.length > MAX_PASSWORD_LENGTH {
        log::warn!(
            "拒绝生成: 长度 {} 超过上限 {}",
            policy.length,
            MAX_PASSWORD_LENGTH
        );
        return Err(AppError::invalid_policy(format!(
            "长度 {} 超过上限 {}",
            policy.length, MAX_PASSWORD_LENGTH
        )));
    }

    if policy.length < policy.classes.len() {
        log::warn!(
            "拒绝生成: 长度 {} 小于启用的字符类型数 {}",
            policy.length,
            policy.classes.len()
        );
        return Err(AppError::invalid_policy(format!(
            "长度 {} 小于启用的字符类型数 {}",
            policy.length,
            policy.classes.len()
        )));
    }

    Ok(())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &str) -> char {
    let chars: Vec<char> = set.chars().collect();
    chars[rng.gen_range(0..chars.len())]
}

/// 将首尾的符号移到中间位置，长度和字符组成不变
fn relocate_edge_symbols(chars: &mut Vec<char>) {
    if chars.len() < 3 {
        return;
    }

    let middle = chars.len() / 2;
    let is_symbol = |c: char| CharacterClass::of(c) == Some(CharacterClass::Symbol);

    if is_symbol(chars[0]) {
        let c = chars.remove(0);
        chars.insert(middle, c);
    }

    let last = chars.len() - 1;
    if is_symbol(chars[last]) {
        if let Some(c) = chars.pop() {
            chars.insert(middle, c);
        }
    }
}

/// 便捷函数：使用新的生成器生成一个密码
pub fn generate_credential(policy: &GenerationPolicy) -> Result<GeneratedCredential> {
    CredentialStringGenerator::new().generate(policy)
}
