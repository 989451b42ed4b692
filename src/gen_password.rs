//! 密码生成模块 - 重新导出utils/gen_password的功能
//!
//! 提供按字符类型策略生成密码、强度评估以及用户名生成

// 重新导出utils/gen_password的所有功能
pub use crate::utils::gen_password::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CharacterClass, GenerationPolicy, StrengthLabel};

    #[test]
    fn test_password_generation() {
        let mut generator = CredentialStringGenerator::with_seed(2025);
        let policy = GenerationPolicy::new(
            12,
            [CharacterClass::Upper, CharacterClass::Lower, CharacterClass::Digit],
        );
        let result = generator.generate(&policy).unwrap();

        assert_eq!(result.value.len(), 12);
        assert!(result.value.chars().all(|c| c.is_ascii_alphanumeric()));
        // 长度12（2分）+ 三种类型（3分）
        assert_eq!(result.strength_score, 5);
        assert_eq!(result.strength_label, StrengthLabel::Medium);
    }

    #[test]
    fn test_scoring_examples() {
        let weak = score_strength("aaaaaaaa");
        assert_eq!((weak.score, weak.label), (2, StrengthLabel::Weak));

        let strong = score_strength("Ab3!Xy9#Qw2$");
        assert_eq!((strong.score, strong.label), (6, StrengthLabel::Strong));
        assert!(score_strength_with_patterns("Ab3!Xy9#Qw2$").score <= MAX_SCORE);
    }
}
