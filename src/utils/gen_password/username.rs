//! 用户名生成
//!
//! 辅音与元音交替组成可读的用户名，可选穿插数字和符号。

use crate::error::{AppError, Result};
use crate::types::UsernameOptions;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxz";
const VOWELS: &[u8] = b"aeiou";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"_-";

/// 数字出现概率
const NUMBER_PROBABILITY: f64 = 0.2;
/// 符号出现概率（不在首尾）
const SYMBOL_PROBABILITY: f64 = 0.1;

/// 用户名生成器
pub struct UsernameGenerator<R: Rng = StdRng> {
    rng: R,
}

impl UsernameGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for UsernameGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UsernameGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// 生成用户名
    pub fn generate(&mut self, options: &UsernameOptions) -> Result<String> {
        let length = options.length;
        if length == 0 {
            return Err(AppError::validation("用户名长度必须大于0"));
        }

        let mut username = String::with_capacity(length);
        let mut use_consonant = self.rng.gen_bool(0.5);

        for i in 0..length {
            if options.include_numbers && self.rng.gen::<f64>() < NUMBER_PROBABILITY {
                username.push(self.pick(NUMBERS));
            } else if options.include_symbols
                && self.rng.gen::<f64>() < SYMBOL_PROBABILITY
                && i > 0
                && i < length - 1
            {
                username.push(self.pick(SYMBOLS));
            } else {
                let set = if use_consonant { CONSONANTS } else { VOWELS };
                username.push(self.pick(set));
                use_consonant = !use_consonant;
            }
        }

        let mut username = collapse_runs(&capitalize_first(&username), 3);

        while username.len() < length {
            username.push(self.pick(VOWELS));
        }
        username.truncate(length);

        log::debug!("👤 生成用户名: 长度 {}", length);
        Ok(username)
    }

    /// 批量生成用户名
    pub fn generate_many(
        &mut self,
        options: &UsernameOptions,
        count: usize,
    ) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate(options)).collect()
    }

    fn pick(&mut self, set: &[u8]) -> char {
        set[self.rng.gen_range(0..set.len())] as char
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 连续 `run` 个及以上相同字符压缩为一个
fn collapse_runs(value: &str, run: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut result = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let mut j = i;
        while j < chars.len() && chars[j] == chars[i] {
            j += 1;
        }
        if j - i >= run {
            result.push(chars[i]);
        } else {
            result.extend(&chars[i..j]);
        }
        i = j;
    }

    result
}

/// 便捷函数：生成一个用户名
pub fn generate_username(options: &UsernameOptions) -> Result<String> {
    UsernameGenerator::new().generate(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(length: usize, include_numbers: bool, include_symbols: bool) -> UsernameOptions {
        UsernameOptions {
            length,
            include_numbers,
            include_symbols,
        }
    }

    #[test]
    fn test_exact_length() {
        let mut generator = UsernameGenerator::with_seed(17);
        for length in 1..=24 {
            for opts in [
                options(length, false, false),
                options(length, true, false),
                options(length, true, true),
            ] {
                let username = generator.generate(&opts).unwrap();
                assert_eq!(username.len(), length, "{}", username);
            }
        }
    }

    #[test]
    fn test_letters_only() {
        let mut generator = UsernameGenerator::with_seed(4);
        for _ in 0..100 {
            let username = generator.generate(&options(10, false, false)).unwrap();
            let first = username.chars().next().unwrap();
            assert!(first.is_ascii_uppercase());
            assert!(username.chars().skip(1).all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_symbols_never_at_edges() {
        let mut generator = UsernameGenerator::with_seed(9);
        for _ in 0..300 {
            let username = generator.generate(&options(12, true, true)).unwrap();
            assert!(!username.starts_with(['_', '-']));
            assert!(!username.ends_with(['_', '-']));
            assert!(username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut generator = UsernameGenerator::with_seed(1);
        assert!(matches!(
            generator.generate(&options(0, true, true)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_collapse_runs() {
        assert_eq!(collapse_runs("baaab", 3), "bab");
        assert_eq!(collapse_runs("baab", 3), "baab");
        assert_eq!(collapse_runs("11112", 3), "12");
        assert_eq!(collapse_runs("", 3), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("neko"), "Neko");
        assert_eq!(capitalize_first("7up"), "7up");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_generate_many() {
        let mut generator = UsernameGenerator::with_seed(30);
        let names = generator
            .generate_many(&UsernameOptions::default(), 5)
            .unwrap();
        assert_eq!(names.len(), 5);
        assert!(names.iter().all(|n| n.len() == UsernameOptions::default().length));
    }

    #[test]
    fn test_convenience_function() {
        let name = generate_username(&UsernameOptions::default()).unwrap();
        println!("生成的用户名: {}", name);
        assert_eq!(name.len(), 8);
    }
}
