//! 密码强度评估
//!
//! 得分规则：长度达到8/12/16各加1分，出现小写、大写、数字、其他字符各加1分，满分7分。
//! 熵按 `长度 × log2(字符池大小)` 估算，字符池只统计实际出现的字符类型。

use crate::types::{StrengthLabel, StrengthReport};

/// 小写字母池大小
const LOWER_POOL: u32 = 26;
/// 大写字母池大小
const UPPER_POOL: u32 = 26;
/// 数字池大小
const DIGIT_POOL: u32 = 10;
/// 其他字符池大小
const OTHER_POOL: u32 = 32;

/// 最高得分
pub const MAX_SCORE: u8 = 7;

/// 常见顺序片段
const SEQUENTIAL_PATTERNS: [&str; 3] = ["123", "abc", "qwe"];

/// 字符组成
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Composition {
    length: usize,
    lower: bool,
    upper: bool,
    digit: bool,
    other: bool,
}

impl Composition {
    fn of(value: &str) -> Self {
        value.chars().fold(Self::default(), |mut acc, c| {
            acc.length += 1;
            match c {
                'a'..='z' => acc.lower = true,
                'A'..='Z' => acc.upper = true,
                '0'..='9' => acc.digit = true,
                _ => acc.other = true,
            }
            acc
        })
    }

    fn raw_score(&self) -> u8 {
        [
            self.length >= 8,
            self.length >= 12,
            self.length >= 16,
            self.lower,
            self.upper,
            self.digit,
            self.other,
        ]
        .iter()
        .filter(|hit| **hit)
        .count() as u8
    }

    fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.lower {
            pool += LOWER_POOL;
        }
        if self.upper {
            pool += UPPER_POOL;
        }
        if self.digit {
            pool += DIGIT_POOL;
        }
        if self.other {
            pool += OTHER_POOL;
        }
        pool
    }

    fn entropy_bits(&self) -> f64 {
        match self.pool_size() {
            0 => 0.0,
            pool => self.length as f64 * f64::from(pool).log2(),
        }
    }
}

/// 评估密码强度
pub fn score_strength(value: &str) -> StrengthReport {
    let composition = Composition::of(value);
    let score = composition.raw_score();

    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        entropy_bits: composition.entropy_bits(),
    }
}

/// 评估密码强度，并对重复字符和常见顺序片段扣分
///
/// 连续3个及以上相同字符扣1分，包含 `123`、`abc`、`qwe`（不区分大小写）扣1分。
/// 熵不受影响。
pub fn score_strength_with_patterns(value: &str) -> StrengthReport {
    let composition = Composition::of(value);
    let mut score = i16::from(composition.raw_score());

    if has_repeated_run(value, 3) {
        score -= 1;
    }
    if has_sequential_pattern(value) {
        score -= 1;
    }

    let score = score.clamp(0, i16::from(MAX_SCORE)) as u8;

    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        entropy_bits: composition.entropy_bits(),
    }
}

/// 是否存在至少 `run` 个连续相同字符
pub fn has_repeated_run(value: &str, run: usize) -> bool {
    let mut previous = None;
    let mut count = 0;

    for c in value.chars() {
        if Some(c) == previous {
            count += 1;
        } else {
            previous = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }

    false
}

/// 是否包含常见顺序片段
pub fn has_sequential_pattern(value: &str) -> bool {
    let lowered = value.to_lowercase();
    SEQUENTIAL_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}
