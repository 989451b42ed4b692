//! 系统类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 大写字母
pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// 小写字母
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
/// 数字
pub const DIGIT_CHARS: &str = "0123456789";
/// 符号
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// 字符类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// 大写字母
    Upper,
    /// 小写字母
    Lower,
    /// 数字
    Digit,
    /// 符号
    Symbol,
}

impl CharacterClass {
    /// 全部字符类型（固定顺序）
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// 该类型包含的字符
    pub fn chars(&self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPER_CHARS,
            CharacterClass::Lower => LOWER_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Symbol => SYMBOL_CHARS,
        }
    }

    /// 字符是否属于该类型
    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// 字符所属的类型
    pub fn of(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// 获取字符类型的中文描述
    pub fn description(&self) -> &'static str {
        match self {
            CharacterClass::Upper => "大写字母",
            CharacterClass::Lower => "小写字母",
            CharacterClass::Digit => "数字",
            CharacterClass::Symbol => "符号",
        }
    }
}

/// 密码强度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// 根据得分计算强度等级
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => StrengthLabel::Weak,
            4..=5 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "WEAK",
            StrengthLabel::Medium => "MEDIUM",
            StrengthLabel::Strong => "STRONG",
        }
    }

    /// 强度条百分比
    pub fn percentage(&self) -> u8 {
        match self {
            StrengthLabel::Weak => 33,
            StrengthLabel::Medium => 66,
            StrengthLabel::Strong => 100,
        }
    }

    /// 获取强度等级的中文描述
    pub fn description(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "弱",
            StrengthLabel::Medium => "中",
            StrengthLabel::Strong => "强",
        }
    }

    /// 改进建议
    pub fn feedback(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "请增加长度或使用更多类型的字符",
            StrengthLabel::Medium => "密码尚可，但仍有提升空间",
            StrengthLabel::Strong => "非常好的密码！",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 强度评估结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// 得分 (0-7)
    pub score: u8,
    /// 强度等级
    pub label: StrengthLabel,
    /// 估算熵（比特）
    pub entropy_bits: f64,
}

/// 密码生成策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPolicy {
    /// 目标长度
    pub length: usize,
    /// 启用的字符类型
    pub classes: BTreeSet<CharacterClass>,
    /// 避免以符号开头或结尾
    #[serde(default = "default_avoid_edge_symbols")]
    pub avoid_edge_symbols: bool,
}

fn default_avoid_edge_symbols() -> bool {
    true
}

impl GenerationPolicy {
    pub fn new<I>(length: usize, classes: I) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        Self {
            length,
            classes: classes.into_iter().collect(),
            avoid_edge_symbols: true,
        }
    }

    /// 启用全部字符类型
    pub fn all_classes(length: usize) -> Self {
        Self::new(length, CharacterClass::ALL)
    }

    /// 设置是否避免首尾符号
    pub fn with_avoid_edge_symbols(mut self, avoid: bool) -> Self {
        self.avoid_edge_symbols = avoid;
        self
    }

    pub fn has_class(&self, class: CharacterClass) -> bool {
        self.classes.contains(&class)
    }
}

/// 生成的密码
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCredential {
    /// 密码内容
    pub value: String,
    /// 强度得分 (0-7)
    pub strength_score: u8,
    /// 强度等级
    pub strength_label: StrengthLabel,
    /// 估算熵（比特）
    pub entropy_bits: f64,
    /// 生成时间
    pub created_at: DateTime<Utc>,
}

impl GeneratedCredential {
    pub fn new(value: String, report: StrengthReport) -> Self {
        Self {
            value,
            strength_score: report.score,
            strength_label: report.label,
            entropy_bits: report.entropy_bits,
            created_at: Utc::now(),
        }
    }

    /// 强度摘要，例如 `STRONG (98 bits)`
    pub fn strength_summary(&self) -> String {
        if self.entropy_bits > 0.0 {
            format!("{} ({:.0} bits)", self.strength_label, self.entropy_bits)
        } else {
            self.strength_label.to_string()
        }
    }
}

/// 用户名生成选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for UsernameOptions {
    fn default() -> Self {
        Self {
            length: 8,
            include_numbers: true,
            include_symbols: false,
        }
    }
}
