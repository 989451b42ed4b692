//! 字符统计

use serde::{Deserialize, Serialize};

/// 文本统计结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// 字符数
    pub characters: usize,
    /// 不含空白的字符数
    pub characters_no_spaces: usize,
    /// 单词数
    pub words: usize,
    /// 行数
    pub lines: usize,
}

impl TextStats {
    /// 统计文本
    pub fn count(text: &str) -> Self {
        let trimmed = text.trim();

        Self {
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            words: if trimmed.is_empty() {
                0
            } else {
                trimmed.split_whitespace().count()
            },
            lines: if text.is_empty() {
                0
            } else {
                text.split('\n').count()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(TextStats::count(""), TextStats::default());
    }

    #[test]
    fn test_blank_text() {
        let stats = TextStats::count("   \n ");
        assert_eq!(stats.characters, 5);
        assert_eq!(stats.characters_no_spaces, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn test_multiline_text() {
        let stats = TextStats::count("Hello world\n  second   line\n");
        assert_eq!(stats.characters, 28);
        assert_eq!(stats.characters_no_spaces, 20);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn test_unicode_counted_by_char() {
        let stats = TextStats::count("猫之家 v3");
        assert_eq!(stats.characters, 6);
        assert_eq!(stats.characters_no_spaces, 5);
        assert_eq!(stats.words, 2);
        assert_eq!(stats.lines, 1);
    }
}
