//! UI工具模块
//! 提供终端交互相关的通用功能

use crate::types::{GeneratedCredential, StrengthReport};
use crate::utils::text_stats::TextStats;
use std::io::{self, BufRead, Write};

/// 用户输入处理
pub struct InputHandler<R: BufRead> {
    reader: R,
}

impl InputHandler<io::StdinLock<'static>> {
    /// 从标准输入读取
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputHandler<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// 获取用户输入，输入结束时返回 `None`
    pub fn get_input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// 获取数字输入（超出范围或无效时使用默认值）
    pub fn get_number_input<T>(&mut self, prompt: &str, min: T, max: T, default: T) -> io::Result<T>
    where
        T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Copy,
    {
        let input = self.get_input(prompt)?.unwrap_or_default();
        if input.is_empty() {
            return Ok(default);
        }
        match input.parse::<T>() {
            Ok(value) if value >= min && value <= max => Ok(value),
            _ => {
                println!("❌ 无效输入，使用默认值: {}", default);
                Ok(default)
            }
        }
    }

    /// 获取是/否输入，空输入使用默认值
    pub fn get_bool_input(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let input = self.get_input(prompt)?.unwrap_or_default();
        Ok(match input.to_lowercase().as_str() {
            "y" | "yes" | "是" => true,
            "n" | "no" | "否" => false,
            _ => default,
        })
    }

    /// 读取多行文本，直到遇到单独一行 `.` 或输入结束
    pub fn get_multiline_input(&mut self, prompt: &str) -> io::Result<String> {
        println!("{}", prompt);
        let mut lines = Vec::new();
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line == "." {
                break;
            }
            lines.push(line.to_string());
        }
        Ok(lines.join("\n"))
    }
}

/// 菜单显示
pub struct MenuDisplay;

impl MenuDisplay {
    /// 显示主菜单
    pub fn show_main_menu() {
        println!("📋 选择工具:");
        println!("1. 🔐 生成密码");
        println!("2. 🛡️  检测密码强度");
        println!("3. 👤 生成用户名");
        println!("4. 🔤 字符统计");
        println!("5. 📊 百分比计算");
        println!("6. 🚪 退出");
    }

    /// 显示标题
    pub fn show_title() {
        println!("🧰 Web Toolkit 演示程序");
        println!("{}", "=".repeat(50));
    }
}

/// 格式化输出
pub struct Formatter;

impl Formatter {
    /// 格式化标题
    pub fn format_title(title: &str) {
        println!("\n{}", title);
        println!("{}", "-".repeat(30));
    }

    /// 格式化密码生成结果
    pub fn format_credential(credential: &GeneratedCredential) {
        println!("✅ 生成成功!");
        println!("🔐 密码: {}", credential.value);
        println!(
            "🛡️  强度: {} ({}/7, {}%)",
            credential.strength_summary(),
            credential.strength_score,
            credential.strength_label.percentage()
        );
        println!("📝 建议: {}", credential.strength_label.feedback());
    }

    /// 格式化强度评估结果
    pub fn format_strength(report: &StrengthReport, adjusted: &StrengthReport) {
        println!("🛡️  强度: {} ({})", report.label, report.label.description());
        println!("📊 得分: {}/7，考虑常见模式后: {}/7", report.score, adjusted.score);
        println!("🔢 熵: {:.0} bits", report.entropy_bits);
        println!("📝 建议: {}", adjusted.label.feedback());
    }

    /// 格式化字符统计结果
    pub fn format_text_stats(stats: &TextStats) {
        println!("🔤 字符数: {}", stats.characters);
        println!("🔡 不含空白: {}", stats.characters_no_spaces);
        println!("📖 单词数: {}", stats.words);
        println!("📄 行数: {}", stats.lines);
    }
}

/// 错误处理
pub struct ErrorHandler;

impl ErrorHandler {
    /// 处理生成错误
    pub fn handle_generation_error(error: &dyn std::fmt::Display) {
        println!("❌ 生成失败: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_get_input() {
        let mut handler = InputHandler::new(Cursor::new("  hello \n"));
        assert_eq!(handler.get_input("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(handler.get_input("> ").unwrap(), None);
    }

    #[test]
    fn test_get_number_input() {
        let mut handler = InputHandler::new(Cursor::new("12\n999\nabc\n\n"));
        assert_eq!(handler.get_number_input("> ", 4usize, 128, 16).unwrap(), 12);
        assert_eq!(handler.get_number_input("> ", 4usize, 128, 16).unwrap(), 16);
        assert_eq!(handler.get_number_input("> ", 4usize, 128, 16).unwrap(), 16);
        assert_eq!(handler.get_number_input("> ", 4usize, 128, 16).unwrap(), 16);
    }

    #[test]
    fn test_get_bool_input() {
        let mut handler = InputHandler::new(Cursor::new("y\nN\n\n"));
        assert!(handler.get_bool_input("> ", false).unwrap());
        assert!(!handler.get_bool_input("> ", true).unwrap());
        assert!(handler.get_bool_input("> ", true).unwrap());
    }

    #[test]
    fn test_get_multiline_input() {
        let mut handler = InputHandler::new(Cursor::new("line one\nline two\n.\nrest\n"));
        let text = handler.get_multiline_input("输入文本:").unwrap();
        assert_eq!(text, "line one\nline two");
        assert_eq!(handler.get_input("> ").unwrap(), Some("rest".to_string()));
    }
}
