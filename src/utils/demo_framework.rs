//! 演示框架模块
//! 提供各工具的交互式演示

use crate::config::AppConfig;
use crate::types::{CharacterClass, GenerationPolicy, UsernameOptions};
use crate::utils::gen_password::{
    score_strength, score_strength_with_patterns, CredentialStringGenerator, UsernameGenerator,
};
use crate::utils::percentage::{self, Trend};
use crate::utils::text_stats::TextStats;
use crate::utils::ui_utils::{ErrorHandler, Formatter, InputHandler};
use rand::rngs::StdRng;
use std::io::{self, BufRead};

/// 菜单选项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Password,
    Strength,
    Username,
    TextStats,
    Percentage,
    Exit,
    Invalid,
}

impl From<&str> for MenuOption {
    fn from(choice: &str) -> Self {
        match choice.trim() {
            "1" => MenuOption::Password,
            "2" => MenuOption::Strength,
            "3" => MenuOption::Username,
            "4" => MenuOption::TextStats,
            "5" => MenuOption::Percentage,
            "6" | "q" => MenuOption::Exit,
            _ => MenuOption::Invalid,
        }
    }
}

/// 演示框架结构
pub struct DemoFramework {
    config: AppConfig,
    credentials: CredentialStringGenerator<StdRng>,
    usernames: UsernameGenerator<StdRng>,
}

impl DemoFramework {
    /// 创建新的演示框架
    pub fn new(config: AppConfig) -> Self {
        let (credentials, usernames) = match config.rng_seed {
            Some(seed) => {
                log::warn!("⚠️ 使用固定随机种子 {}，生成结果可预测", seed);
                (
                    CredentialStringGenerator::with_seed(seed),
                    UsernameGenerator::with_seed(seed),
                )
            }
            None => (CredentialStringGenerator::new(), UsernameGenerator::new()),
        };

        DemoFramework {
            config,
            credentials,
            usernames,
        }
    }

    /// 执行菜单选项，返回 `false` 表示退出
    pub fn run_option<R: BufRead>(
        &mut self,
        option: MenuOption,
        input: &mut InputHandler<R>,
    ) -> io::Result<bool> {
        match option {
            MenuOption::Password => self.demo_password(input)?,
            MenuOption::Strength => self.demo_strength(input)?,
            MenuOption::Username => self.demo_username(input)?,
            MenuOption::TextStats => self.demo_text_stats(input)?,
            MenuOption::Percentage => self.demo_percentage(input)?,
            MenuOption::Exit => return Ok(false),
            MenuOption::Invalid => println!("❌ 无效选择，请重试"),
        }
        Ok(true)
    }

    /// 执行密码生成演示
    pub fn demo_password<R: BufRead>(&mut self, input: &mut InputHandler<R>) -> io::Result<()> {
        Formatter::format_title("🔐 密码生成");

        let defaults = self.config.password.clone();
        let length = input.get_number_input(
            &format!("密码长度 (4-128, 默认{}): ", defaults.length),
            4usize,
            128usize,
            defaults.length,
        )?;

        let mut classes = Vec::new();
        for (class, enabled) in [
            (CharacterClass::Upper, defaults.uppercase),
            (CharacterClass::Lower, defaults.lowercase),
            (CharacterClass::Digit, defaults.digits),
            (CharacterClass::Symbol, defaults.symbols),
        ] {
            let prompt = format!(
                "包含{}? (y/n, 默认{}): ",
                class.description(),
                if enabled { "y" } else { "n" }
            );
            if input.get_bool_input(&prompt, enabled)? {
                classes.push(class);
            }
        }

        let policy = GenerationPolicy::new(length, classes)
            .with_avoid_edge_symbols(defaults.avoid_edge_symbols);

        match self.credentials.generate(&policy) {
            Ok(credential) => Formatter::format_credential(&credential),
            Err(e) => ErrorHandler::handle_generation_error(&e),
        }
        Ok(())
    }

    /// 执行密码强度检测演示
    pub fn demo_strength<R: BufRead>(&mut self, input: &mut InputHandler<R>) -> io::Result<()> {
        Formatter::format_title("🛡️ 密码强度检测");

        let value = input.get_input("请输入要检测的密码: ")?.unwrap_or_default();
        let report = score_strength(&value);
        let adjusted = score_strength_with_patterns(&value);
        Formatter::format_strength(&report, &adjusted);
        Ok(())
    }

    /// 执行用户名生成演示
    pub fn demo_username<R: BufRead>(&mut self, input: &mut InputHandler<R>) -> io::Result<()> {
        Formatter::format_title("👤 用户名生成");

        let defaults = self.config.username_options();
        let options = UsernameOptions {
            length: input.get_number_input(
                &format!("用户名长度 (3-32, 默认{}): ", defaults.length),
                3usize,
                32usize,
                defaults.length,
            )?,
            include_numbers: input.get_bool_input("包含数字? (y/n): ", defaults.include_numbers)?,
            include_symbols: input.get_bool_input("包含符号? (y/n): ", defaults.include_symbols)?,
        };
        let count = input.get_number_input("生成数量 (1-10, 默认5): ", 1usize, 10usize, 5usize)?;

        match self.usernames.generate_many(&options, count) {
            Ok(names) => {
                println!("✅ 生成成功!");
                for name in names {
                    println!("   👤 {}", name);
                }
            }
            Err(e) => ErrorHandler::handle_generation_error(&e),
        }
        Ok(())
    }

    /// 执行字符统计演示
    pub fn demo_text_stats<R: BufRead>(&mut self, input: &mut InputHandler<R>) -> io::Result<()> {
        Formatter::format_title("🔤 字符统计");

        let text = input.get_multiline_input("请输入文本（单独一行 . 结束）:")?;
        Formatter::format_text_stats(&TextStats::count(&text));
        Ok(())
    }

    /// 执行百分比计算演示
    pub fn demo_percentage<R: BufRead>(&mut self, input: &mut InputHandler<R>) -> io::Result<()> {
        Formatter::format_title("📊 百分比计算");

        let mut read = |prompt: &str| -> io::Result<f64> {
            Ok(percentage::parse_number(&input.get_input(prompt)?.unwrap_or_default()))
        };

        let percent = read("X (%): ")?;
        let value = read("Y: ")?;
        println!(
            "   {}% × {} = {}",
            percentage::format_number(percent),
            percentage::format_number(value),
            percentage::format_number(percentage::percent_of(percent, value))
        );

        let part = read("部分值: ")?;
        let total = read("总值: ")?;
        println!(
            "   占比: {}%",
            percentage::format_number(percentage::what_percent(part, total))
        );

        let old = read("旧值: ")?;
        let new = read("新值: ")?;
        let change = percentage::percent_change(old, new);
        println!(
            "   变化: {}% ({})",
            percentage::format_change(change),
            Trend::of(change).description()
        );
        Ok(())
    }
}
