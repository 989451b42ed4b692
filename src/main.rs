//! Web Toolkit - 交互式演示程序入口

use anyhow::Context;
use std::env;
use web_toolkit_core::{
    config::ConfigManager,
    utils::demo_framework::{DemoFramework, MenuOption},
    utils::ui_utils::{InputHandler, MenuDisplay},
};

/// 配置文件路径环境变量
const CONFIG_PATH_ENV: &str = "TOOLKIT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "toolkit.json";

fn main() -> anyhow::Result<()> {
    // 初始化日志
    init_logger();

    log::info!("🚀 Web Toolkit 启动中...");

    // 获取配置文件路径
    let config_path =
        env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    // 加载配置
    log::info!("📖 加载配置文件: {}", config_path);
    let config_manager = ConfigManager::new(&config_path)
        .with_context(|| format!("无法加载配置文件 {}", config_path))?;
    let config = config_manager.get_config().clone();

    log::info!("✅ 配置验证通过");
    log::info!(
        "🔐 默认密码长度: {}, 字符类型: {:?}",
        config.password.length,
        config.password.classes()
    );
    log::info!("👤 默认用户名长度: {}", config.username.length);

    MenuDisplay::show_title();

    let mut demo_framework = DemoFramework::new(config);
    let mut input = InputHandler::stdin();

    // 主循环
    loop {
        MenuDisplay::show_main_menu();

        let choice = match input.get_input("请选择工具 (1-6): ")? {
            Some(choice) => choice,
            None => break,
        };
        let menu_option = MenuOption::from(choice.as_str());

        if !demo_framework.run_option(menu_option, &mut input)? {
            println!("👋 再见！");
            break;
        }

        println!();
    }

    log::info!("👋 Web Toolkit 已退出");
    Ok(())
}

/// 初始化日志记录器
fn init_logger() {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&log_level))
        .format_timestamp_secs()
        .init();

    log::debug!("📝 日志级别: {}", log_level);
}
