//! 配置管理模块

use crate::error::{AppError, Result};
use crate::types::{CharacterClass, GenerationPolicy, UsernameOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// 环境变量前缀，例如 `TOOLKIT__PASSWORD__LENGTH=20`
pub const ENV_PREFIX: &str = "TOOLKIT";
/// 环境变量层级分隔符
pub const ENV_SEPARATOR: &str = "__";

/// 应用程序配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// 密码生成默认值
    #[validate]
    pub password: PasswordDefaults,
    /// 用户名生成默认值
    #[validate]
    pub username: UsernameDefaults,
    /// 随机数种子（仅用于调试复现）
    pub rng_seed: Option<u64>,
}

/// 密码生成默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PasswordDefaults {
    /// 密码长度
    #[validate(range(min = 4, max = 128))]
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// 避免以符号开头或结尾
    pub avoid_edge_symbols: bool,
}

/// 用户名生成默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UsernameDefaults {
    /// 用户名长度
    #[validate(range(min = 3, max = 32))]
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordDefaults {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            avoid_edge_symbols: true,
        }
    }
}

impl Default for UsernameDefaults {
    fn default() -> Self {
        let options = UsernameOptions::default();
        Self {
            length: options.length,
            include_numbers: options.include_numbers,
            include_symbols: options.include_symbols,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            password: PasswordDefaults::default(),
            username: UsernameDefaults::default(),
            rng_seed: None,
        }
    }
}

impl PasswordDefaults {
    /// 启用的字符类型
    pub fn classes(&self) -> Vec<CharacterClass> {
        [
            (self.uppercase, CharacterClass::Upper),
            (self.lowercase, CharacterClass::Lower),
            (self.digits, CharacterClass::Digit),
            (self.symbols, CharacterClass::Symbol),
        ]
        .into_iter()
        .filter_map(|(enabled, class)| enabled.then_some(class))
        .collect()
    }
}

impl AppConfig {
    /// 从JSON文件加载配置（不叠加环境变量）
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 加载配置：可选的JSON文件，再叠加 `TOOLKIT__` 前缀的环境变量
    ///
    /// 文件始终按JSON解析，与扩展名无关。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: AppConfig = config::Config::builder()
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Json)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self)?;

        if self.password.classes().is_empty() {
            return Err(AppError::validation("密码至少需要启用一种字符类型"));
        }

        Ok(())
    }

    /// 默认密码生成策略
    pub fn password_policy(&self) -> GenerationPolicy {
        GenerationPolicy::new(self.password.length, self.password.classes())
            .with_avoid_edge_symbols(self.password.avoid_edge_symbols)
    }

    /// 默认用户名生成选项
    pub fn username_options(&self) -> UsernameOptions {
        UsernameOptions {
            length: self.username.length,
            include_numbers: self.username.include_numbers,
            include_symbols: self.username.include_symbols,
        }
    }
}

/// 配置管理器
pub struct ConfigManager {
    config: AppConfig,
    config_path: String,
}

impl ConfigManager {
    /// 创建配置管理器
    pub fn new(config_path: &str) -> Result<Self> {
        if !Path::new(config_path).exists() {
            log::warn!("配置文件 {} 不存在，创建默认配置", config_path);

            // 创建配置文件目录
            if let Some(parent) = Path::new(config_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            AppConfig::default().save_to_file(config_path)?;
        }

        let config = AppConfig::load(config_path)?;

        Ok(Self {
            config,
            config_path: config_path.to_string(),
        })
    }

    /// 获取配置
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// 更新配置
    pub fn update_config<F>(&mut self, updater: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut updated = self.config.clone();
        updater(&mut updated);
        updated.validate()?;
        updated.save_to_file(&self.config_path)?;
        self.config = updated;
        Ok(())
    }

    /// 重新加载配置
    pub fn reload(&mut self) -> Result<()> {
        self.config = AppConfig::load(&self.config_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.password_policy(), GenerationPolicy::all_classes(16));
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.password.length = 2;
        assert!(matches!(config.validate(), Err(AppError::ConfigValidation(_))));

        config.password.length = 12;
        config.password.uppercase = false;
        config.password.lowercase = false;
        config.password.digits = false;
        config.password.symbols = false;
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));

        config.password.digits = true;
        assert!(config.validate().is_ok());

        config.username.length = 64;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_policy_from_config() {
        let mut config = AppConfig::default();
        config.password.length = 10;
        config.password.symbols = false;
        config.password.avoid_edge_symbols = false;

        let policy = config.password_policy();
        assert_eq!(policy.length, 10);
        assert_eq!(policy.classes.len(), 3);
        assert!(!policy.has_class(CharacterClass::Symbol));
        assert!(!policy.avoid_edge_symbols);
    }

    #[test]
    fn test_config_file_operations() -> Result<()> {
        let mut config = AppConfig::default();
        config.password.length = 24;
        config.rng_seed = Some(42);

        let temp_file = NamedTempFile::new()?;
        let temp_path = temp_file.path();

        // 保存配置
        config.save_to_file(temp_path)?;

        // 加载配置
        let loaded_config = AppConfig::from_file(temp_path)?;

        assert_eq!(config, loaded_config);

        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("toolkit.json");
        std::fs::write(&path, r#"{ "username": { "length": 12 } }"#)?;

        let config = AppConfig::load(&path)?;
        assert_eq!(config.username.length, 12);
        assert!(config.username.include_numbers);
        assert_eq!(config.password, PasswordDefaults::default());

        Ok(())
    }

    #[test]
    fn test_config_manager_without_json_extension() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("toolkit.conf");
        let path_str = path.to_str().unwrap();

        let mut manager = ConfigManager::new(path_str)?;
        manager.update_config(|config| config.password.length = 32)?;

        manager.reload()?;
        assert_eq!(manager.get_config().password.length, 32);

        let reopened = ConfigManager::new(path_str)?;
        assert_eq!(reopened.get_config().password.length, 32);

        Ok(())
    }

    #[test]
    fn test_config_manager() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("toolkit.json");
        let path_str = path.to_str().unwrap();

        let mut manager = ConfigManager::new(path_str)?;
        assert!(path.exists());
        assert_eq!(manager.get_config().password.length, 16);

        // 更新配置
        manager.update_config(|config| {
            config.password.length = 32;
            config.username.include_symbols = true;
        })?;
        assert_eq!(manager.get_config().password.length, 32);

        // 无效更新不生效
        assert!(manager.update_config(|config| config.password.length = 0).is_err());
        assert_eq!(manager.get_config().password.length, 32);

        manager.reload()?;
        assert_eq!(manager.get_config().password.length, 32);
        assert!(manager.get_config().username.include_symbols);

        Ok(())
    }
}
