//! 配置服务
//!
//! 配置保存在 `<config dir>/recipe-browser/config.json`，
//! 文件不存在时使用默认值并写出一份默认配置。

use std::fs;
use std::path::{Path, PathBuf};

use recipe_browser_core::{BrowserError, PageLimit, DEFAULT_API_BASE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖 API 地址的环境变量
pub const ENV_API_URL: &str = "RECIPE_BROWSER_API_URL";
/// 覆盖日志级别的环境变量
pub const ENV_LOG_LEVEL: &str = "RECIPE_BROWSER_LOG";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法定位配置目录")]
    NoConfigDir,

    #[error("读写配置文件 {path} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件 {path} 格式错误: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] BrowserError),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端基础地址
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 启动时的每页条数（10 / 20 / 50）
    pub default_limit: u32,
    /// 界面语言代码
    pub language: String,
    pub theme: Theme,
    /// 日志级别（off / error / warn / info / debug / trace）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: 10,
            default_limit: PageLimit::default().value(),
            language: Language::default().code().to_string(),
            theme: Theme::Dark,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖
    ///
    /// `lookup` 通常是 `|key| std::env::var(key).ok()`。
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(BrowserError::InvalidConfig("api_base_url is empty".to_string()).into());
        }
        if self.request_timeout_secs == 0 {
            return Err(BrowserError::InvalidConfig(
                "request_timeout_secs must be greater than 0".to_string(),
            )
            .into());
        }
        PageLimit::try_from(self.default_limit)?;
        Ok(())
    }

    /// 每页条数（已校验过时不会回落到默认值）
    pub fn page_limit(&self) -> PageLimit {
        PageLimit::from_value(self.default_limit).unwrap_or_default()
    }

    /// 界面语言，无法识别时回落到英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认位置 `<config dir>/recipe-browser/config.json`
    pub fn new() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join("recipe-browser").join("config.json")))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置；文件不存在时写出默认配置
    ///
    /// 写不出默认配置不影响启动，错误随结果一起返回，
    /// 由调用方在日志初始化之后再记录。
    pub fn load_or_init(&self) -> Result<(AppConfig, Option<ConfigError>), ConfigError> {
        if self.path.exists() {
            return Ok((self.load()?, None));
        }

        let config = AppConfig::default();
        let write_error = self.save(&config).err();
        Ok((config, write_error))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Format {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.page_limit(), PageLimit::Ten);
    }

    #[test]
    fn rejects_limit_outside_selector() {
        let config = AppConfig {
            default_limit: 15,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(BrowserError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn rejects_empty_url_and_zero_timeout() {
        let config = AppConfig {
            api_base_url: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_overrides_win() {
        let config = AppConfig::default().with_env_overrides(|key| match key {
            ENV_API_URL => Some("http://10.0.0.5:9000/api".to_string()),
            ENV_LOG_LEVEL => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base_url, "http://10.0.0.5:9000/api");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn blank_env_values_ignored() {
        let config = AppConfig::default().with_env_overrides(|_| Some(String::new()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"default_limit": 50, "theme": "light"}"#).expect("write config");

        let config = LocalConfigService::with_path(&path).load().expect("load config");
        assert_eq!(config.page_limit(), PageLimit::Fifty);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn malformed_file_is_reported() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ not json").expect("write config");

        let result = LocalConfigService::with_path(&path).load();
        assert!(matches!(result, Err(ConfigError::Format { .. })));
    }

    #[test]
    fn load_or_init_writes_defaults() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("nested").join("config.json");
        let service = LocalConfigService::with_path(&path);

        let (config, write_error) = service.load_or_init().expect("load config");
        assert_eq!(config, AppConfig::default());
        assert!(write_error.is_none());
        assert!(path.exists());
        assert_eq!(service.load().expect("reload"), config);
    }

    #[test]
    fn load_or_init_returns_write_failure_with_defaults() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        // 父路径是普通文件，目录创建必然失败
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write blocker");
        let service = LocalConfigService::with_path(blocker.join("config.json"));

        let (config, write_error) = service.load_or_init().expect("defaults still load");
        assert_eq!(config, AppConfig::default());
        assert!(matches!(write_error, Some(ConfigError::Io { .. })));
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }
}
