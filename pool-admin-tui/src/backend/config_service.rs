//! 配置服务
//!
//! 配置以 JSON 形式保存在 `<config_dir>/pool-admin/config.json`。
//! 文件不存在时使用默认值；缺失的字段同样回落到默认值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 应用目录名
const APP_DIR: &str = "pool-admin";
/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 默认断点（终端列数）：低于此宽度时侧边栏以浮层方式显示
pub const DEFAULT_BREAKPOINT: u16 = 100;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    pub breakpoint_columns: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            breakpoint_columns: DEFAULT_BREAKPOINT,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
#[derive(Debug, Clone)]
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    /// 使用指定目录
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 使用系统配置目录下的 `pool-admin/`
    pub fn from_default_dir() -> Result<Self> {
        let base = dirs::config_dir().context("could not determine the config directory")?;
        Ok(Self::new(base.join(APP_DIR)))
    }

    /// 配置所在目录（日志文件也放在这里）
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let path = self.path();
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let contents = serde_json::to_string_pretty(config)?;
        fs::write(self.path(), contents).context("failed to write config file")?;
        tracing::debug!("Config saved to {}", self.path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("nested"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load_returns_same_config() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("pool-admin"));
        let config = AppConfig {
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            breakpoint_columns: 120,
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{ "theme": "light" }"#).unwrap();

        let config = LocalConfigService::new(dir.path()).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.breakpoint_columns, DEFAULT_BREAKPOINT);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();

        assert!(LocalConfigService::new(dir.path()).load().is_err());
    }
}
