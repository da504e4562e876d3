//! アプリケーション設定管理モジュール
//!
//! XDGディレクトリを使用した設定ファイルの永続化と管理を提供します。
//! 資格情報はここには保存しません（プロセス存続期間のみ保持する設計）。

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// ウィンドウ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 760,
            x: 100,
            y: 100,
            maximized: false,
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// カスタムログディレクトリ（Noneの場合はXDGデフォルト使用）
    pub log_dir: Option<PathBuf>,
    /// ログレベル (trace/debug/info/warn/error)
    pub log_level: String,
    /// ファイル出力有効化
    pub enable_file_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: "info".to_string(),
            enable_file_logging: false,
        }
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// CheaterBusterサーバーのベースURL
    pub api_base_url: String,

    /// ステータスポーリング間隔（秒）
    pub poll_interval_secs: u64,

    /// ウィンドウ設定
    #[serde(default)]
    pub window: WindowConfig,

    /// ログ設定
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            poll_interval_secs: 5,
            window: WindowConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 設定マネージャー
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("dev", "cheaterbuster", "cheaterdash")
            .context("Failed to determine config directory")?;
        let config_dir = project_dirs.config_dir().to_path_buf();
        Ok(Self {
            config_path: config_dir.join("config.toml"),
        })
    }

    /// テスト用: 明示パスで作成
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// 設定を読み込み。ファイルが無い場合はデフォルトを返す
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            debug!("No config file at {:?}, using defaults", self.config_path);
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file: {:?}", self.config_path))?;
        let config: AppConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", self.config_path))?;

        info!("⚙️ Loaded config from {:?}", self.config_path);
        Ok(config)
    }

    /// 設定を保存（親ディレクトリは必要に応じて作成）
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let raw = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.config_path, raw)
            .with_context(|| format!("Failed to write config file: {:?}", self.config_path))?;

        debug!("💾 Config saved to {:?}", self.config_path);
        Ok(())
    }

    /// 読み込み失敗時はデフォルトにフォールバック
    pub fn load_or_default(&self) -> AppConfig {
        self.load_config().unwrap_or_else(|e| {
            warn!("設定読み込みエラー、デフォルト設定を使用: {}", e);
            AppConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cheaterdash_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(config.log.log_level, "info");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let manager = ConfigManager::with_path(temp_config_path("missing/config.toml"));
        let config = manager.load_config().unwrap();
        assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = temp_config_path("roundtrip");
        let manager = ConfigManager::with_path(dir.join("config.toml"));

        let mut config = AppConfig::default();
        config.api_base_url = "https://cheaterbuster.example.com".to_string();
        config.poll_interval_secs = 10;
        manager.save_config(&config).unwrap();

        let reloaded = manager.load_config().unwrap();
        assert_eq!(reloaded.api_base_url, "https://cheaterbuster.example.com");
        assert_eq!(reloaded.poll_interval_secs, 10);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = temp_config_path("broken");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "this is not toml {{{{").unwrap();

        let manager = ConfigManager::with_path(path);
        assert!(manager.load_config().is_err());
        let config = manager.load_or_default();
        assert_eq!(config.api_base_url, AppConfig::default().api_base_url);

        let _ = fs::remove_dir_all(dir);
    }
}
