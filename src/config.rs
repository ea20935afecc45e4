use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vividhands_common::routes::DEFAULT_API_URL;
use vividhands_common::{ApiRoutes, Cart, Session};

/// API URLを上書きする環境変数
pub const API_URL_ENV: &str = "VIVIDHANDS_API_URL";
/// 設定ファイルの場所を上書きする環境変数
pub const CONFIG_PATH_ENV: &str = "VIVIDHANDS_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_seconds: u64,
    /// 購入者のセッション（userToken / userId）
    pub user: Option<Session>,
    /// 出品者のセッション（artisanToken / artisanId）
    pub artisan: Option<Session>,
    /// カート（ブラウザのlocalStorage相当）
    pub cart: Cart,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout_seconds: 30,
            user: None,
            artisan: None,
            cart: Cart::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let home = dirs::home_dir()
            .ok_or_else(|| StorefrontError::Config("Home directory not found".into()))?;
        Ok(home.join(".config").join("vividhands").join("config.json"))
    }

    /// フラグ > 環境変数 > 設定ファイル の順
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        if let Some(url) = flag.filter(|u| !u.trim().is_empty()) {
            return url.to_string();
        }
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.api_url.clone()
    }

    pub fn routes(&self, flag: Option<&str>) -> ApiRoutes {
        ApiRoutes::new(&self.resolve_api_url(flag))
    }

    pub fn user_session(&self) -> Result<&Session> {
        self.user.as_ref().ok_or(StorefrontError::NotSignedIn)
    }

    pub fn artisan_session(&self) -> Result<&Session> {
        self.artisan.as_ref().ok_or(StorefrontError::ArtisanNotSignedIn)
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_url = url;
        self.save()
    }
}
