//! Configuration
//!
//! 実行設定（Drive API のエンドポイント、スコープ、タイムアウトなど）

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Root of the Google APIs; the Drive hub appends `drive/v3/` and `upload/drive/v3/`
pub const DEFAULT_ROOT_URL: &str = "https://www.googleapis.com/";
/// Access only to files created or opened by this app
pub const DRIVE_FILE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

pub const ROOT_URL_ENV: &str = "GDRIVE_UPLOAD_ROOT_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub root_url: String,
    pub scope: String,
    /// Drive API 呼び出し 1 回あたりの上限（秒）
    pub request_timeout_secs: u64,
    /// overwrite 入力が空の場合の値
    pub default_overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            scope: DRIVE_FILE_SCOPE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            default_overwrite: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(&*expanded)
            .with_context(|| format!("Failed to read config file: {}", expanded))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, or the given file, then environment overrides
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply the endpoint override from a variable lookup
    ///
    /// The root URL always ends with `/`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ROOT_URL_ENV).filter(|v| !v.is_empty()) {
            self.root_url = url;
        }
        if !self.root_url.ends_with('/') {
            self.root_url.push('/');
        }
        self
    }

    /// Base URL of the Drive v3 metadata API
    pub fn api_base_url(&self) -> String {
        format!("{}drive/v3/", self.root_url)
    }

    fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than 0");
        }
        if self.root_url.is_empty() {
            bail!("root_url must not be empty");
        }
        Ok(())
    }
}
