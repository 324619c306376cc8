use crate::config::types::{Config, ImportSettings, SETTINGS_FILE_NAME};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

impl Config {
    pub fn new() -> Self {
        Self::from_path(Path::new(SETTINGS_FILE_NAME))
    }

    /// 從指定路徑載入設定；檔案不存在或格式錯誤時使用預設值
    pub fn from_path(path: &Path) -> Self {
        let settings = match load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("無法載入設定，改用預設值: {e:#}");
                ImportSettings::default()
            }
        };

        Self { settings }
    }
}

fn load_settings(path: &Path) -> Result<ImportSettings> {
    if !path.exists() {
        return Ok(ImportSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings from {}", path.display()))
}
