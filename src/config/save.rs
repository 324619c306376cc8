use crate::config::types::{ImportSettings, MAX_RECENT_ORIGINS};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn save_settings(settings: &ImportSettings, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;

    Ok(())
}

/// 更新最近使用的來源路徑
/// 將新路徑加入最前面，去重並限制數量
pub fn add_recent_origin(settings: &mut ImportSettings, origin: &str) {
    settings.recent_origins.retain(|p| p != origin);
    settings.recent_origins.insert(0, origin.to_string());
    settings.recent_origins.truncate(MAX_RECENT_ORIGINS);
}
