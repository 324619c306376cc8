use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 最近使用的來源路徑最多保留幾筆
pub const MAX_RECENT_ORIGINS: usize = 10;

/// 設定檔名稱（位於目前工作目錄）
pub const SETTINGS_FILE_NAME: &str = "gopro_import_settings.json";

/// 使用者設定，持久化於 JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImportSettings {
    /// 記憶卡所在的磁碟代號
    pub origin_drive: String,
    /// 記憶卡上存放相機檔案的子目錄
    pub origin_subdir: String,
    /// 目的地根目錄，每次匯入會在其下建立一個子資料夾
    pub destination_root: String,
    /// 最近成功匯入的來源路徑（新的在前）
    pub recent_origins: Vec<String>,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            origin_drive: "g".to_string(),
            origin_subdir: "DCIM/100GOPRO".to_string(),
            destination_root: "gopro_raw".to_string(),
            recent_origins: Vec::new(),
        }
    }
}

/// 單次匯入所需的完整設定
///
/// 由呼叫端解析完成後傳入管線，管線本身不讀取任何全域狀態。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    /// 模擬模式：完整執行驗證與命名，但不修改檔案系統
    pub simulate: bool,
}

impl RunConfig {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        simulate: bool,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
            simulate,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: ImportSettings,
}
