//! 副檔名分類
//!
//! 檔名必須是「單字字元 + . + 三個單字字元」，副檔名必須屬於已知集合。

use super::error::ImportError;
use crate::tools::Entry;
use log::{debug, info};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static REGEX_NAME_AND_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>\w+)\.(?P<extension>\w{3})$").expect("Invalid regex")
});

/// 相機會產生的所有副檔名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaExtension {
    Jpg,
    Mp4,
    /// 低解析度預覽影片
    Lrv,
    /// 縮圖
    Thm,
    Wav,
}

impl MediaExtension {
    pub const ALL: [Self; 5] = [Self::Jpg, Self::Mp4, Self::Lrv, Self::Thm, Self::Wav];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Mp4 => "mp4",
            Self::Lrv => "lrv",
            Self::Thm => "thm",
            Self::Wav => "wav",
        }
    }

    /// 由小寫副檔名取得對應值
    pub fn from_lowercase(extension: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == extension)
    }

    pub fn known_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|e| e.as_str()).collect()
    }
}

/// 已拆出名稱與副檔名的項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub entry: Entry,
    /// 小寫的主檔名
    pub base_name: String,
    pub extension: MediaExtension,
}

/// 拆解檔名，回傳小寫的 (主檔名, 副檔名)
pub fn split_name(full_name: &str) -> Option<(String, String)> {
    let caps = REGEX_NAME_AND_EXTENSION.captures(full_name)?;
    Some((caps["name"].to_lowercase(), caps["extension"].to_lowercase()))
}

/// 分類所有項目的副檔名
///
/// 先確認每個檔名的格式，全部通過後再檢查副檔名集合，
/// 未知副檔名會一次全部列出。
pub fn classify_extensions(entries: Vec<Entry>) -> Result<Vec<ClassifiedEntry>, ImportError> {
    let mut split = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some((base_name, extension)) = split_name(&entry.full_name) else {
            return Err(ImportError::UnrecognizedFilename {
                name: entry.full_name,
            });
        };
        split.push((entry, base_name, extension));
    }

    let unknown: BTreeSet<String> = split
        .iter()
        .filter(|(_, _, ext)| MediaExtension::from_lowercase(ext).is_none())
        .map(|(_, _, ext)| ext.clone())
        .collect();
    if !unknown.is_empty() {
        return Err(ImportError::UnknownExtensions {
            found: unknown,
            expected: MediaExtension::known_names(),
        });
    }

    let classified: Vec<ClassifiedEntry> = split
        .into_iter()
        .filter_map(|(entry, base_name, ext)| {
            let extension = MediaExtension::from_lowercase(&ext)?;
            debug!("{} -> {}", entry.full_name, extension.as_str());
            Some(ClassifiedEntry {
                entry,
                base_name,
                extension,
            })
        })
        .collect();

    info!("副檔名檢查通過，共 {} 個檔案", classified.len());
    Ok(classified)
}
