//! 相機檔名解析
//!
//! 三種互斥的命名方式，依序比對：
//! 1. 分段影片 `GH011234.MP4`（兩位數分段 + 四位數檔號）
//! 2. 循環錄影 `GHAB1234.MP4`（兩個字母前綴 + 四位數檔號）
//! 3. 照片 `GOPR1234.JPG`
//!
//! 分段與循環的外形相同，中間兩碼皆為數字時一律視為分段。

use super::error::ImportError;
use super::extension_classifier::ClassifiedEntry;
use log::{debug, info};
use regex::Regex;
use std::sync::LazyLock;

static REGEX_CHAPTERED_VIDEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^G(?P<encoding>[HX])(?P<chapter>[0-9]{2})(?P<file_number>[0-9]{4})\.mp4$")
        .expect("Invalid regex")
});

static REGEX_LOOPED_VIDEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^G(?P<encoding>[HX])(?P<loop_prefix>[a-z]{2})(?P<file_number>[0-9]{4})\.mp4$")
        .expect("Invalid regex")
});

static REGEX_PHOTO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^GOPR(?P<file_number>[0-9]+)\.jpg$").expect("Invalid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternVariant {
    Chaptered,
    Looped,
    Photo,
}

/// 從檔名解析出的識別資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotName {
    Chaptered {
        /// `H` (AVC) 或 `X` (HEVC)
        encoding: String,
        chapter: String,
        file_number: String,
    },
    Looped {
        encoding: String,
        loop_prefix: String,
        file_number: String,
    },
    Photo {
        file_number: String,
    },
}

impl ShotName {
    /// 依優先順序比對檔名
    pub fn parse(full_name: &str) -> Option<Self> {
        if let Some(caps) = REGEX_CHAPTERED_VIDEO.captures(full_name) {
            return Some(Self::Chaptered {
                encoding: caps["encoding"].to_uppercase(),
                chapter: caps["chapter"].to_string(),
                file_number: caps["file_number"].to_string(),
            });
        }
        if let Some(caps) = REGEX_LOOPED_VIDEO.captures(full_name) {
            return Some(Self::Looped {
                encoding: caps["encoding"].to_uppercase(),
                loop_prefix: caps["loop_prefix"].to_string(),
                file_number: caps["file_number"].to_string(),
            });
        }
        REGEX_PHOTO.captures(full_name).map(|caps| Self::Photo {
            file_number: caps["file_number"].to_string(),
        })
    }

    pub const fn variant(&self) -> PatternVariant {
        match self {
            Self::Chaptered { .. } => PatternVariant::Chaptered,
            Self::Looped { .. } => PatternVariant::Looped,
            Self::Photo { .. } => PatternVariant::Photo,
        }
    }

    pub fn file_number(&self) -> &str {
        match self {
            Self::Chaptered { file_number, .. }
            | Self::Looped { file_number, .. }
            | Self::Photo { file_number } => file_number,
        }
    }
}

/// 已辨識檔名的保留項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedEntry {
    pub entry: ClassifiedEntry,
    pub shot: ShotName,
}

/// 解析所有保留項目的檔名，任何一個無法辨識即中止
pub fn match_filenames(kept: Vec<ClassifiedEntry>) -> Result<Vec<MatchedEntry>, ImportError> {
    let matched = kept
        .into_iter()
        .map(|entry| match ShotName::parse(&entry.entry.full_name) {
            Some(shot) => {
                debug!(
                    "{} -> {:?} #{}",
                    entry.entry.full_name,
                    shot.variant(),
                    shot.file_number()
                );
                Ok(MatchedEntry { entry, shot })
            }
            None => Err(ImportError::UnparseableShotName {
                name: entry.entry.full_name,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!("檔名解析完成，共 {} 個檔案", matched.len());
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaptered_wins_over_looped() {
        let shot = ShotName::parse("GH010001.MP4").unwrap();
        assert_eq!(
            shot,
            ShotName::Chaptered {
                encoding: "H".to_string(),
                chapter: "01".to_string(),
                file_number: "0001".to_string(),
            }
        );
    }

    #[test]
    fn test_hevc_chaptered() {
        let shot = ShotName::parse("gx120345.mp4").unwrap();
        assert_eq!(shot.variant(), PatternVariant::Chaptered);
        assert_eq!(shot.file_number(), "0345");
    }

    #[test]
    fn test_looped_video() {
        let shot = ShotName::parse("GHLP0003.MP4").unwrap();
        assert_eq!(
            shot,
            ShotName::Looped {
                encoding: "H".to_string(),
                loop_prefix: "LP".to_string(),
                file_number: "0003".to_string(),
            }
        );
    }

    #[test]
    fn test_mixed_middle_is_neither_video_form() {
        assert_eq!(ShotName::parse("GH0A0001.MP4"), None);
    }

    #[test]
    fn test_photo_variable_length() {
        assert_eq!(
            ShotName::parse("GOPR12.JPG"),
            Some(ShotName::Photo {
                file_number: "12".to_string()
            })
        );
        assert_eq!(
            ShotName::parse("gopr0042.jpg").map(|s| s.variant()),
            Some(PatternVariant::Photo)
        );
    }

    #[test]
    fn test_match_filenames_rejects_batch_with_unknown_name() {
        use crate::component::gopro_importer::extension_classifier::classify_extensions;
        use crate::tools::{Entry, EntryKind};
        use chrono::Local;
        use std::path::PathBuf;

        let entries = ["GOPR0001.JPG", "DJI_0001.MP4"]
            .into_iter()
            .map(|name| Entry {
                full_name: name.to_string(),
                path: PathBuf::from("/card").join(name),
                created: Local::now(),
                kind: EntryKind::File,
            })
            .collect();
        let classified = classify_extensions(entries).unwrap();

        match match_filenames(classified) {
            Err(ImportError::UnparseableShotName { name }) => assert_eq!(name, "DJI_0001.MP4"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(ShotName::parse("GOPR0001.MP4"), None);
        assert_eq!(ShotName::parse("GH010001.JPG"), None);
        assert_eq!(ShotName::parse("GC010001.MP4"), None);
        assert_eq!(ShotName::parse("GH0100012.MP4"), None);
        assert_eq!(ShotName::parse("IMG_0001.JPG"), None);
        assert_eq!(ShotName::parse("GOPR.JPG"), None);
    }
}
