//! 來源資料夾列舉
//!
//! 只讀取第一層項目，記錄名稱、路徑、狀態變更時間與類型

use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 項目類型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// 符號連結、裝置檔、管線等
    Other,
}

/// 來源資料夾中的一個項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 完整檔名（含副檔名）
    pub full_name: String,
    pub path: PathBuf,
    /// 拍攝時間，取自檔案系統的狀態變更時間
    pub created: DateTime<Local>,
    pub kind: EntryKind,
}

/// 項目來源
///
/// 管線透過此介面取得項目，測試可替換成固定時間的實作。
pub trait EntryLister {
    fn list(&self, directory: &Path) -> io::Result<Vec<Entry>>;
}

/// 直接讀取磁碟資料夾的列舉器
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryLister;

impl EntryLister for DirectoryLister {
    fn list(&self, directory: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;
            let file_type = entry.file_type();
            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            let metadata = entry.metadata()?;

            entries.push(Entry {
                full_name: entry.file_name().to_string_lossy().into_owned(),
                created: created_time(&metadata)?,
                path: entry.into_path(),
                kind,
            });
        }

        Ok(entries)
    }
}

#[cfg(unix)]
fn created_time(metadata: &Metadata) -> io::Result<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    DateTime::from_timestamp(metadata.ctime(), nanos)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| io::Error::other("status change time out of range"))
}

#[cfg(not(unix))]
fn created_time(metadata: &Metadata) -> io::Result<DateTime<Local>> {
    let time = metadata.created().or_else(|_| metadata.modified())?;
    Ok(DateTime::<Local>::from(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_flat_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("GOPR0001.JPG"), "jpg").unwrap();
        fs::write(temp_dir.path().join("GH010002.MP4"), "mp4").unwrap();
        fs::create_dir(temp_dir.path().join("MISC")).unwrap();
        fs::write(temp_dir.path().join("MISC").join("nested.txt"), "x").unwrap();

        let entries = DirectoryLister.list(temp_dir.path()).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.full_name.as_str()).collect();
        assert_eq!(names, vec!["GH010002.MP4", "GOPR0001.JPG", "MISC"]);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[2].kind, EntryKind::Directory);
        assert_eq!(entries[1].path, temp_dir.path().join("GOPR0001.JPG"));
    }

    #[test]
    fn test_list_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let entries = DirectoryLister.list(temp_dir.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_other() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("GOPR0001.JPG");
        fs::write(&target, "jpg").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("link.jpg")).unwrap();

        let entries = DirectoryLister.list(temp_dir.path()).unwrap();
        let link = entries.iter().find(|e| e.full_name == "link.jpg").unwrap();
        assert_eq!(link.kind, EntryKind::Other);
    }
}
