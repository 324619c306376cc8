//! 項目類型檢查
//!
//! 相機資料夾應該是扁平的：只能有一般檔案。

use super::error::ImportError;
use crate::tools::{Entry, EntryKind};
use log::info;

/// 確認每個項目都是檔案或資料夾，且沒有任何資料夾
pub fn check_entry_types(entries: Vec<Entry>) -> Result<Vec<Entry>, ImportError> {
    if let Some(other) = entries.iter().find(|e| e.kind == EntryKind::Other) {
        return Err(ImportError::UnknownEntryType {
            path: other.path.clone(),
            kind: other.kind,
        });
    }

    let directories: Vec<_> = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Directory)
        .map(|e| e.path.clone())
        .collect();
    if !directories.is_empty() {
        return Err(ImportError::UnexpectedDirectories { paths: directories });
    }

    info!("類型檢查通過，共 {} 個檔案", entries.len());
    Ok(entries)
}
