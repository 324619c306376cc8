use crate::tools::EntryKind;
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// 會中止整批匯入的錯誤
///
/// 相機輸出屬於封閉格式，遇到無法辨識的內容時寧可停止，也不猜測。
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("{} 是無法處理的檔案類型 ({kind:?})", .path.display())]
    UnknownEntryType { path: PathBuf, kind: EntryKind },

    #[error("來源資料夾中出現預期外的子資料夾: {}", join_paths(.paths))]
    UnexpectedDirectories { paths: Vec<PathBuf> },

    #[error("檔名 {name} 不是可辨識的格式")]
    UnrecognizedFilename { name: String },

    #[error("出現未知的副檔名 {found:?}，只接受 {expected:?}")]
    UnknownExtensions {
        found: BTreeSet<String>,
        expected: Vec<&'static str>,
    },

    #[error("無法解析檔名 {name}")]
    UnparseableShotName { name: String },

    #[error("多個檔案會被命名為 {}: {}", .destination.display(), join_paths(.sources))]
    DestinationCollision {
        destination: PathBuf,
        sources: Vec<PathBuf>,
    },

    #[error("I/O 錯誤: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_error_lists_every_path() {
        let err = ImportError::UnexpectedDirectories {
            paths: vec![PathBuf::from("/card/MISC"), PathBuf::from("/card/Get_started")],
        };
        let message = err.to_string();
        assert!(message.contains("/card/MISC"));
        assert!(message.contains("/card/Get_started"));
    }

    #[test]
    fn test_unknown_extension_message() {
        let err = ImportError::UnknownExtensions {
            found: BTreeSet::from(["txt".to_string()]),
            expected: vec!["jpg", "mp4"],
        };
        assert!(err.to_string().contains("\"txt\""));
    }
}
