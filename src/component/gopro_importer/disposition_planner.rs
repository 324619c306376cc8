//! 保留 / 丟棄判定
//!
//! 只保留照片與影片，其餘輔助檔（預覽、縮圖、音訊）在驗證全部通過後刪除。

use super::extension_classifier::{ClassifiedEntry, MediaExtension};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Keep,
    Discard,
}

impl MediaExtension {
    pub const fn disposition(self) -> Disposition {
        match self {
            Self::Jpg | Self::Mp4 => Disposition::Keep,
            Self::Lrv | Self::Thm | Self::Wav => Disposition::Discard,
        }
    }

    pub fn kept_names() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .filter(|e| e.disposition() == Disposition::Keep)
            .map(|e| e.as_str())
            .collect()
    }
}

/// 分流結果
#[derive(Debug, Clone, Default)]
pub struct DispositionPlan {
    pub keep: Vec<ClassifiedEntry>,
    pub discard: Vec<ClassifiedEntry>,
}

impl DispositionPlan {
    pub fn total(&self) -> usize {
        self.keep.len() + self.discard.len()
    }
}

/// 單一丟棄項目的處理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardOutcome {
    Deleted(PathBuf),
    /// 模擬模式下保留原檔
    Retained(PathBuf),
    Failed { path: PathBuf, reason: String },
}

impl DiscardOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Deleted(path) | Self::Retained(path) | Self::Failed { path, .. } => path,
        }
    }
}

/// 依副檔名分成保留與丟棄兩組（不觸碰檔案系統）
pub fn plan_dispositions(entries: Vec<ClassifiedEntry>) -> DispositionPlan {
    let (keep, discard): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|e| e.extension.disposition() == Disposition::Keep);

    info!("保留 {} 個檔案，丟棄 {} 個輔助檔", keep.len(), discard.len());
    DispositionPlan { keep, discard }
}

/// 刪除丟棄組的檔案
///
/// 每個檔案獨立處理，單一失敗不影響其餘檔案。
pub fn execute_discards(discard: &[ClassifiedEntry], simulate: bool) -> Vec<DiscardOutcome> {
    discard
        .iter()
        .map(|item| {
            let path = item.entry.path.clone();
            if simulate {
                return DiscardOutcome::Retained(path);
            }
            match fs::remove_file(&path) {
                Ok(()) => {
                    debug!("已刪除: {}", path.display());
                    DiscardOutcome::Deleted(path)
                }
                Err(e) => {
                    warn!("刪除失敗 {}: {e}", path.display());
                    DiscardOutcome::Failed {
                        path,
                        reason: e.to_string(),
                    }
                }
            }
        })
        .collect()
}
