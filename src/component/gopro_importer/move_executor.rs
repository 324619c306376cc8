//! 搬移執行
//!
//! 逐一搬移，單一檔案失敗只記錄，不中斷其餘檔案。

use super::name_synthesizer::PlannedMove;
use super::observer::ImportObserver;
use crate::tools::move_file;
use log::{debug, warn};
use std::path::PathBuf;

/// 單一檔案的搬移結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        source: PathBuf,
        destination: PathBuf,
    },
    /// 模擬模式：只列出將會執行的搬移
    Simulated {
        source: PathBuf,
        destination: PathBuf,
    },
    /// 目的地已有同名檔案，保留來源不動
    Skipped {
        source: PathBuf,
        destination: PathBuf,
    },
    Failed {
        source: PathBuf,
        destination: PathBuf,
        reason: String,
    },
}

impl MoveOutcome {
    pub fn source(&self) -> &PathBuf {
        match self {
            Self::Moved { source, .. }
            | Self::Simulated { source, .. }
            | Self::Skipped { source, .. }
            | Self::Failed { source, .. } => source,
        }
    }

    pub fn destination(&self) -> &PathBuf {
        match self {
            Self::Moved { destination, .. }
            | Self::Simulated { destination, .. }
            | Self::Skipped { destination, .. }
            | Self::Failed { destination, .. } => destination,
        }
    }
}

pub fn execute_moves(
    plan: &[PlannedMove],
    simulate: bool,
    observer: &mut dyn ImportObserver,
) -> Vec<MoveOutcome> {
    if simulate {
        return plan
            .iter()
            .map(|item| MoveOutcome::Simulated {
                source: item.source.clone(),
                destination: item.destination.clone(),
            })
            .collect();
    }

    observer.moves_started(plan.len());

    let mut outcomes = Vec::with_capacity(plan.len());
    for item in plan {
        let outcome = move_one(item);
        observer.move_finished(&outcome);
        outcomes.push(outcome);
    }
    outcomes
}

fn move_one(item: &PlannedMove) -> MoveOutcome {
    let source = item.source.clone();
    let destination = item.destination.clone();

    if !source.exists() {
        warn!("來源檔案已消失: {}", source.display());
        return MoveOutcome::Failed {
            reason: format!(
                "來源檔案不存在，無法搬移 {} 到 {}",
                source.display(),
                destination.display()
            ),
            source,
            destination,
        };
    }

    if destination.exists() {
        warn!("跳過已存在的檔案: {}", destination.display());
        return MoveOutcome::Skipped {
            source,
            destination,
        };
    }

    match move_file(&source, &destination) {
        Ok(()) => {
            debug!("{} -> {}", source.display(), destination.display());
            MoveOutcome::Moved {
                source,
                destination,
            }
        }
        Err(e) => {
            warn!("搬移失敗 {}: {e:#}", source.display());
            MoveOutcome::Failed {
                source,
                destination,
                reason: format!("{e:#}"),
            }
        }
    }
}
