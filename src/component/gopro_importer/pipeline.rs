//! 匯入管線
//!
//! 列舉 → 類型檢查 → 副檔名分類 → 保留/丟棄判定 → 檔名解析 → 產生新檔名 → 刪除輔助檔 → 搬移
//!
//! 每個階段處理完整批次後才進入下一階段。所有驗證都在任何刪除或搬移之前完成，
//! 因此單一異常檔案不會造成半途而廢的破壞性操作。

use super::disposition_planner::{DiscardOutcome, execute_discards, plan_dispositions};
use super::error::ImportError;
use super::extension_classifier::classify_extensions;
use super::filename_matcher::match_filenames;
use super::move_executor::{MoveOutcome, execute_moves};
use super::name_synthesizer::synthesize_destinations;
use super::observer::ImportObserver;
use super::sanity_checker::check_entry_types;
use crate::config::RunConfig;
use crate::tools::{EntryLister, ensure_directory_exists};
use log::info;
use std::path::PathBuf;

/// 正常結束但未處理任何檔案的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HaltReason {
    SourceNotFound(PathBuf),
    EmptySource(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Halted(HaltReason),
    Completed(RunSummary),
}

/// 單次匯入的結果統計
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub simulate: bool,
    pub destination_dir: PathBuf,
    /// 來源資料夾中的項目總數
    pub found: usize,
    /// 保留的照片與影片數量
    pub kept: usize,
    pub discards: Vec<DiscardOutcome>,
    pub moves: Vec<MoveOutcome>,
}

impl RunSummary {
    pub fn moved_count(&self) -> usize {
        self.moves
            .iter()
            .filter(|m| matches!(m, MoveOutcome::Moved { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.moves
            .iter()
            .filter(|m| matches!(m, MoveOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed_moves(&self) -> Vec<&MoveOutcome> {
        self.moves
            .iter()
            .filter(|m| matches!(m, MoveOutcome::Failed { .. }))
            .collect()
    }

    pub fn failed_discards(&self) -> Vec<&DiscardOutcome> {
        self.discards
            .iter()
            .filter(|d| matches!(d, DiscardOutcome::Failed { .. }))
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_moves().is_empty() || !self.failed_discards().is_empty()
    }
}

/// 執行一次完整匯入
pub fn run_import(
    config: &RunConfig,
    lister: &dyn EntryLister,
    observer: &mut dyn ImportObserver,
) -> Result<RunOutcome, ImportError> {
    let destination = &config.destination_dir;
    if config.simulate {
        observer.destination_prepared(destination, None);
    } else {
        let status = ensure_directory_exists(destination).map_err(|source| ImportError::Io {
            path: destination.clone(),
            source,
        })?;
        observer.destination_prepared(destination, Some(status));
    }

    let source_dir = &config.source_dir;
    if !source_dir.is_dir() {
        let reason = HaltReason::SourceNotFound(source_dir.clone());
        observer.halted(&reason);
        return Ok(RunOutcome::Halted(reason));
    }

    let entries = lister.list(source_dir).map_err(|source| ImportError::Io {
        path: source_dir.clone(),
        source,
    })?;
    if entries.is_empty() {
        let reason = HaltReason::EmptySource(source_dir.clone());
        observer.halted(&reason);
        return Ok(RunOutcome::Halted(reason));
    }
    let found = entries.len();
    info!("在 {} 找到 {found} 個項目", source_dir.display());
    observer.entries_found(source_dir, found);

    let files = check_entry_types(entries)?;
    let classified = classify_extensions(files)?;
    observer.sanity_checks_passed();

    let plan = plan_dispositions(classified);
    let kept = plan.keep.len();
    observer.dispositions_planned(plan.total(), kept);

    let matched = match_filenames(plan.keep)?;
    observer.filenames_verified();

    let moves = synthesize_destinations(&matched, destination)?;
    observer.names_created(&moves);

    let discards = execute_discards(&plan.discard, config.simulate);
    observer.discards_finished(&discards, config.simulate);

    let outcomes = execute_moves(&moves, config.simulate, observer);

    let summary = RunSummary {
        simulate: config.simulate,
        destination_dir: destination.clone(),
        found,
        kept,
        discards,
        moves: outcomes,
    };
    info!(
        "匯入完成 - 搬移: {}, 跳過: {}, 失敗: {}",
        summary.moved_count(),
        summary.skipped_count(),
        summary.failed_moves().len()
    );
    observer.finished(&summary);

    Ok(RunOutcome::Completed(summary))
}
