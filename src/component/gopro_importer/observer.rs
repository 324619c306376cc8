use super::disposition_planner::DiscardOutcome;
use super::move_executor::MoveOutcome;
use super::name_synthesizer::PlannedMove;
use super::pipeline::{HaltReason, RunSummary};
use crate::tools::DirectoryStatus;
use std::path::Path;

/// 匯入過程中的事件通知
///
/// 預設實作全部為空，使用者只需覆寫關心的事件。`()` 為不輸出任何訊息的實作。
pub trait ImportObserver {
    /// `status` 為 `None` 表示模擬模式，未建立資料夾
    fn destination_prepared(&mut self, _path: &Path, _status: Option<DirectoryStatus>) {}

    fn halted(&mut self, _reason: &HaltReason) {}

    fn entries_found(&mut self, _source: &Path, _count: usize) {}

    fn sanity_checks_passed(&mut self) {}

    fn dispositions_planned(&mut self, _total: usize, _kept: usize) {}

    fn filenames_verified(&mut self) {}

    fn names_created(&mut self, _plan: &[PlannedMove]) {}

    fn discards_finished(&mut self, _outcomes: &[DiscardOutcome], _simulate: bool) {}

    fn moves_started(&mut self, _total: usize) {}

    fn move_finished(&mut self, _outcome: &MoveOutcome) {}

    fn finished(&mut self, _summary: &RunSummary) {}
}

impl ImportObserver for () {}
