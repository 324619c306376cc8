//! GoPro 記憶卡匯入元件
//!
//! 驗證相機資料夾內容、刪除輔助檔，並將照片與影片依拍攝時間重新命名後搬到目的地

mod console_observer;
mod disposition_planner;
mod error;
mod extension_classifier;
mod filename_matcher;
mod main;
mod move_executor;
mod name_synthesizer;
mod observer;
mod pipeline;
mod sanity_checker;

pub use console_observer::ConsoleObserver;
pub use disposition_planner::{
    DiscardOutcome, Disposition, DispositionPlan, execute_discards, plan_dispositions,
};
pub use error::ImportError;
pub use extension_classifier::{ClassifiedEntry, MediaExtension, classify_extensions, split_name};
pub use filename_matcher::{MatchedEntry, PatternVariant, ShotName, match_filenames};
pub use main::GoproImporter;
pub use move_executor::{MoveOutcome, execute_moves};
pub use name_synthesizer::{
    DATE_FORMAT, PlannedMove, destination_file_name, format_capture_time, synthesize_destinations,
};
pub use observer::ImportObserver;
pub use pipeline::{HaltReason, RunOutcome, RunSummary, run_import};
pub use sanity_checker::check_entry_types;
