//! 終端機輸出
//!
//! 將管線事件轉成給操作者看的進度訊息，搬移時顯示進度條。

use super::disposition_planner::DiscardOutcome;
use super::extension_classifier::MediaExtension;
use super::move_executor::MoveOutcome;
use super::name_synthesizer::PlannedMove;
use super::observer::ImportObserver;
use super::pipeline::{HaltReason, RunSummary};
use crate::tools::DirectoryStatus;
use console::{Alignment, measure_text_width, pad_str, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::path::Path;

#[derive(Default)]
pub struct ConsoleObserver {
    progress_bar: Option<ProgressBar>,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn print_plan_table(pairs: &[(&Path, &Path)]) {
        let sources: Vec<String> = pairs
            .iter()
            .map(|(source, _)| source.display().to_string())
            .collect();
        let width = column_width(&sources);

        println!();
        println!(
            "  {}   {}",
            style(pad_column("原始路徑", width)).bold(),
            style("新路徑").bold()
        );
        for (source, (_, destination)) in sources.iter().zip(pairs) {
            println!(
                "  {} {} {}",
                pad_column(source, width),
                style("→").dim(),
                style(destination.display()).cyan()
            );
        }
        println!();
    }
}

/// 欄寬以終端機顯示寬度計算，中文字佔兩格
fn column_width(cells: &[String]) -> usize {
    cells
        .iter()
        .map(|cell| measure_text_width(cell))
        .max()
        .unwrap_or(0)
}

fn pad_column(text: &str, width: usize) -> Cow<'_, str> {
    pad_str(text, width, Alignment::Left, None)
}

impl ImportObserver for ConsoleObserver {
    fn destination_prepared(&mut self, path: &Path, status: Option<DirectoryStatus>) {
        match status {
            Some(DirectoryStatus::Created) => {
                println!("已建立目的地資料夾: {}", style(path.display()).cyan());
            }
            Some(DirectoryStatus::AlreadyExists) => {
                println!("目的地資料夾已存在: {}", style(path.display()).cyan());
            }
            None => println!(
                "{} 不建立目的地資料夾 {}",
                style("*模擬*").yellow(),
                path.display()
            ),
        }
    }

    fn halted(&mut self, reason: &HaltReason) {
        match reason {
            HaltReason::SourceNotFound(path) => {
                println!("{}", style(format!("找不到路徑 {}", path.display())).yellow());
            }
            HaltReason::EmptySource(path) => {
                println!(
                    "{}",
                    style(format!("{} 中沒有任何檔案", path.display())).yellow()
                );
            }
        }
        println!("{}", style("停止執行。").yellow());
    }

    fn entries_found(&mut self, source: &Path, count: usize) {
        println!("讀取 {}", style(source.display()).cyan());
        println!("{}", style(format!("找到 {count} 個檔案")).green());
    }

    fn sanity_checks_passed(&mut self) {
        println!("{}", style("檢查通過").green());
    }

    fn dispositions_planned(&mut self, total: usize, kept: usize) {
        println!(
            "共 {total} 個檔案，其中 {} 個影片/照片 ({})",
            style(kept).green(),
            MediaExtension::kept_names().join(", ")
        );
    }

    fn filenames_verified(&mut self) {
        println!("{}", style("檔名皆可辨識").green());
    }

    fn names_created(&mut self, plan: &[PlannedMove]) {
        println!("已產生 {} 個新檔名", plan.len());
    }

    fn discards_finished(&mut self, outcomes: &[DiscardOutcome], simulate: bool) {
        let kept = MediaExtension::kept_names().join(", ");
        if simulate {
            println!(
                "{} 不刪除副檔名不在 [{kept}] 內的 {} 個檔案",
                style("*模擬*").yellow(),
                outcomes.len()
            );
            return;
        }

        let deleted = outcomes
            .iter()
            .filter(|o| matches!(o, DiscardOutcome::Deleted(_)))
            .count();
        println!("已刪除 {deleted} 個副檔名不在 [{kept}] 內的檔案");
        for outcome in outcomes {
            if let DiscardOutcome::Failed { reason, .. } = outcome {
                println!(
                    "  {} {}: {}",
                    style("刪除失敗").red(),
                    outcome.path().display(),
                    reason
                );
            }
        }
    }

    fn moves_started(&mut self, total: usize) {
        println!("{}", style("搬移並重新命名檔案中...").cyan());
        let progress_bar = ProgressBar::new(total as u64);
        if let Ok(bar_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            progress_bar.set_style(bar_style.progress_chars("#>-"));
        }
        self.progress_bar = Some(progress_bar);
    }

    fn move_finished(&mut self, outcome: &MoveOutcome) {
        let Some(progress_bar) = &self.progress_bar else {
            return;
        };
        if let MoveOutcome::Failed { reason, .. } = outcome {
            progress_bar.println(format!("{} {reason}", style("失敗:").red()));
        }
        if let Some(name) = outcome.source().file_name() {
            progress_bar.set_message(name.to_string_lossy().into_owned());
        }
        progress_bar.inc(1);
    }

    fn finished(&mut self, summary: &RunSummary) {
        if let Some(progress_bar) = self.progress_bar.take() {
            progress_bar.finish_with_message("完成");
        }

        if summary.simulate {
            let pairs: Vec<(&Path, &Path)> = summary
                .moves
                .iter()
                .map(|m| (m.source().as_path(), m.destination().as_path()))
                .collect();
            Self::print_plan_table(&pairs);
            println!(
                "{}",
                style(format!("{} 個檔案將會被重新命名並搬移", pairs.len())).yellow()
            );
            return;
        }

        println!();
        println!("{}", style("=== 匯入結果 ===").cyan().bold());
        println!(
            "  成功搬移: {} 個檔案 → {}",
            style(summary.moved_count()).green(),
            summary.destination_dir.display()
        );
        if summary.skipped_count() > 0 {
            println!(
                "  已跳過（目的地已存在）: {} 個檔案",
                style(summary.skipped_count()).yellow()
            );
        }
        if !summary.has_failures() {
            return;
        }
        let failed = summary.failed_moves();
        if !failed.is_empty() {
            println!("  搬移失敗: {} 個檔案", style(failed.len()).red());
            for outcome in failed {
                println!(
                    "    {} → {}",
                    outcome.source().display(),
                    outcome.destination().display()
                );
            }
        }
        let failed_discards = summary.failed_discards();
        if !failed_discards.is_empty() {
            println!("  刪除失敗: {} 個檔案", style(failed_discards.len()).red());
            for outcome in failed_discards {
                println!("    {}", outcome.path().display());
            }
        }
    }
}
