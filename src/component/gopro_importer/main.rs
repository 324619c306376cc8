//! GoPro 匯入主模組
//!
//! 協調預覽、確認與實際匯入流程

use super::console_observer::ConsoleObserver;
use super::pipeline::{RunOutcome, run_import};
use crate::config::save::{add_recent_origin, save_settings};
use crate::config::{Config, RunConfig, SETTINGS_FILE_NAME};
use crate::tools::DirectoryLister;
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// 來源選單中被選取的項目
#[derive(Debug, Clone, PartialEq, Eq)]
enum OriginChoice {
    Recent(PathBuf),
    Default,
    Manual,
}

/// GoPro 記憶卡匯入元件
pub struct GoproImporter {
    config: Config,
}

impl GoproImporter {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 執行匯入
    ///
    /// 非模擬模式且未指定 `assume_yes` 時，會先以模擬模式預覽，再詢問是否執行。
    pub fn run(&self, run_config: &RunConfig, assume_yes: bool) -> Result<RunOutcome> {
        println!("{}", style("=== GoPro 檔案整理 ===").cyan().bold());
        println!("來源: {}", style(run_config.source_dir.display()).cyan());
        println!("目的地: {}", style(run_config.destination_dir.display()).cyan());

        if !run_config.simulate && !assume_yes {
            let preview = RunConfig {
                simulate: true,
                ..run_config.clone()
            };
            let outcome = run_import(&preview, &DirectoryLister, &mut ConsoleObserver::new())?;
            if let RunOutcome::Halted(_) = outcome {
                return Ok(outcome);
            }

            if !self.confirm_import()? {
                println!("{}", style("操作已取消").yellow());
                return Ok(outcome);
            }
            println!();
        }

        let outcome = run_import(run_config, &DirectoryLister, &mut ConsoleObserver::new())?;

        if let RunOutcome::Completed(summary) = &outcome {
            if !summary.simulate {
                self.remember_origin(&run_config.source_dir);
            }
        }

        Ok(outcome)
    }

    /// 從最近使用的來源路徑中選擇，ESC 取消時回傳 `None`
    pub fn prompt_origin(&self, default_origin: &Path) -> Result<Option<PathBuf>> {
        let recent = &self.config.settings.recent_origins;
        let items = origin_items(recent, default_origin);

        println!("{}", style("(按 ESC 取消)").dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇記憶卡資料夾")
            .items(&items)
            .default(0)
            .interact_opt()?;

        let Some(index) = selection else {
            return Ok(None);
        };

        let origin = match origin_choice(index, recent) {
            OriginChoice::Recent(path) => path,
            OriginChoice::Default => default_origin.to_path_buf(),
            OriginChoice::Manual => {
                let path: String = Input::new()
                    .with_prompt("請輸入記憶卡資料夾路徑")
                    .interact_text()?;
                PathBuf::from(path.trim())
            }
        };
        Ok(Some(origin))
    }

    fn confirm_import(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt("確定要刪除輔助檔並搬移這些檔案嗎？")
            .default(false)
            .interact()?;
        Ok(confirm)
    }

    /// 記錄本次使用的來源路徑
    fn remember_origin(&self, source_dir: &Path) {
        let mut settings = self.config.settings.clone();
        add_recent_origin(&mut settings, &source_dir.display().to_string());
        match save_settings(&settings, Path::new(SETTINGS_FILE_NAME)) {
            Ok(()) => info!("已記錄來源路徑: {}", source_dir.display()),
            Err(e) => warn!("無法儲存路徑歷史: {e:#}"),
        }
    }
}

/// 選單項目：歷史路徑（標示是否存在）、設定檔預設路徑、輸入新路徑
fn origin_items(recent: &[String], default_origin: &Path) -> Vec<String> {
    let mut items: Vec<String> = recent
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let indicator = if Path::new(p).exists() { "✓" } else { "✗" };
            format!("{} [{}] {}", i + 1, indicator, p)
        })
        .collect();
    items.push(format!("預設路徑 {}", default_origin.display()));
    items.push("輸入新路徑...".to_string());
    items
}

fn origin_choice(index: usize, recent: &[String]) -> OriginChoice {
    match index {
        i if i < recent.len() => OriginChoice::Recent(PathBuf::from(&recent[i])),
        i if i == recent.len() => OriginChoice::Default,
        _ => OriginChoice::Manual,
    }
}
