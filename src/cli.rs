//! 命令列參數
//!
//! 解析來源與目的地路徑，產生 [`RunConfig`]

use crate::component::gopro_importer::DATE_FORMAT;
use crate::config::{ImportSettings, RunConfig};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "gopro_import", version, about = "GoPro 記憶卡檔案整理工具")]
pub struct Cli {
    /// 記憶卡磁碟代號（預設取自設定檔）
    #[arg(long)]
    pub origin_drive: Option<String>,

    /// 記憶卡上的相機資料夾（預設取自設定檔）
    #[arg(long)]
    pub origin_subdir: Option<String>,

    /// 來源資料夾完整路徑，指定時忽略 --origin-drive 與 --origin-subdir
    #[arg(long)]
    pub origin_fullpath: Option<PathBuf>,

    /// 目的地資料夾完整路徑（預設為 <destination_root>/<目前時間>）
    #[arg(long, conflicts_with = "destination_stub")]
    pub destination: Option<PathBuf>,

    /// 目的地資料夾名稱，放在 destination_root 之下
    #[arg(long)]
    pub destination_stub: Option<String>,

    /// 只模擬，不刪除、不搬移、不建立資料夾
    #[arg(long)]
    pub simulate: bool,

    /// 不詢問直接執行
    #[arg(short, long)]
    pub yes: bool,
}

impl Cli {
    /// 依設定檔預設值解析出實際的來源與目的地
    pub fn resolve(&self, settings: &ImportSettings, now: DateTime<Local>) -> Result<RunConfig> {
        let source = match &self.origin_fullpath {
            Some(path) => path.clone(),
            None => self.drive_origin(settings),
        };

        let root = Path::new(&settings.destination_root);
        let destination = match (&self.destination, &self.destination_stub) {
            (Some(path), _) => path.clone(),
            (None, Some(stub)) => root.join(stub),
            (None, None) => root.join(now.format(DATE_FORMAT).to_string()),
        };

        Ok(RunConfig::new(
            absolute(&source)?,
            absolute(&destination)?,
            self.simulate,
        ))
    }

    /// 是否在命令列指定了任何來源參數
    pub const fn has_explicit_origin(&self) -> bool {
        self.origin_drive.is_some() || self.origin_subdir.is_some() || self.origin_fullpath.is_some()
    }

    /// 由磁碟代號與相機資料夾組成的來源路徑
    pub fn drive_origin(&self, settings: &ImportSettings) -> PathBuf {
        let drive = self.origin_drive.as_deref().unwrap_or(&settings.origin_drive);
        let subdir = self
            .origin_subdir
            .as_deref()
            .unwrap_or(&settings.origin_subdir);
        drive_path(drive).join(subdir.trim_start_matches(['/', '\\']))
    }
}

fn drive_path(drive: &str) -> PathBuf {
    PathBuf::from(format!("{}:{MAIN_SEPARATOR}", drive.trim_end_matches(':')))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("無法解析路徑: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 0).unwrap()
    }

    fn settings() -> ImportSettings {
        ImportSettings {
            destination_root: "/videos/gopro_raw".to_string(),
            ..ImportSettings::default()
        }
    }

    #[test]
    fn test_fullpath_and_default_destination() {
        let cli = Cli::try_parse_from(["gopro_import", "--origin-fullpath", "/mnt/card/DCIM"]).unwrap();
        let config = cli.resolve(&settings(), now()).unwrap();

        assert_eq!(config.source_dir, PathBuf::from("/mnt/card/DCIM"));
        assert_eq!(
            config.destination_dir,
            PathBuf::from("/videos/gopro_raw/2024-05-06_0708")
        );
        assert!(!config.simulate);
    }

    #[test]
    fn test_destination_stub() {
        let cli = Cli::try_parse_from([
            "gopro_import",
            "--origin-fullpath",
            "/mnt/card",
            "--destination-stub",
            "surf_trip",
            "--simulate",
        ])
        .unwrap();
        let config = cli.resolve(&settings(), now()).unwrap();

        assert_eq!(config.destination_dir, PathBuf::from("/videos/gopro_raw/surf_trip"));
        assert!(config.simulate);
    }

    #[test]
    fn test_destination_conflicts_with_stub() {
        let result = Cli::try_parse_from([
            "gopro_import",
            "--destination",
            "/x",
            "--destination-stub",
            "y",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_drive_and_subdir() {
        let cli = Cli::try_parse_from([
            "gopro_import",
            "--origin-drive",
            "e",
            "--destination",
            "/out",
        ])
        .unwrap();
        let config = cli.resolve(&settings(), now()).unwrap();

        let source = config.source_dir.display().to_string();
        assert!(source.contains("e:"));
        assert!(source.ends_with("100GOPRO"));
        assert_eq!(config.destination_dir, PathBuf::from("/out"));
    }

    #[test]
    fn test_relative_paths_become_absolute() {
        let cli = Cli::try_parse_from([
            "gopro_import",
            "--origin-fullpath",
            "card",
            "--destination",
            "out",
        ])
        .unwrap();
        let config = cli.resolve(&settings(), now()).unwrap();

        assert!(config.source_dir.is_absolute());
        assert!(config.destination_dir.ends_with("out"));
    }

    #[test]
    fn test_explicit_origin_flags() {
        let bare = Cli::try_parse_from(["gopro_import", "--simulate"]).unwrap();
        assert!(!bare.has_explicit_origin());

        for flag in ["--origin-drive", "--origin-subdir", "--origin-fullpath"] {
            let cli = Cli::try_parse_from(["gopro_import", flag, "x"]).unwrap();
            assert!(cli.has_explicit_origin(), "{flag}");
        }
    }

    #[test]
    fn test_drive_origin_uses_settings() {
        let cli = Cli::try_parse_from(["gopro_import"]).unwrap();
        let origin = cli.drive_origin(&settings()).display().to_string();

        assert!(origin.starts_with("g:"));
        assert!(origin.ends_with("100GOPRO"));
    }
}
