//! 目的地檔名產生
//!
//! 純函式：只依據已解析的欄位與拍攝時間組出新檔名，不存取檔案系統。

use super::error::ImportError;
use super::filename_matcher::{MatchedEntry, ShotName};
use chrono::{DateTime, Local};
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 檔名中的時間格式（精確到分鐘）
pub const DATE_FORMAT: &str = "%Y-%m-%d_%H%M";

const NAME_SUFFIX: &str = "gopro";

/// 一筆待執行的移動
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub full_name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

pub fn format_capture_time(created: &DateTime<Local>) -> String {
    created.format(DATE_FORMAT).to_string()
}

/// 產生新檔名（全部小寫）
pub fn destination_file_name(shot: &ShotName, created: &DateTime<Local>) -> String {
    let date_str = format_capture_time(created);
    let name = match shot {
        ShotName::Chaptered {
            chapter,
            file_number,
            ..
        } => format!("{file_number}_{chapter}_{date_str}_{NAME_SUFFIX}.mp4"),
        ShotName::Photo { file_number } => {
            format!("{file_number}_{date_str}_{NAME_SUFFIX}.jpg")
        }
        ShotName::Looped {
            loop_prefix,
            file_number,
            ..
        } => format!("{file_number}_{loop_prefix}_{date_str}_{NAME_SUFFIX}.mp4"),
    };
    name.to_lowercase()
}

/// 為每個項目產生目的地路徑，並確認不會有兩個檔案落到同一路徑
pub fn synthesize_destinations(
    matched: &[MatchedEntry],
    destination_dir: &Path,
) -> Result<Vec<PlannedMove>, ImportError> {
    let plan: Vec<PlannedMove> = matched
        .iter()
        .map(|m| PlannedMove {
            full_name: m.entry.entry.full_name.clone(),
            source: m.entry.entry.path.clone(),
            destination: destination_dir
                .join(destination_file_name(&m.shot, &m.entry.entry.created)),
        })
        .collect();

    check_collisions(&plan)?;

    info!("已產生 {} 個新檔名", plan.len());
    Ok(plan)
}

fn check_collisions(plan: &[PlannedMove]) -> Result<(), ImportError> {
    let mut by_destination: HashMap<&Path, Vec<&Path>> = HashMap::new();
    for item in plan {
        by_destination
            .entry(item.destination.as_path())
            .or_default()
            .push(item.source.as_path());
    }

    let mut collisions: Vec<_> = by_destination
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .collect();
    collisions.sort_by(|a, b| a.0.cmp(b.0));

    match collisions.into_iter().next() {
        Some((destination, sources)) => Err(ImportError::DestinationCollision {
            destination: destination.to_path_buf(),
            sources: sources.into_iter().map(Path::to_path_buf).collect(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::gopro_importer::extension_classifier::{
        ClassifiedEntry, MediaExtension,
    };
    use crate::tools::{Entry, EntryKind};
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn matched(name: &str, created: DateTime<Local>) -> MatchedEntry {
        let extension = if name.to_lowercase().ends_with("jpg") {
            MediaExtension::Jpg
        } else {
            MediaExtension::Mp4
        };
        MatchedEntry {
            entry: ClassifiedEntry {
                entry: Entry {
                    full_name: name.to_string(),
                    path: PathBuf::from("/card").join(name),
                    created,
                    kind: EntryKind::File,
                },
                base_name: name.to_lowercase(),
                extension,
            },
            shot: ShotName::parse(name).unwrap(),
        }
    }

    #[test]
    fn test_photo_name() {
        let shot = ShotName::Photo {
            file_number: "0042".to_string(),
        };
        assert_eq!(
            destination_file_name(&shot, &at(2024, 3, 1, 14, 7)),
            "0042_2024-03-01_1407_gopro.jpg"
        );
    }

    #[test]
    fn test_source_case_does_not_matter() {
        let created = at(2024, 3, 1, 14, 7);
        let plan = synthesize_destinations(
            &[matched("gopr0042.jpg", created)],
            Path::new("/videos/raw"),
        )
        .unwrap();
        let upper = synthesize_destinations(
            &[matched("GOPR0042.JPG", created)],
            Path::new("/videos/raw"),
        )
        .unwrap();

        assert_eq!(
            plan[0].destination,
            PathBuf::from("/videos/raw/0042_2024-03-01_1407_gopro.jpg")
        );
        assert_eq!(plan[0].destination, upper[0].destination);
    }

    #[test]
    fn test_video_names() {
        let created = at(2023, 7, 4, 9, 30);
        let plan = synthesize_destinations(
            &[matched("GH010002.MP4", created), matched("GHLP0003.MP4", created)],
            Path::new("/dest"),
        )
        .unwrap();

        assert_eq!(
            plan[0].destination,
            PathBuf::from("/dest/0002_01_2023-07-04_0930_gopro.mp4")
        );
        assert_eq!(
            plan[1].destination,
            PathBuf::from("/dest/0003_lp_2023-07-04_0930_gopro.mp4")
        );
        assert_eq!(plan[1].source, PathBuf::from("/card/GHLP0003.MP4"));
    }

    #[test]
    fn test_seconds_are_dropped() {
        let created = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_capture_time(&created), "2024-12-31_2359");
    }

    #[test]
    fn test_collision_is_fatal() {
        let created = at(2024, 3, 1, 14, 7);
        let result = synthesize_destinations(
            &[
                matched("GH010001.MP4", created),
                matched("GOPR0005.JPG", created),
                matched("GX010001.MP4", created),
            ],
            Path::new("/dest"),
        );

        match result {
            Err(ImportError::DestinationCollision {
                destination,
                sources,
            }) => {
                assert_eq!(
                    destination,
                    PathBuf::from("/dest/0001_01_2024-03-01_1407_gopro.mp4")
                );
                assert_eq!(
                    sources,
                    vec![
                        PathBuf::from("/card/GH010001.MP4"),
                        PathBuf::from("/card/GX010001.MP4")
                    ]
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
