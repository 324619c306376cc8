use anyhow::{Context, Result};
use filetime::FileTime;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 移動檔案，rename 失敗時（例如跨檔案系統）改用複製後刪除
pub fn move_file(source: &Path, target: &Path) -> Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!(
                "rename 失敗，改用複製: {} -> {} ({e})",
                source.display(),
                target.display()
            );
            copy_and_delete(source, target)
        }
    }
}

/// 複製檔案後刪除原檔案
fn copy_and_delete(source: &Path, target: &Path) -> Result<()> {
    copy_and_delete_with(source, target, |from, to| fs::copy(from, to))
}

/// 先複製到目的地資料夾中的暫存檔，完整寫入並保留時間後才改成正式檔名。
/// 複製失敗時移除暫存檔，目的地不會留下不完整的檔案。
fn copy_and_delete_with<F>(source: &Path, target: &Path, copy: F) -> Result<()>
where
    F: FnOnce(&Path, &Path) -> io::Result<u64>,
{
    let partial = partial_path(target);

    if let Err(e) = copy(source, &partial).and_then(|_| copy_file_times(source, &partial)) {
        discard_partial(&partial);
        return Err(e).with_context(|| {
            format!("複製檔案失敗: {} -> {}", source.display(), target.display())
        });
    }

    if let Err(e) = fs::rename(&partial, target) {
        discard_partial(&partial);
        return Err(e).with_context(|| format!("無法建立目的地檔案: {}", target.display()));
    }

    fs::remove_file(source).with_context(|| format!("刪除原檔案失敗: {}", source.display()))?;

    Ok(())
}

/// 保留原檔的存取與修改時間
fn copy_file_times(source: &Path, target: &Path) -> io::Result<()> {
    let metadata = fs::metadata(source)?;
    filetime::set_file_times(
        target,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
}

fn partial_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.partial"))
}

fn discard_partial(partial: &Path) {
    match fs::remove_file(partial) {
        Ok(()) => debug!("已移除暫存檔: {}", partial.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!("無法移除暫存檔 {}: {e}", partial.display()),
    }
}
