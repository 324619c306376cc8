use std::io;
use std::path::Path;

/// 目的地資料夾的準備結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Created,
    AlreadyExists,
}

/// 確保資料夾存在；已存在不視為錯誤
pub fn ensure_directory_exists(path: &Path) -> io::Result<DirectoryStatus> {
    if path.is_dir() {
        return Ok(DirectoryStatus::AlreadyExists);
    }
    std::fs::create_dir_all(path)?;
    Ok(DirectoryStatus::Created)
}
