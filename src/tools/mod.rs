mod entry_lister;
mod file_mover;
mod path_validator;

pub use entry_lister::{DirectoryLister, Entry, EntryKind, EntryLister};
pub use file_mover::move_file;
pub use path_validator::{DirectoryStatus, ensure_directory_exists};
