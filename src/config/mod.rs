pub mod load;
pub mod save;
pub mod types;

pub use types::{Config, ImportSettings, MAX_RECENT_ORIGINS, RunConfig, SETTINGS_FILE_NAME};
