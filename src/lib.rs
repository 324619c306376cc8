pub mod cli;
pub mod component;
pub mod config;
pub mod init;
pub mod tools;

pub use component::gopro_importer::{
    HaltReason, ImportError, ImportObserver, RunOutcome, RunSummary, run_import,
};
pub use config::RunConfig;
