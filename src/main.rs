use anyhow::Result;
use chrono::Local;
use clap::Parser;
use console::{Term, style};
use gopro_import::cli::Cli;
use gopro_import::component::GoproImporter;
use gopro_import::config::Config;
use gopro_import::init;
use log::{info, warn};

fn main() -> Result<()> {
    init::init();
    let mut cli = Cli::parse();

    let config = Config::new();
    let importer = GoproImporter::new(config.clone());

    // 未指定來源時，讓操作者從最近使用過的路徑中挑選
    if !cli.has_explicit_origin()
        && !cli.yes
        && !config.settings.recent_origins.is_empty()
        && Term::stdout().is_term()
    {
        match importer.prompt_origin(&cli.drive_origin(&config.settings))? {
            Some(origin) => cli.origin_fullpath = Some(origin),
            None => {
                println!("{}", style("操作已取消").yellow());
                return Ok(());
            }
        }
    }

    let run_config = cli.resolve(&config.settings, Local::now())?;
    match importer.run(&run_config, cli.yes) {
        Ok(_) => {
            info!("Program exited normally");
            Ok(())
        }
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
            std::process::exit(1);
        }
    }
}
