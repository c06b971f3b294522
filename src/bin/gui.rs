use std::path::PathBuf;
use std::process::ExitCode;

use julia_explorer::{DEFAULT_CONFIG_PATH, ExplorerConfig, RunGuiCommand};
use log::error;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let config = ExplorerConfig::load_or_default(&config_path)?;
    RunGuiCommand::new(config).execute()?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
