mod cli;
mod display;
mod error;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, RenderCommand, RunCommand};
use impact_radar::config::Config;
use log::debug;

const DEFAULT_LOGGING_LEVEL: &str = "warn";

fn main() -> Result<()> {
    // Set RUST_LOG to `DEFAULT_LOGGING_LEVEL` if not set
    let _ =
        std::env::var("RUST_LOG").map_err(|_| std::env::set_var("RUST_LOG", DEFAULT_LOGGING_LEVEL));
    pretty_env_logger::init_timed();
    let args = Cli::parse();
    debug!("args: {args:?}");
    let config: Config = read_config_from_toml();
    debug!("config: {config:?}");

    match args.command {
        Some(command) => command.run(config)?,
        // Without a subcommand, behave like the original one-shot script and
        // render the chart with the configured paths.
        None => RenderCommand::default().run(config)?,
    }
    Ok(())
}

fn read_config_from_toml() -> Config {
    // macOS: ~/Library/Application Support/impact-radar/config.toml
    let file_path = dirs::config_dir()
        .unwrap()
        .join("impact-radar")
        .join("config.toml");
    match std::fs::read_to_string(file_path) {
        Ok(contents) => toml::from_str(&contents).expect("Invalid TOML in config file"),
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                Config::default()
            } else {
                panic!("Error reading config file: {:#?}", e);
            }
        }
    }
}
