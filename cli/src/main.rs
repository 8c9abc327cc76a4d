mod app;
mod cli;
mod commands;
mod config;
mod data;
mod input;
mod logging;
mod theme;
mod ui;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::warn;

use cli::{Cli, Commands};
use config::{ensure_dirs, LogLevel, UserConfig};
use logging::LogMode;

fn main() -> Result<()> {
    color_eyre::install()?;
    let dirs_result = ensure_dirs();

    let cli = Cli::parse();
    let mut config = UserConfig::load();
    config.merge_with_args(cli.appearance.as_deref(), cli.theme.as_deref());
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);

    let mode = match cli.command {
        None | Some(Commands::Ui) => LogMode::File,
        Some(_) => LogMode::Stderr,
    };
    let _guard = logging::init(config.log_level, mode, log_level_override);

    if let Err(e) = dirs_result {
        warn!(error = %e, "Could not create config directories");
    }

    match cli.command {
        Some(Commands::Snapshot { compact }) => commands::snapshot::run(&config, compact),
        Some(Commands::Config { path, reset, edit }) => commands::config::run(path, reset, edit),
        Some(Commands::Ui) | None => app::run_tui(config),
    }
}
