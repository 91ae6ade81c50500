mod cli;
mod commands;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colormode::{set_theme_detector, ColorMode, FileStore, SystemPreference};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "colormode=debug",
        _ => "colormode=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_store(cli: &Cli) -> Result<FileStore> {
    let path = cli.store_path()?;
    tracing::debug!(path = %path.display(), key = %cli.key, "using preference store");
    Ok(FileStore::new(path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(mode) = cli.os.map(ColorMode::from) {
        tracing::debug!(os = %mode, "os preference overridden");
        match mode {
            ColorMode::Dark => set_theme_detector(|| ColorMode::Dark),
            ColorMode::Light => set_theme_detector(|| ColorMode::Light),
        }
    }

    let mut out = io::stdout().lock();
    match &cli.command {
        Command::Status => commands::status(
            &mut out,
            open_store(&cli)?,
            SystemPreference::new(),
            cli.config(),
        ),
        Command::Init => commands::init(
            &mut out,
            open_store(&cli)?,
            SystemPreference::new(),
            cli.config(),
        ),
        Command::Toggle => commands::toggle(
            &mut out,
            open_store(&cli)?,
            SystemPreference::new(),
            cli.config(),
        ),
        Command::Watch {
            interval_ms,
            changes,
        } => commands::watch(
            &mut out,
            SystemPreference::new(),
            Duration::from_millis(*interval_ms),
            *changes,
        ),
    }
}
