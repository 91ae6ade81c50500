//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colormode::{ColorMode, Config};

/// Resolve, toggle and watch the dark/light theme preference.
#[derive(Debug, Parser)]
#[command(name = "colormode", version, about)]
pub struct Cli {
    /// Preference file (default: $XDG_CONFIG_HOME/colormode/prefs.json)
    #[arg(long, global = true, env = "COLORMODE_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Key the preference is stored under
    #[arg(long, global = true, default_value = colormode::DEFAULT_STORAGE_KEY)]
    pub key: String,

    /// Pretend the OS reports this mode instead of detecting it
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    pub os: Option<ModeArg>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Show the stored preference, the OS preference and the applied mode
    Status,
    /// Resolve and apply the effective mode
    Init,
    /// Flip the theme and store the choice
    Toggle,
    /// Follow the OS preference, ignoring any stored choice
    Watch {
        /// Polling interval in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
        /// Stop after this many changes
        #[arg(long)]
        changes: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Dark,
    Light,
}

impl From<ModeArg> for ColorMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Dark => ColorMode::Dark,
            ModeArg::Light => ColorMode::Light,
        }
    }
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new().storage_key(self.key.clone())
    }

    /// The preference file to use.
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store {
            return Ok(path.clone());
        }
        let base = match std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => match std::env::var_os("HOME").filter(|v| !v.is_empty()) {
                Some(home) => PathBuf::from(home).join(".config"),
                None => bail!("cannot locate a config directory; pass --store"),
            },
        };
        Ok(base.join("colormode").join("prefs.json"))
    }
}
