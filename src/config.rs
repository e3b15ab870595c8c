//! Configuration and CLI argument handling

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::{CommandFactory, Parser, Subcommand};

use crate::{
    error::Result,
    render::Font,
    settings::Settings,
};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "cli-timer")]
#[command(about = "A terminal countdown timer and stopwatch")]
#[command(version)]
pub struct Config {
    #[command(subcommand)]
    pub action: Action,

    /// Settings file to use instead of ~/.cli-timer/config.json
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Display style for this run (plain, block, ascii)
    #[arg(long, global = true)]
    pub font: Option<String>,

    /// Initial display size, adjustable with +/- while running
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Count down from a duration, e.g. `timer 5 min 2 sec`
    Timer {
        /// `<value> <unit>` pairs; units are h/hr, m/min, s/sec and long forms
        duration: Vec<String>,
    },
    /// Count up from zero
    Stopwatch,
    /// List display styles, or save one as the default
    Style {
        /// Style to save
        font: Option<String>,
    },
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        <Self as Parser>::parse_from(implied_args(std::env::args_os()))
    }

    /// Usage line shown alongside configuration errors
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Settings file location, if one can be determined
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Settings::default_path)
    }

    /// Font for this run: `--font` first, then the settings file
    pub fn font(&self, settings: &Settings) -> Result<Font> {
        match &self.font {
            Some(name) => name.parse(),
            None => Ok(settings.font()),
        }
    }

    /// Initial display scale: `--scale` first, then the settings file
    pub fn display_scale(&self, settings: &Settings) -> u32 {
        self.scale.unwrap_or(settings.display_scale).max(1)
    }
}

/// Insert the subcommand implied by the executable name.
///
/// Installed as `timer` or `stopwatch` (e.g. via symlink), the program acts
/// as if that subcommand had been typed.
pub fn implied_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    let implied = args
        .first()
        .and_then(|program| Path::new(program).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| matches!(*stem, "timer" | "stopwatch"))
        .map(OsString::from);

    if let Some(subcommand) = implied {
        args.insert(1, subcommand);
    }
    args
}
