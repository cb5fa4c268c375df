//! # Bangun CLI Application
//!
//! Terminal interface to the material estimators.
//!
//! ```text
//! calc_cli list
//! calc_cli show brick-wall
//! calc_cli compute brick-wall -s wall_length=4 -s wall_height=3
//! calc_cli compute wall-painting -s wall_length=4 -s wall_height=3 --json
//! calc_cli prompt tile-flooring
//! ```

mod cli;
mod commands;
mod logger;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use calc_core::settings::settings_path_in;
use calc_core::Settings;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let settings = load_settings(cli.config.as_deref())?;
    let display = settings.display;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::List(args) => commands::run_list(args, &mut out),
        Command::Show(args) => commands::run_show(args, &mut out),
        Command::Compute(args) => commands::run_compute(args, &display, &mut out),
        Command::Prompt(args) => commands::run_prompt(args, &display, &mut io::stdin().lock(), &mut out),
    }
}

fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| dirs::config_dir().map(|dir| settings_path_in(&dir)));

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading settings");
            calc_core::load_settings(&path).with_context(|| format!("loading settings from {}", path.display()))
        }
        None => Ok(Settings::default()),
    }
}
