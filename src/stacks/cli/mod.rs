//! # CLI Layer
//!
//! The only place in the codebase that touches the terminal. It parses flags,
//! sets up logging and colors, builds the [`LibraryApi`] over a [`FileStore`] and
//! hands both to the interactive [`Shell`](shell::Shell).
//!
//! - `setup`: clap argument definitions
//! - `menu`: parsing of menu choices
//! - `shell`: the menu loop
//! - `render`: markers, menus and the book table

mod menu;
mod render;
mod setup;
mod shell;

use clap::Parser;
use setup::Cli;
use shell::{Shell, ShellOptions};
use stacks::api::{CmdMessage, LibraryApi};
use stacks::config::LibraryConfig;
use stacks::error::Result;
use stacks::store::fs::FileStore;
use std::io::{self, IsTerminal};
use tracing::Level;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut startup = Vec::new();
    let config = match LibraryConfig::load(&cli.data_dir) {
        Ok(config) => config,
        Err(e) => {
            startup.push(CmdMessage::warning(format!(
                "Ignoring unreadable config, using defaults: {}",
                e
            )));
            LibraryConfig::default()
        }
    };

    let use_color = config.color && !cli.no_color && io::stdout().is_terminal();
    colored::control::set_override(use_color);

    tracing::debug!(data_dir = %cli.data_dir.display(), ?config, "starting");

    let api = LibraryApi::new(FileStore::new(&cli.data_dir));
    let options = ShellOptions {
        pause_after_action: config.pause_after_action,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(api, stdin.lock(), stdout.lock(), options);
    shell.print_messages(&startup)?;
    shell.run()
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
