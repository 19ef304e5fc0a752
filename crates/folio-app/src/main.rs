//! folio console entry point.
//!
//! Interactive portfolio terminal. With a TTY on both ends it runs a
//! raw-mode console with history recall, Tab completion and an intro
//! sequence; otherwise every stdin line is submitted in turn and the
//! scrollback is written to stdout.
//!
//! Usage: `folio [config.toml]` (or set `FOLIO_CONFIG`).

mod batch;
mod console;
mod input;
mod view;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};

use folio_terminal::{CommandRegistry, Session, register_builtins};
use folio_types::config::FolioConfig;

use view::ConsoleView;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    if explicit
        .as_deref()
        .is_some_and(|a| a.as_os_str() == "-h" || a.as_os_str() == "--help")
    {
        println!("usage: folio [config.toml]");
        return Ok(());
    }

    let config = FolioConfig::resolve(explicit.as_deref()).context("loading configuration")?;
    let profile = config.load_profile().context("loading profile")?;
    let prompt = config.prompt_for(&profile);
    log::info!("Starting folio for {}", profile.name);

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    let mut session = Session::new(registry, profile);

    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        console::run(&mut session, &config, &prompt)?;
    } else {
        let color = io::stdout().is_terminal();
        let mut view = ConsoleView::new(io::stdout().lock(), prompt, false, color);
        batch::run(&mut session, &mut view, io::stdin().lock())?;
    }
    Ok(())
}
