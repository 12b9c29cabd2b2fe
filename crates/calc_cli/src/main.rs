//! Binary entry point: argument parsing, logging bootstrap, then the
//! menu REPL until the user exits.

mod console;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calc_shell::{builtin_registrations, Shell, ShellConfig};

use crate::console::RustylineConsole;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Interactive menu-driven calculator shell")]
struct Cli {
    /// Where to persist the command history (overrides the config file)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Suppress the startup banner
    #[arg(long, default_value_t = false)]
    quiet: bool,

    /// Diagnostic filter, e.g. "debug" or "calc_shell=debug"
    /// (falls back to RUST_LOG, then "warn")
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(cli: &Cli) {
    let filter = match &cli.log_filter {
        Some(spec) => EnvFilter::new(spec),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // Diagnostics go to stderr; stdout carries only the menu protocol.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut config = ShellConfig::load();
    if let Some(path) = &cli.history_file {
        config.history_file = path.clone();
    }
    if cli.quiet {
        config.show_banner = false;
    }

    let (mut shell, report) = Shell::new(&config, &builtin_registrations());
    info!(
        loaded = report.loaded.len(),
        failed = report.failed.len(),
        "plugins registered"
    );

    let mut console = RustylineConsole::new()?;
    shell.run(&mut console);
    Ok(())
}
