use std::process::ExitCode;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use supertui::cli::Cli;
use supertui::config::AppConfig;
use supertui::data::{InMemoryTaskSource, JsonTaskSource, TaskSource};
use supertui::logging;
use supertui::preflight::{StartupError, TerminalProbe};
use supertui::shell::{self, ShellServices};
use supertui_tui::CrosstermTerminal;
use tracing::{error, info};

/// Startup precondition failed; the shell never started
const EXIT_STARTUP: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", StartupError::InvalidConfig(format!("{e:#}")));
            return ExitCode::from(EXIT_STARTUP);
        }
    };

    match logging::init(&config.logging) {
        Ok(Some(path)) => info!(path = %path.display(), "logging to file"),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: {e:#}"),
    }

    if let Err(e) = TerminalProbe::detect().check(config.min_size()) {
        error!(error = %e, "startup check failed");
        eprintln!("Error: {e}");
        return ExitCode::from(EXIT_STARTUP);
    }

    match run(&config) {
        Ok(()) => {
            info!("supertui exited cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "fatal error");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let source: Rc<dyn TaskSource> = match &config.data.path {
        Some(path) => Rc::new(JsonTaskSource::new(path)),
        None => Rc::new(InMemoryTaskSource::sample(today)),
    };
    info!(source = %source.describe(), %today, "starting shell");

    let services = ShellServices::new(source, today, config.global_keys()?)?;
    let mut app = shell::build_application(config, services.clone())?;
    app.push_screen(shell::initial_screen(&services, config.ui.auto_start))?;

    let mut terminal = CrosstermTerminal::new();
    // Restores the terminal when dropped, including during a panic
    let _guard = terminal.enter().context("Failed to prepare the terminal")?;
    app.run(&mut terminal)
}
