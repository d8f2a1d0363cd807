// ABOUTME: Main entry point for alert-wizard with TUI and CLI support
//
// Binary: alert-wizard
// Usage: alert-wizard [COMMAND]
// - No command: launches the interactive wizard
// - tenants: list tenants available for selection
// - add: apply an alert configuration without the TUI

#![allow(missing_docs)]

use alert_wizard::api::HttpAlertApi;
use alert_wizard::app::{App, EventHandler};
use alert_wizard::cli::{self, Cli, Commands};
use alert_wizard::config::AppConfig;
use alert_wizard::view::draw_app;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn cleanup_terminal_with_instance<B: Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = Cli::parse();
    let config = AppConfig::load(args.config.as_deref())?;
    tracing::info!("Using alert backend at {}", config.api.base_url);

    let result = match args.command {
        Some(Commands::Tenants) => cli::tenants::execute(&config, args.format).await,
        Some(Commands::Add(add_args)) => cli::add::execute(add_args, &config, args.format).await,

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => {
            let api = HttpAlertApi::new(&config.api).context("Failed to create API client")?;
            let mut app = App::new(api);
            app.init().await;
            run_tui(&mut app, &config).await
        }
    };

    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App<HttpAlertApi>, config: &AppConfig) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Use the tenants or add commands for scripted use."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let result = run_tui_loop(app, &mut terminal, tick_rate).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App<HttpAlertApi>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_app(frame, &app.state))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state)
                    {
                        app.handle_event(app_event);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }

        // Let the spawned submission make progress between polls
        tokio::task::yield_now().await;
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = AppConfig::log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "alert-wizard-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // The TUI owns stdout, so logs only ever go to the file
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alert_wizard=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
