//! `tweetgen` - terminal client for a remote tweet-generation model
//!
//! Entry point for the application.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tweetgen::app::App;
use tweetgen::cli::{Args, ClientConfig};
use tweetgen::core::HttpGenerationService;
use tweetgen::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let app = match build_app(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    // Run the application
    let result = run_app(&mut terminal, app);

    // Restore the terminal
    ratatui::restore();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal I/O failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Validates configuration, starts logging, and wires the app together.
fn build_app(args: &Args) -> anyhow::Result<App> {
    let config = ClientConfig::from_args(args)?;
    config.paths.ensure_base_dir()?;
    logging::init(&config.paths.log_file())?;

    let service = HttpGenerationService::new(config.endpoint, config.timeout)?;
    info!(
        endpoint = %service.endpoint(),
        timeout_secs = config.timeout.as_secs(),
        data_dir = %config.paths.base().display(),
        "starting tweetgen"
    );

    let store = config.paths.store();
    Ok(App::new(Arc::new(service), Arc::new(store)))
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> std::io::Result<()> {
    loop {
        // Layout calculation must happen inside the draw closure
        // so it uses the exact same area as rendering
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        // Poll for events with a short timeout
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        // Apply any generation results that arrived
        app.process_events();

        if app.should_quit() {
            break;
        }
    }

    info!("exiting");
    Ok(())
}
