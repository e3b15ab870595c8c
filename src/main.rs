//! cli-timer - A terminal countdown timer and stopwatch
//!
//! This is the main entry point for the cli-timer application.

use std::io;

use tracing::{info, warn};

use cli_timer::{
    config::{Action, Config},
    duration::parse_duration,
    error::{Error, Result},
    render::Font,
    settings::Settings,
    state::{Clock, ClockState, Outcome},
    tasks::run_session,
    terminal::{RawTerminal, TerminalSink},
    utils::stop_on_signal,
};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Logs go to stderr so they never land inside a frame
    tracing_subscriber::fmt()
        .with_env_filter(format!("cli_timer={}", config.log_level()))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    if let Err(e) = run(config).await {
        if e.wants_usage() {
            eprintln!("error: {}\n\n{}", e, Config::usage());
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(config: Config) -> Result<()> {
    let settings_path = config.settings_path();
    let settings = settings_path
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();

    let state = match &config.action {
        Action::Timer { duration } => {
            let total = parse_duration(duration)?;
            ClockState::timer(total, config.display_scale(&settings))
        }
        Action::Stopwatch => ClockState::stopwatch(config.display_scale(&settings)),
        Action::Style { font } => {
            return style(font.as_deref(), &settings, settings_path);
        }
    };

    let font = config.font(&settings)?;
    info!("Using font {} at scale {}", font, state.display_scale());
    let clock = Clock::new(state);

    // Handlers go in before raw mode so a signal can never skip the restore
    let signals = stop_on_signal(clock.clone())
        .map_err(|e| warn!("Signal handling unavailable: {}", e))
        .ok();
    let terminal = RawTerminal::enter()?;

    let sink = TerminalSink::stdout(font.renderer(), settings.show_controls);
    let outcome = run_session(&clock, sink, terminal).await;
    if let Some(signals) = signals {
        signals.abort();
    }

    match outcome? {
        Outcome::Stopped => println!("\nStopped."),
        Outcome::Completed => println!("\n{}", settings.completion_message),
    }
    Ok(())
}

/// `style` subcommand: list fonts, or persist the chosen one
fn style(font: Option<&str>, settings: &Settings, path: Option<std::path::PathBuf>) -> Result<()> {
    let Some(name) = font else {
        let current = settings.font();
        println!("Available fonts:");
        for font in Font::ALL {
            let marker = if font == current { "*" } else { " " };
            println!("{} {}", marker, font);
        }
        return Ok(());
    };

    let font: Font = name.parse()?;
    let path = path.ok_or_else(|| Error::Settings {
        action: "locate",
        path: "~/.cli-timer/config.json".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "no home directory"),
    })?;

    let updated = Settings {
        font: font.name().to_string(),
        ..settings.clone()
    };
    updated.save(&path)?;

    println!("Font updated to {} successfully!", font);
    Ok(())
}
