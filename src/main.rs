use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use rangeview::app::App;
use rangeview::config::{self, ConfigResult};
use rangeview::logging;

/// How long the event loop waits for input before advancing timers
const TICK_RATE: Duration = Duration::from_millis(50);

/// Bar chart of two fetched series, filtered by an inclusive value range
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Chart data endpoint (overrides the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Config file to read instead of ~/.config/rangeview/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to write the log (defaults to the system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(args.log_file.as_deref());

    let ConfigResult {
        config: mut app_config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    if let Some(url) = args.url {
        app_config.source.url = url;
    }

    let app = App::new(&app_config)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events(TICK_RATE)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
