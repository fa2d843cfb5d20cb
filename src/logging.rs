//! File logging
//!
//! The terminal belongs to the TUI, so log records go to a file. Debug builds
//! log at `debug`, release builds at `warn`; `RUST_LOG` overrides both.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

const LOG_FILE: &str = "rangeview.log";

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

fn default_filter() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "warn" }
}

/// One log line: timestamp, level, target, message
pub fn format_line(
    timestamp: &DateTime<Local>,
    level: log::Level,
    target: &str,
    message: &str,
) -> String {
    format!(
        "{} [{:<5}] {}: {}",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

/// Install the global logger writing to `path` (or the default log file)
///
/// Logging is best effort: if the file cannot be opened nothing is logged.
pub fn init(path: Option<&Path>) {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return,
    };

    let env = env_logger::Env::default().default_filter_or(default_filter());
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let line = format_line(
                &Local::now(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
