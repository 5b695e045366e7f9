//! Tracing setup and the fire-and-forget debug sink
//!
//! The shell owns stdout, so log output goes to a file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use directories::BaseDirs;
use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter directive: `RUST_LOG` wins for the crates it names,
/// otherwise the configured level applies to both shell crates.
pub fn filter_directive(level: &str, env_override: &str) -> String {
    let level = level.to_lowercase();
    let default_directive = format!("supertui={level},supertui_tui={level}");
    if env_override.trim().is_empty() {
        default_directive
    } else if env_override.contains("supertui") {
        env_override.to_string()
    } else {
        format!("{},{}", env_override, default_directive)
    }
}

/// `<data-local-dir>/supertui/supertui.log`
pub fn default_log_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.data_local_dir().join("supertui").join("supertui.log"))
}

fn open_log(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber.
///
/// Returns the log file in use, or `None` when logs are discarded because no
/// file could be opened.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let env_override = std::env::var("RUST_LOG").unwrap_or_default();
    let filter = EnvFilter::try_new(filter_directive(&config.level, &env_override))
        .map_err(|e| anyhow::anyhow!("Invalid log filter: {}", e))?;

    let target = config.file.clone().or_else(default_log_path);
    let (writer, path) = match target {
        Some(path) => match open_log(&path) {
            Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
            Err(e) => {
                eprintln!("Warning: could not open log file {}: {}", path.display(), e);
                (BoxMakeWriter::new(std::io::sink), None)
            }
        },
        None => (BoxMakeWriter::new(std::io::sink), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    Ok(path)
}

/// Record a diagnostic message under `category`; never fails
pub fn log_debug(level: Level, category: &str, message: &str) {
    match level {
        Level::ERROR => tracing::event!(Level::ERROR, category, "{}", message),
        Level::WARN => tracing::event!(Level::WARN, category, "{}", message),
        Level::INFO => tracing::event!(Level::INFO, category, "{}", message),
        Level::DEBUG => tracing::event!(Level::DEBUG, category, "{}", message),
        _ => tracing::event!(Level::TRACE, category, "{}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_combines_with_rust_log() {
        assert_eq!(filter_directive("INFO", ""), "supertui=info,supertui_tui=info");
        assert_eq!(
            filter_directive("debug", "hyper=warn"),
            "hyper=warn,supertui=debug,supertui_tui=debug"
        );
        assert_eq!(filter_directive("debug", "supertui_tui=trace"), "supertui_tui=trace");
    }

    #[test]
    fn log_debug_without_subscriber_is_harmless() {
        log_debug(Level::WARN, "render", "frame skipped");
        log_debug(Level::TRACE, "input", "key");
    }
}
