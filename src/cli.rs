//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "supertui")]
#[command(about = "Keyboard-driven terminal shell for tasks and projects")]
#[command(version)]
pub struct Cli {
    /// Configuration file (created with defaults when missing)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start on the idle shell
    #[arg(long, conflicts_with = "auto_start")]
    pub idle: bool,

    /// Start on the dashboard
    #[arg(long)]
    pub auto_start: bool,

    /// Theme preset or color specifier
    #[arg(long, value_name = "SPEC")]
    pub theme: Option<String>,

    /// JSON task file
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the configuration this invocation asks for, with environment
    /// and flag overrides applied on top
    pub fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from_file(path)?,
            None => AppConfig::load()?,
        };
        config.apply_env_overrides();
        self.apply(&mut config);
        Ok(config)
    }

    /// Flags override everything else
    pub fn apply(&self, config: &mut AppConfig) {
        if self.idle {
            config.ui.auto_start = false;
        }
        if self.auto_start {
            config.ui.auto_start = true;
        }
        if let Some(theme) = &self.theme {
            config.ui.theme = theme.clone();
        }
        if let Some(data) = &self.data {
            config.data.path = Some(data.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.to_lowercase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["supertui", "--idle", "--theme", "ocean", "--log-level", "DEBUG"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert!(!config.ui.auto_start);
        assert_eq!(config.ui.theme, "ocean");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.data.path, None);
    }

    #[test]
    fn idle_and_auto_start_conflict() {
        assert!(Cli::try_parse_from(["supertui", "--idle", "--auto-start"]).is_err());
    }
}
