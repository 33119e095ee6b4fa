// Runtime configuration, resolved from the command line and the user's
// config directory.

use crate::cli::Cli;
use crate::logging::{LogTarget, default_log_path, level_from_verbosity};
use crate::provider::{CommandProvider, FileNameList, NameListProvider, NoNameList};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Cli,
    Tui,
}

/// Where the player-name list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    Command(String),
    File(PathBuf),
    Defaults,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub names: NameSource,
    pub seed: Option<u64>,
    pub ui: UiMode,
    pub log_level: log::LevelFilter,
    pub log_target: LogTarget,
}

impl Config {
    /// Resolve against the real user config directory.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, default_names_path().as_deref())
    }

    /// Precedence: `--names-command`, then `--input`, then a players file
    /// in the config directory if one exists, then the built-in defaults.
    #[must_use]
    pub fn resolve(cli: &Cli, fallback_names: Option<&Path>) -> Self {
        let names = if let Some(command) = &cli.names_command {
            NameSource::Command(command.clone())
        } else if let Some(path) = &cli.wordbank_path {
            NameSource::File(PathBuf::from(path))
        } else if let Some(path) = fallback_names
            && path.is_file()
        {
            NameSource::File(path.to_path_buf())
        } else {
            NameSource::Defaults
        };

        let ui = if cli.tui { UiMode::Tui } else { UiMode::Cli };
        let log_target = match (ui, default_log_path()) {
            (UiMode::Tui, Some(path)) => LogTarget::File(path),
            _ => LogTarget::Stderr,
        };

        Self {
            names,
            seed: cli.seed,
            ui,
            log_level: level_from_verbosity(cli.verbose),
            log_target,
        }
    }

    #[must_use]
    pub fn name_provider(&self) -> Box<dyn NameListProvider> {
        match &self.names {
            NameSource::Command(command) => Box::new(CommandProvider::new(command.clone())),
            NameSource::File(path) => Box::new(FileNameList::new(path)),
            NameSource::Defaults => Box::new(NoNameList),
        }
    }
}

/// `<config_dir>/playerdle/players.txt`
#[must_use]
pub fn default_names_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("playerdle").join("players.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::{WordPool, acquire};

    fn cli() -> Cli {
        Cli {
            wordbank_path: None,
            names_command: None,
            seed: None,
            tui: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(&cli(), None);
        assert_eq!(config.names, NameSource::Defaults);
        assert_eq!(config.ui, UiMode::Cli);
        assert_eq!(config.log_target, LogTarget::Stderr);
        assert_eq!(config.log_level, log::LevelFilter::Warn);
        assert_eq!(acquire(config.name_provider().as_ref()), WordPool::default_players());
    }

    #[test]
    fn test_command_beats_input() {
        let cli = Cli {
            wordbank_path: Some("players.txt".to_string()),
            names_command: Some("echo saka".to_string()),
            ..cli()
        };
        let config = Config::resolve(&cli, None);
        assert_eq!(config.names, NameSource::Command("echo saka".to_string()));
    }

    #[test]
    fn test_input_path() {
        let cli = Cli {
            wordbank_path: Some("players.txt".to_string()),
            seed: Some(5),
            verbose: 2,
            ..cli()
        };
        let config = Config::resolve(&cli, None);
        assert_eq!(config.names, NameSource::File(PathBuf::from("players.txt")));
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_fallback_file_only_when_present() {
        let missing = std::env::temp_dir().join("playerdle_config_missing.txt");
        let _ = std::fs::remove_file(&missing);
        assert_eq!(Config::resolve(&cli(), Some(&missing)).names, NameSource::Defaults);

        let present = std::env::temp_dir().join("playerdle_config_present.txt");
        std::fs::write(&present, "declan rice\n").unwrap();
        assert_eq!(
            Config::resolve(&cli(), Some(&present)).names,
            NameSource::File(present.clone())
        );
        let _ = std::fs::remove_file(&present);
    }

    #[test]
    fn test_tui_logs_to_file() {
        let cli = Cli { tui: true, ..cli() };
        let config = Config::resolve(&cli, None);
        assert_eq!(config.ui, UiMode::Tui);
        if default_log_path().is_some() {
            assert!(matches!(config.log_target, LogTarget::File(_)));
        }
    }
}
