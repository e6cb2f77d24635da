use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

pub const DEFAULT_TOOL_COMMAND: &str = "arduino-cli board list";
pub const DEFAULT_SELECTION_PATH: &str = ".vscode/arduino.json";

pub const TOOL_ENV: &str = "BOARDSEL_TOOL";
pub const SELECTION_ENV: &str = "BOARDSEL_CONFIG";

/// Optional `boardsel.toml` in the XDG config directory.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub tool_command: Option<String>,
    pub selection_path: Option<PathBuf>,
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

pub struct Config {
    /// Command line that prints the board table.
    pub tool_command: String,
    /// Default location of the saved selection.
    pub selection_path: PathBuf,
    pub settings_path: Option<PathBuf>,
}

impl Config {
    /// Builds the configuration from, in order of precedence: the given
    /// overrides, the environment, `boardsel.toml`, and built-in defaults.
    pub fn new(tool_override: Option<String>, selection_override: Option<PathBuf>) -> Result<Self> {
        let tool_override = tool_override.or_else(|| std::env::var(TOOL_ENV).ok());
        let selection_override =
            selection_override.or_else(|| std::env::var(SELECTION_ENV).ok().map(PathBuf::from));

        let settings_path = BaseDirectories::with_prefix("boardsel")
            .ok()
            .and_then(|xdg| xdg.find_config_file("boardsel.toml"));

        let settings = match &settings_path {
            Some(path) => {
                log::debug!("Loading settings from {}", path.display());
                Settings::load(path)?
            }
            None => Settings::default(),
        };

        Ok(Self::with_settings(
            tool_override,
            selection_override,
            settings,
            settings_path,
        ))
    }

    pub fn with_settings(
        tool_override: Option<String>,
        selection_override: Option<PathBuf>,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let tool_command = tool_override
            .or(settings.tool_command)
            .unwrap_or_else(|| DEFAULT_TOOL_COMMAND.to_string());
        let selection_path = selection_override
            .or(settings.selection_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SELECTION_PATH));

        Self {
            tool_command,
            selection_path,
            settings_path,
        }
    }
}
