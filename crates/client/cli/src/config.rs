//! CLI runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use finish_core::RulesConfig;

/// How `finish calc` prints its result table.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Colour-coded table, one column per Crowd Meter level
    #[default]
    Table,
    /// Pretty-printed JSON with the matchup and every outcome
    Json,
}

/// Configuration shared by every `finish` subcommand.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub rules: RulesConfig,
    pub presets_dir: PathBuf,
    pub output: OutputFormat,
    pub color: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            presets_dir: default_presets_dir(),
            output: OutputFormat::default(),
            color: console::colors_enabled(),
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FINISH_PRESETS_DIR` - Directory of preset matchups (default: platform data dir)
    /// - `FINISH_OUTPUT_FORMAT` - `table` or `json` (default: table)
    /// - `FINISH_COLOR` - Force colours on or off (default: terminal detection)
    /// - `FINISH_LOG_DIR` - Also write logs to `finish.log` in this directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("FINISH_PRESETS_DIR") {
            config.presets_dir = PathBuf::from(dir);
        }

        if let Some(format) = read_env::<OutputFormat>("FINISH_OUTPUT_FORMAT") {
            config.output = format;
        }

        if let Some(color) = read_env::<bool>("FINISH_COLOR") {
            config.color = color;
        }

        config.log_dir = env::var("FINISH_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

/// Platform-specific preset directory.
///
/// - macOS: `~/Library/Application Support/finish/presets`
/// - Linux: `~/.local/share/finish/presets` (or `$XDG_DATA_HOME/finish/presets`)
/// - Windows: `%APPDATA%\finish\presets`
/// - Fallback: `./presets`
pub fn default_presets_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "finish")
        .map(|dirs| dirs.data_dir().join("presets"))
        .unwrap_or_else(|| PathBuf::from("./presets"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("yaml").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn default_presets_dir_ends_in_presets() {
        assert!(default_presets_dir().ends_with("presets"));
    }
}
