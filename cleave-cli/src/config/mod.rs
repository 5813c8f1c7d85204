//! Configuration module

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use cleave_core::{Delimiters, Strategy};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SegmentationConfig {
    /// Word boundary strategy
    #[serde(default)]
    pub strategy: Strategy,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Delimiter style
    #[serde(default)]
    pub separators: SeparatorStyle,
}

/// Delimiters written between graphemes and words
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    /// One grapheme per line, `" \n"` after each word
    #[default]
    Newline,
    /// U+001F between graphemes, U+001E after each word
    Ascii,
}

impl SeparatorStyle {
    /// Delimiter set for this style
    pub fn delimiters(self) -> Delimiters {
        match self {
            SeparatorStyle::Newline => Delimiters::newline(),
            SeparatorStyle::Ascii => Delimiters::ascii_separators(),
        }
    }
}

/// Logging-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Seconds between progress messages at debug level
    pub progress_interval_secs: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            progress_interval_secs: 60,
        }
    }
}

impl LoggingConfig {
    /// Progress interval as a duration
    pub fn progress_interval(&self) -> Duration {
        Duration::from_secs(self.progress_interval_secs)
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config = toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.segmentation.strategy, Strategy::Unicode);
        assert_eq!(config.output.separators, SeparatorStyle::Newline);
        assert_eq!(config.logging.progress_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml(
            r#"
[segmentation]
strategy = "whitespace"

[output]
separators = "ascii"

[logging]
progress_interval_secs = 5
"#,
        )
        .unwrap();

        assert_eq!(config.segmentation.strategy, Strategy::Whitespace);
        assert_eq!(config.output.separators, SeparatorStyle::Ascii);
        assert_eq!(config.logging.progress_interval_secs, 5);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let result = CliConfig::from_toml("[segmentation]\nstrategy = \"regex\"\n");
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(CliConfig::from_toml("[segmentation]\nlanguage = \"en\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[segmentation]\nstrategy = \"whitespace\"\n").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.segmentation.strategy, Strategy::Whitespace);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/cleave.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_separator_style_delimiters() {
        assert_eq!(SeparatorStyle::Newline.delimiters(), Delimiters::newline());
        assert_eq!(
            SeparatorStyle::Ascii.delimiters(),
            Delimiters::ascii_separators()
        );
    }
}
