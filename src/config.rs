//! Deck configuration.
//!
//! The deck content is fixed, but the output path and the presenter's
//! contact details are meant to be edited per user, so they live in a TOML
//! file (`deck.toml`) instead of the source. Defaults reproduce the
//! placeholder values of the original deck.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error types for configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level deck configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeckConfig {
    pub output: OutputConfig,
    pub presenter: PresenterConfig,
}

/// Where the generated presentation is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the generated .pptx file
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("HackTrack_Presentation.pptx"),
        }
    }
}

/// Presenter details rendered on the title and closing slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Presenter name
    pub name: String,
    /// Presenter's college
    pub college: String,
    /// Contact email
    pub email: String,
    /// Presenter GitHub profile
    pub github: String,
    /// Project repository
    pub project_github: String,
    /// Live demo URL
    pub demo_url: String,
    /// Presentation date, rendered verbatim
    pub date: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            name: "[Your Name]".to_string(),
            college: "[Your College]".to_string(),
            email: "[your.email@example.com]".to_string(),
            github: "github.com/mehtakrisha16".to_string(),
            project_github: "github.com/mehtakrisha16/HackTrack".to_string(),
            demo_url: "http://localhost:3000".to_string(),
            date: "October 16, 2025".to_string(),
        }
    }
}

impl DeckConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist. A file that exists but cannot be read or
    /// parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_placeholders() {
        let config = DeckConfig::default();
        assert_eq!(
            config.output.path,
            PathBuf::from("HackTrack_Presentation.pptx")
        );
        assert_eq!(config.presenter.name, "[Your Name]");
        assert_eq!(config.presenter.date, "October 16, 2025");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: DeckConfig = toml::from_str(
            r#"
            [output]
            path = "out/deck.pptx"

            [presenter]
            name = "Krisha Mehta"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.path, PathBuf::from("out/deck.pptx"));
        assert_eq!(config.presenter.name, "Krisha Mehta");
        // Unset fields fall back to defaults
        assert_eq!(config.presenter.college, "[Your College]");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = DeckConfig::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config.presenter.github, "github.com/mehtakrisha16");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        let err = DeckConfig::load_or_default(&path);
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }
}
