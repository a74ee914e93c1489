use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::auth::api_key::DEFAULT_SCHEME;
use crate::http::header_names::AUTHORIZATION;
use crate::http::parser::ParserLimits;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("header_name must not be empty")]
    EmptyHeaderName,

    #[error("header_name must not contain whitespace, got {0:?}")]
    InvalidHeaderName(String),

    #[error("scheme must be a single non-empty word, got {0:?}")]
    InvalidScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    pub header_name: String,
    pub scheme: String,

    pub max_header_size: usize,
    pub max_header_count: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let limits = ParserLimits::default();
        Self {
            header_name: AUTHORIZATION.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),

            max_header_size: limits.max_header_size,
            max_header_count: limits.max_header_count,
        }
    }
}

impl ExtractorConfig {
    /// Loads the config from a TOML file, falling back to the defaults when
    /// the file cannot be read or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to default config");
                ExtractorConfig::default()
            }
        }
    }

    /// Strict form of [`from_file`](Self::from_file).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<ExtractorConfig>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parser_limits(&self) -> ParserLimits {
        ParserLimits {
            max_header_size: self.max_header_size,
            max_header_count: self.max_header_count,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.header_name.trim().is_empty() {
            return Err(ConfigError::EmptyHeaderName);
        }
        if self.header_name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidHeaderName(self.header_name.clone()));
        }
        if self.scheme.is_empty() || self.scheme.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidScheme(self.scheme.clone()));
        }
        Ok(())
    }
}
