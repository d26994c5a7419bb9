use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Process-wide configuration, loaded once at startup and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tmdb: TmdbConfig,
    pub whatsapp: WhatsappConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub api_key: String,
    /// Language used for metadata resolution and the first trailer search.
    pub primary_language: String,
    /// Language used only for the second trailer search.
    pub secondary_language: String,
    /// Case-insensitive regex matched against video names in the primary
    /// language. The default tolerates both "bande-annonce" and
    /// "bande annonce".
    pub primary_trailer_pattern: String,
    pub secondary_trailer_pattern: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            primary_language: "fr-FR".to_string(),
            secondary_language: "en-US".to_string(),
            primary_trailer_pattern: r"bande[-\s]?annonce".to_string(),
            secondary_trailer_pattern: "trailer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsappConfig {
    pub api_url: String,
    pub username: String,
    pub password: String,
    /// Target identifier, e.g. `<number>@s.whatsapp.net` or a
    /// `<group>@g.us` group.
    pub recipient: String,
}

impl Default for WhatsappConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            username: String::new(),
            password: String::new(),
            recipient: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tmdb.primary_language, "fr-FR");
        assert_eq!(config.tmdb.secondary_language, "en-US");
        assert_eq!(config.tmdb.secondary_trailer_pattern, "trailer");
        assert_eq!(config.whatsapp.api_url, "http://localhost:3000");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tmdb]
            api_key = "abc123"

            [whatsapp]
            recipient = "123456789@s.whatsapp.net"
            "#,
        )
        .unwrap();
        assert_eq!(config.tmdb.api_key, "abc123");
        assert_eq!(config.tmdb.primary_trailer_pattern, r"bande[-\s]?annonce");
        assert_eq!(config.whatsapp.recipient, "123456789@s.whatsapp.net");
        assert!(config.whatsapp.username.is_empty());
    }
}
