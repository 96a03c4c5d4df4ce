use crate::types::RegsConfig;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or validating config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid growth factor {0}: must be a finite number greater than 1.0")]
    InvalidGrowthFactor(f64),

    #[error("Invalid shrink factor {0}: must be in [0.0, 1.0)")]
    InvalidShrinkFactor(f64),

    #[error("Invalid limit: {name} must be greater than zero")]
    InvalidLimit { name: &'static str },
}

impl RegsConfig {
    /// Parse and validate config from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: RegsConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = RegsConfig::from_toml_str(
            r#"
            [store]
            growth_factor = 1.5
            "#,
        )
        .unwrap();

        assert_eq!(config.store.growth_factor, 1.5);
        assert_eq!(config.store.shrink_factor, 0.25);
        assert_eq!(config.regex, crate::RegexLimits::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = RegsConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegsConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected_on_parse() {
        let result = RegsConfig::from_toml_str("[store]\ngrowth_factor = 0.9\n");
        assert!(matches!(result, Err(ConfigError::InvalidGrowthFactor(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = RegsConfig::from_toml_str("[store\n");
        assert!(matches!(result, Err(ConfigError::TomlDe(_))));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = RegsConfig::default();
        config.store.growth_factor = 3.0;
        config.regex.max_pattern_length = 4096;

        let text = config.to_toml_string().unwrap();
        assert_eq!(RegsConfig::from_toml_str(&text).unwrap(), config);
    }
}
