use crate::security::set_config_permissions;
use crate::types::SeesusConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during config management
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

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Manager for seesus configuration
///
/// Manages the user configuration stored in ~/.seesus/config.toml.
pub struct ConfigManager {
    config_path: PathBuf,
    config: SeesusConfig,
}

impl ConfigManager {
    /// Get the default config path (~/.seesus/config.toml)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".seesus").join("config.toml"))
    }

    /// Load config from default location
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from specific path (useful for testing)
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config: SeesusConfig = toml::from_str(&contents)?;

        Ok(Self {
            config_path: path.to_path_buf(),
            config,
        })
    }

    /// Load config, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load_from(path) {
            Err(ConfigError::ConfigNotFound(_)) => Ok(Self {
                config_path: path.to_path_buf(),
                config: SeesusConfig::default(),
            }),
            other => other,
        }
    }

    /// Initialize a new config file at the default location
    pub fn init() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::init_at(&config_path)
    }

    /// Initialize config at specific path
    pub fn init_at(path: &Path) -> Result<Self, ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let manager = Self {
            config_path: path.to_path_buf(),
            config: SeesusConfig::default(),
        };
        manager.save()?;

        Ok(manager)
    }

    /// Save config to disk atomically
    ///
    /// Uses a temporary file and atomic rename to prevent corruption
    pub fn save(&self) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(&self.config)?;

        let temp_path = self.config_path.with_extension("toml.tmp");
        fs::write(&temp_path, toml_str)?;
        set_config_permissions(&temp_path)?;
        fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }

    /// Path this manager reads from and saves to
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get reference to config
    pub fn config(&self) -> &SeesusConfig {
        &self.config
    }

    /// Get mutable reference to config (caller must call save())
    pub fn config_mut(&mut self) -> &mut SeesusConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutputFormat, RuleOverride};
    use seesus_core::MatchType;
    use tempfile::TempDir;

    #[test]
    fn test_init_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let manager = ConfigManager::init_at(&config_path).unwrap();
        assert_eq!(manager.config().version, "1.0");
        assert!(config_path.exists());

        let loaded = ConfigManager::load_from(&config_path).unwrap();
        assert_eq!(loaded.config(), manager.config());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        assert!(matches!(
            ConfigManager::load_from(&path),
            Err(ConfigError::ConfigNotFound(_))
        ));

        let manager = ConfigManager::load_or_default(&path).unwrap();
        assert_eq!(manager.config(), &SeesusConfig::default());
        assert_eq!(manager.path(), path.as_path());
    }

    #[test]
    fn test_save_persists_changes() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut manager = ConfigManager::init_at(&config_path).unwrap();

        manager.config_mut().settings.output = OutputFormat::Json;
        manager.config_mut().overrides.push(RuleOverride {
            id: "SDG13".to_string(),
            match_type: MatchType::Indirect,
            pattern: "heatwaves?".to_string(),
        });
        manager.save().unwrap();

        let loaded = ConfigManager::load_from(&config_path).unwrap();
        assert_eq!(loaded.config().settings.output, OutputFormat::Json);
        assert_eq!(loaded.config().overrides.len(), 1);
        assert!(!config_path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "version = ").unwrap();

        assert!(matches!(
            ConfigManager::load_from(&config_path),
            Err(ConfigError::TomlDe(_))
        ));
    }
}
