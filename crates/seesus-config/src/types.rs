use seesus_core::{MatchType, RuleKey};
use seesus_rule_engine::{compile_pattern, Classifier, EditConfirmation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Log levels accepted in `settings.log_level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for seesus
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeesusConfig {
    /// Schema version for migrations
    pub version: String,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Rule edits applied on startup, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<RuleOverride>,
}

impl Default for SeesusConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            settings: Settings::default(),
            overrides: Vec::new(),
        }
    }
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Custom data set replacing the built-in SDG data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Default log level when neither RUST_LOG nor -v is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// A rule edit kept in the config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleOverride {
    /// Goal (`SDG1`) or target (`SDG1_general`) id
    pub id: String,

    #[serde(default = "default_match_type")]
    pub match_type: MatchType,

    pub pattern: String,
}

impl SeesusConfig {
    /// Check settings and overrides without touching any rule table
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.settings.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log_level '{}' is not one of {}",
                self.settings.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        for (i, o) in self.overrides.iter().enumerate() {
            RuleKey::parse(&o.id)
                .map_err(|e| ConfigError::Invalid(format!("overrides[{}]: {}", i, e)))?;
            compile_pattern(&o.pattern)
                .map_err(|e| ConfigError::Invalid(format!("overrides[{}]: {}", i, e)))?;
        }

        Ok(())
    }

    /// Apply every override to the classifier's rule table
    ///
    /// Stops at the first override the classifier rejects.
    pub fn apply_overrides(
        &self,
        classifier: &Classifier,
    ) -> Result<Vec<EditConfirmation>, ConfigError> {
        self.overrides
            .iter()
            .map(|o| {
                classifier
                    .edit_syntax(&o.id, &o.pattern, o.match_type)
                    .map_err(|e| ConfigError::Invalid(format!("override {}: {}", o.id, e)))
            })
            .collect()
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_match_type() -> MatchType {
    MatchType::Indirect
}
