//! Config loading and classifier construction shared by every command.

use crate::rule_arg::RuleArg;
use anyhow::{Context, Result};
use seesus_config::{ConfigError, ConfigManager, SeesusConfig};
use seesus_rule_engine::{Classifier, DataSet, EditConfirmation};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the config file path: explicit `--config`, else ~/.seesus/config.toml
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(ConfigManager::config_path()?),
    }
}

/// Load the effective config
///
/// A missing file (or a missing home directory) yields built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<SeesusConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match ConfigManager::config_path() {
            Ok(path) => path,
            Err(ConfigError::HomeNotFound) => return Ok(SeesusConfig::default()),
            Err(e) => return Err(e.into()),
        },
    };

    let manager = ConfigManager::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok(manager.config().clone())
}

/// Build a classifier from `--data`, the config's `data_file`, or the built-in set
///
/// Config overrides are applied first, then `--rule` edits in order.
pub fn build_classifier(
    config: &SeesusConfig,
    data: Option<&Path>,
    rules: &[RuleArg],
) -> Result<(Classifier, Vec<EditConfirmation>)> {
    let data_file = data.or(config.settings.data_file.as_deref());

    let classifier = match data_file {
        Some(path) => {
            let data_set = DataSet::from_path(path)
                .with_context(|| format!("Failed to load data set from {}", path.display()))?;
            Classifier::new(data_set)
        }
        None => Classifier::built_in().context("Failed to load built-in SDG data")?,
    };
    debug!(?classifier, "Classifier ready");

    let mut confirmations = config.apply_overrides(&classifier)?;
    for rule in rules {
        let confirmation = classifier
            .edit_syntax(&rule.id, &rule.pattern, rule.match_type)
            .with_context(|| format!("Failed to apply --rule {}", rule.id))?;
        confirmations.push(confirmation);
    }

    Ok((classifier, confirmations))
}
