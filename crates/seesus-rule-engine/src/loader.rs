//! Data set loading
//!
//! Turns a TOML data set into a [`GoalRegistry`] and a [`RuleTable`].

use crate::constants::MAX_DATA_FILE_SIZE;
use crate::data_file::DataFile;
use crate::pattern::CompiledPattern;
use crate::registry::{GoalDescriptor, GoalRegistry, TargetDescriptor};
use crate::table::{Rule, RuleTable};
use seesus_core::{Error, Result, TargetKey};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// A registry and the initial rule table built from one data file
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub registry: GoalRegistry,
    pub table: RuleTable,
}

impl DataSet {
    /// Parse a data set from TOML text
    ///
    /// `source_name` is used in error messages and logs.
    pub fn from_toml_str(source_name: &str, contents: &str) -> Result<Self> {
        let file: DataFile =
            toml::from_str(contents).map_err(|e| Error::load(source_name, e.to_string()))?;
        Self::from_data_file(source_name, file)
    }

    /// Load a data set from a TOML file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();

        let metadata = fs::metadata(path)?;
        if metadata.len() > MAX_DATA_FILE_SIZE {
            return Err(Error::load(
                source_name,
                format!(
                    "file exceeds maximum size of {}MB",
                    MAX_DATA_FILE_SIZE / 1_048_576
                ),
            ));
        }

        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&source_name, &contents)
    }

    /// Validate and index a parsed data file
    ///
    /// Duplicate ids and rules naming an unregistered goal are load errors.
    /// A rule whose pattern does not compile is kept; the matcher skips it.
    pub fn from_data_file(source_name: &str, file: DataFile) -> Result<Self> {
        let mut registry = GoalRegistry::new();
        for goal in file.goals {
            registry
                .insert_goal(GoalDescriptor {
                    id: goal.id,
                    name: goal.name,
                    description: goal.description,
                    dimensions: goal.dimensions,
                })
                .map_err(|e| relabel(source_name, e))?;
        }

        for target in file.targets {
            let key = TargetKey::parse(&target.id).map_err(|e| relabel(source_name, e))?;
            if !registry.contains_goal(key.goal_id()) {
                return Err(Error::load(
                    source_name,
                    format!("target {} references unknown goal {}", target.id, key.goal_id()),
                ));
            }
            registry
                .insert_target(TargetDescriptor {
                    id: key.to_string(),
                    description: target.description,
                })
                .map_err(|e| relabel(source_name, e))?;
        }

        let mut table = RuleTable::new();
        for record in file.rules {
            let key = TargetKey::parse(&record.id).map_err(|e| relabel(source_name, e))?;
            if !registry.contains_goal(key.goal_id()) {
                return Err(Error::load(
                    source_name,
                    format!("rule {} references unknown goal {}", record.id, key.goal_id()),
                ));
            }
            if registry.target(&key.to_string()).is_none() {
                warn!(rule = %key, "Rule target has no description in {}", source_name);
            }

            let pattern = CompiledPattern::lenient(record.pattern);
            if !pattern.is_compiled() {
                warn!(
                    rule = %key,
                    match_type = %record.match_type,
                    "Rule pattern does not compile and will be skipped during evaluation"
                );
            }
            table
                .push(Rule::new(key, record.match_type, pattern))
                .map_err(|e| relabel(source_name, e))?;
        }

        info!(
            source = source_name,
            goals = registry.goals().len(),
            targets = registry.target_count(),
            rules = table.len(),
            "Loaded data set"
        );

        Ok(Self { registry, table })
    }
}

/// Attach the data source to registry/table errors
fn relabel(source_name: &str, error: Error) -> Error {
    match error {
        Error::Load { reason, .. } => Error::load(source_name, reason),
        other => Error::load(source_name, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL: &str = r#"
        [[goals]]
        id = "SDG14"
        name = "Life Below Water"
        dimensions = ["environmental"]

        [[targets]]
        id = "SDG14_1"
        description = "Reduce marine pollution"

        [[rules]]
        id = "SDG14_1"
        match_type = "indirect"
        pattern = 'marine (?:pollution|debris)'

        [[rules]]
        id = "SDG14_general"
        match_type = "direct"
        pattern = 'life below water'
    "#;

    #[test]
    fn test_load_small_data_set() {
        let data = DataSet::from_toml_str("small", SMALL).unwrap();
        assert_eq!(data.registry.goals().len(), 1);
        assert_eq!(data.registry.target_count(), 1);
        assert_eq!(data.table.len(), 2);
    }

    #[test]
    fn test_rule_for_unknown_goal_is_load_error() {
        let toml = r#"
            [[rules]]
            id = "SDG99_general"
            match_type = "direct"
            pattern = "x"
        "#;
        let err = DataSet::from_toml_str("bad", toml).unwrap_err();
        assert!(matches!(err, Error::Load { source_name, .. } if source_name == "bad"));
    }

    #[test]
    fn test_duplicate_rule_slot_is_load_error() {
        let toml = format!(
            "{}\n{}",
            SMALL,
            r#"
            [[rules]]
            id = "SDG14_1"
            match_type = "indirect"
            pattern = "ocean"
            "#
        );
        let err = DataSet::from_toml_str("dup", &toml).unwrap_err();
        assert!(err.to_string().contains("duplicate indirect rule for SDG14_1"));
    }

    #[test]
    fn test_uncompilable_rule_is_kept() {
        let toml = format!(
            "{}\n{}",
            SMALL,
            r#"
            [[rules]]
            id = "SDG14_2"
            match_type = "indirect"
            pattern = "coral (reefs"
            "#
        );
        let data = DataSet::from_toml_str("lenient", &toml).unwrap();
        assert_eq!(data.table.len(), 3);
    }

    #[test]
    fn test_malformed_toml_is_load_error() {
        let err = DataSet::from_toml_str("broken", "[[goals]\nid =").unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let data = DataSet::from_path(file.path()).unwrap();
        assert_eq!(data.table.len(), 2);
    }

    #[test]
    fn test_oversized_file_is_load_error() {
        let mut file = NamedTempFile::new().unwrap();
        let padding = vec![b'#'; MAX_DATA_FILE_SIZE as usize + 1];
        file.write_all(&padding).unwrap();
        file.flush().unwrap();

        let err = DataSet::from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
        assert!(err.to_string().contains("exceeds maximum size"));
    }

    #[test]
    fn test_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataSet::from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
