//! TOML data set definitions
//!
//! This module defines the structure of the goal/target/rule data set as it
//! appears in TOML files.
//!
//! ```toml
//! [[goals]]
//! id = "SDG13"
//! name = "Climate Action"
//! dimensions = ["environmental"]
//!
//! [[targets]]
//! id = "SDG13_2"
//! description = "13.2 Integrate climate change measures into national policies"
//!
//! [[rules]]
//! id = "SDG13_2"
//! match_type = "indirect"
//! pattern = '(?:carbon|greenhouse gas) emissions?'
//! ```

use seesus_core::{Dimension, MatchType};
use serde::{Deserialize, Serialize};

/// A complete TOML data set
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataFile {
    /// Data set metadata (optional)
    #[serde(default)]
    pub metadata: Option<DataSetMetadata>,

    /// Goal descriptors, in presentation order
    #[serde(default)]
    pub goals: Vec<GoalRecord>,

    /// Target descriptors, keyed by rendered target id
    #[serde(default)]
    pub targets: Vec<TargetRecord>,

    /// Match rules, in evaluation order
    #[serde(default)]
    pub rules: Vec<RuleRecordToml>,
}

/// Data set metadata
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataSetMetadata {
    /// Data set name (e.g., "un-sdg")
    pub name: String,

    /// Version of this data set
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A goal as written in the data set
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalRecord {
    /// Goal id (e.g., "SDG13")
    pub id: String,

    /// Short human-readable name (e.g., "Climate Action")
    pub name: String,

    /// Full goal statement
    #[serde(default)]
    pub description: Option<String>,

    /// Classification dimensions this goal belongs to
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

/// A target as written in the data set
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetRecord {
    /// Rendered target id (e.g., "SDG13_2" or "SDG13_general")
    pub id: String,

    pub description: String,
}

/// A rule as written in the data set
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleRecordToml {
    /// Rendered target id the rule reports (e.g., "SDG1_general")
    pub id: String,

    /// Direct or indirect
    pub match_type: MatchType,

    /// Regular expression, matched case-insensitively
    pub pattern: String,
}
