//! Built-in data set embedded in the binary
//!
//! The 17 Sustainable Development Goals, their 169 targets, and the default
//! direct/indirect match rules. Embedded at compile time via
//! `include_str!()` for zero-config defaults.

use crate::loader::DataSet;
use seesus_core::Result;

/// Goal/target registry and match rules for the UN SDGs
pub const SDG_DATA: &str = include_str!("built_in/sdg.toml");

/// Name used for the embedded data set in logs and errors
pub const BUILT_IN_SOURCE: &str = "built-in SDG data set";

/// Load the embedded data set
///
/// # Example
///
/// ```
/// use seesus_rule_engine::load_built_in;
///
/// let data = load_built_in().expect("Failed to load built-in data set");
/// assert_eq!(data.registry.goals().len(), 17);
/// ```
pub fn load_built_in() -> Result<DataSet> {
    DataSet::from_toml_str(BUILT_IN_SOURCE, SDG_DATA)
}
