//! JSON formatter for classification results.

use super::{ClassifiedStatement, Formatter, GoalSummary};
use anyhow::Result;
use seesus_rule_engine::{EditConfirmation, RuleRecord};
use serde_json::json;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn classifications(&self, items: &[ClassifiedStatement]) -> Result<String> {
        Ok(serde_json::to_string_pretty(items)?)
    }

    fn rules(&self, id: &str, rules: &[RuleRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({
            "id": id,
            "rules": rules,
        }))?)
    }

    fn goals(&self, goals: &[GoalSummary<'_>]) -> Result<String> {
        Ok(serde_json::to_string_pretty(goals)?)
    }

    /// Edits are reported through logs only, so stdout stays a single document
    fn edits(&self, _confirmations: &[EditConfirmation]) -> Result<String> {
        Ok(String::new())
    }
}
