//! Output formatters for classification results.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use anyhow::Result;
use seesus_rule_engine::{EditConfirmation, Evaluation, GoalDescriptor, RuleRecord};
use serde::Serialize;

/// One classified statement
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedStatement {
    pub statement: String,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// A goal together with the number of rules currently attached to it
#[derive(Debug, Clone, Serialize)]
pub struct GoalSummary<'a> {
    #[serde(flatten)]
    pub goal: &'a GoalDescriptor,
    pub rules: usize,
}

/// Trait for rendering command output
pub trait Formatter {
    fn classifications(&self, items: &[ClassifiedStatement]) -> Result<String>;

    fn rules(&self, id: &str, rules: &[RuleRecord]) -> Result<String>;

    fn goals(&self, goals: &[GoalSummary<'_>]) -> Result<String>;

    fn edits(&self, confirmations: &[EditConfirmation]) -> Result<String>;
}

/// Formatter for the selected output mode
pub fn formatter(json: bool) -> Box<dyn Formatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter)
    }
}
