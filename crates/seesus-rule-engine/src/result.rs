//! Evaluation results
//!
//! [`SustainabilityResult`] is built once per evaluated statement and never
//! mutated afterwards. Set-valued fields keep first-occurrence order so the
//! same table and statement always produce the same presentation.

use seesus_core::{Classification, MatchType};
use serde::Serialize;
use std::fmt;

/// Aggregated goal/target/classification view of one statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SustainabilityResult {
    pub(crate) is_sustainability_related: bool,
    pub(crate) goal_ids: Vec<String>,
    pub(crate) goal_names: Vec<String>,
    pub(crate) target_ids: Vec<String>,
    pub(crate) target_descriptions: Vec<String>,
    pub(crate) match_types: Vec<MatchType>,
    pub(crate) classification: Classification,
}

impl SustainabilityResult {
    /// True iff at least one rule matched
    pub fn is_sustainability_related(&self) -> bool {
        self.is_sustainability_related
    }

    /// Distinct goal ids, in order of first hit
    pub fn goal_ids(&self) -> &[String] {
        &self.goal_ids
    }

    /// Goal names, parallel to [`goal_ids`](Self::goal_ids)
    pub fn goal_names(&self) -> &[String] {
        &self.goal_names
    }

    /// Distinct rendered target ids (e.g., "SDG13_2"), in order of first hit
    pub fn target_ids(&self) -> &[String] {
        &self.target_ids
    }

    /// Target descriptions, parallel to [`target_ids`](Self::target_ids)
    pub fn target_descriptions(&self) -> &[String] {
        &self.target_descriptions
    }

    /// Distinct match types observed
    pub fn match_types(&self) -> &[MatchType] {
        &self.match_types
    }

    /// Union of the matched goals' dimensions
    pub fn classification(&self) -> Classification {
        self.classification
    }
}

/// A rule that could not be evaluated and was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEvaluationWarning {
    /// Rendered target id of the skipped rule
    pub rule_id: String,
    pub match_type: MatchType,
    pub reason: String,
}

impl fmt::Display for RuleEvaluationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipped {} rule {}: {}",
            self.match_type, self.rule_id, self.reason
        )
    }
}

/// A result together with the diagnostics of the evaluation that built it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub result: SustainabilityResult,
    pub warnings: Vec<RuleEvaluationWarning>,
}

impl Evaluation {
    /// The aggregated result
    pub fn result(&self) -> &SustainabilityResult {
        &self.result
    }

    /// Rules skipped during this evaluation
    pub fn warnings(&self) -> &[RuleEvaluationWarning] {
        &self.warnings
    }

    /// Drop the warnings and keep the result
    pub fn into_result(self) -> SustainabilityResult {
        self.result
    }
}
