//! Classifier - the caller-facing entry point
//!
//! A [`Classifier`] owns a rule table and a goal registry. Clones share the
//! same table, so an edit made through one clone is visible to every other.
//! Independent instances created with [`Classifier::new`] are isolated.

use crate::aggregator::aggregate;
use crate::built_in::load_built_in;
use crate::loader::DataSet;
use crate::matcher::{self, statement_from_bytes};
use crate::registry::{GoalDescriptor, GoalRegistry};
use crate::result::Evaluation;
use crate::table::{RuleRecord, RuleTable, UpsertOutcome};
use parking_lot::RwLock;
use seesus_core::{MatchType, Result, RuleKey, TargetKey};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Evaluates statements against a shared, editable rule table
///
/// # Thread Safety
///
/// The table sits behind `Arc<RwLock<_>>`:
/// - `evaluate` and `show_syntax` take the read lock
/// - `edit_syntax` validates and writes under the write lock
#[derive(Clone)]
pub struct Classifier {
    table: Arc<RwLock<RuleTable>>,
    registry: Arc<GoalRegistry>,
}

impl Classifier {
    /// Classifier over a loaded data set, isolated from every other instance
    pub fn new(data: DataSet) -> Self {
        Self {
            table: Arc::new(RwLock::new(data.table)),
            registry: Arc::new(data.registry),
        }
    }

    /// Classifier over the embedded SDG data set
    pub fn built_in() -> Result<Self> {
        Ok(Self::new(load_built_in()?))
    }

    /// Evaluate one statement against the full table
    ///
    /// # Example
    ///
    /// ```
    /// use seesus_rule_engine::Classifier;
    ///
    /// let classifier = Classifier::built_in()?;
    /// let evaluation = classifier.evaluate("Our ambition is to achieve the Sustainable Development Goal 1")?;
    /// assert!(evaluation.result().goal_ids().contains(&"SDG1".to_string()));
    /// # Ok::<(), seesus_core::Error>(())
    /// ```
    pub fn evaluate(&self, statement: &str) -> Result<Evaluation> {
        let outcome = {
            let table = self.table.read();
            matcher::evaluate(&table, statement)?
        };

        Ok(Evaluation {
            result: aggregate(&outcome.hits, &self.registry),
            warnings: outcome.warnings,
        })
    }

    /// Evaluate a statement given as raw bytes; non-UTF-8 input is rejected
    pub fn evaluate_bytes(&self, statement: &[u8]) -> Result<Evaluation> {
        self.evaluate(statement_from_bytes(statement)?)
    }

    /// Rules for a goal (`SDG1`) or a single target (`SDG1_general`)
    ///
    /// Unknown or malformed ids yield an empty list.
    pub fn show_syntax(&self, id: &str) -> Vec<RuleRecord> {
        let Ok(key) = RuleKey::parse(id) else {
            return Vec::new();
        };

        let table = self.table.read();
        if key.target().is_some() {
            let target = key.into_target_key();
            table.query_target(&target).map(|r| r.to_record()).collect()
        } else {
            table.query(key.goal_id()).map(|r| r.to_record()).collect()
        }
    }

    /// Add or replace the pattern of one rule
    ///
    /// A goal-level id (`SDG1`) edits the goal's `general` target. The table
    /// is left unchanged when the goal is unknown or the pattern is invalid.
    pub fn edit_syntax(
        &self,
        id: &str,
        new_pattern: &str,
        match_type: MatchType,
    ) -> Result<EditConfirmation> {
        let key = RuleKey::parse(id)?.into_target_key();
        self.upsert(key, match_type, new_pattern)
    }

    /// Add or replace the rule for an explicit target
    pub fn upsert(
        &self,
        key: TargetKey,
        match_type: MatchType,
        pattern: &str,
    ) -> Result<EditConfirmation> {
        let outcome = {
            let mut table = self.table.write();
            table.upsert(&self.registry, key.clone(), match_type, pattern)?
        };

        info!(rule = %key, match_type = %match_type, outcome = %outcome, "Edited rule");
        Ok(EditConfirmation {
            target_id: key.to_string(),
            match_type,
            outcome,
        })
    }

    /// Goal and target metadata
    pub fn registry(&self) -> &GoalRegistry {
        &self.registry
    }

    /// Goal descriptors in registry order
    pub fn goals(&self) -> &[GoalDescriptor] {
        self.registry.goals()
    }

    /// Current number of rules in the shared table
    pub fn rule_count(&self) -> usize {
        self.table.read().len()
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("goals", &self.registry.goals().len())
            .field("rules", &self.rule_count())
            .finish()
    }
}

/// Confirmation returned by an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditConfirmation {
    pub target_id: String,
    pub match_type: MatchType,
    pub outcome: UpsertOutcome,
}

impl EditConfirmation {
    /// True if an existing rule was replaced rather than added
    pub fn replaced(&self) -> bool {
        matches!(self.outcome, UpsertOutcome::Replaced { .. })
    }
}

impl fmt::Display for EditConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} match syntax of {} has been {}.",
            self.match_type, self.target_id, self.outcome
        )
    }
}
