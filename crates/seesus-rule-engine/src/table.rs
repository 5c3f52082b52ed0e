//! The rule table
//!
//! An ordered collection of rules. For a given `(goal, target, match_type)`
//! triple at most one rule exists; [`RuleTable::upsert`] replaces in place
//! and appends otherwise.

use crate::pattern::CompiledPattern;
use crate::registry::GoalRegistry;
use seesus_core::{Error, MatchType, Result, Target, TargetKey};
use serde::Serialize;
use std::fmt;

/// A rule ready for evaluation
#[derive(Debug, Clone)]
pub struct Rule {
    pub(crate) key: TargetKey,
    pub(crate) match_type: MatchType,
    pub(crate) pattern: CompiledPattern,
}

impl Rule {
    /// Rule for one `(target, match_type)` slot
    pub fn new(key: TargetKey, match_type: MatchType, pattern: CompiledPattern) -> Self {
        Self {
            key,
            match_type,
            pattern,
        }
    }

    /// Target this rule reports on a hit
    pub fn key(&self) -> &TargetKey {
        &self.key
    }

    /// Goal id of the rule's target
    pub fn goal_id(&self) -> &str {
        self.key.goal_id()
    }

    /// Target suffix (`general` or numbered)
    pub fn target(&self) -> &Target {
        self.key.target()
    }

    /// Direct or indirect
    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// Pattern source as written
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn same_slot(&self, key: &TargetKey, match_type: MatchType) -> bool {
        self.match_type == match_type && &self.key == key
    }

    /// Snapshot for inspection
    pub fn to_record(&self) -> RuleRecord {
        RuleRecord {
            id: self.key.to_string(),
            goal_id: self.key.goal_id().to_string(),
            target: self.key.target().clone(),
            match_type: self.match_type,
            pattern: self.pattern.as_str().to_string(),
        }
    }
}

/// Owned view of a rule returned by inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRecord {
    /// Rendered target id (e.g., "SDG1_general")
    pub id: String,
    pub goal_id: String,
    pub target: Target,
    pub match_type: MatchType,
    pub pattern: String,
}

/// Result of an upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An existing rule's pattern was replaced in place
    Replaced { previous_pattern: String },
    /// A new rule was appended to the table
    Added,
}

impl fmt::Display for UpsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertOutcome::Replaced { .. } => f.write_str("updated"),
            UpsertOutcome::Added => f.write_str("added"),
        }
    }
}

/// Ordered rule collection
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in table order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Every rule of a goal, in table order; empty for an unknown goal
    pub fn query<'a>(&'a self, goal_id: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |r| r.goal_id() == goal_id)
    }

    /// Every rule of one target, in table order
    pub fn query_target<'a>(&'a self, key: &'a TargetKey) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |r| &r.key == key)
    }

    /// Insert or replace the rule for `(key, match_type)`
    ///
    /// Validation happens before any mutation: an unknown goal or a pattern
    /// that does not compile leaves the table unchanged.
    pub fn upsert(
        &mut self,
        registry: &GoalRegistry,
        key: TargetKey,
        match_type: MatchType,
        pattern: &str,
    ) -> Result<UpsertOutcome> {
        if !registry.contains_goal(key.goal_id()) {
            return Err(Error::UnknownGoal {
                goal_id: key.goal_id().to_string(),
            });
        }
        let compiled = CompiledPattern::new(pattern)?;

        match self.rules.iter_mut().find(|r| r.same_slot(&key, match_type)) {
            Some(rule) => {
                let previous = std::mem::replace(&mut rule.pattern, compiled);
                Ok(UpsertOutcome::Replaced {
                    previous_pattern: previous.as_str().to_string(),
                })
            }
            None => {
                self.rules.push(Rule::new(key, match_type, compiled));
                Ok(UpsertOutcome::Added)
            }
        }
    }

    /// Append a rule while loading a data set
    ///
    /// A second rule for the same `(key, match_type)` is a load error.
    pub(crate) fn push(&mut self, rule: Rule) -> Result<()> {
        if self.rules.iter().any(|r| r.same_slot(&rule.key, rule.match_type)) {
            return Err(Error::load(
                "rule table",
                format!("duplicate {} rule for {}", rule.match_type, rule.key),
            ));
        }
        self.rules.push(rule);
        Ok(())
    }
}
