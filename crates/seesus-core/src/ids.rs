//! Goal, target and rule identifiers.
//!
//! A target id is rendered as `<goal_id>_<target>`, e.g. `SDG13_2`,
//! `SDG14_a` or `SDG1_general`. The `general` target is the goal-level
//! catch-all and is distinct from every numbered target of the same goal.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix of the goal-level catch-all target.
pub const GENERAL_TARGET: &str = "general";

/// A sub-target of a goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Target {
    /// Goal-level matches that do not name a specific target
    General,
    /// A numbered (or lettered) target such as `2` or `b`
    Numbered(String),
}

impl Target {
    /// Parse a target suffix; letters are folded to lowercase (`A` is `a`)
    pub fn parse(suffix: &str) -> Self {
        let suffix = suffix.to_ascii_lowercase();
        if suffix == GENERAL_TARGET {
            Target::General
        } else {
            Target::Numbered(suffix)
        }
    }

    /// The suffix as rendered in target ids
    pub fn as_str(&self) -> &str {
        match self {
            Target::General => GENERAL_TARGET,
            Target::Numbered(n) => n,
        }
    }

    /// True for the goal-level catch-all target
    pub fn is_general(&self) -> bool {
        matches!(self, Target::General)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        Target::parse(&s)
    }
}

impl From<Target> for String {
    fn from(t: Target) -> Self {
        t.as_str().to_string()
    }
}

/// A fully qualified target: goal id plus target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetKey {
    goal_id: String,
    target: Target,
}

impl TargetKey {
    /// Key for a goal and target
    pub fn new(goal_id: impl Into<String>, target: Target) -> Self {
        Self {
            goal_id: goal_id.into(),
            target,
        }
    }

    /// The goal-level `general` target of a goal
    pub fn general(goal_id: impl Into<String>) -> Self {
        Self::new(goal_id, Target::General)
    }

    /// Parse a rendered target id such as `SDG13_2`
    pub fn parse(id: &str) -> Result<Self> {
        let key = RuleKey::parse(id)?;
        match key.target {
            Some(target) => Ok(Self::new(key.goal_id, target)),
            None => Err(Error::InvalidId {
                id: id.to_string(),
                reason: "expected '<goal>_<target>'".to_string(),
            }),
        }
    }

    /// Goal id, e.g. `SDG13`
    pub fn goal_id(&self) -> &str {
        &self.goal_id
    }

    /// The target within the goal
    pub fn target(&self) -> &Target {
        &self.target
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.goal_id, self.target)
    }
}

/// An identifier used by the inspection and edit entry points.
///
/// `SDG1` addresses the whole goal; `SDG1_general` or `SDG1_3` address a
/// single target. The string is split at the first `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey {
    goal_id: String,
    target: Option<Target>,
}

impl RuleKey {
    /// Parse `SDG1`, `SDG1_general` or `SDG13_2`; malformed ids are `InvalidId`
    pub fn parse(id: &str) -> Result<Self> {
        let id = id.trim();
        let invalid = |reason: &str| Error::InvalidId {
            id: id.to_string(),
            reason: reason.to_string(),
        };

        match id.split_once('_') {
            None if id.is_empty() => Err(invalid("identifier is empty")),
            None => Ok(Self {
                goal_id: id.to_string(),
                target: None,
            }),
            Some(("", _)) => Err(invalid("missing goal id")),
            Some((_, "")) => Err(invalid("missing target after '_'")),
            Some((goal_id, suffix)) => Ok(Self {
                goal_id: goal_id.to_string(),
                target: Some(Target::parse(suffix)),
            }),
        }
    }

    /// Goal id, e.g. `SDG1`
    pub fn goal_id(&self) -> &str {
        &self.goal_id
    }

    /// The addressed target, or `None` for a goal-level key
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Resolve to a concrete target, using `general` for goal-level keys
    pub fn into_target_key(self) -> TargetKey {
        TargetKey::new(self.goal_id, self.target.unwrap_or(Target::General))
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "{}_{}", self.goal_id, target),
            None => f.write_str(&self.goal_id),
        }
    }
}
