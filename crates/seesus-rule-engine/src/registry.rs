//! Goal and target registry
//!
//! Static descriptive metadata: goal names and dimensions, target
//! descriptions. Loaded once with the data set and never mutated by rule
//! edits.

use seesus_core::{Classification, Dimension, Error, Result, TargetKey};
use serde::Serialize;
use std::collections::HashMap;

/// A goal and the classification dimensions it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalDescriptor {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub dimensions: Vec<Dimension>,
}

impl GoalDescriptor {
    /// Dimensions of this goal as a classification
    pub fn classification(&self) -> Classification {
        Classification::from_dimensions(&self.dimensions)
    }
}

/// A target description keyed by rendered target id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDescriptor {
    pub id: String,
    pub description: String,
}

/// Read-only lookup of goals and targets
#[derive(Debug, Clone, Default)]
pub struct GoalRegistry {
    /// Goals in presentation order
    goals: Vec<GoalDescriptor>,
    /// goal id → index into `goals`
    goal_index: HashMap<String, usize>,
    /// rendered target id → descriptor
    targets: HashMap<String, TargetDescriptor>,
}

impl GoalRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a goal; goal ids must be unique
    pub fn insert_goal(&mut self, goal: GoalDescriptor) -> Result<()> {
        if goal.id.is_empty() || goal.id.contains('_') {
            return Err(Error::InvalidId {
                id: goal.id,
                reason: "goal ids must be non-empty and contain no '_'".to_string(),
            });
        }
        if self.goal_index.contains_key(&goal.id) {
            return Err(Error::load("registry", format!("duplicate goal id {}", goal.id)));
        }
        self.goal_index.insert(goal.id.clone(), self.goals.len());
        self.goals.push(goal);
        Ok(())
    }

    /// Register a target description; target ids must be unique
    pub fn insert_target(&mut self, target: TargetDescriptor) -> Result<()> {
        if self.targets.contains_key(&target.id) {
            return Err(Error::load(
                "registry",
                format!("duplicate target id {}", target.id),
            ));
        }
        self.targets.insert(target.id.clone(), target);
        Ok(())
    }

    /// True if the goal is registered
    pub fn contains_goal(&self, goal_id: &str) -> bool {
        self.goal_index.contains_key(goal_id)
    }

    /// Descriptor of a registered goal
    pub fn goal(&self, goal_id: &str) -> Option<&GoalDescriptor> {
        self.goal_index.get(goal_id).map(|&i| &self.goals[i])
    }

    /// All goals in registry order
    pub fn goals(&self) -> &[GoalDescriptor] {
        &self.goals
    }

    /// Descriptor for a rendered target id such as `SDG13_2`
    pub fn target(&self, target_id: &str) -> Option<&TargetDescriptor> {
        self.targets.get(target_id)
    }

    /// Number of registered targets
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Goal name, or a placeholder for an unregistered goal
    pub fn goal_name(&self, goal_id: &str) -> String {
        self.goal(goal_id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| format!("Unknown goal {}", goal_id))
    }

    /// Target description, or a placeholder for an unregistered target
    pub fn target_description(&self, key: &TargetKey) -> String {
        let id = key.to_string();
        match self.targets.get(&id) {
            Some(target) => target.description.clone(),
            None => format!("No description available for {}", id),
        }
    }

    /// Dimensions of a goal; empty for an unregistered goal
    pub fn classification_of(&self, goal_id: &str) -> Classification {
        self.goal(goal_id)
            .map(GoalDescriptor::classification)
            .unwrap_or_default()
    }
}
