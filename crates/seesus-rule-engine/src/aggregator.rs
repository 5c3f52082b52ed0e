//! Reduce raw hits into a [`SustainabilityResult`]

use crate::matcher::RawHit;
use crate::registry::GoalRegistry;
use crate::result::SustainabilityResult;
use seesus_core::{Classification, MatchType};

/// Aggregate hits into goal-level and target-level results
///
/// Duplicates are removed keeping first-occurrence order. The
/// classification is the union of the dimensions of every matched goal.
pub fn aggregate(hits: &[RawHit], registry: &GoalRegistry) -> SustainabilityResult {
    let mut goal_ids: Vec<String> = Vec::new();
    let mut target_ids: Vec<String> = Vec::new();
    let mut target_descriptions = Vec::new();
    let mut match_types: Vec<MatchType> = Vec::new();

    for hit in hits {
        if !goal_ids.iter().any(|g| g == hit.goal_id()) {
            goal_ids.push(hit.goal_id().to_string());
        }

        let target_id = hit.target.to_string();
        if !target_ids.contains(&target_id) {
            target_descriptions.push(registry.target_description(&hit.target));
            target_ids.push(target_id);
        }

        if !match_types.contains(&hit.match_type) {
            match_types.push(hit.match_type);
        }
    }

    let goal_names = goal_ids.iter().map(|id| registry.goal_name(id)).collect();

    let mut classification = Classification::default();
    for id in &goal_ids {
        classification.merge(registry.classification_of(id));
    }

    SustainabilityResult {
        is_sustainability_related: !hits.is_empty(),
        goal_ids,
        goal_names,
        target_ids,
        target_descriptions,
        match_types,
        classification,
    }
}
