//! End-to-end behavior of the built-in classifier
//!
//! These tests cover the documented usage: evaluating statements, inspecting
//! rules, and editing rules at runtime.

use seesus_core::{Error, MatchType};
use seesus_rule_engine::{Classifier, SustainabilityResult};

fn classifier() -> Classifier {
    Classifier::built_in().expect("Failed to load built-in data set")
}

fn evaluate(classifier: &Classifier, statement: &str) -> SustainabilityResult {
    let evaluation = classifier.evaluate(statement).unwrap();
    assert!(evaluation.warnings().is_empty());
    evaluation.into_result()
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_climate_mitigation_statement() {
    let c = classifier();
    let result = evaluate(
        &c,
        "We aim to contribute to the mitigation of climate change by reducing carbon emissions in the city.",
    );

    assert!(result.is_sustainability_related());
    assert_eq!(result.goal_ids(), ["SDG13"]);
    assert_eq!(result.goal_names(), ["Climate Action"]);
    assert_eq!(result.match_types(), [MatchType::Indirect]);

    let classification = result.classification();
    assert!(classification.environmental);
    assert!(!classification.social);
    assert!(!classification.economic);
}

#[test]
fn test_direct_reference_to_goal_number() {
    let c = classifier();
    let result = evaluate(&c, "Our ambition is to achieve the Sustainable Development Goal 1");

    assert!(result.goal_ids().contains(&"SDG1".to_string()));
    assert!(result.match_types().contains(&MatchType::Direct));
    assert!(result.target_ids().contains(&"SDG1_general".to_string()));
}

#[test]
fn test_empty_statement_yields_empty_result() {
    let c = classifier();
    let result = evaluate(&c, "");

    assert!(!result.is_sustainability_related());
    assert!(result.goal_ids().is_empty());
    assert!(result.goal_names().is_empty());
    assert!(result.target_ids().is_empty());
    assert!(result.target_descriptions().is_empty());
    assert!(result.match_types().is_empty());
    assert!(result.classification().is_empty());
}

#[test]
fn test_unrelated_statement_is_not_sustainability_related() {
    let c = classifier();
    let result = evaluate(&c, "The quarterly meeting is scheduled for Tuesday.");
    assert_eq!(result, SustainabilityResult::default());
}

#[test]
fn test_goal_number_does_not_match_longer_number() {
    let c = classifier();
    let result = evaluate(&c, "We support SDG 10 and SDG 1.2.");

    assert_eq!(result.goal_ids(), ["SDG1", "SDG10"]);
    assert_eq!(result.target_ids(), ["SDG1_2", "SDG10_general"]);
    assert!(!result.target_ids().contains(&"SDG1_general".to_string()));
}

#[test]
fn test_general_and_numbered_targets_both_reported() {
    let c = classifier();
    let result = evaluate(&c, "We report on SDG 13 and on target 13.2.");

    assert_eq!(result.goal_ids(), ["SDG13"]);
    assert_eq!(result.target_ids(), ["SDG13_general", "SDG13_2"]);
    assert_eq!(result.match_types(), [MatchType::Direct]);
    assert!(result.target_descriptions()[1].starts_with("13.2 Integrate climate change measures"));
}

#[test]
fn test_multiple_targets_within_one_goal() {
    let c = classifier();
    let result = evaluate(
        &c,
        "Access to safe drinking water and sanitation for every household.",
    );

    assert_eq!(result.goal_ids(), ["SDG6"]);
    assert_eq!(result.target_ids(), ["SDG6_1", "SDG6_2"]);
    let classification = result.classification();
    assert!(classification.social && classification.environmental && !classification.economic);
}

#[test]
fn test_classification_unions_all_matched_goals() {
    let c = classifier();
    let result = evaluate(&c, "Life below water and life on land");
    assert_eq!(result.goal_ids(), ["SDG14", "SDG15"]);
    assert_eq!(result.goal_names(), ["Life Below Water", "Life on Land"]);
    assert!(result.classification().environmental);
    assert!(!result.classification().social);

    let result = evaluate(&c, "Our factories pay a living wage and eliminate child labour.");
    assert_eq!(result.goal_ids(), ["SDG8"]);
    let classification = result.classification();
    assert!(classification.social && classification.economic && !classification.environmental);
}

#[test]
fn test_matching_is_case_insensitive() {
    let c = classifier();
    let lower = evaluate(&c, "ending hunger through sustainable agriculture.");
    let upper = evaluate(&c, "ENDING HUNGER THROUGH SUSTAINABLE AGRICULTURE.");
    assert_eq!(lower, upper);
    assert_eq!(lower.target_ids(), ["SDG2_1", "SDG2_4"]);
}

#[test]
fn test_evaluate_is_idempotent() {
    let c = classifier();
    let statement = "Protecting coral reefs and reducing ocean plastic.";
    assert_eq!(evaluate(&c, statement), evaluate(&c, statement));
}

// ============================================================================
// Inspection and editing
// ============================================================================

#[test]
fn test_edit_adds_indirect_general_rule() {
    let c = classifier();

    let before = c.show_syntax("SDG1_general");
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].match_type, MatchType::Direct);
    assert!(!evaluate(&c, "my match terms are in text").is_sustainability_related());

    let confirmation = c
        .edit_syntax("SDG1_general", "my match terms", MatchType::Indirect)
        .unwrap();
    assert!(!confirmation.replaced());

    let after = c.show_syntax("SDG1_general");
    assert_eq!(after.len(), 2);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].match_type, MatchType::Indirect);
    assert_eq!(after[1].pattern, "my match terms");

    let result = evaluate(&c, "my match terms are in text");
    assert!(result.is_sustainability_related());
    assert!(result.target_ids().contains(&"SDG1_general".to_string()));
    assert_eq!(result.match_types(), [MatchType::Indirect]);
}

#[test]
fn test_replace_keeps_table_size() {
    let c = classifier();
    let size = c.rule_count();

    let confirmation = c
        .edit_syntax("SDG13_2", "carbon footprint", MatchType::Indirect)
        .unwrap();
    assert!(confirmation.replaced());
    assert_eq!(c.rule_count(), size);

    c.edit_syntax("SDG13_2", "carbon budget", MatchType::Indirect).unwrap();
    assert_eq!(c.rule_count(), size);

    c.edit_syntax("SDG13_general", "climate emergency", MatchType::Indirect)
        .unwrap();
    assert_eq!(c.rule_count(), size + 1);
}

#[test]
fn test_replaced_pattern_takes_effect_immediately() {
    let c = classifier();
    c.edit_syntax("SDG13_2", "carbon footprint", MatchType::Indirect)
        .unwrap();

    let result = evaluate(&c, "We are cutting carbon emissions.");
    assert!(!result.is_sustainability_related());

    let result = evaluate(&c, "We measure our carbon footprint.");
    assert_eq!(result.target_ids(), ["SDG13_2"]);
}

#[test]
fn test_unknown_goal_is_rejected_without_changes() {
    let c = classifier();
    let size = c.rule_count();
    let unrelated_before = c.show_syntax("SDG5");

    let err = c
        .edit_syntax("SDG_not_real", "anything", MatchType::Indirect)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownGoal { .. }));

    assert_eq!(c.rule_count(), size);
    assert_eq!(c.show_syntax("SDG5"), unrelated_before);
    assert!(c.show_syntax("SDG_not_real").is_empty());
}

#[test]
fn test_invalid_pattern_is_rejected_at_edit_time() {
    let c = classifier();
    let before = c.show_syntax("SDG1_general");

    let err = c
        .edit_syntax("SDG1_general", "(unbalanced", MatchType::Direct)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { .. }));
    assert_eq!(c.show_syntax("SDG1_general"), before);
}

#[test]
fn test_edit_on_one_goal_does_not_touch_another() {
    let c = classifier();
    let sdg2_before = c.show_syntax("SDG2");

    c.edit_syntax("SDG1", "pauperism", MatchType::Indirect).unwrap();
    c.edit_syntax("SDG1_2", "income poverty", MatchType::Indirect).unwrap();

    assert_eq!(c.show_syntax("SDG2"), sdg2_before);
}

#[test]
fn test_show_syntax_goal_level_preserves_table_order() {
    let c = classifier();
    let rules = c.show_syntax("SDG13");

    assert_eq!(rules[0].id, "SDG13_general");
    assert!(rules.iter().all(|r| r.goal_id == "SDG13"));
    // general + direct and indirect rules for each of the 5 targets
    assert_eq!(rules.len(), 11);
}

#[test]
fn test_show_syntax_unknown_goal_is_empty() {
    let c = classifier();
    assert!(c.show_syntax("SDG99").is_empty());
    assert!(c.show_syntax("SDG1_zzz").is_empty());
}

#[test]
fn test_result_serializes_to_json() {
    let c = classifier();
    let result = evaluate(&c, "Ending hunger through sustainable agriculture.");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["is_sustainability_related"], true);
    assert_eq!(json["goal_ids"][0], "SDG2");
    assert_eq!(json["match_types"][0], "indirect");
    assert_eq!(json["classification"]["environmental"], true);
}

#[test]
fn test_lettered_target_id_is_case_insensitive() {
    let c = classifier();
    let size = c.rule_count();

    let confirmation = c
        .edit_syntax("SDG14_A", "marine laboratories", MatchType::Indirect)
        .unwrap();

    assert!(confirmation.replaced());
    assert_eq!(confirmation.target_id, "SDG14_a");
    assert_eq!(c.rule_count(), size);

    let result = evaluate(&c, "New marine laboratories open this year.");
    assert_eq!(result.target_ids(), ["SDG14_a"]);
    assert!(!result.target_descriptions()[0].starts_with("No description"));
}

// ============================================================================
// Concurrency
// ============================================================================

fn assert_send_sync_clone<T: Send + Sync + Clone>() {}

#[test]
fn test_classifier_is_send_sync_clone() {
    assert_send_sync_clone::<Classifier>();
}

#[test]
fn test_concurrent_edits_and_evaluations_on_shared_clones() {
    const WORKERS: usize = 4;
    const ROUNDS: usize = 20;

    let c = classifier();
    let size = c.rule_count();

    std::thread::scope(|scope| {
        for n in 1..=WORKERS {
            let c = c.clone();
            scope.spawn(move || {
                let id = format!("SDG{}_general", n);
                let term = format!("worker{}term", n);
                for round in 0..ROUNDS {
                    c.edit_syntax(&id, &format!("{}{}", term, round), MatchType::Indirect)
                        .unwrap();
                    let result = c
                        .evaluate(&format!("text with {}{}", term, round))
                        .unwrap()
                        .into_result();
                    assert!(result.target_ids().contains(&id));
                }
            });
        }
    });

    assert_eq!(c.rule_count(), size + WORKERS);
    for n in 1..=WORKERS {
        let id = format!("SDG{}_general", n);
        let indirect: Vec<_> = c
            .show_syntax(&id)
            .into_iter()
            .filter(|r| r.match_type == MatchType::Indirect)
            .collect();
        assert_eq!(indirect.len(), 1);
        assert_eq!(indirect[0].pattern, format!("worker{}term{}", n, ROUNDS - 1));
    }
}
