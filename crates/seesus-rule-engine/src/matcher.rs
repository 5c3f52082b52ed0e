//! Statement matching
//!
//! Every rule in the table is tested independently against the statement.
//! There is no short-circuiting: one statement can hit several goals,
//! several targets of one goal, and both match types.

use crate::constants::MAX_STATEMENT_LENGTH;
use crate::result::RuleEvaluationWarning;
use crate::table::RuleTable;
use seesus_core::{Error, MatchType, Result, TargetKey};
use tracing::{debug, warn};

/// One successful rule test
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawHit {
    pub target: TargetKey,
    pub match_type: MatchType,
}

impl RawHit {
    /// Goal id of the matched target
    pub fn goal_id(&self) -> &str {
        self.target.goal_id()
    }
}

/// Hits and skipped-rule diagnostics of one evaluation
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub hits: Vec<RawHit>,
    pub warnings: Vec<RuleEvaluationWarning>,
}

/// Check that a statement can be evaluated
///
/// An empty statement is valid and simply produces no hits.
pub fn validate_statement(statement: &str) -> Result<()> {
    if statement.len() > MAX_STATEMENT_LENGTH {
        return Err(Error::InvalidInput {
            reason: format!(
                "statement is {} bytes, maximum is {}",
                statement.len(),
                MAX_STATEMENT_LENGTH
            ),
        });
    }
    Ok(())
}

/// Decode raw bytes into a statement
pub fn statement_from_bytes(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| Error::InvalidInput {
        reason: format!("statement is not valid UTF-8: {}", e),
    })
}

/// Test every rule of the table against the statement
///
/// A rule whose pattern never compiled is skipped with a warning; the
/// remaining rules are still evaluated.
pub fn evaluate(table: &RuleTable, statement: &str) -> Result<MatchOutcome> {
    validate_statement(statement)?;

    let mut outcome = MatchOutcome::default();
    for rule in table.iter() {
        match rule.pattern.is_match(statement) {
            Ok(true) => outcome.hits.push(RawHit {
                target: rule.key().clone(),
                match_type: rule.match_type(),
            }),
            Ok(false) => {}
            Err(reason) => {
                warn!(
                    rule = %rule.key(),
                    match_type = %rule.match_type(),
                    "Skipping rule with invalid pattern: {}",
                    reason
                );
                outcome.warnings.push(RuleEvaluationWarning {
                    rule_id: rule.key().to_string(),
                    match_type: rule.match_type(),
                    reason: reason.to_string(),
                });
            }
        }
    }

    debug!(
        rules = table.len(),
        hits = outcome.hits.len(),
        skipped = outcome.warnings.len(),
        "Evaluated statement"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::CompiledPattern;
    use crate::table::Rule;

    fn rule(id: &str, match_type: MatchType, pattern: &str) -> Rule {
        Rule::new(
            TargetKey::parse(id).unwrap(),
            match_type,
            CompiledPattern::lenient(pattern),
        )
    }

    fn table(rules: Vec<Rule>) -> RuleTable {
        let mut table = RuleTable::new();
        for r in rules {
            table.push(r).unwrap();
        }
        table
    }

    #[test]
    fn test_every_matching_rule_yields_a_hit() {
        let table = table(vec![
            rule("SDG1_general", MatchType::Direct, r"\bsdg\s*1\b"),
            rule("SDG1_2", MatchType::Indirect, "poverty"),
            rule("SDG2_1", MatchType::Indirect, "hunger"),
        ]);

        let outcome = evaluate(&table, "SDG 1: ending poverty and hunger").unwrap();
        let ids: Vec<String> = outcome.hits.iter().map(|h| h.target.to_string()).collect();
        assert_eq!(ids, vec!["SDG1_general", "SDG1_2", "SDG2_1"]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_no_hits_for_empty_statement() {
        let table = table(vec![rule("SDG1_2", MatchType::Indirect, "poverty")]);
        let outcome = evaluate(&table, "").unwrap();
        assert!(outcome.hits.is_empty());
    }

    #[test]
    fn test_broken_rule_is_skipped_not_fatal() {
        let table = table(vec![
            rule("SDG1_1", MatchType::Indirect, "(broken"),
            rule("SDG1_2", MatchType::Indirect, "poverty"),
        ]);

        let outcome = evaluate(&table, "poverty").unwrap();
        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.hits[0].goal_id(), "SDG1");
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].rule_id, "SDG1_1");
    }

    #[test]
    fn test_oversized_statement_is_invalid_input() {
        let table = RuleTable::new();
        let statement = "a".repeat(MAX_STATEMENT_LENGTH + 1);
        assert!(matches!(
            evaluate(&table, &statement),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_non_utf8_bytes_are_invalid_input() {
        assert!(matches!(
            statement_from_bytes(&[0xff, 0xfe, 0x00]),
            Err(Error::InvalidInput { .. })
        ));
        assert_eq!(statement_from_bytes(b"water").unwrap(), "water");
    }
}
