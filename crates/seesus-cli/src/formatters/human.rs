//! Human-readable formatter for classification results.

use super::{ClassifiedStatement, Formatter, GoalSummary};
use anyhow::Result;
use colored::*;
use seesus_rule_engine::{EditConfirmation, Evaluation, RuleRecord};
use std::fmt::Write;

pub struct HumanFormatter;

impl Formatter for HumanFormatter {
    fn classifications(&self, items: &[ClassifiedStatement]) -> Result<String> {
        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write_evaluation(&mut out, &item.statement, &item.evaluation)?;
        }

        if items.len() > 1 {
            let related = items
                .iter()
                .filter(|item| item.evaluation.result().is_sustainability_related())
                .count();
            writeln!(
                out,
                "\n{} of {} statement(s) sustainability related",
                related,
                items.len()
            )?;
        }
        Ok(out)
    }

    fn rules(&self, id: &str, rules: &[RuleRecord]) -> Result<String> {
        let mut out = String::new();
        if rules.is_empty() {
            writeln!(out, "No rules for {}", id)?;
            return Ok(out);
        }

        writeln!(out, "{}", format!("Rules for {}:", id).bold())?;
        for rule in rules {
            writeln!(
                out,
                "  {:16} {:9} {}",
                rule.id.cyan(),
                rule.match_type.as_str(),
                rule.pattern
            )?;
        }
        writeln!(out, "\nTotal: {} rule(s)", rules.len())?;
        Ok(out)
    }

    fn goals(&self, goals: &[GoalSummary<'_>]) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", "Goals:".bold())?;
        for summary in goals {
            let dimensions = summary
                .goal
                .dimensions
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                out,
                "  {:6} {:45} {:4} rule(s)  [{}]",
                summary.goal.id.cyan(),
                summary.goal.name,
                summary.rules,
                dimensions
            )?;
        }
        Ok(out)
    }

    fn edits(&self, confirmations: &[EditConfirmation]) -> Result<String> {
        let mut out = String::new();
        for confirmation in confirmations {
            writeln!(out, "{} {}", "✓".green(), confirmation)?;
        }
        Ok(out)
    }
}

fn write_evaluation(out: &mut String, statement: &str, evaluation: &Evaluation) -> Result<()> {
    let result = evaluation.result();
    writeln!(out, "{} {:?}", "Statement:".bold(), statement)?;

    if !result.is_sustainability_related() {
        writeln!(out, "  {} Not sustainability related", "✗".red())?;
    } else {
        let match_types = result
            .match_types()
            .iter()
            .map(|mt| mt.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "  {} Sustainability related ({} match)",
            "✓".green(),
            match_types
        )?;

        writeln!(out, "  Goals:")?;
        for (id, name) in result.goal_ids().iter().zip(result.goal_names()) {
            writeln!(out, "    {:6} {}", id.cyan(), name)?;
        }

        writeln!(out, "  Targets:")?;
        for (id, description) in result.target_ids().iter().zip(result.target_descriptions()) {
            writeln!(out, "    {:14} {}", id.cyan(), description)?;
        }

        let dimensions = result
            .classification()
            .dimensions()
            .iter()
            .map(|d| d.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "  Classification: {}", dimensions)?;
    }

    for warning in evaluation.warnings() {
        writeln!(out, "  {} {}", "warning:".yellow(), warning)?;
    }
    Ok(())
}
