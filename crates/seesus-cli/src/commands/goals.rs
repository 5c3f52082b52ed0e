use crate::formatters::{Formatter, GoalSummary};
use anyhow::Result;
use seesus_rule_engine::Classifier;

pub fn run_goals(classifier: &Classifier, formatter: &dyn Formatter) -> Result<()> {
    let goals: Vec<GoalSummary<'_>> = classifier
        .goals()
        .iter()
        .map(|goal| GoalSummary {
            goal,
            rules: classifier.show_syntax(&goal.id).len(),
        })
        .collect();

    println!("{}", formatter.goals(&goals)?.trim_end());
    Ok(())
}
