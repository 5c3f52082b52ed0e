use crate::formatters::{ClassifiedStatement, Formatter};
use anyhow::{Context, Result};
use seesus_rule_engine::Classifier;
use std::io::BufRead;

/// Statements from the command line, or one per non-blank stdin line
pub fn read_statements(args: Vec<String>, input: impl BufRead) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let mut statements = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read statement from stdin")?;
        if !line.trim().is_empty() {
            statements.push(line);
        }
    }
    Ok(statements)
}

pub fn classify_statements(
    classifier: &Classifier,
    statements: Vec<String>,
) -> Result<Vec<ClassifiedStatement>> {
    statements
        .into_iter()
        .map(|statement| {
            let evaluation = classifier
                .evaluate(&statement)
                .with_context(|| format!("Failed to classify {:?}", statement))?;
            Ok(ClassifiedStatement {
                statement,
                evaluation,
            })
        })
        .collect()
}

pub fn run_classify(
    classifier: &Classifier,
    formatter: &dyn Formatter,
    statements: Vec<String>,
) -> Result<()> {
    let items = classify_statements(classifier, statements)?;
    println!("{}", formatter.classifications(&items)?.trim_end());
    Ok(())
}
