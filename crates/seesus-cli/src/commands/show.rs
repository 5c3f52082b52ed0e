use crate::formatters::Formatter;
use anyhow::Result;
use seesus_rule_engine::Classifier;

/// Print the rules behind a goal (`SDG13`) or a single target (`SDG13_2`)
pub fn run_show(classifier: &Classifier, formatter: &dyn Formatter, id: &str) -> Result<()> {
    let rules = classifier.show_syntax(id);
    println!("{}", formatter.rules(id, &rules)?.trim_end());
    Ok(())
}
