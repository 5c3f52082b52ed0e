//! `--rule ID:MATCH_TYPE:PATTERN` arguments.

use seesus_core::MatchType;
use std::str::FromStr;

/// A rule edit given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleArg {
    pub id: String,
    pub match_type: MatchType,
    pub pattern: String,
}

impl FromStr for RuleArg {
    type Err = String;

    /// Splits on the first two colons; the pattern itself may contain more
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(id), Some(match_type), Some(pattern)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!(
                "expected ID:MATCH_TYPE:PATTERN (e.g. SDG1_general:indirect:my terms), got '{}'",
                s
            ));
        };

        let id = id.trim();
        if id.is_empty() {
            return Err("rule id must not be empty".to_string());
        }
        if pattern.is_empty() {
            return Err(format!("pattern for {} must not be empty", id));
        }

        let match_type = match_type.parse::<MatchType>().map_err(|e| e.to_string())?;

        Ok(Self {
            id: id.to_string(),
            match_type,
            pattern: pattern.to_string(),
        })
    }
}
