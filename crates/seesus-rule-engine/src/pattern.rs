//! Compiled rule patterns with regex caching
//!
//! Patterns are compiled once, when a rule enters the table, and the
//! compiled form is reused by every evaluation.

use crate::constants::{MAX_PATTERN_LENGTH, REGEX_DFA_SIZE_LIMIT, REGEX_SIZE_LIMIT};
use regex::{Regex, RegexBuilder};
use seesus_core::{Error, Result};

/// Compile a case-insensitive regex with size limits
///
/// - Pattern length limit (4096 chars)
/// - Compiled regex size limit (10MB)
/// - DFA size limit (2MB)
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(Error::invalid_pattern(
            pattern,
            format!(
                "pattern exceeds maximum length of {} characters",
                MAX_PATTERN_LENGTH
            ),
        ));
    }

    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_DFA_SIZE_LIMIT)
        .build()
        .map_err(|e| Error::invalid_pattern(pattern, e))
}

/// A rule pattern together with its compiled form
///
/// A pattern loaded from a data set may fail to compile. It is kept so it
/// stays inspectable, and the matcher skips it with a warning.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    compiled: std::result::Result<Regex, String>,
}

impl CompiledPattern {
    /// Compile a pattern, failing on invalid syntax
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let regex = compile_pattern(&source)?;
        Ok(Self {
            source,
            compiled: Ok(regex),
        })
    }

    /// Compile a pattern, keeping the compile error instead of failing
    pub fn lenient(source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = compile_pattern(&source).map_err(|e| e.to_string());
        Self { source, compiled }
    }

    /// Pattern source as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// False for a pattern kept despite a compile error
    pub fn is_compiled(&self) -> bool {
        self.compiled.is_ok()
    }

    /// Search the statement for the pattern anywhere
    ///
    /// Returns the compile error for a pattern that never compiled.
    pub fn is_match(&self, statement: &str) -> std::result::Result<bool, &str> {
        match &self.compiled {
            Ok(regex) => Ok(regex.is_match(statement)),
            Err(reason) => Err(reason),
        }
    }
}
