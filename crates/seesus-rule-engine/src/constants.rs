//! Resource limits for the rule engine
//!
//! Patterns and statements are user-controlled, so compilation and input
//! sizes are bounded:
//! - Regex size and DFA limits bound memory per compiled rule
//! - Pattern length bounds what an edit can submit
//! - Statement and data file sizes bound a single evaluation or load

/// Maximum size for a TOML data set file (4MB)
///
/// The packaged data set is well under 100KB. Larger files are almost
/// certainly not a goal/target/rule table.
pub const MAX_DATA_FILE_SIZE: u64 = 4_194_304; // 4MB

/// Maximum statement length in bytes (64KB)
///
/// Statements are short texts such as a sentence or a paragraph; longer
/// input is rejected as invalid rather than scanned by every rule.
pub const MAX_STATEMENT_LENGTH: usize = 65_536;

/// Maximum regex pattern length (4096 characters)
///
/// Thematic patterns are long alternations, but anything beyond this is
/// better split into several target-level rules.
pub const MAX_PATTERN_LENGTH: usize = 4_096;

/// Compiled regex size limit (10MB)
///
/// Applied during regex compilation via RegexBuilder.
pub const REGEX_SIZE_LIMIT: usize = 10_000_000; // 10MB

/// Regex DFA size limit (2MB)
pub const REGEX_DFA_SIZE_LIMIT: usize = 2_000_000; // 2MB
