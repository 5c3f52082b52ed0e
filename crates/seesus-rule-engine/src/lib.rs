//! Seesus Rule Engine - pattern rules for Sustainable Development Goals
//!
//! This crate decides whether a short statement expresses alignment with
//! any of the 17 UN Sustainable Development Goals and their targets, and
//! classifies it along the social, environmental and economic dimensions.
//!
//! # Architecture
//!
//! - **Rule Table**: ordered `(goal, target, match_type, pattern)` rules,
//!   editable through insert-or-replace
//! - **Goal Registry**: goal names, target descriptions, goal dimensions
//! - **Matcher**: tests every rule against a statement (case-insensitive)
//! - **Aggregator**: de-duplicates hits into a [`SustainabilityResult`]
//! - **Compiled Matching**: patterns compiled once, on load or edit
//!
//! ```text
//! statement ──▶ Matcher ──▶ raw hits ──▶ Aggregator ──▶ SustainabilityResult
//!                  │                          │
//!              RuleTable                 GoalRegistry
//! ```
//!
//! # Example
//!
//! ```
//! use seesus_core::MatchType;
//! use seesus_rule_engine::Classifier;
//!
//! let classifier = Classifier::built_in()?;
//!
//! let evaluation = classifier.evaluate(
//!     "We aim to contribute to the mitigation of climate change by reducing carbon emissions in the city.",
//! )?;
//! let result = evaluation.result();
//! assert!(result.is_sustainability_related());
//! assert_eq!(result.goal_ids(), ["SDG13"]);
//! assert_eq!(result.match_types(), [MatchType::Indirect]);
//!
//! classifier.edit_syntax("SDG1_general", "my match terms", MatchType::Indirect)?;
//! assert!(classifier
//!     .evaluate("my match terms are in text")?
//!     .result()
//!     .is_sustainability_related());
//! # Ok::<(), seesus_core::Error>(())
//! ```

pub mod aggregator;
pub mod built_in;
pub mod constants;
pub mod data_file;
pub mod engine;
pub mod loader;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod result;
pub mod table;

// Re-export core types
pub use aggregator::aggregate;
pub use built_in::{load_built_in, BUILT_IN_SOURCE, SDG_DATA};
pub use constants::*;
pub use data_file::{DataFile, DataSetMetadata, GoalRecord, RuleRecordToml, TargetRecord};
pub use engine::{Classifier, EditConfirmation};
pub use loader::DataSet;
pub use matcher::{MatchOutcome, RawHit};
pub use pattern::{compile_pattern, CompiledPattern};
pub use registry::{GoalDescriptor, GoalRegistry, TargetDescriptor};
pub use result::{Evaluation, RuleEvaluationWarning, SustainabilityResult};
pub use table::{Rule, RuleRecord, RuleTable, UpsertOutcome};
