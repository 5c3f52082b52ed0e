//! Seesus Core - identifiers, classification vocabulary and errors.
//!
//! This crate provides the foundational types shared by every seesus crate:
//!
//! - [`MatchType`]: whether a rule recognizes explicit naming (`direct`) or
//!   thematic vocabulary (`indirect`)
//! - [`Dimension`] and [`Classification`]: the social / environmental /
//!   economic sustainability dimensions
//! - [`Target`], [`TargetKey`] and [`RuleKey`]: goal and target identifiers
//!   such as `SDG13`, `SDG13_2` and `SDG1_general`
//! - [`Error`]: the error taxonomy used by the rule engine
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │     seesus-cli      │  (User interface)
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ seesus-rule-engine  │  (Rule table, matcher, aggregator)
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │    seesus-core      │  (This crate - shared vocabulary)
//! └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use seesus_core::{RuleKey, Target};
//!
//! let key = RuleKey::parse("SDG1_general")?;
//! assert_eq!(key.goal_id(), "SDG1");
//! assert_eq!(key.target(), Some(&Target::General));
//! # Ok::<(), seesus_core::Error>(())
//! ```

pub mod error;
pub mod ids;
pub mod types;

// Re-export core types for convenience
pub use error::{Error, Result};
pub use ids::{RuleKey, Target, TargetKey, GENERAL_TARGET};
pub use types::{Classification, Dimension, MatchType};
