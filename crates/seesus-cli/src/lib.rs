//! Seesus CLI library components.
//!
//! This crate provides the command-line interface for the SDG classifier.
//! The main binary is in `main.rs`.

pub mod commands;
pub mod context;
pub mod formatters;
pub mod logging;
pub mod rule_arg;

pub use rule_arg::RuleArg;
pub use seesus_rule_engine::{Classifier, Evaluation, SustainabilityResult};
