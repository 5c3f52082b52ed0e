//! Match types and sustainability classification dimensions.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a rule recognizes a goal in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Explicit reference to the framework or a goal by name or number
    Direct,
    /// Thematic vocabulary implying the goal without naming it
    Indirect,
}

impl MatchType {
    /// Returns all match types in a consistent order
    pub fn all() -> &'static [MatchType] {
        &[MatchType::Direct, MatchType::Indirect]
    }

    /// Returns the lowercase name used in data files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Direct => "direct",
            MatchType::Indirect => "indirect",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .find(|mt| mt.as_str() == normalized)
            .copied()
            .ok_or_else(|| Error::InvalidMatchType(s.to_string()))
    }
}

/// A cross-cutting sustainability dimension a goal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Social,
    Environmental,
    Economic,
}

impl Dimension {
    /// Returns all dimensions in a consistent order
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Social,
            Dimension::Environmental,
            Dimension::Economic,
        ]
    }

    /// Returns the lowercase name used in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Social => "social",
            Dimension::Environmental => "environmental",
            Dimension::Economic => "economic",
        }
    }

    /// Returns the display name for this dimension
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Social => "Social sustainability",
            Dimension::Environmental => "Environmental sustainability",
            Dimension::Economic => "Economic sustainability",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social / environmental / economic flags for one evaluated statement.
///
/// A flag is set when at least one matched goal belongs to that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub social: bool,
    pub environmental: bool,
    pub economic: bool,
}

impl Classification {
    /// Build a classification with every listed dimension set
    pub fn from_dimensions<'a>(dimensions: impl IntoIterator<Item = &'a Dimension>) -> Self {
        let mut classification = Self::default();
        for dimension in dimensions {
            classification.insert(*dimension);
        }
        classification
    }

    /// Set a dimension
    pub fn insert(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Social => self.social = true,
            Dimension::Environmental => self.environmental = true,
            Dimension::Economic => self.economic = true,
        }
    }

    /// Union with another classification
    pub fn merge(&mut self, other: Classification) {
        self.social |= other.social;
        self.environmental |= other.environmental;
        self.economic |= other.economic;
    }

    /// True if the dimension is set
    pub fn contains(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Social => self.social,
            Dimension::Environmental => self.environmental,
            Dimension::Economic => self.economic,
        }
    }

    /// The set dimensions, in [`Dimension::all`] order
    pub fn dimensions(&self) -> Vec<Dimension> {
        Dimension::all()
            .iter()
            .copied()
            .filter(|d| self.contains(*d))
            .collect()
    }

    /// True when no dimension is set
    pub fn is_empty(&self) -> bool {
        !(self.social || self.environmental || self.economic)
    }
}
