//! Shared domain types for content inspection.
//!
//! This module defines the vocabulary both the configuration layer and the
//! inspection client speak: sensitive-information categories and the
//! confidence scale the service assigns to matches.

use crate::error::SentraError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Newtype for sensitive-information category names.
///
/// Names follow the inspection service's convention: uppercase ASCII
/// alphanumerics and underscores, starting with a letter (e.g.
/// `EMAIL_ADDRESS`, `PHONE_NUMBER`, `CREDIT_CARD_NUMBER`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfoType(String);

impl InfoType {
    /// Create a new `InfoType` from a name.
    ///
    /// # Errors
    /// Returns error if the name doesn't match the required format.
    pub fn new(name: impl Into<String>) -> Result<Self, SentraError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Get the inner name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate info type format: uppercase alphanumerics and underscores,
    /// 1-64 characters, starting with a letter.
    fn validate(name: &str) -> Result<(), SentraError> {
        static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = NAME_REGEX
            .get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9_]{0,63}$").expect("valid regex"));

        if regex.is_match(name) {
            Ok(())
        } else {
            Err(SentraError::Validation(format!(
                "invalid info type name: must be uppercase alphanumerics and underscores, got '{name}'"
            )))
        }
    }
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordinal confidence level the service assigns to a finding.
///
/// Variants are declared in ascending order so the derived `Ord` matches the
/// service's scale: a `VeryLikely` finding outranks a `Possible` one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    /// Likelihood was not set by the service
    #[serde(rename = "LIKELIHOOD_UNSPECIFIED")]
    Unspecified,
    /// Very few matching signals
    VeryUnlikely,
    /// Few matching signals
    Unlikely,
    /// Some matching signals
    Possible,
    /// Many matching signals
    Likely,
    /// Strongest matching signals
    VeryLikely,
}

impl Likelihood {
    /// Canonical wire name for this level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "LIKELIHOOD_UNSPECIFIED",
            Self::VeryUnlikely => "VERY_UNLIKELY",
            Self::Unlikely => "UNLIKELY",
            Self::Possible => "POSSIBLE",
            Self::Likely => "LIKELY",
            Self::VeryLikely => "VERY_LIKELY",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Likelihood {
    type Err = SentraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIKELIHOOD_UNSPECIFIED" => Ok(Self::Unspecified),
            "VERY_UNLIKELY" => Ok(Self::VeryUnlikely),
            "UNLIKELY" => Ok(Self::Unlikely),
            "POSSIBLE" => Ok(Self::Possible),
            "LIKELY" => Ok(Self::Likely),
            "VERY_LIKELY" => Ok(Self::VeryLikely),
            other => Err(SentraError::Validation(format!(
                "unknown likelihood level '{other}'"
            ))),
        }
    }
}
