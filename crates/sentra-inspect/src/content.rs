//! Content payload model for inspection requests.

use crate::error::{InspectError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag for bytes submitted to the inspection service.
///
/// The set of kinds is closed. Labels map one-to-one onto the service's wire
/// names, so classification is an exact-match lookup with a single error
/// branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    /// Image bytes (the service runs OCR before matching)
    Image,
    /// UTF-8 encoded text
    TextUtf8,
}

impl ContentKind {
    /// Map a caller-supplied label onto a kind.
    ///
    /// # Errors
    /// Returns `InspectError::InvalidContentKind` for any label outside the
    /// supported set; the message carries the offending label.
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "IMAGE" => Ok(Self::Image),
            "TEXT_UTF8" => Ok(Self::TextUtf8),
            other => Err(InspectError::InvalidContentKind {
                kind: other.to_string(),
            }),
        }
    }

    /// Canonical wire name for this kind.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::TextUtf8 => "TEXT_UTF8",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw bytes plus their kind tag.
///
/// Immutable once built; owned by exactly one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteContentItem {
    /// Kind tag controlling how the service decodes the bytes
    pub kind: ContentKind,
    /// Raw content bytes
    pub data: Vec<u8>,
}

impl ByteContentItem {
    /// Create a new content item.
    #[must_use]
    pub fn new(kind: ContentKind, data: Vec<u8>) -> Self {
        Self { kind, data }
    }
}
