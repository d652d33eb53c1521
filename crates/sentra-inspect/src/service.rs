//! Core inspection service trait and request/response types.

use crate::content::ByteContentItem;
use crate::error::{InspectError, Result};
use async_trait::async_trait;
use sentra_core::{InfoType, InspectionSettings, Likelihood};
use serde::{Deserialize, Serialize};

/// Trait for remote content-inspection backends.
///
/// The calling code treats the service as an opaque collaborator: submit one
/// request, receive one structured result. Implementations must be
/// thread-safe (Send + Sync) for use in async contexts.
#[async_trait]
pub trait InspectionService: Send + Sync {
    /// Submit a request and receive the inspection result.
    ///
    /// # Errors
    /// Returns error if the service rejects the request, the transport
    /// fails, or the response cannot be decoded. Errors surface unchanged to
    /// the caller; there is no retry or fallback at this layer.
    async fn inspect(&self, request: InspectRequest) -> Result<InspectResult>;

    /// Release the service handle.
    ///
    /// Called exactly once per orchestration, on every exit path.
    ///
    /// # Errors
    /// Returns error if teardown fails; callers log and discard it.
    async fn close(&self) -> Result<()>;

    /// Get the unique identifier for this service.
    fn service_id(&self) -> &str;
}

/// What to search for and how results come back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Sensitive-information categories to search for
    pub info_types: Vec<InfoType>,

    /// Whether matched substrings are included in findings
    pub include_quote: bool,

    /// Drop findings below this likelihood (applied service-side)
    pub min_likelihood: Option<Likelihood>,

    /// Cap on findings returned per request (applied service-side)
    pub max_findings: Option<u32>,
}

impl InspectConfig {
    /// Create a config searching for the given info types.
    ///
    /// Quote inclusion is off and no likelihood floor or findings cap is
    /// set, matching the service's own defaults.
    #[must_use]
    pub fn new(info_types: Vec<InfoType>) -> Self {
        Self {
            info_types,
            include_quote: false,
            min_likelihood: None,
            max_findings: None,
        }
    }

    /// Set whether matched substrings are returned with findings.
    #[must_use]
    pub fn with_include_quote(mut self, include_quote: bool) -> Self {
        self.include_quote = include_quote;
        self
    }

    /// Set the minimum likelihood for returned findings.
    #[must_use]
    pub fn with_min_likelihood(mut self, min_likelihood: Likelihood) -> Self {
        self.min_likelihood = Some(min_likelihood);
        self
    }

    /// Set the cap on findings per request.
    #[must_use]
    pub fn with_max_findings(mut self, max_findings: u32) -> Self {
        self.max_findings = Some(max_findings);
        self
    }

    /// Build a typed config from configuration-file settings.
    ///
    /// # Errors
    /// Returns `InspectError::InvalidConfig` if an info type name or the
    /// likelihood level is malformed.
    pub fn from_settings(settings: &InspectionSettings) -> Result<Self> {
        let mut info_types = Vec::with_capacity(settings.info_types.len());
        for name in &settings.info_types {
            let info_type = InfoType::new(name.clone())
                .map_err(|e| InspectError::InvalidConfig(e.to_string()))?;
            info_types.push(info_type);
        }

        let min_likelihood = settings
            .min_likelihood
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e: sentra_core::SentraError| InspectError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            info_types,
            include_quote: settings.include_quote,
            min_likelihood,
            max_findings: settings.max_findings,
        })
    }
}

/// One inspection request: target scope, content, and config.
///
/// Constructed fresh per call, never persisted, not mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectRequest {
    /// Target scope the inspection runs under (e.g. `projects/my-project`)
    pub parent: String,

    /// The content to inspect
    pub item: ByteContentItem,

    /// Inspection configuration
    pub config: InspectConfig,
}

impl InspectRequest {
    /// Create a new inspection request.
    #[must_use]
    pub fn new(parent: impl Into<String>, item: ByteContentItem, config: InspectConfig) -> Self {
        Self {
            parent: parent.into(),
            item,
            config,
        }
    }
}

/// Byte offsets locating a finding within the submitted content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ByteRange {
    /// Inclusive start offset
    pub start: u64,
    /// Exclusive end offset
    pub end: u64,
}

/// One detected match returned by the service. Read-only to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The matched substring, present only when the request enabled quote
    /// inclusion
    pub quote: Option<String>,

    /// Category that matched
    pub info_type: InfoType,

    /// Confidence the service assigned to the match
    pub likelihood: Likelihood,

    /// Where in the submitted bytes the match sits, when reported
    pub location: Option<ByteRange>,
}

/// Ordered sequence of findings, as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectResult {
    /// Findings in service order (no further ordering is guaranteed)
    pub findings: Vec<Finding>,

    /// Whether the service clipped the result at its findings limit
    pub findings_truncated: bool,
}
