//! File inspection workflow.
//!
//! Single linear flow: load bytes from disk, classify the content kind,
//! assemble the request, make one remote call. The service handle is closed
//! on every exit path.

use crate::content::{ByteContentItem, ContentKind};
use crate::error::Result;
use crate::service::{InspectConfig, InspectRequest, InspectResult, InspectionService};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Inspect a local file for sensitive content.
///
/// Reads `path`, tags the bytes with `kind_label` (`"IMAGE"` or
/// `"TEXT_UTF8"`), and submits them to `service` under the `parent` scope.
/// The service handle is closed exactly once before returning, regardless of
/// which step failed; a close failure is logged and never masks the primary
/// outcome.
///
/// # Errors
/// Propagates the file-read error, the kind validation error, or whatever
/// the service returned, unchanged.
pub async fn inspect_file(
    service: Arc<dyn InspectionService>,
    parent: &str,
    path: &Path,
    kind_label: &str,
    config: &InspectConfig,
) -> Result<InspectResult> {
    let outcome = run_inspection(service.as_ref(), parent, path, kind_label, config).await;

    if let Err(err) = service.close().await {
        warn!(
            service = service.service_id(),
            error = %err,
            "service handle did not close cleanly"
        );
    }

    outcome
}

async fn run_inspection(
    service: &dyn InspectionService,
    parent: &str,
    path: &Path,
    kind_label: &str,
    config: &InspectConfig,
) -> Result<InspectResult> {
    // Fails before any request is constructed or sent.
    let data = tokio::fs::read(path).await?;
    let kind = ContentKind::from_label(kind_label)?;
    debug!(
        path = %path.display(),
        kind = kind.label(),
        bytes = data.len(),
        "assembling inspection request"
    );

    let request = InspectRequest::new(parent, ByteContentItem::new(kind, data), config.clone());
    let result = service.inspect(request).await?;

    info!(
        service = service.service_id(),
        findings = result.findings.len(),
        truncated = result.findings_truncated,
        "inspection complete"
    );
    Ok(result)
}
