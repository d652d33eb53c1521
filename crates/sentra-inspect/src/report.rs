//! Human-readable reporting of inspection results.

use crate::service::InspectResult;
use std::io::{self, Write};

/// Write a findings report to `writer`.
///
/// Emits one count line, then one block per finding in result order: the
/// matched quote (when present), the info type name, the likelihood, and the
/// byte offsets (when reported).
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_report<W: Write>(writer: &mut W, result: &InspectResult) -> io::Result<()> {
    writeln!(writer, "Findings: {}", result.findings.len())?;

    for finding in &result.findings {
        if let Some(quote) = &finding.quote {
            writeln!(writer, "\tQuote: {quote}")?;
        }
        writeln!(writer, "\tInfo type: {}", finding.info_type)?;
        writeln!(writer, "\tLikelihood: {}", finding.likelihood)?;
        if let Some(range) = &finding.location {
            writeln!(writer, "\tOffset: bytes {}..{}", range.start, range.end)?;
        }
    }

    if result.findings_truncated {
        writeln!(writer, "(results truncated by the service findings limit)")?;
    }

    Ok(())
}
