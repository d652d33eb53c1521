//! End-to-end tests for the file inspection workflow.
//!
//! Exercises the full flow against a recording mock service: request
//! assembly, error propagation, and the close-on-every-path guarantee.

use async_trait::async_trait;
use sentra_core::{InfoType, Likelihood};
use sentra_inspect::{
    inspect_file, write_report, ContentKind, Finding, InspectConfig, InspectError, InspectRequest,
    InspectResult, InspectionService, Result,
};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Mock service that records invocations and returns a canned outcome.
struct MockService {
    outcome: Mutex<Option<Result<InspectResult>>>,
    requests: Mutex<Vec<InspectRequest>>,
    close_calls: Mutex<u32>,
}

impl MockService {
    fn returning(outcome: Result<InspectResult>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Some(outcome)),
            requests: Mutex::new(Vec::new()),
            close_calls: Mutex::new(0),
        })
    }

    fn inspect_calls(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    fn close_calls(&self) -> u32 {
        *self.close_calls.lock().expect("close calls lock")
    }
}

#[async_trait]
impl InspectionService for MockService {
    async fn inspect(&self, request: InspectRequest) -> Result<InspectResult> {
        self.requests.lock().expect("requests lock").push(request);
        self.outcome
            .lock()
            .expect("outcome lock")
            .take()
            .expect("unexpected second inspect call")
    }

    async fn close(&self) -> Result<()> {
        *self.close_calls.lock().expect("close calls lock") += 1;
        Ok(())
    }

    fn service_id(&self) -> &str {
        "mock"
    }
}

fn contact_info_config() -> InspectConfig {
    InspectConfig::new(vec![
        InfoType::new("PHONE_NUMBER").expect("valid info type"),
        InfoType::new("EMAIL_ADDRESS").expect("valid info type"),
        InfoType::new("CREDIT_CARD_NUMBER").expect("valid info type"),
    ])
    .with_include_quote(true)
}

fn phone_and_email_result() -> InspectResult {
    InspectResult {
        findings: vec![
            Finding {
                quote: Some("555-1234".to_string()),
                info_type: InfoType::new("PHONE_NUMBER").expect("valid info type"),
                likelihood: Likelihood::Likely,
                location: None,
            },
            Finding {
                quote: Some("a@b.com".to_string()),
                info_type: InfoType::new("EMAIL_ADDRESS").expect("valid info type"),
                likelihood: Likelihood::VeryLikely,
                location: None,
            },
        ],
        findings_truncated: false,
    }
}

#[tokio::test]
async fn inspects_text_file_end_to_end() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("notes.txt");
    std::fs::write(&path, "call me at 555-1234 or a@b.com").expect("write fixture file");

    let service = MockService::returning(Ok(phone_and_email_result()));
    let config = contact_info_config();

    let result = inspect_file(
        service.clone(),
        "projects/test-project",
        &path,
        "TEXT_UTF8",
        &config,
    )
    .await
    .expect("inspection succeeds");

    // The captured request carries exactly what was read and configured.
    assert_eq!(service.inspect_calls(), 1);
    let requests = service.requests.lock().expect("requests lock");
    let request = &requests[0];
    assert_eq!(request.parent, "projects/test-project");
    assert_eq!(request.item.kind, ContentKind::TextUtf8);
    assert_eq!(request.item.data, b"call me at 555-1234 or a@b.com");
    assert!(request.config.include_quote);
    assert_eq!(request.config.info_types.len(), 3);

    // The handle was released exactly once.
    assert_eq!(service.close_calls(), 1);

    // The report lists both findings in order.
    let mut out = Vec::new();
    write_report(&mut out, &result).expect("write report");
    let rendered = String::from_utf8(out).expect("report is UTF-8");
    let expected = "Findings: 2\n\
                    \tQuote: 555-1234\n\
                    \tInfo type: PHONE_NUMBER\n\
                    \tLikelihood: LIKELY\n\
                    \tQuote: a@b.com\n\
                    \tInfo type: EMAIL_ADDRESS\n\
                    \tLikelihood: VERY_LIKELY\n";
    assert_eq!(rendered, expected);
}

#[tokio::test]
async fn service_error_propagates_and_close_still_runs() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("notes.txt");
    std::fs::write(&path, "nothing interesting").expect("write fixture file");

    let service = MockService::returning(Err(InspectError::ApiError {
        service: "mock".to_string(),
        status: 503,
        message: "backend unavailable".to_string(),
    }));

    let err = inspect_file(
        service.clone(),
        "projects/test-project",
        &path,
        "TEXT_UTF8",
        &contact_info_config(),
    )
    .await
    .expect_err("service failure surfaces");

    match err {
        InspectError::ApiError {
            service: id,
            status,
            message,
        } => {
            assert_eq!(id, "mock");
            assert_eq!(status, 503);
            assert_eq!(message, "backend unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(service.inspect_calls(), 1);
    assert_eq!(service.close_calls(), 1);
}

#[tokio::test]
async fn missing_file_fails_before_any_request() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("absent.txt");

    let service = MockService::returning(Ok(phone_and_email_result()));

    let err = inspect_file(
        service.clone(),
        "projects/test-project",
        &path,
        "TEXT_UTF8",
        &contact_info_config(),
    )
    .await
    .expect_err("missing file fails");

    assert!(matches!(err, InspectError::Io(_)));
    assert_eq!(service.inspect_calls(), 0);
    // The handle is still released, matching the deferred-cleanup contract.
    assert_eq!(service.close_calls(), 1);
}

#[tokio::test]
async fn rejects_unknown_content_kind() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("clip.wav");
    std::fs::write(&path, [0u8; 16]).expect("write fixture file");

    let service = MockService::returning(Ok(phone_and_email_result()));

    let err = inspect_file(
        service.clone(),
        "projects/test-project",
        &path,
        "AUDIO",
        &contact_info_config(),
    )
    .await
    .expect_err("unknown kind fails");

    assert!(matches!(&err, InspectError::InvalidContentKind { kind } if kind == "AUDIO"));
    assert!(err.to_string().contains("AUDIO"));
    assert_eq!(service.inspect_calls(), 0);
    assert_eq!(service.close_calls(), 1);
}

#[tokio::test]
async fn image_kind_is_tagged_on_the_request() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("scan.png");
    std::fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).expect("write fixture file");

    let service = MockService::returning(Ok(InspectResult {
        findings: vec![],
        findings_truncated: false,
    }));

    let result = inspect_file(
        service.clone(),
        "projects/test-project",
        &path,
        "IMAGE",
        &contact_info_config(),
    )
    .await
    .expect("inspection succeeds");

    assert!(result.findings.is_empty());
    let requests = service.requests.lock().expect("requests lock");
    assert_eq!(requests[0].item.kind, ContentKind::Image);
    assert_eq!(requests[0].item.data, [0x89, 0x50, 0x4e, 0x47]);
    drop(requests);
    assert_eq!(service.close_calls(), 1);
}
