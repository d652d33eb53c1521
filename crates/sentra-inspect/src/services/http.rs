//! HTTP implementation of the inspection service.

use crate::error::{InspectError, Result};
use crate::service::{
    ByteRange, Finding, InspectRequest, InspectResult, InspectionService,
};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use sentra_core::{InfoType, Likelihood, ServiceConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const SERVICE_ID: &str = "dlp-http";
const DEFAULT_ENDPOINT: &str = "https://dlp.googleapis.com/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for a DLP-style REST inspection endpoint.
///
/// Submits content as `POST {endpoint}/{parent}/content:inspect` with the
/// service's camelCase JSON wire shape and a bearer-token auth header.
/// Whatever retry or backoff policy the HTTP stack applies is inherited
/// unchanged; the only local knob is the overall request timeout.
pub struct HttpInspectionService {
    auth_token: String,
    client: Client,
    base_url: String,
}

impl HttpInspectionService {
    /// Create a client against the default endpoint.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(auth_token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(auth_token, DEFAULT_ENDPOINT)
    }

    /// Create a client against a specific endpoint.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_endpoint(
        auth_token: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self> {
        Self::build(auth_token.into(), endpoint.into(), DEFAULT_TIMEOUT)
    }

    /// Create a client from configuration-file settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: &ServiceConfig, auth_token: impl Into<String>) -> Result<Self> {
        Self::build(
            auth_token.into(),
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn build(auth_token: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InspectError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            auth_token,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Convert an internal request to the service's wire format.
    fn to_api_request(request: &InspectRequest) -> ApiInspectRequest {
        let info_types = request
            .config
            .info_types
            .iter()
            .map(|info_type| ApiInfoType {
                name: info_type.as_str().to_string(),
            })
            .collect();

        ApiInspectRequest {
            item: ApiContentItem {
                byte_item: ApiByteItem {
                    kind: request.item.kind.label(),
                    data: BASE64.encode(&request.item.data),
                },
            },
            inspect_config: ApiInspectConfig {
                info_types,
                include_quote: request.config.include_quote,
                min_likelihood: request.config.min_likelihood,
                limits: request.config.max_findings.map(|max_findings| ApiFindingLimits {
                    max_findings_per_request: max_findings,
                }),
            },
        }
    }

    /// Convert the service's wire response to the internal result.
    fn convert_api_response(response: ApiInspectResponse) -> Result<InspectResult> {
        let mut findings = Vec::with_capacity(response.result.findings.len());
        for api_finding in response.result.findings {
            let info_type =
                InfoType::new(api_finding.info_type.name).map_err(|e| InspectError::ParseError {
                    service: SERVICE_ID.to_string(),
                    message: e.to_string(),
                })?;

            findings.push(Finding {
                quote: api_finding.quote,
                info_type,
                likelihood: api_finding.likelihood,
                location: api_finding
                    .location
                    .and_then(|location| location.byte_range),
            });
        }

        Ok(InspectResult {
            findings,
            findings_truncated: response.result.findings_truncated,
        })
    }
}

#[async_trait]
impl InspectionService for HttpInspectionService {
    async fn inspect(&self, request: InspectRequest) -> Result<InspectResult> {
        let url = format!("{}/{}/content:inspect", self.base_url, request.parent);
        let api_request = Self::to_api_request(&request);
        debug!(
            parent = %request.parent,
            kind = request.item.kind.label(),
            bytes = request.item.data.len(),
            "submitting content for inspection"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.auth_token)
            .json(&api_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(match status.as_u16() {
                401 | 403 => InspectError::AuthenticationFailed {
                    service: SERVICE_ID.to_string(),
                    message,
                },
                429 => InspectError::QuotaExceeded {
                    service: SERVICE_ID.to_string(),
                    message,
                },
                status => InspectError::ApiError {
                    service: SERVICE_ID.to_string(),
                    status,
                    message,
                },
            });
        }

        let body = response.text().await?;
        let api_response: ApiInspectResponse =
            serde_json::from_str(&body).map_err(|e| InspectError::ParseError {
                service: SERVICE_ID.to_string(),
                message: format!("failed to parse response: {e}"),
            })?;

        Self::convert_api_response(api_response)
    }

    async fn close(&self) -> Result<()> {
        // Nothing is held open between calls; dropping the client tears down
        // its connection pool.
        debug!(service = SERVICE_ID, "inspection service closed");
        Ok(())
    }

    fn service_id(&self) -> &str {
        SERVICE_ID
    }
}

// Service wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiInspectRequest {
    item: ApiContentItem,
    inspect_config: ApiInspectConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiContentItem {
    byte_item: ApiByteItem,
}

#[derive(Debug, Serialize)]
struct ApiByteItem {
    #[serde(rename = "type")]
    kind: &'static str,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiInspectConfig {
    info_types: Vec<ApiInfoType>,
    include_quote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_likelihood: Option<Likelihood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limits: Option<ApiFindingLimits>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiInfoType {
    name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiFindingLimits {
    max_findings_per_request: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiInspectResponse {
    result: ApiInspectResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiInspectResult {
    #[serde(default)]
    findings: Vec<ApiFinding>,
    #[serde(default)]
    findings_truncated: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiFinding {
    quote: Option<String>,
    info_type: ApiInfoType,
    likelihood: Likelihood,
    location: Option<ApiLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiLocation {
    byte_range: Option<ByteRange>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ByteContentItem, ContentKind};
    use crate::service::InspectConfig;

    fn sample_request() -> InspectRequest {
        let config = InspectConfig::new(vec![
            InfoType::new("PHONE_NUMBER").expect("valid info type"),
            InfoType::new("EMAIL_ADDRESS").expect("valid info type"),
        ])
        .with_include_quote(true);

        InspectRequest::new(
            "projects/test-project",
            ByteContentItem::new(ContentKind::TextUtf8, b"call 555-1234".to_vec()),
            config,
        )
    }

    #[test]
    fn test_service_creation() {
        let service = HttpInspectionService::new("test-token").expect("create service");
        assert_eq!(service.service_id(), "dlp-http");
        assert_eq!(service.base_url, "https://dlp.googleapis.com/v2");
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let service =
            HttpInspectionService::with_endpoint("test-token", "https://dlp.example.com/v2/")
                .expect("create service");
        assert_eq!(service.base_url, "https://dlp.example.com/v2");
    }

    #[test]
    fn test_from_config() {
        let config = ServiceConfig {
            endpoint: "https://inspect.internal.example.com/v2".to_string(),
            timeout_secs: 15,
            auth_token_env: "SENTRA_AUTH_TOKEN".to_string(),
        };

        let service =
            HttpInspectionService::from_config(&config, "test-token").expect("create service");
        assert_eq!(service.base_url, "https://inspect.internal.example.com/v2");
    }

    #[test]
    fn test_api_request_conversion() {
        let api_request = HttpInspectionService::to_api_request(&sample_request());

        assert_eq!(api_request.item.byte_item.kind, "TEXT_UTF8");
        assert_eq!(
            api_request.item.byte_item.data,
            BASE64.encode(b"call 555-1234")
        );
        assert_eq!(api_request.inspect_config.info_types.len(), 2);
        assert_eq!(api_request.inspect_config.info_types[0].name, "PHONE_NUMBER");
        assert!(api_request.inspect_config.include_quote);
        assert!(api_request.inspect_config.limits.is_none());
    }

    #[test]
    fn test_api_request_wire_shape() {
        let api_request = HttpInspectionService::to_api_request(&sample_request());
        let json = serde_json::to_value(&api_request).expect("serialize request");

        assert_eq!(json["item"]["byteItem"]["type"], "TEXT_UTF8");
        assert_eq!(json["inspectConfig"]["includeQuote"], true);
        assert_eq!(
            json["inspectConfig"]["infoTypes"][1]["name"],
            "EMAIL_ADDRESS"
        );
        // Unset options stay off the wire
        assert!(json["inspectConfig"].get("minLikelihood").is_none());
        assert!(json["inspectConfig"].get("limits").is_none());
    }

    #[test]
    fn test_response_conversion() {
        let body = r#"{
            "result": {
                "findings": [
                    {
                        "quote": "555-1234",
                        "infoType": {"name": "PHONE_NUMBER"},
                        "likelihood": "LIKELY",
                        "location": {"byteRange": {"start": 8, "end": 16}}
                    },
                    {
                        "infoType": {"name": "EMAIL_ADDRESS"},
                        "likelihood": "VERY_LIKELY"
                    }
                ],
                "findingsTruncated": true
            }
        }"#;

        let api_response: ApiInspectResponse =
            serde_json::from_str(body).expect("parse response body");
        let result =
            HttpInspectionService::convert_api_response(api_response).expect("convert response");

        assert_eq!(result.findings.len(), 2);
        assert!(result.findings_truncated);

        let first = &result.findings[0];
        assert_eq!(first.quote.as_deref(), Some("555-1234"));
        assert_eq!(first.info_type.as_str(), "PHONE_NUMBER");
        assert_eq!(first.likelihood, Likelihood::Likely);
        assert_eq!(first.location, Some(ByteRange { start: 8, end: 16 }));

        let second = &result.findings[1];
        assert!(second.quote.is_none());
        assert!(second.location.is_none());
    }

    #[test]
    fn test_empty_response_defaults() {
        let body = r#"{"result": {}}"#;
        let api_response: ApiInspectResponse =
            serde_json::from_str(body).expect("parse empty result");
        let result =
            HttpInspectionService::convert_api_response(api_response).expect("convert response");

        assert!(result.findings.is_empty());
        assert!(!result.findings_truncated);
    }

    #[test]
    fn test_unknown_likelihood_rejected() {
        let body = r#"{
            "result": {
                "findings": [
                    {"infoType": {"name": "PHONE_NUMBER"}, "likelihood": "MAYBE"}
                ]
            }
        }"#;

        assert!(serde_json::from_str::<ApiInspectResponse>(body).is_err());
    }
}
