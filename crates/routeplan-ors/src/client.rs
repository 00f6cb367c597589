use routeplan_core::error::{Result, RouteplanError};
use std::future::Future;
use std::time::Duration;

/// Blocking client for the openrouteservice HTTP API
///
/// Requests run on a fresh tokio runtime per call, so the client can be used
/// from plain synchronous code such as the CLI.
pub struct OrsClient {
    /// Base URL of the API (e.g., "https://api.openrouteservice.org")
    base_url: String,

    /// API key sent with every request
    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OrsClient {
    /// Create a client against `base_url` with a per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build().map_err(|e| {
            RouteplanError::ServiceUnavailable {
                service: "openrouteservice".to_string(),
                reason: format!("Failed to build HTTP client: {}", e),
                remediation: "Check the TLS configuration of this machine".to_string(),
            }
        })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Drive `future` to completion on a new runtime
    pub(crate) fn block_on<F, T>(&self, future: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let runtime =
            tokio::runtime::Runtime::new().map_err(|e| RouteplanError::ServiceUnavailable {
                service: "openrouteservice".to_string(),
                reason: format!("Failed to create async runtime: {}", e),
                remediation: "Ensure tokio is properly configured".to_string(),
            })?;

        runtime.block_on(future)
    }

    /// Send a request and return the body of a successful response
    pub(crate) async fn send(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(|e| RouteplanError::ServiceUnavailable {
            service: "openrouteservice".to_string(),
            reason: format!("Failed to connect to openrouteservice: {}", e),
            remediation: format!(
                "Ensure {} is reachable. Set ROUTEPLAN_ORS_URL to use a self-hosted instance.",
                self.base_url
            ),
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RouteplanError::ServiceUnavailable {
                service: "openrouteservice".to_string(),
                reason: format!("openrouteservice API error ({}): {}", status, error_text),
                remediation: remediation_for(status),
            });
        }

        response.text().await.map_err(|e| RouteplanError::ServiceUnavailable {
            service: "openrouteservice".to_string(),
            reason: format!("Failed to read openrouteservice response: {}", e),
            remediation: "Retry the request".to_string(),
        })
    }
}

fn remediation_for(status: reqwest::StatusCode) -> String {
    match status.as_u16() {
        401 | 403 => "Check that ORS_API_KEY holds a valid openrouteservice key".to_string(),
        429 => "Daily or per-minute quota exceeded. Wait and retry.".to_string(),
        404 => "Check the routing profile name and ROUTEPLAN_ORS_URL".to_string(),
        _ => "Check openrouteservice status and API compatibility".to_string(),
    }
}
