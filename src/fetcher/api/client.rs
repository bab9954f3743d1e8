//! The platform query capability and its HTTP implementation.

use crate::auth::Credential;
use crate::config::Config;
use crate::error::AppError;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, error, info};

use super::http_client::create_http_client_with_timeout;

/// Capability for issuing authenticated document queries against the fantasy
/// platform. A trait so tests can substitute doubles for the remote service.
pub trait FantasyApi {
    /// Fetches the document at `resource_path` under `credential`.
    fn query(
        &self,
        resource_path: &str,
        credential: &Credential,
    ) -> impl Future<Output = Result<Value, AppError>> + Send;
}

/// HTTP implementation of [`FantasyApi`] over the configured platform base
/// URL. Queries carry the credential's access token as a bearer token.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlatformClient {
    /// Builds a platform client from configuration with its own pooled HTTP
    /// client.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_http(http, &config.api_base_url))
    }

    /// Reuses an existing reqwest client, sharing its connection pool.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        PlatformClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl FantasyApi for PlatformClient {
    async fn query(
        &self,
        resource_path: &str,
        credential: &Credential,
    ) -> Result<Value, AppError> {
        let url = format!("{}/{}", self.base_url, resource_path);
        info!("Querying platform resource: {resource_path}");
        let request = self.http.get(&url).bearer_auth(&credential.access_token);
        execute(request, &url).await
    }
}

/// Sends a prepared request and maps every failure mode onto the error
/// model: network failures, HTTP status families, empty bodies and
/// non-JSON payloads all surface as distinct kinds. No retries at any
/// layer; a failed request fails its pipeline branch.
pub(super) async fn execute(
    request: reqwest::RequestBuilder,
    url: &str,
) -> Result<Value, AppError> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            500..=599 => {
                if status_code == 502 || status_code == 503 {
                    AppError::api_service_unavailable(status_code, reason, url)
                } else {
                    AppError::api_server_error(status_code, reason, url)
                }
            }
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    if response_text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            &response_text.chars().take(200).collect::<String>()
        );
        AppError::api_malformed_json(e.to_string(), url)
    })
}
