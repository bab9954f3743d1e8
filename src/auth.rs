//! Credential handling: the opaque platform access token, id-token
//! verification, and refresh-before-expiry.
//!
//! Signature verification against the identity provider's key set is outside
//! this crate; `verify_id_token` checks token structure and expiry only.

use crate::constants::TOKEN_REFRESH_LEEWAY_SECONDS;
use crate::error::AppError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Opaque access token plus metadata, read once per pipeline run and
/// replaced in place if refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    #[serde(rename = "idToken")]
    pub id_token: String,
    /// Unix timestamp (seconds) at which the access token expires
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
}

impl Credential {
    /// Loads a credential from a JSON file.
    pub async fn load(path: &str) -> Result<Self, AppError> {
        let content = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::invalid_credential(format!("credential file is not valid JSON: {e}"))
        })
    }

    /// Whether the access token expires within `leeway_seconds` of `now`.
    pub fn is_expiring(&self, now: i64, leeway_seconds: i64) -> bool {
        self.expires_at - now <= leeway_seconds
    }
}

/// Shape of the token endpoint's refresh response.
#[derive(Debug, Deserialize)]
struct TokenRefreshResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: Option<String>,
    #[serde(rename = "idToken")]
    id_token: Option<String>,
    #[serde(rename = "expiresIn")]
    expires_in: i64,
}

/// Validates the structure and expiry of an id token.
///
/// The token must be a three-segment JWT whose payload decodes to JSON with
/// a future `exp` claim.
///
/// # Errors
/// * `AppError::InvalidCredential` - malformed token or expired claim
pub fn verify_id_token(id_token: &str) -> Result<(), AppError> {
    let segments: Vec<&str> = id_token.split('.').collect();
    if segments.len() != 3 || segments[2].is_empty() {
        return Err(AppError::invalid_credential(
            "id token is not a three-segment JWT",
        ));
    }

    let payload_bytes = URL_SAFE_NO_PAD.decode(segments[1]).map_err(|e| {
        AppError::invalid_credential(format!("id token payload is not valid base64url: {e}"))
    })?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).map_err(|e| {
        AppError::invalid_credential(format!("id token payload is not valid JSON: {e}"))
    })?;

    let exp = payload
        .get("exp")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| AppError::invalid_credential("id token payload is missing exp claim"))?;

    if exp <= Utc::now().timestamp() {
        return Err(AppError::invalid_credential("id token has expired"));
    }

    debug!("Id token structure and expiry verified");
    Ok(())
}

/// Refreshes the credential against the token endpoint when it is about to
/// expire; otherwise returns it unchanged.
///
/// # Errors
/// * `AppError::TokenRefresh` - the refresh request failed or was rejected
#[instrument(skip(http, credential))]
pub async fn refresh_if_needed(
    http: &reqwest::Client,
    token_url: &str,
    credential: Credential,
) -> Result<Credential, AppError> {
    let now = Utc::now().timestamp();
    if !credential.is_expiring(now, TOKEN_REFRESH_LEEWAY_SECONDS) {
        debug!("Access token still valid, skipping refresh");
        return Ok(credential);
    }

    info!("Access token expiring, refreshing against token endpoint");
    let response = http
        .post(token_url)
        .json(&serde_json::json!({
            "grantType": "refresh_token",
            "refreshToken": credential.refresh_token,
        }))
        .send()
        .await
        .map_err(|e| AppError::token_refresh(format!("request to token endpoint failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::token_refresh(format!(
            "token endpoint returned {status}"
        )));
    }

    let refreshed: TokenRefreshResponse = response
        .json()
        .await
        .map_err(|e| AppError::token_refresh(format!("invalid token endpoint response: {e}")))?;

    Ok(Credential {
        access_token: refreshed.access_token,
        refresh_token: refreshed
            .refresh_token
            .unwrap_or(credential.refresh_token),
        id_token: refreshed.id_token.unwrap_or(credential.id_token),
        expires_at: now + refreshed.expires_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Builds an unsigned JWT-shaped token with the given payload JSON.
    fn make_id_token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.signature")
    }

    fn test_credential(expires_at: i64) -> Credential {
        Credential {
            access_token: "access-token".to_string(),
            refresh_token: "refresh-token".to_string(),
            id_token: make_id_token(&serde_json::json!({
                "sub": "user-1",
                "exp": Utc::now().timestamp() + 3600,
            })),
            expires_at,
        }
    }

    #[test]
    fn test_verify_valid_id_token() {
        let token = make_id_token(&serde_json::json!({
            "sub": "user-1",
            "exp": Utc::now().timestamp() + 600,
        }));
        assert!(verify_id_token(&token).is_ok());
    }

    #[test]
    fn test_verify_expired_id_token() {
        let token = make_id_token(&serde_json::json!({
            "sub": "user-1",
            "exp": Utc::now().timestamp() - 600,
        }));
        let err = verify_id_token(&token).unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential { .. }));
        assert!(err.to_string().contains("expired"));
    }

    #[test]
    fn test_verify_rejects_two_segment_token() {
        let err = verify_id_token("header.payload").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential { .. }));
    }

    #[test]
    fn test_verify_rejects_bad_base64_payload() {
        let err = verify_id_token("aGVhZGVy.!!!notbase64!!!.sig").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential { .. }));
    }

    #[test]
    fn test_verify_rejects_missing_exp() {
        let token = make_id_token(&serde_json::json!({ "sub": "user-1" }));
        let err = verify_id_token(&token).unwrap_err();
        assert!(err.to_string().contains("exp"));
    }

    #[test]
    fn test_is_expiring() {
        let now = Utc::now().timestamp();
        assert!(test_credential(now + 30).is_expiring(now, 60));
        assert!(test_credential(now - 5).is_expiring(now, 60));
        assert!(!test_credential(now + 3600).is_expiring(now, 60));
    }

    #[tokio::test]
    async fn test_refresh_skipped_for_fresh_credential() {
        let http = reqwest::Client::new();
        let credential = test_credential(Utc::now().timestamp() + 3600);
        let access_token = credential.access_token.clone();

        // Token endpoint URL is unreachable on purpose; a fresh credential
        // must never hit it.
        let refreshed = refresh_if_needed(&http, "http://127.0.0.1:1/token", credential)
            .await
            .unwrap();
        assert_eq!(refreshed.access_token, access_token);
    }

    #[tokio::test]
    async fn test_refresh_replaces_expiring_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "accessToken": "new-access-token",
                "refreshToken": "new-refresh-token",
                "expiresIn": 3600,
            })))
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let credential = test_credential(Utc::now().timestamp() - 10);
        let old_id_token = credential.id_token.clone();

        let refreshed = refresh_if_needed(&http, &format!("{}/token", server.uri()), credential)
            .await
            .unwrap();

        assert_eq!(refreshed.access_token, "new-access-token");
        assert_eq!(refreshed.refresh_token, "new-refresh-token");
        // No new id token issued: the old one is kept
        assert_eq!(refreshed.id_token, old_id_token);
        assert!(refreshed.expires_at > Utc::now().timestamp());
    }

    #[tokio::test]
    async fn test_refresh_failure_maps_to_token_refresh_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let credential = test_credential(Utc::now().timestamp() - 10);

        let err = refresh_if_needed(&http, &format!("{}/token", server.uri()), credential)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::TokenRefresh { .. }));
    }

    #[tokio::test]
    async fn test_credential_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential.json");
        let credential = test_credential(Utc::now().timestamp() + 3600);
        tokio::fs::write(&path, serde_json::to_string(&credential).unwrap())
            .await
            .unwrap();

        let loaded = Credential::load(&path.to_string_lossy()).await.unwrap();
        assert_eq!(loaded.access_token, credential.access_token);
        assert_eq!(loaded.expires_at, credential.expires_at);
    }

    #[tokio::test]
    async fn test_credential_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let err = Credential::load(&path.to_string_lossy())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential { .. }));
    }
}
