//! `OpenAI` API client.

use super::credentials::OpenAiCredentials;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse};
use core::time::Duration;
use jester_models::llm::GenerationError;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// HTTP client for the `OpenAI` Chat Completions API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    credentials: OpenAiCredentials,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new client against the public `OpenAI` endpoint.
    #[must_use]
    pub fn new(credentials: OpenAiCredentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different OpenAI-compatible endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> Result<HeaderMap, GenerationError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.credentials.api_key()))
                .map_err(|err| GenerationError::Auth(format!("Invalid API key header: {err}")))?,
        );
        if !self.credentials.organization().is_empty() {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(self.credentials.organization()).map_err(|err| {
                    GenerationError::Auth(format!("Invalid organization header: {err}"))
                })?,
            );
        }
        Ok(headers)
    }

    /// Sends a chat completion request.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;

        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let body = response
            .text()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, retry_after, body));
        }

        parse_completion(&body)
    }
}

impl core::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Parses a successful response body.
pub(super) fn parse_completion(body: &str) -> Result<ChatCompletionResponse, GenerationError> {
    serde_json::from_str(body).map_err(|err| {
        tracing::warn!(error = %err, body, "unparseable chat completion response");
        GenerationError::from(err)
    })
}

/// Maps a non-success status and its body to a [`GenerationError`].
pub(super) fn status_error(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: String,
) -> GenerationError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => {
            tracing::warn!(%message, "OpenAI rate limit or quota exceeded");
            GenerationError::RateLimited { retry_after }
        }
        _ => GenerationError::Provider {
            status: Some(status.as_u16()),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_auth_with_api_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let err = status_error(StatusCode::UNAUTHORIZED, None, body.to_string());

        assert!(matches!(err, GenerationError::Auth(ref m) if m == "Incorrect API key provided"));
    }

    #[test]
    fn too_many_requests_keeps_retry_after() {
        let err = status_error(
            StatusCode::TOO_MANY_REQUESTS,
            Some(Duration::from_secs(20)),
            "slow down".to_string(),
        );

        assert!(matches!(
            err,
            GenerationError::RateLimited { retry_after: Some(d) } if d == Duration::from_secs(20)
        ));
    }

    #[test]
    fn other_status_keeps_raw_body() {
        let err = status_error(StatusCode::BAD_GATEWAY, None, "upstream down".to_string());

        assert!(matches!(
            err,
            GenerationError::Provider { status: Some(502), ref message } if message == "upstream down"
        ));
    }

    #[test]
    fn malformed_success_body_is_a_json_error() {
        let err = parse_completion("<html>gateway</html>").unwrap_err();
        assert!(matches!(err, GenerationError::Json(_)));

        let err = parse_completion(r#"{"id": "chatcmpl-1"}"#).unwrap_err();
        assert!(err.to_string().starts_with("json error"));
    }

    #[test]
    fn well_formed_body_parses() {
        let body = r#"{"id":"chatcmpl-1","model":"gpt-4","choices":[{"message":{"content":"Boo who?"},"finish_reason":"stop"}]}"#;
        let response = parse_completion(body).unwrap();

        assert_eq!(response.choices.len(), 1);
        assert!(response.usage.is_none());
    }

    #[test]
    fn retry_after_reads_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static(" 7 "));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(7)));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = OpenAiClient::new(OpenAiCredentials::new("sk", "org"))
            .with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn headers_carry_key_and_organization() {
        let client = OpenAiClient::new(OpenAiCredentials::new("sk-test", "org-test"));
        let headers = client.headers().unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert_eq!(headers["openai-organization"], "org-test");
    }
}
