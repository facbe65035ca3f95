//! HTTP dispatch layer
//!
//! The [`Dispatcher`] trait is the transport contract every resource
//! accessor talks to: four verb methods over API paths. [`HttpDispatcher`]
//! is the production implementation. It owns the base URL, the credentials,
//! the request/response envelope and error reporting, so the accessors can
//! stay transport-agnostic and trivially testable with a fake.

use crate::auth::Credentials;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use uuid::Uuid;

/// Query or option parameters forwarded with read operations.
///
/// `Option<&Params>` is the full shape: `None` means the caller sent no
/// parameters at all, which is not the same thing as an empty map.
pub type Params = serde_json::Map<String, Value>;

/// Production API host and version prefix.
pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Transport contract consumed by the resource accessors.
///
/// Implementations own everything below the path level: URL assembly,
/// authentication, serialization and error semantics. Accessors forward to
/// these methods and hand back the result unchanged.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// GET `path`, forwarding `params` as the query when present.
    async fn get(&self, path: &str, params: Option<&Params>) -> Result<Value>;

    /// POST `data` to `path`.
    async fn post(&self, path: &str, data: &Value) -> Result<Value>;

    /// PUT `data` to `path`.
    async fn put(&self, path: &str, data: &Value) -> Result<Value>;

    /// DELETE `path`.
    async fn delete(&self, path: &str) -> Result<Value>;
}

/// Dispatcher backed by a real HTTP client.
///
/// Write bodies are wrapped in the `{"data": ...}` envelope the API
/// expects, and the `data` payload is unwrapped from responses before they
/// reach the caller. Collection callers that need the pagination cursor can
/// go through [`get_page`](HttpDispatcher::get_page), which keeps the
/// envelope.
#[derive(Clone)]
pub struct HttpDispatcher {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpDispatcher {
    /// Create a dispatcher against the production API.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Create a dispatcher against a custom base URL (mock servers, proxies).
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self> {
        let parsed = url::Url::parse(base_url).context("Invalid API base URL")?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Unsupported URL scheme: {}", parsed.scheme());
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("asana-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path, query string included when present.
    fn endpoint(&self, path: &str, params: Option<&Params>) -> String {
        let url = format!("{}{}", self.base_url, path);
        match params {
            Some(params) => add_query_params(&url, params),
            None => url,
        }
    }

    /// Perform a request and return the full response envelope.
    ///
    /// Exposed within the crate so the pagination helpers can read the
    /// `next_page` cursor that the [`Dispatcher`] methods strip off.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.endpoint(path, params);
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, "{} {}", method, path);

        let mut request = self.http.request(method, &url);
        request = self.credentials.apply(request);
        if let Some(data) = body {
            request = request.json(&serde_json::json!({ "data": data }));
        }

        let response = request.send().await.context("Failed to send request")?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok());
        let text = response.text().await.context("Failed to read response body")?;

        if !status.is_success() {
            tracing::error!(
                %request_id,
                "API error: {} - {}",
                status,
                sanitize_for_log(&text)
            );
            return Err(error_for_status(status, retry_after, &text));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        let payload: Value =
            serde_json::from_str(&text).context("Failed to parse response JSON")?;
        if let Some(message) = error_message(&payload) {
            tracing::error!(%request_id, "API reported errors: {}", message);
            anyhow::bail!("API request failed: {}", message);
        }

        Ok(payload)
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn get(&self, path: &str, params: Option<&Params>) -> Result<Value> {
        let envelope = self.request(Method::GET, path, params, None).await?;
        Ok(unwrap_data(envelope))
    }

    async fn post(&self, path: &str, data: &Value) -> Result<Value> {
        let envelope = self.request(Method::POST, path, None, Some(data)).await?;
        Ok(unwrap_data(envelope))
    }

    async fn put(&self, path: &str, data: &Value) -> Result<Value> {
        let envelope = self.request(Method::PUT, path, None, Some(data)).await?;
        Ok(unwrap_data(envelope))
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        let envelope = self.request(Method::DELETE, path, None, None).await?;
        Ok(unwrap_data(envelope))
    }
}

/// Pull the `data` payload out of a response envelope.
///
/// A response without one yields `Null`, never an error; some endpoints
/// reply with an empty envelope on success.
fn unwrap_data(envelope: Value) -> Value {
    match envelope {
        Value::Object(mut envelope) => envelope.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// First message from the `errors` array, if the payload carries one.
fn error_message(payload: &Value) -> Option<String> {
    payload
        .get("errors")?
        .as_array()?
        .first()?
        .get("message")?
        .as_str()
        .map(|message| message.to_string())
}

/// Build the error for a non-success status, folding in the message the API
/// returned when the body parses as an error payload.
fn error_for_status(status: StatusCode, retry_after: Option<u64>, body: &str) -> anyhow::Error {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(error_message);

    match (status.as_u16(), retry_after, detail) {
        (429, Some(seconds), _) => {
            anyhow::anyhow!("API request failed: {} (retry after {}s)", status, seconds)
        }
        (_, _, Some(message)) => anyhow::anyhow!("API request failed: {}: {}", status, message),
        _ => anyhow::anyhow!("API request failed: {}", status),
    }
}

/// Append query parameters to a URL, percent-encoding values.
///
/// String, number and boolean values become single pairs; an array value
/// repeats its key once per string element. Anything else is skipped.
fn add_query_params(url: &str, params: &Params) -> String {
    let mut query_parts: Vec<String> = Vec::new();

    for (key, value) in params {
        match value {
            Value::String(text) => {
                query_parts.push(format!("{}={}", key, urlencoding::encode(text)));
            }
            Value::Number(number) => query_parts.push(format!("{}={}", key, number)),
            Value::Bool(flag) => query_parts.push(format!("{}={}", key, flag)),
            Value::Array(items) => {
                for item in items {
                    if let Value::String(text) = item {
                        query_parts.push(format!("{}={}", key, urlencoding::encode(text)));
                    }
                }
            }
            _ => {}
        }
    }

    if query_parts.is_empty() {
        url.to_string()
    } else if url.contains('?') {
        format!("{}&{}", url, query_parts.join("&"))
    } else {
        format!("{}?{}", url, query_parts.join("&"))
    }
}

/// Sanitize response body for logging.
/// Security: truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let mut cleaned = String::new();
    for c in body.chars().filter(|c| c.is_ascii_graphic() || *c == ' ') {
        if cleaned.len() >= MAX_LOG_BODY_LENGTH {
            return format!("{}... [truncated, {} bytes total]", cleaned, body.len());
        }
        cleaned.push(c);
    }
    cleaned
}

/// Format an API error for display.
/// Security: sanitizes error messages to avoid leaking request internals
pub fn format_api_error(error: &anyhow::Error) -> String {
    let error_str = error.to_string();

    if error_str.contains("401") {
        return "Authentication failed. Check your Asana access token.".to_string();
    }
    if error_str.contains("402") {
        return "This endpoint requires Asana Premium.".to_string();
    }
    if error_str.contains("403") {
        return "Permission denied. You do not have access to this resource.".to_string();
    }
    if error_str.contains("404") {
        return "Resource not found.".to_string();
    }
    if error_str.contains("429") {
        return "Rate limit exceeded. Please try again later.".to_string();
    }
    if error_str.contains("400") {
        return "Invalid request. Check your parameters.".to_string();
    }
    if error_str.contains("500") || error_str.contains("503") {
        return "Asana service temporarily unavailable. Please try again.".to_string();
    }

    if error_str.contains("Failed to send request") {
        return "Request failed. Check your network connection and try again.".to_string();
    }

    // Unknown errors pass through, clipped and stripped of control bytes
    let sanitized = error_str
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .take(120)
        .collect::<String>();

    if sanitized.len() < error_str.len() {
        format!("{}...", sanitized)
    } else {
        sanitized
    }
}
