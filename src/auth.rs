//! Authentication
//!
//! Credentials for the API: personal access tokens sent as a bearer header,
//! or the legacy API key sent as HTTP basic auth with the key as the
//! username and a blank password.

use anyhow::Result;

/// Environment variable holding a personal access token.
pub const ENV_ACCESS_TOKEN: &str = "ASANA_ACCESS_TOKEN";

/// Environment variable holding a legacy API key.
pub const ENV_API_KEY: &str = "ASANA_API_KEY";

/// API credentials.
///
/// Secrets are write-only once constructed: `Debug` output and
/// [`redacted`](Credentials::redacted) only ever show a four-character
/// suffix.
#[derive(Clone)]
pub enum Credentials {
    /// Personal access token or OAuth bearer token.
    AccessToken(String),
    /// Legacy API key.
    ApiKey(String),
}

impl Credentials {
    /// Bearer-token credentials.
    pub fn access_token(token: &str) -> Result<Self> {
        validate_secret(token)?;
        Ok(Credentials::AccessToken(token.to_string()))
    }

    /// Legacy API-key credentials.
    pub fn api_key(key: &str) -> Result<Self> {
        validate_secret(key)?;
        Ok(Credentials::ApiKey(key.to_string()))
    }

    /// Resolve credentials from the environment.
    ///
    /// `ASANA_ACCESS_TOKEN` wins; `ASANA_API_KEY` is the fallback for
    /// accounts still on key auth.
    pub fn from_env() -> Result<Self> {
        if let Ok(token) = std::env::var(ENV_ACCESS_TOKEN) {
            return Self::access_token(&token);
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            tracing::debug!("Using legacy API key authentication");
            return Self::api_key(&key);
        }
        anyhow::bail!(
            "No credentials found. Set {} (or {}) in the environment",
            ENV_ACCESS_TOKEN,
            ENV_API_KEY
        )
    }

    /// Apply these credentials to an outgoing request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::AccessToken(token) => request.bearer_auth(token),
            // The key rides as the basic-auth username with a blank password.
            Credentials::ApiKey(key) => request.basic_auth(key, Some("")),
        }
    }

    /// Redacted form for logs and error messages.
    pub fn redacted(&self) -> String {
        let (label, secret) = match self {
            Credentials::AccessToken(token) => ("token", token),
            Credentials::ApiKey(key) => ("api key", key),
        };

        if secret.len() <= 4 {
            format!("{} ****", label)
        } else {
            format!("{} ****{}", label, &secret[secret.len() - 4..])
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Security: never expose the raw secret in debug output
        write!(f, "Credentials({})", self.redacted())
    }
}

/// Reject secrets that are empty or carry whitespace/control bytes, which
/// would corrupt the authorization header.
fn validate_secret(secret: &str) -> Result<()> {
    if secret.is_empty() {
        anyhow::bail!("Credential is empty");
    }
    if !secret.chars().all(|c| c.is_ascii_graphic()) {
        anyhow::bail!("Credential contains whitespace or non-printable characters");
    }
    Ok(())
}
