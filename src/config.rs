//! Caller-facing configuration for the gateway client.
//!
//! Start from [`ClientConfig::new`] and chain the `with_*` setters; every
//! field has a documented default.

use std::time::Duration;

use url::Url;

/// Default production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.qi.iq/api/v1";

/// Default HTTP timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Basic-auth credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Configuration for a [`PaymentClient`](crate::client::PaymentClient).
///
/// The two credential fields are independent: the gateway accepts basic
/// auth, a pre-shared signature token, both on the same request, or
/// neither (requests are then sent unauthenticated).
///
/// Immutable once a client is constructed; concurrent calls read it
/// without locking.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL. Stored with a trailing slash so endpoint paths join
    /// underneath the configured prefix.
    pub base_url: Url,
    /// Terminal identifier issued by the gateway operator, sent on every
    /// request.
    pub terminal_id: String,
    /// Optional basic-auth credentials.
    pub credentials: Option<Credentials>,
    /// Optional pre-shared signature token.
    pub signature: Option<String>,
    /// HTTP timeout for each request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration for `terminal_id` with the default base URL and
    /// timeout and no credentials.
    pub fn new(terminal_id: impl Into<String>) -> Self {
        ClientConfig {
            base_url: default_base_url(),
            terminal_id: terminal_id.into(),
            credentials: None,
            signature: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a custom base URL (e.g. a sandbox environment). A trailing
    /// slash is appended when missing.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = ensure_trailing_slash(base_url);
        self
    }

    /// Attach basic-auth credentials.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Attach a pre-shared signature token.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Override the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_base_url() -> Url {
    // The constant is known-valid.
    ensure_trailing_slash(
        Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|_| unreachable!("default base URL parses")),
    )
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("term-1");
        assert_eq!(config.base_url.as_str(), "https://api.qi.iq/api/v1/");
        assert_eq!(config.terminal_id, "term-1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.credentials.is_none());
        assert!(config.signature.is_none());
    }

    #[test]
    fn base_url_gains_a_trailing_slash() {
        let config = ClientConfig::new("term-1")
            .with_base_url(Url::parse("https://sandbox.example.com/api/v1").unwrap());
        assert_eq!(config.base_url.as_str(), "https://sandbox.example.com/api/v1/");

        let already = ClientConfig::new("term-1")
            .with_base_url(Url::parse("https://sandbox.example.com/api/v1/").unwrap());
        assert_eq!(already.base_url.as_str(), "https://sandbox.example.com/api/v1/");
    }

    #[test]
    fn credential_fields_are_independent() {
        let both = ClientConfig::new("term-1")
            .with_basic_auth("user", "pass")
            .with_signature("sig-token");
        assert_eq!(
            both.credentials,
            Some(Credentials {
                username: "user".into(),
                password: "pass".into(),
            })
        );
        assert_eq!(both.signature.as_deref(), Some("sig-token"));
    }
}
