//! HTTP client for rozklad-pkp.pl.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use super::error::SiteError;

/// Default site root.
pub const DEFAULT_BASE_URL: &str = "http://rozklad-pkp.pl/";

/// The site refuses clients that do not look like a browser.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Source of raw response bodies.
///
/// This abstraction lets the timetable be driven by canned pages in tests.
pub trait Fetcher {
    /// GET `path` relative to the site root and return the body.
    fn get(&self, path: &str) -> impl Future<Output = Result<String, SiteError>> + Send;
}

/// Configuration for the site client.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site root, with or without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl SiteConfig {
    /// Create a config pointing at the public site.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing or a mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Join a relative path onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the timetable site.
#[derive(Debug, Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    config: SiteConfig,
}

impl SiteClient {
    /// Create a new site client.
    pub fn new(config: SiteConfig) -> Result<Self, SiteError> {
        let mut headers = HeaderMap::new();

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| SiteError::Api {
                status: 0,
                message: "Invalid User-Agent header".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }
}

impl Fetcher for SiteClient {
    async fn get(&self, path: &str) -> Result<String, SiteError> {
        let url = self.config.url_for(path);
        debug!(%url, "Fetching");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SiteError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn config_builder() {
        let config = SiteConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(3);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn url_for_joins_with_single_slash() {
        let config = SiteConfig::new();
        assert_eq!(
            config.url_for("station/search?term=x&short=0"),
            "http://rozklad-pkp.pl/station/search?term=x&short=0"
        );

        let config = SiteConfig::new().with_base_url("http://localhost:8080");
        assert_eq!(config.url_for("/pl/tp?a=1"), "http://localhost:8080/pl/tp?a=1");
    }

    #[test]
    fn client_creation() {
        assert!(SiteClient::new(SiteConfig::new()).is_ok());
    }

    #[test]
    fn bad_user_agent_rejected() {
        let mut config = SiteConfig::new();
        config.user_agent = "bad\nagent".to_string();
        assert!(matches!(
            SiteClient::new(config),
            Err(SiteError::Api { status: 0, .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_site_fails() {
        // Port 9 (discard) on localhost is closed in any sane test environment.
        let client = SiteClient::new(
            SiteConfig::new()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(2),
        )
        .unwrap();

        let result = client.get("station/search?term=a&short=0").await;
        assert!(result.is_err());
    }
}
