//! Plain HTTP GET client for listing pages.
//!
//! No cookies and no session state are carried between requests; each search
//! target is attempted exactly once per run. Blocked or flaky targets are the
//! next sweep's problem, not this one's.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScrapeError;

const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// HTTP client shared by the source adapters.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    /// Creates a `FetchClient` with the configured timeout and `User-Agent`.
    ///
    /// The user agent should look like a real browser: several of the target
    /// sites serve empty shells to obvious bots.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one page and returns its body as text.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`]: any non-2xx response.
    /// - [`ScrapeError::Http`]: network, timeout, or TLS failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        self.fetch_html_localized(url, DEFAULT_ACCEPT_LANGUAGE).await
    }

    /// Like [`fetch_html`](Self::fetch_html) with an explicit
    /// `Accept-Language`, for sources that localize their markup.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_html`](Self::fetch_html).
    pub async fn fetch_html_localized(
        &self,
        url: &str,
        accept_language: &str,
    ) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, DEFAULT_ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, accept_language)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{headers, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_html_returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/listing"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = FetchClient::new(5, "test-agent/1.0").unwrap();
        let body = client
            .fetch_html(&format!("{}/listing", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn fetch_html_sends_accept_language() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/th"))
            .and(headers(
                "accept-language",
                vec!["th", "en-US;q=0.7", "en;q=0.3"],
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = FetchClient::new(5, "test-agent/1.0").unwrap();
        client
            .fetch_html_localized(&format!("{}/th", server.uri()), "th,en-US;q=0.7,en;q=0.3")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_2xx_is_an_unexpected_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blocked"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = FetchClient::new(5, "test-agent/1.0").unwrap();
        let err = client
            .fetch_html(&format!("{}/blocked", server.uri()))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ScrapeError::UnexpectedStatus { status: 403, .. }),
            "expected UnexpectedStatus, got: {err:?}"
        );
    }
}
