use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::error::Error;

/// Base address of the wallet API.
pub const EDGE_BASE_URL: &str = "https://edge.qiwi.com/";

/// Base address of the operator/card detection endpoints, which live on
/// the main site rather than the API edge.
pub const DETECT_BASE_URL: &str = "https://qiwi.com/";

/// Client for the QIWI Wallet REST API.
///
/// Holds the access token (baked into the default headers), the two base
/// addresses, and a shared `reqwest::Client`. All of it is immutable
/// after construction; one instance per caller session.
///
/// # Example
///
/// ```no_run
/// use qiwi_wallet::QiwiWallet;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), qiwi_wallet::Error> {
/// let wallet = QiwiWallet::new("ACCESS_TOKEN")?;
/// let balance = wallet.get_balance().await?;
/// println!("{balance}");
/// # Ok(())
/// # }
/// ```
pub struct QiwiWallet {
    http: reqwest::Client,
    edge_base: Url,
    detect_base: Url,
}

impl QiwiWallet {
    /// Create a client against the production endpoints.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::with_base_urls(token, EDGE_BASE_URL, DETECT_BASE_URL)
    }

    /// Create a client against custom base addresses. Intended for tests
    /// and staging environments; `new` is the production path.
    pub fn with_base_urls(token: &str, edge_base: &str, detect_base: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers(token)?)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Self::with_http_client(http, edge_base, detect_base)
    }

    /// Create a client with a caller-supplied `reqwest::Client`.
    ///
    /// The supplied client must already carry the fixed header set (see
    /// [`QiwiWallet::default_headers`]); this constructor exists so
    /// callers can tune transport options (proxy, timeouts).
    pub fn with_http_client(
        http: reqwest::Client,
        edge_base: &str,
        detect_base: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            edge_base: parse_base(edge_base)?,
            detect_base: parse_base(detect_base)?,
        })
    }

    /// The fixed header set attached to every request:
    /// `Accept`/`Content-Type: application/json` and the bearer token.
    pub fn default_headers(token: &str) -> Result<HeaderMap, Error> {
        if token.trim().is_empty() {
            return Err(Error::Config("access token must not be empty".to_string()));
        }
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::Config("access token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Join a relative path (no leading slash) onto the API edge base.
    pub(crate) fn edge_url(&self, path: &str) -> Result<Url, Error> {
        join(&self.edge_base, path)
    }

    /// Join a relative path onto the detection base.
    pub(crate) fn detect_url(&self, path: &str) -> Result<Url, Error> {
        join(&self.detect_base, path)
    }
}

fn parse_base(base: &str) -> Result<Url, Error> {
    // A trailing slash makes Url::join treat the last segment as a
    // directory instead of replacing it.
    let normalized = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    Url::parse(&normalized).map_err(|e| Error::Config(format!("invalid base url {base:?}: {e}")))
}

fn join(base: &Url, path: &str) -> Result<Url, Error> {
    base.join(path)
        .map_err(|e| Error::Config(format!("invalid request path {path:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(QiwiWallet::new(""), Err(Error::Config(_))));
        assert!(matches!(QiwiWallet::new("   "), Err(Error::Config(_))));
    }

    #[test]
    fn token_with_line_break_is_rejected() {
        assert!(matches!(QiwiWallet::new("abc\ndef"), Err(Error::Config(_))));
    }

    #[test]
    fn edge_url_joins_relative_paths() {
        let wallet = QiwiWallet::new("token").unwrap();
        let url = wallet
            .edge_url("person-profile/v1/profile/current")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://edge.qiwi.com/person-profile/v1/profile/current"
        );
    }

    #[test]
    fn base_without_trailing_slash_is_normalized() {
        let wallet =
            QiwiWallet::with_base_urls("token", "http://localhost:8080", "http://localhost:8081")
                .unwrap();
        let url = wallet.edge_url("sinap/crossRates").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/sinap/crossRates");
    }

    #[test]
    fn detection_host_differs_from_edge() {
        let wallet = QiwiWallet::new("token").unwrap();
        let detect = wallet.detect_url("mobile/detect.action").unwrap();
        assert_eq!(detect.as_str(), "https://qiwi.com/mobile/detect.action");
    }
}
