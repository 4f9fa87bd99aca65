//! Single-attempt page fetch.
//!
//! One GET per analysis with a browser-like User-Agent. The body is read as
//! raw bytes whatever the declared content type. Non-2xx responses are
//! successful fetches of their body; only transport failures are errors.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::options::Options;

/// Response as handed to the decoding step.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status of the response.
    pub status: StatusCode,

    /// Response headers.
    pub headers: HeaderMap,

    /// Undecoded body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// The `Content-Type` header, if present and valid ASCII.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }
}

/// Parse `url` and require an http or https scheme.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{scheme}'"),
        }),
    }
}

/// Build the HTTP client for one analysis.
fn build_client(options: &Options) -> Result<Client> {
    let mut builder = Client::builder().user_agent(options.user_agent.as_str());
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Fetch `url` once and return its status, headers and raw body.
pub async fn fetch(url: &Url, options: &Options) -> Result<RawResponse> {
    let client = build_client(options)?;
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!(url = %url, status = status.as_u16(), "non-success status, analyzing body anyway");
    }

    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();
    debug!(url = %url, status = status.as_u16(), bytes = body.len(), "fetched page");

    Ok(RawResponse { status, headers, body })
}
