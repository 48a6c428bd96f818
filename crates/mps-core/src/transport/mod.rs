//! HTTP transport seam.
//!
//! The client only depends on the [`Transport`] trait. [`CurlTransport`] is
//! the libcurl-backed implementation used by the CLI; tests substitute their
//! own.

mod curl_transport;
mod error;

pub use curl_transport::CurlTransport;
pub use error::{TransportError, TransportErrorKind};

use crate::endpoint;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-request transport directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestOptions {
    /// Skip server certificate and host name validation for this request only.
    pub allow_insecure_tls: bool,
}

impl RequestOptions {
    /// Directives for a request to `url`: certificate validation is relaxed
    /// for `https` URLs, left alone otherwise.
    pub fn for_url(url: &str) -> Self {
        Self {
            allow_insecure_tls: endpoint::is_https(url),
        }
    }
}

/// Outbound POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub body: String,
    pub content_type: &'static str,
    pub options: RequestOptions,
}

impl HttpRequest {
    pub fn json(url: impl Into<String>, body: impl Into<String>) -> Self {
        let url = url.into();
        let options = RequestOptions::for_url(&url);
        Self {
            url,
            body: body.into(),
            content_type: JSON_CONTENT_TYPE,
            options,
        }
    }
}

/// Response as received; non-2xx statuses are not errors at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP transport. Call from `spawn_blocking` if used from async code.
pub trait Transport: Send + Sync {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
