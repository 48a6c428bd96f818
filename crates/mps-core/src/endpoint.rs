//! Proxy endpoint resolution.
//!
//! The configured server is usually `host:port` without a scheme. It is
//! normalized once to an `https://` base URL. The proxy commonly presents a
//! self-signed certificate, so requests against an `https` URL carry a
//! per-request directive to skip certificate validation.

use crate::transport::RequestOptions;

const HTTPS_PREFIX: &str = "https://";

/// Path of the proxy's AMT command endpoint.
pub const AMT_PATH: &str = "amt";

/// Normalize a configured host string to an `https` base URL.
///
/// If `raw` already starts with `https://` (any case) only the scheme token is
/// lowercased; otherwise `https://` is prepended. Total over all inputs: an
/// empty string yields `https://`, which the transport will reject.
pub fn normalize_base_url(raw: &str) -> String {
    match raw.get(..HTTPS_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(HTTPS_PREFIX) => {
            format!("{}{}", HTTPS_PREFIX, &raw[HTTPS_PREFIX.len()..])
        }
        _ => format!("{}{}", HTTPS_PREFIX, raw),
    }
}

/// True if `url` uses the `https` scheme (case-insensitive).
pub fn is_https(url: &str) -> bool {
    url.get(..6)
        .map(|s| s.eq_ignore_ascii_case("https:"))
        .unwrap_or(false)
}

/// Resolved proxy endpoint. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpsEndpoint {
    base_url: String,
}

impl MpsEndpoint {
    pub fn new(server_name_with_port: &str) -> Self {
        let base_url = normalize_base_url(server_name_with_port);
        tracing::debug!(base_url = %base_url, "resolved mps endpoint");
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/<path>`; no slash collapsing is performed.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Transport directives for a request built against this endpoint.
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions::for_url(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_scheme_when_missing() {
        assert_eq!(
            normalize_base_url("mps.example.com:4433"),
            "https://mps.example.com:4433"
        );
    }

    #[test]
    fn keeps_existing_https_and_lowercases_scheme() {
        assert_eq!(
            normalize_base_url("https://mps.example.com:4433"),
            "https://mps.example.com:4433"
        );
        assert_eq!(
            normalize_base_url("HTTPS://Mps.Example.com"),
            "https://Mps.Example.com"
        );
        assert_eq!(normalize_base_url("hTtPs://x"), "https://x");
    }

    #[test]
    fn other_schemes_are_prefixed_verbatim() {
        assert_eq!(normalize_base_url("http://mps:3000"), "https://http://mps:3000");
    }

    #[test]
    fn empty_and_short_inputs_are_total() {
        assert_eq!(normalize_base_url(""), "https://");
        assert_eq!(normalize_base_url("h"), "https://h");
        assert_eq!(normalize_base_url("日本"), "https://日本");
    }

    #[test]
    fn amt_url() {
        let ep = MpsEndpoint::new("mps.local:3000");
        assert_eq!(ep.url_for(AMT_PATH), "https://mps.local:3000/amt");
    }

    #[test]
    fn https_endpoint_skips_cert_validation() {
        let ep = MpsEndpoint::new("mps.local");
        assert!(ep.request_options().allow_insecure_tls);
    }

    #[test]
    fn scheme_detection() {
        assert!(is_https("https://a"));
        assert!(is_https("HTTPS:x"));
        assert!(!is_https("http://a"));
        assert!(!is_https("http"));
    }
}
