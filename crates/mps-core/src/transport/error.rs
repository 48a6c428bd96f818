//! Transport failure type and its classification.

use std::fmt;

/// Coarse classification of a transport failure, used for log fields and
/// user-facing hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// URL could not be parsed or used (empty or malformed server name).
    InvalidUrl,
    /// Connection refused, DNS failure, reset, nothing received.
    Connection,
    /// Connect or overall timeout elapsed.
    Timeout,
    /// TLS handshake or certificate failure.
    Tls,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportErrorKind::InvalidUrl => "invalid-url",
            TransportErrorKind::Connection => "connection",
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Tls => "tls",
            TransportErrorKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// Error raised by a transport when no HTTP response was obtained.
#[derive(Debug)]
pub enum TransportError {
    /// libcurl reported an error (connect, TLS, timeout, malformed URL).
    Curl(curl::Error),
    /// The URL was rejected before any I/O.
    InvalidUrl(String),
}

impl TransportError {
    pub fn kind(&self) -> TransportErrorKind {
        match self {
            TransportError::InvalidUrl(_) => TransportErrorKind::InvalidUrl,
            TransportError::Curl(e) => classify_curl_error(e),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Curl(e) => write!(f, "{}", e),
            TransportError::InvalidUrl(url) => write!(f, "invalid URL '{}'", url),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Curl(e) => Some(e),
            TransportError::InvalidUrl(_) => None,
        }
    }
}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        TransportError::Curl(e)
    }
}

/// Classify a curl error.
pub(crate) fn classify_curl_error(e: &curl::Error) -> TransportErrorKind {
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return TransportErrorKind::InvalidUrl;
    }
    if e.is_operation_timedout() {
        return TransportErrorKind::Timeout;
    }
    if e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cacert()
    {
        return TransportErrorKind::Tls;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportErrorKind::Connection;
    }
    TransportErrorKind::Other
}
