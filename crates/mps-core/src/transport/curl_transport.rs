//! libcurl-backed transport (via the `curl` crate).

use std::time::Duration;

use super::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::TransportConfig;

/// Performs one POST per call on a fresh easy handle. Blocking.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::from_config(&TransportConfig::default())
    }
}

impl CurlTransport {
    pub fn from_config(cfg: &TransportConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for CurlTransport {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)
            .map_err(|_| TransportError::InvalidUrl(request.url.clone()))?;
        easy.post(true)?;
        easy.post_fields_copy(request.body.as_bytes())?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        // Scoped to this handle; the proxy usually runs with a self-signed cert.
        if request.options.allow_insecure_tls {
            easy.ssl_verify_peer(false)?;
            easy.ssl_verify_host(false)?;
        }

        let mut list = curl::easy::List::new();
        list.append(&format!("Content-Type: {}", request.content_type))?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
