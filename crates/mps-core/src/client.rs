//! Power-action client for the management proxy.
//!
//! Every call builds one `PowerAction` request, posts it to `<base>/amt` on a
//! blocking worker, logs the proxy's status and body, and then applies the
//! configured [`StatusPolicy`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::action::{ActionCode, PowerAction, PowerActionRequest};
use crate::endpoint::{MpsEndpoint, AMT_PATH};
use crate::error::{MpsError, Result};
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// How a non-2xx proxy response is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// Non-2xx becomes `MpsError::RemoteRejected`.
    #[default]
    Strict,
    /// Any status completes successfully; the status is only visible in the
    /// log record and the returned reply.
    LogOnly,
}

impl std::fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusPolicy::Strict => write!(f, "strict"),
            StatusPolicy::LogOnly => write!(f, "log-only"),
        }
    }
}

/// Proxy response to a power action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyReply {
    pub status: u32,
    pub body: String,
}

impl ProxyReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<HttpResponse> for ProxyReply {
    fn from(r: HttpResponse) -> Self {
        Self {
            status: r.status,
            body: r.body,
        }
    }
}

/// Client for one proxy endpoint. Cheap to clone; safe to share across tasks.
pub struct MpsClient<T> {
    endpoint: MpsEndpoint,
    transport: Arc<T>,
    policy: StatusPolicy,
}

impl<T> Clone for MpsClient<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            transport: Arc::clone(&self.transport),
            policy: self.policy,
        }
    }
}

impl<T> std::fmt::Debug for MpsClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MpsClient")
            .field("endpoint", &self.endpoint)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<T: Transport + 'static> MpsClient<T> {
    /// Build a client for `server_name_with_port` (scheme optional).
    pub fn new(server_name_with_port: &str, transport: T) -> Self {
        Self::with_endpoint(MpsEndpoint::new(server_name_with_port), Arc::new(transport))
    }

    pub fn with_endpoint(endpoint: MpsEndpoint, transport: Arc<T>) -> Self {
        Self {
            endpoint,
            transport,
            policy: StatusPolicy::default(),
        }
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn endpoint(&self) -> &MpsEndpoint {
        &self.endpoint
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.policy
    }

    pub async fn power_on(&self, guid: &str) -> Result<ProxyReply> {
        self.power_action(guid, PowerAction::PowerOn).await
    }

    pub async fn power_off(&self, guid: &str) -> Result<ProxyReply> {
        self.power_action(guid, PowerAction::PowerOff).await
    }

    pub async fn reboot(&self, guid: &str) -> Result<ProxyReply> {
        self.power_action(guid, PowerAction::Reboot).await
    }

    /// Build the POST for `guid`/`action` without sending it.
    pub fn build_request(&self, guid: &str, action: ActionCode) -> Result<HttpRequest> {
        let body = PowerActionRequest::new(guid, action).to_json()?;
        let request = HttpRequest::json(self.endpoint.url_for(AMT_PATH), body);
        tracing::debug!(
            url = %request.url,
            insecure_tls = request.options.allow_insecure_tls,
            "built power action request"
        );
        Ok(request)
    }

    /// Send `action` for `guid`. The code is not range-checked.
    ///
    /// Transport failures are returned as `MpsError::Transport` without retry.
    /// The proxy's status and body are logged on every completed round trip,
    /// before the status policy is applied.
    pub async fn power_action(
        &self,
        guid: &str,
        action: impl Into<ActionCode>,
    ) -> Result<ProxyReply> {
        let action = action.into();
        let request = self.build_request(guid, action)?;

        let transport = Arc::clone(&self.transport);
        let sent = tokio::task::spawn_blocking(move || transport.post(&request))
            .await
            .map_err(|e| MpsError::Worker(e.to_string()))?;

        let response = match sent {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(
                    guid,
                    action = action.value(),
                    kind = %e.kind(),
                    "power action failed: {}",
                    e
                );
                return Err(e.into());
            }
        };

        tracing::info!(
            "received response from mps statuscode - {}, content - {}",
            response.status,
            response.body
        );

        let reply = ProxyReply::from(response);
        match self.policy {
            StatusPolicy::Strict if !reply.is_success() => Err(MpsError::RemoteRejected {
                status: reply.status,
                body: reply.body,
            }),
            _ => Ok(reply),
        }
    }
}
