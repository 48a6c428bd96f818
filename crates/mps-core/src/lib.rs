pub mod config;
pub mod logging;

pub mod action;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod transport;

pub use action::{ActionCode, AmtActionBody, PowerAction, PowerActionRequest};
pub use client::{MpsClient, ProxyReply, StatusPolicy};
pub use endpoint::MpsEndpoint;
pub use error::{MpsError, Result};
pub use transport::{CurlTransport, HttpRequest, HttpResponse, RequestOptions, Transport};
