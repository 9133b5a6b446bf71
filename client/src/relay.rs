//! HTTP transport for the contact form relay.
//!
//! Browser builds POST through `gloo-net`. Native builds have no network
//! access and fail every request with [`ContactError::Transport`].

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use behavior::contact::{ContactError, FormRelay, RelayResponse};

pub const JSON_MIME: &str = "application/json";

/// The third-party form relay at a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FormRelay for HttpRelay {
    async fn post(&self, body: &str) -> Result<RelayResponse, ContactError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Content-Type", JSON_MIME)
                .header("Accept", JSON_MIME)
                .body(body)
                .map_err(|e| ContactError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ContactError::Transport(e.to_string()))?;
            if !resp.ok() {
                log::warn!("form relay answered HTTP {}", resp.status());
            }
            // The relay reports failures in the JSON body, so decode regardless of status.
            resp.json::<RelayResponse>()
                .await
                .map_err(|e| ContactError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ContactError::Transport(format!(
                "cannot POST {} bytes to {} outside the browser",
                body.len(),
                self.endpoint
            )))
        }
    }
}
