use crate::error::FetchError;
use crate::traits::{FilmTransport, RawResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::error::Error as StdError;
use std::io;
use std::sync::Arc;
use tracing::debug;

/// Create the reqwest Client used for film requests.
///
/// No custom headers and no timeout override: requests go out with the
/// transport defaults.
pub fn create_http_client() -> Client {
    Client::builder().build().unwrap_or_else(|_| Client::new())
}

/// reqwest-backed transport performing a plain GET.
#[derive(Clone)]
pub struct HttpTransport {
    client: Arc<Client>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Arc::new(create_http_client()),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a reqwest send failure onto the transport half of the taxonomy.
///
/// Only a missing network path counts as offline. A refused connection or an
/// unresolvable host reached the network, so it keeps the cause's description.
fn classify_send_error(error: &reqwest::Error) -> FetchError {
    if is_no_network_path(error) {
        FetchError::Offline
    } else {
        FetchError::Transport(error.to_string())
    }
}

/// Whether the I/O error at the root of `error`'s source chain reports that
/// no route to the network exists.
fn is_no_network_path(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(io) = err.downcast_ref::<io::Error>() {
            return matches!(
                io.kind(),
                io::ErrorKind::NetworkUnreachable | io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkDown
            );
        }
        current = err.source();
    }
    false
}

#[async_trait]
impl FilmTransport for HttpTransport {
    fn transport_name(&self) -> &str {
        "http"
    }

    async fn get(&self, url: &Url) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                debug!(url = %url, error = %e, connect = e.is_connect(), "GET failed before a response");
                classify_send_error(&e)
            })?;

        let status = response.status().as_u16();
        debug!(url = %url, status, "received response");

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Unexpected(format!("failed to read response body: {}", e)))?;

        Ok(RawResponse {
            status: Some(status),
            body: body.to_vec(),
        })
    }
}
