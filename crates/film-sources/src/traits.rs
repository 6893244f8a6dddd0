use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Url;

/// What came back from a single GET, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code. `None` when the reply carried no interpretable status.
    pub status: Option<u16>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait FilmTransport: Send + Sync {
    // Transport metadata
    fn transport_name(&self) -> &str;

    /// Issue exactly one GET to `url` and await exactly one reply.
    ///
    /// Implementations only produce errors for failures before a response
    /// exists (`Offline`, `Transport`) or for a body that could not be read
    /// (`Unexpected`). Status and body interpretation belong to the caller.
    async fn get(&self, url: &Url) -> Result<RawResponse, FetchError>;
}
