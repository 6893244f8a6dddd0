//! Remote film collection loader.
//!
//! `FilmLoader` owns one fetch end-to-end: it validates the endpoint, performs
//! a single GET through a [`FilmTransport`], classifies the outcome and
//! publishes it as a [`LoadState`] plus, on success, a fresh collection.
//!
//! Published values live in two `tokio::sync::watch` channels. Every update
//! writes the state first and the collection second, with no await in between,
//! so observers never see a success collection next to a stale `Loading`.
//!
//! Overlapping fetches are resolved with a sequence number: each call takes
//! the next number when it starts, and its result is only applied if no later
//! call has started since.
//!
//! Each load runs detached on the runtime and publishes its own outcome, so a
//! caller that stops waiting never leaves the loader stuck in `Loading`.

use crate::state::LoadState;
use film_models::{decode_films, Film};
use film_sources::{FetchError, FilmTransport, HttpTransport, RawResponse, Url};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub struct FilmLoader {
    shared: Arc<Shared>,
}

/// Loader state owned jointly by the handle and any in-flight load task
struct Shared {
    endpoint: String,
    transport: Arc<dyn FilmTransport>,
    /// Number of the most recently started fetch. Held only while publishing.
    sequence: Mutex<u64>,
    state: watch::Sender<LoadState>,
    films: watch::Sender<Arc<[Film]>>,
}

impl FilmLoader {
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn FilmTransport>) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        let (films, _) = watch::channel(Arc::from(Vec::new()));

        Self {
            shared: Arc::new(Shared {
                endpoint: endpoint.into(),
                transport,
                sequence: Mutex::new(0),
                state,
                films,
            }),
        }
    }

    /// Loader backed by the reqwest transport
    pub fn with_http(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Arc::new(HttpTransport::new()))
    }

    pub fn endpoint(&self) -> &str {
        &self.shared.endpoint
    }

    pub fn state(&self) -> LoadState {
        self.shared.state.borrow().clone()
    }

    /// Current collection. Retained across failed fetches.
    pub fn films(&self) -> Arc<[Film]> {
        Arc::clone(&self.shared.films.borrow())
    }

    /// Select a film from the current collection by id
    pub fn film(&self, id: &str) -> Option<Film> {
        self.shared.films.borrow().iter().find(|film| film.id == id).cloned()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<LoadState> {
        self.shared.state.subscribe()
    }

    pub fn subscribe_films(&self) -> watch::Receiver<Arc<[Film]>> {
        self.shared.films.subscribe()
    }

    /// Fetch the collection from the endpoint.
    ///
    /// `Loading` is published before this returns. The load itself runs on a
    /// spawned task that also publishes the outcome, so dropping the returned
    /// future stops the wait but not the fetch. Awaiting it resolves once the
    /// outcome is published. Must be called from within a tokio runtime.
    pub fn fetch(&self) -> impl Future<Output = ()> + Send + 'static {
        let sequence = {
            let mut latest = self.shared.lock_sequence();
            *latest += 1;
            self.shared.state.send_replace(LoadState::Loading);
            *latest
        };
        debug!(
            sequence,
            endpoint = %self.shared.endpoint,
            transport = self.shared.transport.transport_name(),
            "fetch started"
        );

        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            let outcome = shared.load().await;
            shared.publish(sequence, outcome);
        });

        async move {
            if let Err(e) = task.await {
                warn!(sequence, "film load task ended abnormally: {}", e);
            }
        }
    }
}

impl Shared {
    async fn load(&self) -> Result<Vec<Film>, FetchError> {
        let url = parse_endpoint(&self.endpoint)?;

        let transport = Arc::clone(&self.transport);
        let response = tokio::spawn(async move { transport.get(&url).await })
            .await
            .map_err(|e| FetchError::Unexpected(e.to_string()))??;

        classify_response(response)
    }

    fn publish(&self, sequence: u64, outcome: Result<Vec<Film>, FetchError>) {
        let latest = self.lock_sequence();
        if *latest != sequence {
            debug!(sequence, latest = *latest, "discarding result of superseded fetch");
            return;
        }

        match outcome {
            Ok(films) => {
                info!(sequence, count = films.len(), endpoint = %self.endpoint, "films loaded");
                self.state.send_replace(LoadState::Loaded);
                self.films.send_replace(Arc::from(films));
            }
            Err(error) => {
                info!(sequence, kind = error.kind(), endpoint = %self.endpoint, "film fetch failed: {}", error);
                self.state.send_replace(LoadState::Failed(error.to_string()));
            }
        }
    }

    fn lock_sequence(&self) -> MutexGuard<'_, u64> {
        // The guarded value is a plain counter, so a poisoned lock is still usable
        self.sequence.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Parse the configured endpoint, accepting only absolute http(s) URLs
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

/// Status first, then body: a non-2xx reply is reported by its code even when
/// the body would have decoded.
pub(crate) fn classify_response(response: RawResponse) -> Result<Vec<Film>, FetchError> {
    let status = response.status.ok_or(FetchError::NoResponse)?;
    if !(200..=299).contains(&status) {
        return Err(FetchError::BadStatus(status));
    }

    decode_films(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
}
