use serde::Serialize;

/// Fetch lifecycle indicator published by the loader.
///
/// Starts out `Idle` and only changes through a fetch. There is no terminal
/// variant: `Loaded` and `Failed` both go back to `Loading` on the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    /// No fetch attempted yet
    #[default]
    Idle,
    Loading,
    /// The most recent fetch succeeded and the collection is current
    Loaded,
    /// The most recent fetch failed, with a human-readable reason
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}
