use film_core::LoadState;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Spinner that follows a loader's published state.
///
/// Shown while the state is `Loading`, cleared on the first other state. In
/// non-interactive mode nothing is drawn and the transitions are logged.
pub struct LoadingSpinner {
    task: JoinHandle<()>,
}

impl LoadingSpinner {
    pub fn attach(mut state_rx: watch::Receiver<LoadState>, interactive: bool) -> Self {
        let spinner = if interactive {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
            );
            spinner.enable_steady_tick(Duration::from_millis(80));
            spinner
        } else {
            ProgressBar::hidden()
        };

        let task = tokio::spawn(async move {
            loop {
                let state = state_rx.borrow_and_update().clone();
                if state.is_loading() {
                    spinner.set_message("Loading…");
                    if !interactive {
                        tracing::info!(operation = "fetch", state = state.label(), "Loading films");
                    }
                } else {
                    if !interactive {
                        tracing::info!(operation = "fetch", state = state.label(), "Fetch settled");
                    }
                    break;
                }

                if state_rx.changed().await.is_err() {
                    break;
                }
            }
            spinner.finish_and_clear();
        });

        Self { task }
    }

    /// Wait for the spinner to clear itself
    pub async fn finish(self) {
        let _ = self.task.await;
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}
