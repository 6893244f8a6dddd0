use super::loading_ui::{is_interactive, LoadingSpinner};
use super::prompts;
use super::Settings;
use crate::output::Output;
use color_eyre::Result;
use film_core::{FilmLoader, LoadState};

/// Drive the loader until it settles, offering a manual retry after failures.
///
/// Returns an error only when the user ends up without a loaded collection;
/// fetch failures themselves arrive as `LoadState::Failed`.
pub async fn load_with_retry(loader: &FilmLoader, settings: &Settings, output: &Output) -> Result<()> {
    let interactive = is_interactive() && !output.is_quiet();
    let mut attempt = 1u32;

    loop {
        tracing::debug!(attempt, endpoint = %loader.endpoint(), "Fetching films");

        let pending = loader.fetch();
        // Subscribing after the call: the receiver starts at `Loading` or a settled state
        let spinner = LoadingSpinner::attach(loader.subscribe_state(), interactive);
        pending.await;
        spinner.finish().await;

        match loader.state() {
            LoadState::Loaded => return Ok(()),
            LoadState::Failed(message) => {
                output.error(&message);
                if !(interactive && settings.retry_prompt) {
                    return Err(color_eyre::eyre::eyre!("Films could not be loaded"));
                }

                if !prompts::prompt_yes_no("Retry?", Some(true))? {
                    return Err(color_eyre::eyre::eyre!("Films could not be loaded"));
                }
                attempt += 1;
            }
            other => {
                return Err(color_eyre::eyre::eyre!(
                    "Fetch finished in unexpected state: {}",
                    other.label()
                ))
            }
        }
    }
}
