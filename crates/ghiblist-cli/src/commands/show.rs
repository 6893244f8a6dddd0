use super::fetch::load_with_retry;
use super::Settings;
use crate::output::{Output, OutputFormat};
use crate::view;
use color_eyre::Result;
use film_core::FilmLoader;

pub async fn run_show(settings: &Settings, id: &str, output: &Output) -> Result<()> {
    tracing::debug!(endpoint = %settings.endpoint, id, "Show command started");

    let loader = FilmLoader::with_http(settings.endpoint.clone());
    load_with_retry(&loader, settings, output).await?;

    let film = loader
        .film(id)
        .ok_or_else(|| color_eyre::eyre::eyre!("No film with id '{}' in the collection", id))?;

    match output.format() {
        OutputFormat::Human => {
            if !output.is_quiet() {
                println!("{}", view::film_detail(&film));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&film)?);
        }
    }

    Ok(())
}
