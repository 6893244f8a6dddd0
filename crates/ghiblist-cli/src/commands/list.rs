use super::fetch::load_with_retry;
use super::Settings;
use crate::output::{Output, OutputFormat};
use crate::view;
use color_eyre::Result;
use film_core::FilmLoader;

pub async fn run_list(settings: &Settings, output: &Output) -> Result<()> {
    tracing::debug!(endpoint = %settings.endpoint, source = settings.endpoint_source.as_str(), "List command started");

    let loader = FilmLoader::with_http(settings.endpoint.clone());
    load_with_retry(&loader, settings, output).await?;

    let films = loader.films();
    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            if films.is_empty() {
                output.info("The endpoint returned no films.");
                return Ok(());
            }
            println!("{}", view::film_table(&films));
            output.success(format!("{} films", films.len()));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&*films)?);
        }
    }

    Ok(())
}
