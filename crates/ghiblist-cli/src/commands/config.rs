use super::Settings;
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use film_config::Config;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_config(cmd: ConfigCommands, settings: &Settings, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(settings, output),
        ConfigCommands::Init { force } => init_config(settings, force, output),
    }
}

fn show_config(settings: &Settings, output: &Output) -> Result<()> {
    let file_exists = settings.config_file.exists();

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Configuration").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
                Cell::new(""),
            ]);
            table.add_row(vec![
                Cell::new("Config File"),
                Cell::new(if file_exists {
                    settings.config_file.display().to_string()
                } else {
                    format!("{} (not created)", settings.config_file.display())
                }),
            ]);
            table.add_row(vec![Cell::new("Endpoint"), Cell::new(&settings.endpoint)]);
            table.add_row(vec![Cell::new("Endpoint Source"), Cell::new(settings.endpoint_source.as_str())]);
            table.add_row(vec![
                Cell::new("Retry Prompt"),
                Cell::new(if settings.retry_prompt { "✓".green().to_string() } else { "✗".red().to_string() }),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);

            if let Err(e) = settings.config.validate() {
                output.warn(format!("Configuration problem: {}", e));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": settings.config_file.display().to_string(),
                "config_file_exists": file_exists,
                "endpoint": settings.endpoint,
                "endpoint_source": settings.endpoint_source.as_str(),
                "retry_prompt": settings.retry_prompt,
            }));
        }
    }

    Ok(())
}

fn init_config(settings: &Settings, force: bool, output: &Output) -> Result<()> {
    let path = &settings.config_file;

    if path.exists() && !force {
        output.warn(format!("Configuration file already exists at: {}", path.display()));
        output.info("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    Config::default()
        .save_to_file(path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", path.display(), e))?;

    output.success(format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
