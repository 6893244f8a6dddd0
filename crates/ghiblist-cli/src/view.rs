//! Terminal rendering of the film list and detail views.

use comfy_table::{Cell, ContentArrangement, Table};
use film_models::Film;
use owo_colors::OwoColorize;

/// Non-empty value of an optional field
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn film_table(films: &[Film]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Director").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Score").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Id").add_attribute(comfy_table::Attribute::Bold),
    ]);

    for film in films {
        table.add_row(vec![
            Cell::new(&film.title),
            Cell::new(present(&film.release_date).unwrap_or("-")),
            Cell::new(present(&film.director).unwrap_or("-")),
            Cell::new(present(&film.rt_score).unwrap_or("-")),
            Cell::new(&film.id).fg(comfy_table::Color::DarkGrey),
        ]);
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Labelled detail rows, skipping absent or empty fields
pub fn detail_rows(film: &Film) -> Vec<(&'static str, String)> {
    let fields: [(&'static str, &Option<String>, Option<&str>); 5] = [
        ("Release Year", &film.release_date, None),
        ("Running Time", &film.running_time, Some(" min")),
        ("Rotten Tomatoes", &film.rt_score, None),
        ("Director", &film.director, None),
        ("Producer", &film.producer, None),
    ];

    fields
        .into_iter()
        .filter_map(|(label, value, suffix)| {
            present(value).map(|v| (label, format!("{}{}", v, suffix.unwrap_or(""))))
        })
        .collect()
}

pub fn film_detail(film: &Film) -> String {
    let mut lines = vec![film.title.bold().to_string()];

    if let Some(original) = present(&film.original_title) {
        lines.push(original.bright_black().to_string());
    }
    if let Some(romanised) = present(&film.original_title_romanised) {
        lines.push(romanised.bright_black().italic().to_string());
    }

    let rows = detail_rows(film);
    if !rows.is_empty() {
        let mut info = Table::new();
        for (label, value) in rows {
            info.add_row(vec![Cell::new(label).add_attribute(comfy_table::Attribute::Bold), Cell::new(value)]);
        }
        info.load_preset(comfy_table::presets::UTF8_FULL);
        info.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        lines.push(String::new());
        lines.push(info.to_string());
    }

    if let Some(description) = present(&film.description) {
        lines.push(String::new());
        lines.push("Synopsis".cyan().bold().to_string());
        lines.push(description.to_string());
    }

    let images: Vec<(&str, &str)> = [("Poster", &film.image), ("Banner", &film.movie_banner)]
        .into_iter()
        .filter_map(|(label, url)| present(url).map(|u| (label, u)))
        .collect();
    if !images.is_empty() {
        lines.push(String::new());
        for (label, url) in images {
            lines.push(format!("{}: {}", label.bright_black(), url));
        }
    }

    lines.join("\n")
}
