//! Grouped Bar Chart
//!
//! Life expectancy per year for the comparison countries. This is the
//! page's one reactive view: each selector change re-invokes the
//! builder with the chosen country and the resulting figure replaces
//! the previous one client-side.

use crate::dataset::Record;

use super::figure::{Figure, Layout, Marker, Trace};
use super::theme;

const TITLE: &str = "Germany vs Denmark & Belgium";
const HEIGHT: u32 = 300;

/// Build the grouped bar chart over (year, life expectancy).
///
/// With a selection, rows are filtered to the matching country (exact,
/// case-sensitive) and the fixed per-country colors are applied; a name
/// outside the subset yields an empty figure rather than an error.
/// Without a selection every country in `rows` gets a trace, colored by
/// the renderer's default palette.
pub fn country_bar_chart(rows: &[Record], selection: Option<&str>) -> Figure {
    let filtered: Vec<&Record> = match selection {
        Some(country) => rows.iter().filter(|r| r.country == country).collect(),
        None => rows.iter().collect(),
    };

    let traces = countries_in(&filtered)
        .into_iter()
        .map(|country| {
            let marker = if selection.is_some() {
                theme::country_color(&country).map(Marker::new)
            } else {
                None
            };

            Trace::Bar {
                x: filtered
                    .iter()
                    .filter(|r| r.country == country)
                    .map(|r| r.year)
                    .collect(),
                y: filtered
                    .iter()
                    .filter(|r| r.country == country)
                    .map(|r| r.life_exp)
                    .collect(),
                name: country,
                marker,
            }
        })
        .collect();

    Figure::new(
        traces,
        Layout::dark().title(TITLE).height(HEIGHT).barmode("group"),
    )
}

/// Distinct countries in first-appearance order.
fn countries_in(rows: &[&Record]) -> Vec<String> {
    let mut countries: Vec<String> = Vec::new();
    for record in rows {
        if !countries.iter().any(|c| *c == record.country) {
            countries.push(record.country.clone());
        }
    }
    countries
}
