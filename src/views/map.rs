//! Life Expectancy Choropleth
//!
//! The comparison countries on a Europe map, colored by life expectancy,
//! with one animation frame per year and a year slider. The color range
//! is fixed across frames so a country's shade is comparable between
//! years.

use serde_json::json;

use crate::dataset::Record;

use super::figure::{ColorBar, Figure, Frame, Layout, Title, Trace};
use super::theme;

/// Build the animated choropleth over the comparison subset.
///
/// The base trace shows the earliest year; every year in the subset
/// becomes a named frame driven by the slider and play/pause controls.
/// An empty subset yields a figure with no traces or frames.
pub fn life_exp_choropleth(rows: &[Record]) -> Figure {
    let years = years_in(rows);

    let (zmin, zmax) = rows.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.life_exp), hi.max(r.life_exp))
    });

    let frames: Vec<Frame> = years
        .iter()
        .map(|&year| Frame {
            name: year.to_string(),
            data: vec![choropleth_trace(rows, year, zmin, zmax)],
        })
        .collect();

    let data = match years.first() {
        Some(&first_year) => vec![choropleth_trace(rows, first_year, zmin, zmax)],
        None => Vec::new(),
    };

    let mut layout = Layout::dark().geo(json!({
        "scope": "europe",
        "projection": { "type": "natural earth" },
        "bgcolor": theme::PLOT_BG,
    }));

    if !years.is_empty() {
        layout = layout
            .sliders(year_slider(&years))
            .updatemenus(play_controls());
    }

    Figure::new(data, layout).with_frames(frames)
}

/// One choropleth trace for a single year.
fn choropleth_trace(rows: &[Record], year: i32, zmin: f64, zmax: f64) -> Trace {
    let year_rows: Vec<&Record> = rows.iter().filter(|r| r.year == year).collect();

    Trace::Choropleth {
        locations: year_rows.iter().map(|r| r.iso_alpha.clone()).collect(),
        z: year_rows.iter().map(|r| r.life_exp).collect(),
        text: year_rows.iter().map(|r| r.country.clone()).collect(),
        locationmode: "ISO-3".to_string(),
        colorscale: theme::ice_scale(),
        zmin,
        zmax,
        colorbar: ColorBar {
            title: Title {
                text: "lifeExp".to_string(),
            },
        },
    }
}

/// Distinct years in ascending order.
fn years_in(rows: &[Record]) -> Vec<i32> {
    let mut years: Vec<i32> = rows.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Slider with one step per frame year.
fn year_slider(years: &[i32]) -> serde_json::Value {
    let steps: Vec<serde_json::Value> = years
        .iter()
        .map(|year| {
            json!({
                "method": "animate",
                "label": year.to_string(),
                "args": [[year.to_string()], {
                    "mode": "immediate",
                    "frame": { "duration": 0, "redraw": true },
                    "transition": { "duration": 0 },
                }],
            })
        })
        .collect();

    json!([{
        "active": 0,
        "currentvalue": { "prefix": "year=" },
        "pad": { "t": 50 },
        "steps": steps,
    }])
}

/// Play/pause buttons driving the frame animation.
fn play_controls() -> serde_json::Value {
    json!([{
        "type": "buttons",
        "direction": "left",
        "showactive": false,
        "x": 0.1,
        "xanchor": "right",
        "y": 0,
        "yanchor": "top",
        "pad": { "r": 10, "t": 70 },
        "buttons": [
            {
                "label": "&#9654;",
                "method": "animate",
                "args": [null, {
                    "mode": "immediate",
                    "fromcurrent": true,
                    "frame": { "duration": 500, "redraw": true },
                    "transition": { "duration": 500, "easing": "linear" },
                }],
            },
            {
                "label": "&#9724;",
                "method": "animate",
                "args": [[null], {
                    "mode": "immediate",
                    "fromcurrent": true,
                    "frame": { "duration": 0, "redraw": true },
                    "transition": { "duration": 0 },
                }],
            },
        ],
    }])
}
