//! Fixed styling shared by the dashboard views.
//!
//! All presentation parameters are hard-coded constants; nothing here is
//! derived from data.

use super::figure::ColorStop;

/// Background for plot and paper areas.
pub const PLOT_BG: &str = "#222222";

/// Font color on the dark background.
pub const FONT_COLOR: &str = "white";

/// Per-country bar colors, applied when the selector refilters the
/// bar chart.
pub const COUNTRY_COLORS: [(&str, &str); 3] = [
    ("Germany", "#7FD4C1"),
    ("Denmark", "#8690FF"),
    ("Belgium", "#F7C0BB"),
];

/// Fixed color for a country's bars, if it has one.
pub fn country_color(country: &str) -> Option<&'static str> {
    COUNTRY_COLORS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, color)| *color)
}

/// The `ice` sequential scale used by the choropleth, darkest first.
const ICE_COLORS: [&str; 12] = [
    "rgb(3, 5, 18)",
    "rgb(25, 25, 51)",
    "rgb(44, 42, 87)",
    "rgb(58, 60, 125)",
    "rgb(62, 83, 160)",
    "rgb(62, 109, 178)",
    "rgb(72, 134, 187)",
    "rgb(89, 159, 196)",
    "rgb(114, 184, 205)",
    "rgb(149, 207, 216)",
    "rgb(192, 229, 232)",
    "rgb(234, 252, 253)",
];

/// The `ice` scale as evenly spaced color stops.
pub fn ice_scale() -> Vec<ColorStop> {
    let last = (ICE_COLORS.len() - 1) as f64;
    ICE_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| ColorStop(i as f64 / last, color.to_string()))
        .collect()
}
