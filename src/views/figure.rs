//! Figure Model
//!
//! A typed representation of the figure JSON the page hands to the
//! client-side renderer: traces, layout, and optional animation frames.
//! Only the corners the dashboard actually uses are modeled; free-form
//! layout fragments (geo, sliders, menus) are carried as raw JSON
//! values.

use serde::Serialize;
use serde_json::Value;

/// A renderable chart: data traces plus layout, optionally animated.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self {
            data,
            layout,
            frames: Vec::new(),
        }
    }

    /// Attach animation frames.
    pub fn with_frames(mut self, frames: Vec<Frame>) -> Self {
        self.frames = frames;
        self
    }
}

/// One named animation frame.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

/// A single data trace.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Vertical bars, one series per country.
    Bar {
        x: Vec<i32>,
        y: Vec<f64>,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    /// Line series (optionally with markers, via `mode`).
    Scatter {
        x: Vec<i32>,
        y: Vec<f64>,
        mode: String,
        name: String,
    },
    /// Filled country outlines keyed by ISO-3 code.
    Choropleth {
        locations: Vec<String>,
        z: Vec<f64>,
        text: Vec<String>,
        locationmode: String,
        colorscale: Vec<ColorStop>,
        zmin: f64,
        zmax: f64,
        colorbar: ColorBar,
    },
}

/// Per-series marker styling.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: String,
}

impl Marker {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// One stop of a continuous color scale: `[position, color]` with the
/// position normalized to 0..=1.
#[derive(Debug, Clone, Serialize)]
pub struct ColorStop(pub f64, pub String);

/// Color bar shown next to a choropleth.
#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

/// Chart or axis title.
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

/// Figure-level font styling.
#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub color: String,
}

/// Figure layout. Every chart on the page shares the dark base; the
/// builders layer titles, sizing, and chart-specific fragments on top.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sliders: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updatemenus: Option<Value>,
}

impl Layout {
    /// The dark base layout shared by every chart.
    pub fn dark() -> Self {
        Self {
            title: None,
            barmode: None,
            height: None,
            plot_bgcolor: super::theme::PLOT_BG.to_string(),
            paper_bgcolor: super::theme::PLOT_BG.to_string(),
            font: Font {
                color: super::theme::FONT_COLOR.to_string(),
            },
            geo: None,
            sliders: None,
            updatemenus: None,
        }
    }

    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(Title { text: text.into() });
        self
    }

    pub fn barmode(mut self, mode: impl Into<String>) -> Self {
        self.barmode = Some(mode.into());
        self
    }

    pub fn height(mut self, pixels: u32) -> Self {
        self.height = Some(pixels);
        self
    }

    pub fn geo(mut self, fragment: Value) -> Self {
        self.geo = Some(fragment);
        self
    }

    pub fn sliders(mut self, fragment: Value) -> Self {
        self.sliders = Some(fragment);
        self
    }

    pub fn updatemenus(mut self, fragment: Value) -> Self {
        self.updatemenus = Some(fragment);
        self
    }
}
