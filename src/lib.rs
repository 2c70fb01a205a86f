//! # Gapdash
//!
//! A single-page interactive demographic dashboard. A bundled Gapminder
//! excerpt is loaded once at startup, three fixed views are derived from
//! it (profile table, grouped bar chart, line chart, choropleth map),
//! and the page's one control - a country selector - refilters the bar
//! chart through a pure, deterministic update function.
//!
//! ## Modules
//!
//! - [`dataset`]: the bundled demographic table and its derived subsets
//! - [`views`]: figure and table builders with fixed styling
//! - [`api`]: the Axum page/API server
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gapdash::api::{serve, ApiConfig, AppState};
//! use gapdash::dataset::{Dataset, Subsets};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load()?;
//!     let subsets = Arc::new(Subsets::derive(&dataset));
//!
//!     let config = ApiConfig::default();
//!     serve(AppState::new(subsets, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod views;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};

pub use dataset::{
    Dataset, DatasetError, ProfileRow, Record, Subsets, DEFAULT_COUNTRY, SELECTOR_COUNTRIES,
};

pub use views::{
    country_bar_chart, life_exp_choropleth, life_exp_line_chart, table_view, Figure, TableView,
};
