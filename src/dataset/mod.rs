//! Bundled Gapminder Dataset
//!
//! The static demographic table the dashboard is built from, plus the
//! derived row subsets the views consume. The data is a European excerpt
//! of the Gapminder table (1952-2007 in five-year steps), compiled into
//! the binary with `include_str!` so nothing is read from disk at
//! runtime.
//!
//! Subsets are derived once at startup and shared read-only across all
//! request handlers; there are no writers after initialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Embedded CSV excerpt of the Gapminder table.
const GAPMINDER_CSV: &str = include_str!("gapminder.csv");

/// Countries offered by the selector, in display order.
pub const SELECTOR_COUNTRIES: [&str; 3] = ["Germany", "Belgium", "Denmark"];

/// Country selected before any interaction.
pub const DEFAULT_COUNTRY: &str = "Germany";

/// One row of the demographic table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Country name, exact match key for all filtering
    pub country: String,
    /// Observation year
    pub year: i32,
    /// Life expectancy at birth, years
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    /// Population
    pub pop: i64,
    /// GDP per capita, inflation-adjusted dollars
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
    /// ISO-3 country code, used by the map view
    pub iso_alpha: String,
}

/// A [`Record`] projected to the columns shown in the profile table and
/// the line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRow {
    pub year: i32,
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    pub pop: i64,
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
}

impl From<&Record> for ProfileRow {
    fn from(record: &Record) -> Self {
        Self {
            year: record.year,
            life_exp: record.life_exp,
            pop: record.pop,
            gdp_percap: record.gdp_percap,
        }
    }
}

/// Errors raised while loading the bundled dataset.
///
/// Any of these fails the process at startup; there is no request-time
/// error path through this module.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to parse bundled dataset: {0}")]
    Parse(#[from] csv::Error),

    #[error("Bundled dataset contains no records")]
    Empty,
}

/// The full in-memory demographic table, immutable after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Parse the embedded CSV. Runs once at startup.
    pub fn load() -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_reader(GAPMINDER_CSV.as_bytes());

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Record = row?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self { records })
    }

    /// All records, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose country matches any of `names` (exact, case-sensitive
    /// string equality). A name matching nothing silently contributes an
    /// empty set.
    pub fn rows_for(&self, names: &[&str]) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| names.contains(&r.country.as_str()))
            .cloned()
            .collect()
    }
}

/// Row subsets derived once at startup.
#[derive(Debug, Clone)]
pub struct Subsets {
    /// Germany rows projected to the table/line-chart columns, one per
    /// year Germany appears in the source.
    pub germany: Vec<ProfileRow>,
    /// All rows for the selector countries, unfiltered otherwise.
    pub countries: Vec<Record>,
}

impl Subsets {
    /// Derive both view subsets from the loaded table.
    pub fn derive(dataset: &Dataset) -> Self {
        let germany = dataset
            .rows_for(&[DEFAULT_COUNTRY])
            .iter()
            .map(ProfileRow::from)
            .collect();

        let countries = dataset.rows_for(&SELECTOR_COUNTRIES);

        Self { germany, countries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_load_parses_bundle() {
        let dataset = Dataset::load().unwrap();
        assert!(!dataset.is_empty());
        // Six countries on the 1952-2007 five-year grid.
        assert_eq!(dataset.len() % 12, 0);
    }

    #[test]
    fn test_records_have_expected_year_grid() {
        let dataset = Dataset::load().unwrap();
        let years: BTreeSet<i32> = dataset.records().iter().map(|r| r.year).collect();
        let expected: BTreeSet<i32> = (1952..=2007).step_by(5).collect();
        assert_eq!(years, expected);
    }

    #[test]
    fn test_rows_for_is_exact_match() {
        let dataset = Dataset::load().unwrap();

        let germany = dataset.rows_for(&["Germany"]);
        assert!(!germany.is_empty());
        assert!(germany.iter().all(|r| r.country == "Germany"));

        // Case-sensitive: no normalization is applied.
        assert!(dataset.rows_for(&["germany"]).is_empty());

        // A miss yields an empty subset, not an error.
        assert!(dataset.rows_for(&["Atlantis"]).is_empty());
    }

    #[test]
    fn test_germany_subset_one_row_per_year() {
        let dataset = Dataset::load().unwrap();
        let subsets = Subsets::derive(&dataset);

        let distinct_years: BTreeSet<i32> = subsets.germany.iter().map(|r| r.year).collect();
        assert_eq!(subsets.germany.len(), distinct_years.len());
        assert_eq!(
            subsets.germany.len(),
            dataset.rows_for(&["Germany"]).len()
        );
    }

    #[test]
    fn test_countries_subset_is_union_of_selector_countries() {
        let dataset = Dataset::load().unwrap();
        let subsets = Subsets::derive(&dataset);

        let names: BTreeSet<&str> = subsets
            .countries
            .iter()
            .map(|r| r.country.as_str())
            .collect();
        let expected: BTreeSet<&str> = SELECTOR_COUNTRIES.iter().copied().collect();
        assert_eq!(names, expected);

        let per_country_total: usize = SELECTOR_COUNTRIES
            .iter()
            .map(|&c| dataset.rows_for(&[c]).len())
            .sum();
        assert_eq!(subsets.countries.len(), per_country_total);
    }

    #[test]
    fn test_iso_codes_match_selector_countries() {
        let dataset = Dataset::load().unwrap();
        let subsets = Subsets::derive(&dataset);

        for record in &subsets.countries {
            let expected = match record.country.as_str() {
                "Germany" => "DEU",
                "Belgium" => "BEL",
                "Denmark" => "DNK",
                other => panic!("unexpected country in subset: {}", other),
            };
            assert_eq!(record.iso_alpha, expected);
        }
    }
}
