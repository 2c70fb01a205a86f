//! Profile Table
//!
//! Germany's yearly profile projected to the four displayed columns.

use serde::Serialize;

use crate::dataset::ProfileRow;

/// Column order shown in the table, matching the serialized row keys.
pub const COLUMNS: [&str; 4] = ["year", "lifeExp", "pop", "gdpPercap"];

/// Table payload: column list plus one record object per year.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<ProfileRow>,
}

/// Build the table artifact from the Germany profile subset.
pub fn table_view(rows: &[ProfileRow]) -> TableView {
    TableView {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: rows.to_vec(),
    }
}
