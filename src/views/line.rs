//! Life Expectancy Line Chart
//!
//! Germany's life expectancy over time, drawn once at page load.

use crate::dataset::ProfileRow;

use super::figure::{Figure, Layout, Trace};

const TITLE: &str = "Life Expectancy in Germany";
const HEIGHT: u32 = 300;

/// Build the Germany life-expectancy line chart (lines plus markers).
pub fn life_exp_line_chart(rows: &[ProfileRow]) -> Figure {
    let trace = Trace::Scatter {
        x: rows.iter().map(|r| r.year).collect(),
        y: rows.iter().map(|r| r.life_exp).collect(),
        mode: "lines+markers".to_string(),
        name: "lifeExp".to_string(),
    };

    Figure::new(vec![trace], Layout::dark().title(TITLE).height(HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Subsets};

    #[test]
    fn test_line_chart_covers_every_germany_year() {
        let dataset = Dataset::load().unwrap();
        let subsets = Subsets::derive(&dataset);

        let figure = life_exp_line_chart(&subsets.germany);
        assert_eq!(figure.data.len(), 1);

        match &figure.data[0] {
            Trace::Scatter { x, y, mode, .. } => {
                assert_eq!(x.len(), subsets.germany.len());
                assert_eq!(y.len(), subsets.germany.len());
                assert_eq!(mode, "lines+markers");
            }
            other => panic!("expected scatter trace, got {:?}", other),
        }

        let layout = serde_json::to_value(&figure.layout).unwrap();
        assert_eq!(layout["title"]["text"], "Life Expectancy in Germany");
        assert_eq!(layout["height"], 300);
    }
}
