//! Chart data for the two Goldbach visualizations.
//!
//! Only data lives here. Rendering is done by the `gui` module (feature
//! `gui`), or by anything else that can draw a list of points.

use crate::goldbach::range_counts;
use crate::primes::prime_gaps;

/// How the points of a chart are drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Unconnected markers
    Scatter,
    /// Markers joined by a line
    MarkedLine,
}

/// A titled 2-D series
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
    pub points: Vec<[f64; 2]>,
}

impl Chart {
    /// Prime pair count for every even number from 4 to `max_n`
    pub fn goldbach_combinations(max_n: i64) -> Self {
        let points = range_counts(max_n)
            .into_iter()
            .map(|entry| [entry.n as f64, entry.count as f64])
            .collect();

        Self {
            title: "Goldbach's Conjecture: Number of Prime Pairs".to_string(),
            x_label: "Even Number".to_string(),
            y_label: "Number of Prime Pairs".to_string(),
            kind: ChartKind::Scatter,
            points,
        }
    }

    /// Every prime up to `max_n` against its gap to the previous prime
    pub fn prime_gaps(max_n: i64) -> Self {
        let points = prime_gaps(max_n)
            .iter()
            .map(|(prime, gap)| [prime as f64, gap as f64])
            .collect();

        Self {
            title: "Gaps Between Consecutive Prime Numbers".to_string(),
            x_label: "Prime Numbers".to_string(),
            y_label: "Gap to Previous Prime".to_string(),
            kind: ChartKind::MarkedLine,
            points,
        }
    }

    /// Highest y value, or 0 for an empty chart
    pub fn y_max(&self) -> f64 {
        self.points.iter().map(|p| p[1]).fold(0.0, f64::max)
    }

    /// Render as CSV with the axis labels as header
    pub fn to_csv(&self) -> String {
        let mut csv = format!("{},{}\n", self.x_label, self.y_label);
        for [x, y] in &self.points {
            csv.push_str(&format!("{},{}\n", x, y));
        }
        csv
    }
}
