//! Native chart windows built on egui + eframe.
//!
//! Each call opens one window and blocks the calling thread until the
//! window is closed.
//!
//! ## Usage
//!
//! ```no_run
//! use goldbach::config::PlotConfig;
//! use goldbach::gui::plot_prime_gaps;
//!
//! plot_prime_gaps(10_000, &PlotConfig::default()).unwrap();
//! ```

mod app;

pub use app::{plot_goldbach_combinations, plot_prime_gaps, show_chart, ChartApp};
