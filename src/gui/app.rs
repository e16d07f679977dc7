//! Chart window application.

use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::chart::{Chart, ChartKind};
use crate::config::PlotConfig;

/// Window showing a single chart
pub struct ChartApp {
    /// Data to draw
    chart: Chart,
    /// Marker radius for points
    marker_radius: f32,
}

impl ChartApp {
    pub fn new(chart: Chart, marker_radius: f32) -> Self {
        Self {
            chart,
            marker_radius,
        }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    fn series_name(&self) -> &str {
        &self.chart.y_label
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Title bar
        egui::TopBottomPanel::top("chart_title").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.chart.title);
            });
        });

        // Bottom status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "Points: {} | Max {}: {}",
                    self.chart.points.len(),
                    self.chart.y_label,
                    self.chart.y_max()
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.chart.points.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No data in range");
                });
                return;
            }

            let name = self.series_name().to_string();
            let markers = Points::new(PlotPoints::from(self.chart.points.clone()))
                .radius(self.marker_radius)
                .color(egui::Color32::LIGHT_BLUE)
                .name(&name);

            Plot::new("chart_plot")
                .x_axis_label(self.chart.x_label.clone())
                .y_axis_label(self.chart.y_label.clone())
                .legend(Legend::default())
                .show_axes(true)
                .show(ui, |plot_ui| {
                    if self.chart.kind == ChartKind::MarkedLine {
                        let line = Line::new(PlotPoints::from(self.chart.points.clone()))
                            .color(egui::Color32::LIGHT_BLUE)
                            .name(&name);
                        plot_ui.line(line);
                    }
                    plot_ui.points(markers);
                });
        });
    }
}

/// Open `chart` in a native window and block until it is closed
pub fn show_chart(chart: Chart, plot: &PlotConfig) -> eframe::Result<()> {
    log::info!("Opening chart '{}' ({} points)", chart.title, chart.points.len());

    let title = chart.title.clone();
    let marker_radius = plot.marker_radius;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([plot.window_width, plot.window_height])
            .with_min_inner_size([400.0, 300.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Box::new(ChartApp::new(chart, marker_radius))),
    )
}

/// Scatter plot of prime pair counts for even numbers up to `max_n`
pub fn plot_goldbach_combinations(max_n: i64, plot: &PlotConfig) -> eframe::Result<()> {
    show_chart(Chart::goldbach_combinations(max_n), plot)
}

/// Marked line plot of primes against their gap to the previous prime
pub fn plot_prime_gaps(max_n: i64, plot: &PlotConfig) -> eframe::Result<()> {
    show_chart(Chart::prime_gaps(max_n), plot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_keeps_chart() {
        let app = ChartApp::new(Chart::prime_gaps(10), 2.0);
        assert_eq!(app.chart().points.len(), 4);
        assert_eq!(app.series_name(), "Gap to Previous Prime");
    }
}
