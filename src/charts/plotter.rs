//! Chart Plotter Module
//! Time-series visualization of the filtered long table using egui_plot.

use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::LongTable;

/// Color palette for entity lines
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(52, 152, 219), // Blue
];

/// Point series for one entity, year-ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySeries {
    pub entity: String,
    pub points: Vec<[f64; 2]>,
}

/// Per-entity series ready for plotting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesChart {
    pub series: Vec<EntitySeries>,
}

impl SeriesChart {
    /// Build per-entity series from a (filtered) long table.
    ///
    /// Records without a value are skipped; the line simply bridges the
    /// missing years. One series per entity, entities in sorted order.
    pub fn from_table(table: &LongTable) -> Self {
        let mut series = Vec::new();

        for entity in table.entities() {
            let mut points: Vec<[f64; 2]> = table
                .iter()
                .filter(|r| r.entity == entity)
                .filter_map(|r| r.value.map(|v| [r.year as f64, v]))
                .collect();
            points.sort_by(|a, b| a[0].total_cmp(&b[0]));

            series.push(EntitySeries { entity, points });
        }

        Self { series }
    }

    /// Color for the series at `index`.
    pub fn color_for(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw the line chart with legend and integer year axis.
    pub fn show(&self, ui: &mut egui::Ui, height: f32) {
        Plot::new("confirmation_series")
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label("Confirmation value")
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .show(ui, |plot_ui| {
                for (i, series) in self.series.iter().enumerate() {
                    if series.points.is_empty() {
                        continue;
                    }
                    let points: PlotPoints = series.points.iter().copied().collect();
                    plot_ui.line(
                        Line::new(points)
                            .color(Self::color_for(i))
                            .width(2.0)
                            .name(&series.entity),
                    );
                }
            });
    }
}
