//! Chart Viewer Widget
//! Central panel with the time-series chart and per-settlement growth cards.

use egui::{Color32, RichText, ScrollArea};

use crate::charts::SeriesChart;
use crate::stats::{DeltaTone, Growth, GrowthMetric};

const CARD_WIDTH: f32 = 170.0;
const CARD_SPACING: f32 = 12.0;
const CARDS_PER_ROW: usize = 4;
const CHART_HEIGHT: f32 = 360.0;

/// Central display area: line chart on top, metric card grid below.
#[derive(Default)]
pub struct ChartViewer {
    pub chart: SeriesChart,
    pub metrics: Vec<GrowthMetric>,
    pub to_year: i32,
    pub degenerate_selection: bool,
    has_data: bool,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replace the displayed chart and metrics after a recomputation.
    pub fn update(
        &mut self,
        chart: SeriesChart,
        metrics: Vec<GrowthMetric>,
        to_year: i32,
        degenerate_selection: bool,
    ) {
        self.chart = chart;
        self.metrics = metrics;
        self.to_year = to_year;
        self.degenerate_selection = degenerate_selection;
        self.has_data = true;
    }

    /// Draw the chart viewer.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if !self.has_data {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        if self.degenerate_selection {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("⚠ Select at least one settlement")
                        .size(18.0)
                        .color(Color32::from_rgb(255, 193, 7)),
                );
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Confirmations over time")
                        .size(18.0)
                        .strong(),
                );
                ui.separator();
                ui.add_space(5.0);

                self.chart.show(ui, CHART_HEIGHT);

                ui.add_space(15.0);
                ui.label(
                    RichText::new(format!("Confirmations in {}", self.to_year))
                        .size(18.0)
                        .strong(),
                );
                ui.separator();
                ui.add_space(8.0);

                for row in self.metrics.chunks(CARDS_PER_ROW) {
                    ui.horizontal(|ui| {
                        for metric in row {
                            Self::draw_metric_card(ui, metric);
                            ui.add_space(CARD_SPACING);
                        }
                    });
                    ui.add_space(CARD_SPACING);
                }
            });
    }

    /// One labeled value + growth delta, mirroring a metric widget.
    fn draw_metric_card(ui: &mut egui::Ui, metric: &GrowthMetric) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(80)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&metric.entity).size(13.0).strong());

                    let value_text = metric
                        .end_value
                        .map(|v| format!("{v:.0}"))
                        .unwrap_or_else(|| "–".to_string());
                    ui.label(RichText::new(value_text).size(22.0));

                    let delta_color = match metric.growth.tone() {
                        DeltaTone::Neutral => Color32::GRAY,
                        DeltaTone::Normal => match &metric.growth {
                            Growth::Ratio(r) if *r < 1.0 => Color32::from_rgb(220, 53, 69),
                            _ => Color32::from_rgb(40, 167, 69),
                        },
                    };
                    ui.label(
                        RichText::new(metric.growth.label())
                            .size(12.0)
                            .color(delta_color),
                    );
                });
            });
    }
}
