//! ASP Dashboard Main Application
//! Main window with control panel and chart viewer.

use std::path::PathBuf;
use std::sync::Arc;

use egui::SidePanel;

use crate::charts::SeriesChart;
use crate::config::DashboardConfig;
use crate::data::{filter_range, LongTable, Selection, TableCache};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::compute_growth_all;

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    cache: TableCache,
    table: Option<Arc<LongTable>>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self {
            config,
            cache: TableCache::new(),
            table: None,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        };
        app.reload();
        app
    }

    fn data_path(&self) -> PathBuf {
        self.control_panel
            .settings
            .data_path
            .clone()
            .unwrap_or_else(|| self.config.data_path.clone())
    }

    /// Load (or re-load) through the cache, then recompute the view.
    fn reload(&mut self) {
        let path = self.data_path();

        match self
            .cache
            .get_or_load(&path, &self.config.id_column, self.config.year_range())
        {
            Ok(table) => {
                // Slider bounds follow the years actually present.
                let bounds = table.year_bounds().unwrap_or(self.config.year_range());
                self.control_panel.set_year_bounds(bounds);
                self.control_panel
                    .update_entities(table.entities(), &self.config.default_entities);
                self.control_panel.set_status(&format!(
                    "Loaded {} records from {}",
                    table.len(),
                    path.display()
                ));
                self.table = Some(table);
                self.recompute();
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.control_panel.set_status(&format!("Error: {e}"));
                self.table = None;
                self.chart_viewer.clear();
            }
        }
    }

    /// Handle data file selection.
    fn handle_browse(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.control_panel.settings.data_path = Some(path);
            self.cache.invalidate();
            self.reload();
        }
    }

    /// One synchronous pass of Filter + Growth over the cached table.
    fn recompute(&mut self) {
        let Some(table) = &self.table else {
            return;
        };

        let from_year = self.control_panel.settings.from_year;
        let to_year = self.control_panel.settings.to_year;
        let selection =
            Selection::new((from_year, to_year), self.control_panel.checked_entities());

        let filtered = filter_range(table, &selection);
        let metrics = compute_growth_all(table, &selection.entities, from_year, to_year);

        self.chart_viewer.update(
            SeriesChart::from_table(&filtered.table),
            metrics,
            to_year,
            filtered.degenerate_selection,
        );
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseFile => self.handle_browse(),
                        ControlPanelAction::ReloadData => {
                            self.cache.invalidate();
                            self.reload();
                        }
                        ControlPanelAction::SelectionChanged => self.recompute(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
