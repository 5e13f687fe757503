//! Control Panel Widget
//! Left side panel with data source, year range and entity selection.

use egui::{Color32, RichText, ScrollArea, Slider};
use std::path::PathBuf;

/// User settings driving the pipeline selection.
#[derive(Default, Clone)]
pub struct UserSettings {
    pub data_path: Option<PathBuf>,
    pub from_year: i32,
    pub to_year: i32,
}

/// Left side control panel with file selection and filter controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub entities: Vec<String>,
    pub selected_entities: Vec<bool>,
    pub year_bounds: (i32, i32),
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            entities: Vec::new(),
            selected_entities: Vec::new(),
            year_bounds: (0, 0),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the entity list after a load; defaults determine the initial
    /// checkbox state.
    pub fn update_entities(&mut self, entities: Vec<String>, defaults: &[String]) {
        self.selected_entities = entities
            .iter()
            .map(|e| defaults.iter().any(|d| d == e))
            .collect();
        self.entities = entities;
    }

    /// Reset the slider bounds and clamp the current window into them.
    pub fn set_year_bounds(&mut self, bounds: (i32, i32)) {
        self.year_bounds = bounds;
        let (min, max) = bounds;
        if self.settings.from_year < min || self.settings.from_year > max {
            self.settings.from_year = min;
        }
        if self.settings.to_year < min || self.settings.to_year > max {
            self.settings.to_year = max;
        }
    }

    /// Entity names currently checked.
    pub fn checked_entities(&self) -> Vec<String> {
        self.entities
            .iter()
            .zip(self.selected_entities.iter())
            .filter(|(_, &selected)| selected)
            .map(|(entity, _)| entity.clone())
            .collect()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏘 ASP Dashboard")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Settlement confirmations")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .data_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.data_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseFile;
                        }
                    });
                });
            });

        ui.add_space(5.0);
        if ui.small_button("⟳ Reload").clicked() {
            action = ControlPanelAction::ReloadData;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Year Range Section =====
        ui.label(RichText::new("📅 Year Range").size(14.0).strong());
        ui.add_space(5.0);

        let (min_year, max_year) = self.year_bounds;
        let has_years = min_year < max_year;
        ui.add_enabled_ui(has_years, |ui| {
            let mut changed = false;
            changed |= ui
                .add(Slider::new(&mut self.settings.from_year, min_year..=max_year).text("From"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut self.settings.to_year, min_year..=max_year).text("To"))
                .changed();

            // Keep the window well-formed; the sliders are independent.
            if self.settings.to_year < self.settings.from_year {
                self.settings.to_year = self.settings.from_year;
            }

            if changed {
                action = ControlPanelAction::SelectionChanged;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Settlement Section =====
        ui.label(RichText::new("🔧 Settlements").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    for (i, entity) in self.entities.iter().enumerate() {
                        if i < self.selected_entities.len()
                            && ui.checkbox(&mut self.selected_entities[i], entity).changed()
                        {
                            action = ControlPanelAction::SelectionChanged;
                        }
                    }
                });
            });

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() {
                self.selected_entities.iter_mut().for_each(|v| *v = true);
                action = ControlPanelAction::SelectionChanged;
            }
            if ui.small_button("Clear All").clicked() {
                self.selected_entities.iter_mut().for_each(|v| *v = false);
                action = ControlPanelAction::SelectionChanged;
            }
        });

        if !self.entities.is_empty() && self.checked_entities().is_empty() {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⚠ Select at least one settlement")
                    .size(12.0)
                    .color(Color32::from_rgb(255, 193, 7)),
            );
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseFile,
    ReloadData,
    SelectionChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_determine_initial_checkboxes() {
        let mut panel = ControlPanel::new();
        panel.update_entities(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            &["B".to_string(), "Z".to_string()],
        );

        assert_eq!(panel.checked_entities(), vec!["B"]);
    }

    #[test]
    fn year_bounds_clamp_the_window() {
        let mut panel = ControlPanel::new();
        panel.settings.from_year = 2000;
        panel.settings.to_year = 2099;
        panel.set_year_bounds((2017, 2025));

        assert_eq!(panel.settings.from_year, 2017);
        assert_eq!(panel.settings.to_year, 2025);
    }
}
