//! ASP Dashboard - Settlement Confirmation Browser
//!
//! Loads the wide per-settlement confirmation table, reshapes it into long
//! format and serves an interactive time-series chart with growth metrics.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use config::DashboardConfig;
use eframe::egui;
use gui::DashboardApp;
use std::path::Path;

const CONFIG_PATH: &str = "dashboard.json";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_PATH));

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("ASP Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ASP Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
}
