// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use timetable_grid::{config::consts::LOG_FILE, gui, log};

fn main() {
    if let Err(e) = log::init_file(Path::new(LOG_FILE), "info") {
        eprintln!("Log file unavailable: {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Timetable Grid")
            .with_inner_size([1100.0, 700.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
