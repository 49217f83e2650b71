//! Denver Dev Day 2025 - Desktop Companion
//!
//! A single-window companion for the conference: hero overview, agenda
//! with track filtering, speaker directory, and attendee registration.

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Denver Dev Day 2025")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([820.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Denver Dev Day 2025",
        options,
        Box::new(|cc| Ok(Box::new(devday_gui::app::DevDayApp::new(cc)))),
    )
}
