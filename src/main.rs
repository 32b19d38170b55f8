mod analysis;
mod app;
mod color;
mod data;
mod eda;
mod logging;
mod notes;
mod state;
mod ui;

use std::path::Path;

use anyhow::Result;
use app::StudEdaApp;
use eframe::egui;

fn main() -> Result<()> {
    let log_file = logging::init()?;
    println!("Logging has started");
    log::info!("Logging has started ({})", log_file.display());

    notes::save(Path::new(notes::DEFAULT_NOTES_PATH))?;
    println!("\nAnalysing {} – close the viewer window to exit.", eda::DEFAULT_DATA_PATH);

    let (dataset, report) = eda::run(Path::new(eda::DEFAULT_DATA_PATH))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the window is closed, like a matplotlib show().
    eframe::run_native(
        "Stud EDA – Student Performance Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(StudEdaApp::with_analysis(dataset, report)))),
    )
    .map_err(|e| anyhow::anyhow!("running the viewer: {e}"))
}
