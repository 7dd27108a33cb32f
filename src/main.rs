use eframe::egui;
use framework_worksheet::{
    gui::WorksheetApp,
    logging,
};

fn main() -> eframe::Result {
    logging::init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting framework worksheet");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Interactive Framework Worksheet")
            .with_inner_size([1024.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Interactive Framework Worksheet",
        options,
        Box::new(|cc| Ok(Box::new(WorksheetApp::new(cc)))),
    )
}
