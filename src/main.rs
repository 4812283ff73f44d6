//! Mancala GUI
//!
//! A graphical interface for playing Mancala (Kalah) hotseat, with animated
//! sowing and a greedy move hint.

use mancala::ui::MancalaApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1040.0, 640.0])
            .with_min_inner_size([820.0, 520.0])
            .with_title("Mancala (Kalah)"),
        ..Default::default()
    };

    eframe::run_native(
        "Mancala",
        options,
        Box::new(|cc| Ok(Box::new(MancalaApp::new(cc)))),
    )
}
