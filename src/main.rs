use eframe::egui;
use flashdeck::gui::FlashdeckApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flashdeck")
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native("flashdeck", options, Box::new(|cc| Ok(Box::new(FlashdeckApp::new(cc)))))
}
