use eframe::egui;
use kapian::gui::KapianApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Kapian 卡片"),
        ..Default::default()
    };

    eframe::run_native("kapian", options, Box::new(|cc| Ok(Box::new(KapianApp::new(cc)))))
}
