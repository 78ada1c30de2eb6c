use abhyas::AbhyasApp;
use eframe::egui;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Abhyas")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native("abhyas", options, Box::new(|cc| Ok(Box::new(AbhyasApp::new(cc)))))
}
