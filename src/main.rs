#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use sense_tuner::app::SensitivityApp;
use sense_tuner::constant;
use sense_tuner::ui;

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(|cc| {
            // Setup fonts with Hangul support
            let fonts = ui::font::setup_fonts();
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(SensitivityApp::new(cc)))
        }),
    )
}
