mod app;
mod config;
mod input;
mod roadmap;

use app::RoadmapApp;
use config::DemoConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting joystick road-map");

    let config = DemoConfig::load();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "joystick-roadmap",
        native_options,
        Box::new(|cc| Ok(Box::new(RoadmapApp::new(cc, config)))),
    )
}
