mod app;
mod editor;
mod model;
mod robot;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Campo",
        native_options,
        Box::new(|cc| Ok(Box::new(app::MapApp::new(cc)))),
    )
}
