use crate::editor::AreaEditor;
use crate::model::Point;
use crate::robot::{LogLink, RobotCommand, RobotCommandPort};

mod command_palette;
mod geometry;
mod render;
mod settings;
mod update;

pub struct MapApp {
    editor: AreaEditor,
    robot: Box<dyn RobotCommandPort>,
    view: geometry::MapView,
    marker_radius: f32,
    status: Option<String>,
    settings_path: String,
    command_palette: command_palette::CommandPalette,
}

impl MapApp {
    fn config_path() -> Option<String> {
        if let Some(home) = std::env::var_os("HOME") {
            let path = std::path::PathBuf::from(home).join(".config").join("campo.toml");
            if path.exists() {
                return Some(path.display().to_string());
            }
        }
        if std::path::Path::new("settings.toml").exists() {
            return Some("settings.toml".to_string());
        }
        None
    }

    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = Self::config_path().unwrap_or_else(|| "settings.toml".to_string());
        let settings = settings::load_settings(&settings_path)
            .or_else(|| settings::load_settings("settings.json"))
            .unwrap_or_default();

        Self {
            editor: AreaEditor::default(),
            robot: Box::new(LogLink),
            view: geometry::MapView::new(
                Point::new(settings.center_lat, settings.center_lon),
                settings.zoom,
            ),
            marker_radius: settings.marker_radius,
            status: None,
            settings_path,
            command_palette: command_palette::CommandPalette::default(),
        }
    }

    fn dispatch_robot(&mut self, command: RobotCommand) {
        self.robot.send(command);
        self.status = Some(format!("Sent: {}", command.label()));
    }

    fn persist_view_settings(&mut self) {
        let snapshot = settings::AppSettings {
            center_lat: self.view.center.lat,
            center_lon: self.view.center.lon,
            zoom: self.view.zoom,
            marker_radius: self.marker_radius,
        };
        match settings::save_settings(&self.settings_path, &snapshot) {
            Ok(()) => self.status = Some(format!("Saved view to {}", self.settings_path)),
            Err(e) => self.status = Some(format!("Settings save failed: {e}")),
        }
    }
}
