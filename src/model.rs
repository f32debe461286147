use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AreaColor {
    #[default]
    Red,
    Purple,
    Blue,
    Green,
    Yellow,
    Orange,
    Slate,
    Grey,
}

impl AreaColor {
    pub const ALL: [AreaColor; 8] = [
        AreaColor::Red,
        AreaColor::Purple,
        AreaColor::Blue,
        AreaColor::Green,
        AreaColor::Yellow,
        AreaColor::Orange,
        AreaColor::Slate,
        AreaColor::Grey,
    ];

    pub fn to_color32(self) -> egui::Color32 {
        match self {
            AreaColor::Red => egui::Color32::from_rgb(231, 76, 60),
            AreaColor::Purple => egui::Color32::from_rgb(142, 68, 173),
            AreaColor::Blue => egui::Color32::from_rgb(52, 152, 219),
            AreaColor::Green => egui::Color32::from_rgb(39, 174, 96),
            AreaColor::Yellow => egui::Color32::from_rgb(241, 196, 15),
            AreaColor::Orange => egui::Color32::from_rgb(211, 84, 0),
            AreaColor::Slate => egui::Color32::from_rgb(44, 62, 80),
            AreaColor::Grey => egui::Color32::from_rgb(149, 165, 166),
        }
    }

    pub fn fill_color32(self) -> egui::Color32 {
        let [r, g, b, _] = self.to_color32().to_array();
        egui::Color32::from_rgba_unmultiplied(r, g, b, 64)
    }

    pub fn label(self) -> &'static str {
        match self {
            AreaColor::Red => "Red",
            AreaColor::Purple => "Purple",
            AreaColor::Blue => "Blue",
            AreaColor::Green => "Green",
            AreaColor::Yellow => "Yellow",
            AreaColor::Orange => "Orange",
            AreaColor::Slate => "Slate",
            AreaColor::Grey => "Grey",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Area {
    pub name: String,
    pub points: Vec<Point>,
    pub color: AreaColor,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DrawingState {
    pub anchor: Option<Point>,
    pub vertices: Vec<Point>,
    pub name: String,
    pub color: AreaColor,
}

impl DrawingState {
    pub fn committable(&self) -> bool {
        self.vertices.len() >= 3 && !self.name.is_empty()
    }
}
