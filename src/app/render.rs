use eframe::egui;

use crate::model::{Area, AreaColor, DrawingState, Point};
use crate::robot::Direction;

use super::geometry::MapView;

pub(super) fn draw_background(painter: &egui::Painter, rect: egui::Rect, view: &MapView) {
    let bg = painter.ctx().style().visuals.extreme_bg_color;
    painter.rect_filled(rect, 0.0, bg);

    let grid_color = egui::Color32::from_gray(60);
    let step = view.graticule_step();
    let west = view.screen_to_geo(rect, rect.left_top()).lon;
    let east = view.screen_to_geo(rect, rect.right_top()).lon;
    let south = view.screen_to_geo(rect, rect.left_bottom()).lat;
    let north = view.screen_to_geo(rect, rect.left_top()).lat;

    let mut lon = (west / step).ceil() * step;
    while lon <= east {
        let x = view.geo_to_screen(rect, Point::new(view.center.lat, lon)).x;
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            egui::Stroke::new(1.0, grid_color),
        );
        lon += step;
    }
    let mut lat = (south / step).ceil() * step;
    while lat <= north {
        let y = view.geo_to_screen(rect, Point::new(lat, view.center.lon)).y;
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(1.0, grid_color),
        );
        lat += step;
    }
}

pub(super) fn draw_area(painter: &egui::Painter, rect: egui::Rect, view: &MapView, area: &Area) {
    let pts: Vec<egui::Pos2> = area
        .points
        .iter()
        .map(|p| view.geo_to_screen(rect, *p))
        .collect();
    if pts.len() < 3 {
        return;
    }
    let stroke = egui::Stroke::new(2.0, area.color.to_color32());
    painter.add(egui::Shape::convex_polygon(
        pts.clone(),
        area.color.fill_color32(),
        egui::Stroke::NONE,
    ));
    painter.add(egui::Shape::closed_line(pts, stroke));
}

/// Polygon preview for the shape under construction. Markers are painted by
/// the interaction pass, not here.
pub(super) fn draw_drawing_overlay(
    painter: &egui::Painter,
    rect: egui::Rect,
    view: &MapView,
    drawing: &DrawingState,
) {
    let pts: Vec<egui::Pos2> = drawing
        .vertices
        .iter()
        .map(|p| view.geo_to_screen(rect, *p))
        .collect();
    let stroke = egui::Stroke::new(2.0, drawing.color.to_color32());
    if pts.len() >= 3 {
        painter.add(egui::Shape::convex_polygon(
            pts.clone(),
            drawing.color.fill_color32(),
            egui::Stroke::NONE,
        ));
        painter.add(egui::Shape::closed_line(pts, stroke));
    } else if pts.len() == 2 {
        painter.line_segment([pts[0], pts[1]], stroke);
    }
}

pub(super) fn swatch_row(ui: &mut egui::Ui, color: &mut AreaColor) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        for preset in AreaColor::ALL {
            let mut button = egui::Button::new("").fill(preset.to_color32());
            if *color == preset {
                button = button.stroke(egui::Stroke::new(2.0, egui::Color32::WHITE));
            }
            if ui
                .add_sized([18.0, 18.0], button)
                .on_hover_text(preset.label())
                .clicked()
            {
                *color = preset;
                changed = true;
            }
        }
    });
    changed
}

pub(super) fn joystick_pad(ui: &mut egui::Ui) -> Option<Direction> {
    let mut pressed = None;
    let size = [26.0, 22.0];
    ui.horizontal(|ui| {
        ui.add_space(size[0] + 8.0);
        if ui.add_sized(size, egui::Button::new("▲")).clicked() {
            pressed = Some(Direction::Forward);
        }
    });
    ui.horizontal(|ui| {
        if ui.add_sized(size, egui::Button::new("◀")).clicked() {
            pressed = Some(Direction::Left);
        }
        if ui.add_sized(size, egui::Button::new("■")).clicked() {
            pressed = Some(Direction::Stop);
        }
        if ui.add_sized(size, egui::Button::new("▶")).clicked() {
            pressed = Some(Direction::Right);
        }
    });
    ui.horizontal(|ui| {
        ui.add_space(size[0] + 8.0);
        if ui.add_sized(size, egui::Button::new("▼")).clicked() {
            pressed = Some(Direction::Backward);
        }
    });
    pressed
}
