use eframe::egui;

use crate::model::Point;

const MIN_ZOOM: f32 = 2_000.0;
const MAX_ZOOM: f32 = 2_000_000.0;

/// Flat north-up projection of the canvas: `zoom` is pixels per degree,
/// `center` is the geographic point under the middle of the canvas rect.
#[derive(Clone, Copy, Debug)]
pub(super) struct MapView {
    pub center: Point,
    pub zoom: f32,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: Point::new(-15.6014105, -47.7097587),
            zoom: 50_000.0,
        }
    }
}

impl MapView {
    pub fn new(center: Point, zoom: f32) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn geo_to_screen(&self, rect: egui::Rect, point: Point) -> egui::Pos2 {
        let c = rect.center();
        egui::pos2(
            c.x + ((point.lon - self.center.lon) * self.zoom as f64) as f32,
            c.y - ((point.lat - self.center.lat) * self.zoom as f64) as f32,
        )
    }

    pub fn screen_to_geo(&self, rect: egui::Rect, pos: egui::Pos2) -> Point {
        let c = rect.center();
        Point::new(
            self.center.lat - (pos.y - c.y) as f64 / self.zoom as f64,
            self.center.lon + (pos.x - c.x) as f64 / self.zoom as f64,
        )
    }

    /// Moves the rendered content by `delta` screen pixels.
    pub fn pan_screen(&mut self, delta: egui::Vec2) {
        self.center.lon -= delta.x as f64 / self.zoom as f64;
        self.center.lat += delta.y as f64 / self.zoom as f64;
    }

    pub fn zoom_about_screen_point(
        &mut self,
        rect: egui::Rect,
        screen_point: egui::Pos2,
        zoom_delta: f32,
    ) {
        let before = self.screen_to_geo(rect, screen_point);
        self.zoom = (self.zoom * zoom_delta).clamp(MIN_ZOOM, MAX_ZOOM);
        let after_screen = self.geo_to_screen(rect, before);
        self.pan_screen(screen_point - after_screen);
    }

    /// Graticule spacing in degrees, picked so lines stay 48..480 px apart.
    pub fn graticule_step(&self) -> f64 {
        let mut step = 10.0;
        while step * self.zoom as f64 > 480.0 {
            step /= 10.0;
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn center_point_lands_on_canvas_center() {
        let view = MapView::default();
        let pos = view.geo_to_screen(canvas(), view.center);
        assert_eq!(pos, canvas().center());
    }

    #[test]
    fn screen_to_geo_inverts_projection() {
        let view = MapView::default();
        let point = Point::new(view.center.lat + 0.003, view.center.lon - 0.002);
        let back = view.screen_to_geo(canvas(), view.geo_to_screen(canvas(), point));
        assert!((back.lat - point.lat).abs() < 1e-6);
        assert!((back.lon - point.lon).abs() < 1e-6);
    }

    #[test]
    fn north_is_up() {
        let view = MapView::default();
        let north = Point::new(view.center.lat + 0.001, view.center.lon);
        assert!(view.geo_to_screen(canvas(), north).y < canvas().center().y);
    }

    #[test]
    fn zooming_keeps_the_pointer_anchored() {
        let mut view = MapView::default();
        let pointer = egui::pos2(120.0, 450.0);
        let before = view.screen_to_geo(canvas(), pointer);
        view.zoom_about_screen_point(canvas(), pointer, 2.0);
        let after = view.geo_to_screen(canvas(), before);
        assert!((after - pointer).length() < 0.5);
    }
}
