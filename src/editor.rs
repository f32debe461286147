use thiserror::Error;

use crate::model::{Area, AreaColor, DrawingState, Point};

const METERS_PER_DEGREE: f64 = 111_000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Drawing,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("no saved area at index {index} ({len} saved)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Owns the in-progress shape and the saved area list. The map layer is a
/// pure projection of this state; all mutation goes through these methods.
#[derive(Debug, Default)]
pub struct AreaEditor {
    mode: Mode,
    drawing: DrawingState,
    areas: Vec<Area>,
}

impl AreaEditor {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_drawing(&self) -> bool {
        self.mode == Mode::Drawing
    }

    pub fn drawing(&self) -> &DrawingState {
        &self.drawing
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Entering drawing mode starts from a blank shape; leaving keeps it.
    pub fn toggle_draw(&mut self) {
        match self.mode {
            Mode::Idle => {
                self.drawing = DrawingState::default();
                self.mode = Mode::Drawing;
            }
            Mode::Drawing => {
                self.mode = Mode::Idle;
            }
        }
    }

    /// First tap places the anchor and seeds the vertex list; later taps
    /// append.
    pub fn tap_map(&mut self, point: Point) {
        if self.mode != Mode::Drawing {
            return;
        }
        if self.drawing.anchor.is_none() {
            self.drawing.anchor = Some(point);
            self.drawing.vertices = vec![point];
        } else {
            self.drawing.vertices.push(point);
        }
    }

    /// Tapping the anchor marker throws the whole shape away; tapping any
    /// other marker removes just that vertex.
    pub fn press_vertex(&mut self, index: usize) {
        if self.mode != Mode::Drawing {
            return;
        }
        if index == 0 {
            self.drawing = DrawingState::default();
        } else if index < self.drawing.vertices.len() {
            self.drawing.vertices.remove(index);
        }
    }

    /// In-place coordinate update of one vertex. Index 0 moves the anchor
    /// and its mirror at the head of the vertex list.
    pub fn drag_vertex(&mut self, point: Point, index: usize) {
        if self.mode != Mode::Drawing {
            return;
        }
        if index == 0 {
            if self.drawing.anchor.is_some() {
                self.drawing.anchor = Some(point);
                if let Some(first) = self.drawing.vertices.first_mut() {
                    *first = point;
                }
            }
        } else if let Some(v) = self.drawing.vertices.get_mut(index) {
            *v = point;
        }
    }

    pub fn cancel(&mut self) {
        if self.mode != Mode::Drawing {
            return;
        }
        self.drawing = DrawingState::default();
        self.mode = Mode::Idle;
    }

    /// Drops the geometry but keeps name, color, and drawing mode.
    pub fn clear_shape(&mut self) {
        if self.mode != Mode::Drawing {
            return;
        }
        self.drawing.anchor = None;
        self.drawing.vertices.clear();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.mode != Mode::Drawing {
            return;
        }
        self.drawing.name = name.into();
    }

    pub fn set_color(&mut self, color: AreaColor) {
        if self.mode != Mode::Drawing {
            return;
        }
        self.drawing.color = color;
    }

    /// Commits the shape if it has at least three vertices and a name.
    /// Returns false, leaving everything untouched, otherwise.
    pub fn save(&mut self) -> bool {
        if self.mode != Mode::Drawing || !self.drawing.committable() {
            return false;
        }
        let drawing = std::mem::take(&mut self.drawing);
        self.areas.push(Area {
            name: drawing.name,
            points: drawing.vertices,
            color: drawing.color,
        });
        self.mode = Mode::Idle;
        true
    }

    /// Pops the saved area back into the editor. The area leaves the list
    /// immediately; only a later save puts it back. The anchor is left
    /// unset, so the next map tap starts a fresh outline.
    pub fn edit(&mut self, index: usize) -> Result<(), EditError> {
        if index >= self.areas.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.areas.len(),
            });
        }
        let area = self.areas.remove(index);
        self.drawing = DrawingState {
            anchor: None,
            vertices: area.points,
            name: area.name,
            color: area.color,
        };
        self.mode = Mode::Drawing;
        Ok(())
    }

    /// Rough size readout from the first two vertices only, at 111 km per
    /// degree on both axes. An on-screen hint, not a bounding box.
    pub fn extent_hint(&self) -> Option<(f64, f64)> {
        let v = &self.drawing.vertices;
        if v.len() < 3 {
            return None;
        }
        let width_m = (v[1].lat - v[0].lat).abs() * METERS_PER_DEGREE;
        let height_m = (v[1].lon - v[0].lon).abs() * METERS_PER_DEGREE;
        Some((width_m, height_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawing_editor() -> AreaEditor {
        let mut editor = AreaEditor::default();
        editor.toggle_draw();
        editor
    }

    fn triangle(editor: &mut AreaEditor) {
        editor.tap_map(Point::new(10.0, 20.0));
        editor.tap_map(Point::new(10.0, 21.0));
        editor.tap_map(Point::new(11.0, 21.0));
    }

    #[test]
    fn taps_seed_anchor_and_append() {
        let mut editor = drawing_editor();
        editor.tap_map(Point::new(10.0, 20.0));
        assert_eq!(editor.drawing().anchor, Some(Point::new(10.0, 20.0)));
        assert_eq!(editor.drawing().vertices, vec![Point::new(10.0, 20.0)]);

        editor.tap_map(Point::new(10.0, 21.0));
        editor.tap_map(Point::new(11.0, 21.0));
        assert_eq!(editor.drawing().vertices.len(), 3);
        assert_eq!(
            editor.drawing().anchor,
            Some(editor.drawing().vertices[0])
        );
    }

    #[test]
    fn taps_ignored_in_idle() {
        let mut editor = AreaEditor::default();
        editor.tap_map(Point::new(1.0, 2.0));
        assert!(editor.drawing().vertices.is_empty());
        assert_eq!(editor.drawing().anchor, None);
    }

    #[test]
    fn leaving_drawing_keeps_shape_reentering_clears_it() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.toggle_draw();
        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(editor.drawing().vertices.len(), 3);

        editor.toggle_draw();
        assert_eq!(editor.mode(), Mode::Drawing);
        assert!(editor.drawing().vertices.is_empty());
        assert_eq!(editor.drawing().anchor, None);
    }

    #[test]
    fn pressing_anchor_clears_shape_but_stays_drawing() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field");
        editor.press_vertex(0);
        assert_eq!(editor.mode(), Mode::Drawing);
        assert_eq!(*editor.drawing(), DrawingState::default());
    }

    #[test]
    fn pressing_vertex_removes_it_in_order() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.tap_map(Point::new(11.0, 20.0));
        editor.press_vertex(2);
        assert_eq!(
            editor.drawing().vertices,
            vec![
                Point::new(10.0, 20.0),
                Point::new(10.0, 21.0),
                Point::new(11.0, 20.0),
            ]
        );
    }

    #[test]
    fn removing_below_three_leaves_shape_uncommittable() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field");
        editor.press_vertex(2);
        assert!(!editor.drawing().committable());
        assert!(!editor.save());
        editor.tap_map(Point::new(11.0, 21.0));
        assert!(editor.drawing().committable());
    }

    #[test]
    fn press_out_of_range_is_ignored() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.press_vertex(7);
        assert_eq!(editor.drawing().vertices.len(), 3);
    }

    #[test]
    fn dragging_anchor_mirrors_into_first_vertex() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.drag_vertex(Point::new(9.5, 19.5), 0);
        assert_eq!(editor.drawing().anchor, Some(Point::new(9.5, 19.5)));
        assert_eq!(editor.drawing().vertices[0], Point::new(9.5, 19.5));
        assert_eq!(editor.drawing().vertices[1], Point::new(10.0, 21.0));
        assert_eq!(editor.drawing().vertices[2], Point::new(11.0, 21.0));
    }

    #[test]
    fn dragging_updates_only_the_target_vertex() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.drag_vertex(Point::new(10.5, 21.5), 1);
        assert_eq!(editor.drawing().vertices[0], Point::new(10.0, 20.0));
        assert_eq!(editor.drawing().vertices[1], Point::new(10.5, 21.5));
        assert_eq!(editor.drawing().vertices[2], Point::new(11.0, 21.0));
        assert_eq!(editor.drawing().anchor, Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn drag_out_of_range_is_ignored() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.drag_vertex(Point::new(0.0, 0.0), 9);
        assert_eq!(editor.drawing().vertices.len(), 3);
        assert_eq!(editor.drawing().vertices[2], Point::new(11.0, 21.0));
    }

    #[test]
    fn cancel_resets_everything_and_leaves_drawing_mode() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field");
        editor.set_color(AreaColor::Blue);
        editor.cancel();
        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(*editor.drawing(), DrawingState::default());
    }

    #[test]
    fn clear_shape_keeps_name_and_color() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field");
        editor.set_color(AreaColor::Green);
        editor.clear_shape();
        assert_eq!(editor.mode(), Mode::Drawing);
        assert!(editor.drawing().vertices.is_empty());
        assert_eq!(editor.drawing().anchor, None);
        assert_eq!(editor.drawing().name, "Field");
        assert_eq!(editor.drawing().color, AreaColor::Green);
    }

    #[test]
    fn save_requires_three_vertices() {
        let mut editor = drawing_editor();
        editor.tap_map(Point::new(10.0, 20.0));
        editor.tap_map(Point::new(10.0, 21.0));
        editor.set_name("Field");
        assert!(!editor.save());
        assert!(editor.areas().is_empty());
        assert_eq!(editor.mode(), Mode::Drawing);
        assert_eq!(editor.drawing().vertices.len(), 2);
    }

    #[test]
    fn save_requires_a_name() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        assert!(!editor.save());
        assert!(editor.areas().is_empty());
    }

    #[test]
    fn save_appends_area_and_resets_state() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field A");
        editor.set_color(AreaColor::Blue);
        assert!(editor.save());

        assert_eq!(editor.areas().len(), 1);
        let area = &editor.areas()[0];
        assert_eq!(area.name, "Field A");
        assert_eq!(area.color, AreaColor::Blue);
        assert_eq!(
            area.points,
            vec![
                Point::new(10.0, 20.0),
                Point::new(10.0, 21.0),
                Point::new(11.0, 21.0),
            ]
        );
        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(*editor.drawing(), DrawingState::default());
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field");
        assert!(editor.save());
        editor.toggle_draw();
        triangle(&mut editor);
        editor.set_name("Field");
        assert!(editor.save());
        assert_eq!(editor.areas().len(), 2);
    }

    #[test]
    fn edit_pops_the_area_into_the_editor() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field A");
        editor.set_color(AreaColor::Orange);
        editor.save();

        editor.edit(0).unwrap();
        assert!(editor.areas().is_empty());
        assert_eq!(editor.mode(), Mode::Drawing);
        assert_eq!(editor.drawing().anchor, None);
        assert_eq!(editor.drawing().vertices.len(), 3);
        assert_eq!(editor.drawing().name, "Field A");
        assert_eq!(editor.drawing().color, AreaColor::Orange);
    }

    #[test]
    fn edit_then_cancel_loses_the_area() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field A");
        editor.save();
        assert_eq!(editor.areas().len(), 1);

        editor.edit(0).unwrap();
        editor.cancel();
        assert!(editor.areas().is_empty());
    }

    #[test]
    fn edit_out_of_range_fails() {
        let mut editor = AreaEditor::default();
        assert_eq!(
            editor.edit(0),
            Err(EditError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn tap_after_edit_starts_a_fresh_outline() {
        let mut editor = drawing_editor();
        triangle(&mut editor);
        editor.set_name("Field A");
        editor.save();

        editor.edit(0).unwrap();
        editor.tap_map(Point::new(12.0, 22.0));
        assert_eq!(editor.drawing().anchor, Some(Point::new(12.0, 22.0)));
        assert_eq!(editor.drawing().vertices, vec![Point::new(12.0, 22.0)]);
    }

    #[test]
    fn extent_hint_needs_three_vertices() {
        let mut editor = drawing_editor();
        editor.tap_map(Point::new(10.0, 20.0));
        editor.tap_map(Point::new(10.001, 20.0));
        assert_eq!(editor.extent_hint(), None);
    }

    #[test]
    fn extent_hint_uses_first_two_vertices_only() {
        let mut editor = drawing_editor();
        editor.tap_map(Point::new(10.0, 20.0));
        editor.tap_map(Point::new(10.001, 20.0));
        editor.tap_map(Point::new(10.001, 20.001));
        let (width_m, height_m) = editor.extent_hint().unwrap();
        assert!((width_m - 111.0).abs() < 1e-6);
        assert!(height_m.abs() < 1e-6);
    }

    #[test]
    fn name_and_color_edits_are_ignored_in_idle() {
        let mut editor = AreaEditor::default();
        editor.set_name("Field");
        editor.set_color(AreaColor::Grey);
        assert_eq!(editor.drawing().name, "");
        assert_eq!(editor.drawing().color, AreaColor::default());
    }
}
