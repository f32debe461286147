use eframe::egui;

use crate::robot::RobotCommand;

use super::command_palette::{CommandContext, CommandPalette};
use super::render::{draw_area, draw_background, draw_drawing_overlay, joystick_pad, swatch_row};
use super::MapApp;

impl MapApp {
    pub(super) fn save_area(&mut self) {
        let name = self.editor.drawing().name.clone();
        if self.editor.save() {
            self.status = Some(format!("Saved area \"{name}\""));
        } else {
            self.status = Some("An area needs at least 3 points and a name".to_string());
        }
    }

    pub(super) fn edit_area(&mut self, index: usize) {
        match self.editor.edit(index) {
            Ok(()) => {
                self.status = Some(format!("Editing \"{}\"", self.editor.drawing().name));
            }
            Err(e) => self.status = Some(format!("Edit failed: {e}")),
        }
    }

    fn sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Campo");
        ui.separator();

        let draw_label = if self.editor.is_drawing() {
            "Finish area"
        } else {
            "Draw area"
        };
        if ui.button(draw_label).clicked() {
            self.editor.toggle_draw();
        }

        if self.editor.is_drawing() {
            if ui.button("Clear shape").clicked() {
                self.editor.clear_shape();
            }
            ui.label("Name:");
            let mut name = self.editor.drawing().name.clone();
            if ui.text_edit_singleline(&mut name).changed() {
                self.editor.set_name(name);
            }
            ui.label("Color:");
            let mut color = self.editor.drawing().color;
            if swatch_row(ui, &mut color) {
                self.editor.set_color(color);
            }
            if let Some((width_m, height_m)) = self.editor.extent_hint() {
                ui.label(format!("≈ {width_m:.0} m × {height_m:.0} m"));
            }
            if ui.button("Save area").clicked() {
                self.save_area();
            }
            if ui.button("Cancel").clicked() {
                self.editor.cancel();
            }
        }

        ui.separator();
        ui.label("Saved areas:");
        egui::ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
            let mut edit_clicked = None;
            for (i, area) in self.editor.areas().iter().enumerate() {
                let text = egui::RichText::new(&area.name).color(egui::Color32::WHITE);
                let button = egui::Button::new(text).fill(area.color.to_color32());
                if ui.add_sized([ui.available_width(), 22.0], button).clicked() {
                    edit_clicked = Some(i);
                }
            }
            if let Some(i) = edit_clicked {
                self.edit_area(i);
            }
        });

        ui.separator();
        ui.label("Robot:");
        ui.horizontal(|ui| {
            if ui.button("Power on").clicked() {
                self.dispatch_robot(RobotCommand::PowerOn);
            }
            if ui.button("Power off").clicked() {
                self.dispatch_robot(RobotCommand::PowerOff);
            }
        });
        if ui.button("Return to base").clicked() {
            self.dispatch_robot(RobotCommand::ReturnToBase);
        }
        if let Some(direction) = joystick_pad(ui) {
            self.dispatch_robot(RobotCommand::Move(direction));
        }
        if ui.button("Toggle pumps").clicked() {
            self.dispatch_robot(RobotCommand::TogglePumps);
        }
    }

    fn map_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;

        let zoom_delta = ui.input(|i| i.zoom_delta());
        if zoom_delta != 1.0 {
            if let Some(pos) = response.hover_pos() {
                self.view.zoom_about_screen_point(rect, pos, zoom_delta);
            }
        }
        if response.dragged() && !self.editor.is_drawing() {
            self.view.pan_screen(response.drag_delta());
        }

        draw_background(&painter, rect, &self.view);
        for area in self.editor.areas() {
            draw_area(&painter, rect, &self.view, area);
        }
        draw_drawing_overlay(&painter, rect, &self.view, self.editor.drawing());

        if self.editor.is_drawing() {
            self.interact_markers(ui, &painter, rect);
        }

        // Marker widgets sit on top, so a click that lands here missed them.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.editor.tap_map(self.view.screen_to_geo(rect, pos));
            }
        }
    }

    fn interact_markers(&mut self, ui: &mut egui::Ui, painter: &egui::Painter, rect: egui::Rect) {
        let drawing = self.editor.drawing().clone();
        let has_anchor = drawing.anchor.is_some();
        let grab = self.marker_radius * 2.4;

        for (i, vertex) in drawing.vertices.iter().enumerate() {
            let center = self.view.geo_to_screen(rect, *vertex);
            let r = egui::Rect::from_center_size(center, egui::vec2(grab, grab));
            let id = ui.id().with(("vertex", i));
            let resp = ui.interact(r, id, egui::Sense::click_and_drag());

            if resp.dragged() {
                if let Some(pos) = resp.interact_pointer_pos() {
                    self.editor
                        .drag_vertex(self.view.screen_to_geo(rect, pos), i);
                }
            }
            if resp.clicked() {
                self.editor.press_vertex(i);
            }

            let is_anchor = i == 0 && has_anchor;
            let fill = if is_anchor {
                egui::Color32::WHITE
            } else {
                drawing.color.to_color32()
            };
            let radius = if is_anchor {
                self.marker_radius + 2.0
            } else {
                self.marker_radius
            };
            painter.add(egui::Shape::circle_filled(center, radius, fill));
            painter.add(egui::Shape::circle_stroke(
                center,
                radius,
                egui::Stroke::new(1.5, egui::Color32::from_gray(30)),
            ));
            if resp.hovered() || resp.dragged() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            }
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wants_keyboard = ctx.wants_keyboard_input();
        ctx.input_mut(|i| {
            if !self.command_palette.open
                && i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::P)
            {
                self.command_palette.open("");
            }
            if !wants_keyboard && !self.command_palette.open {
                if i.consume_key(egui::Modifiers::NONE, egui::Key::D) {
                    self.editor.toggle_draw();
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                    self.editor.cancel();
                }
                let pan = 32.0;
                if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft) {
                    self.view.pan_screen(egui::vec2(pan, 0.0));
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight) {
                    self.view.pan_screen(egui::vec2(-pan, 0.0));
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp) {
                    self.view.pan_screen(egui::vec2(0.0, pan));
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown) {
                    self.view.pan_screen(egui::vec2(0.0, -pan));
                }
            }
        });

        egui::SidePanel::left("sidebar")
            .default_width(220.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.sidebar(ui));
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mode = if self.editor.is_drawing() { "drawing" } else { "idle" };
                ui.label(format!("Mode: {mode}"));
                ui.separator();
                ui.label(format!("{} saved", self.editor.areas().len()));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status.clone());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| self.map_canvas(ui));

        let cx = CommandContext {
            drawing: self.editor.is_drawing(),
        };
        if let Some(id) = self.command_palette.ui(ctx, cx) {
            CommandPalette::execute(self, ctx, id);
        }
    }
}
