use eframe::egui;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::robot::{Direction, RobotCommand};

use super::MapApp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CommandId {
    ToggleDraw,
    ClearShape,
    SaveArea,
    CancelDrawing,
    RobotPowerOn,
    RobotPowerOff,
    RobotReturnToBase,
    RobotStop,
    RobotTogglePumps,
    SaveView,
}

pub(super) struct CommandSpec {
    pub id: CommandId,
    pub name: &'static str,
    pub search: &'static str,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec { id: CommandId::ToggleDraw, name: "Area: Toggle drawing", search: "draw area toggle finish d" },
    CommandSpec { id: CommandId::ClearShape, name: "Area: Clear shape", search: "clear shape points reset" },
    CommandSpec { id: CommandId::SaveArea, name: "Area: Save", search: "save area commit" },
    CommandSpec { id: CommandId::CancelDrawing, name: "Area: Cancel drawing", search: "cancel discard escape" },
    CommandSpec { id: CommandId::RobotPowerOn, name: "Robot: Power on", search: "robot power on start" },
    CommandSpec { id: CommandId::RobotPowerOff, name: "Robot: Power off", search: "robot power off shutdown" },
    CommandSpec { id: CommandId::RobotReturnToBase, name: "Robot: Return to base", search: "robot return base home dock" },
    CommandSpec { id: CommandId::RobotStop, name: "Robot: Stop", search: "robot stop halt" },
    CommandSpec { id: CommandId::RobotTogglePumps, name: "Robot: Toggle pumps", search: "robot pumps water toggle" },
    CommandSpec { id: CommandId::SaveView, name: "View: Save as default", search: "view settings save default center zoom" },
];

#[derive(Default)]
pub(super) struct CommandPalette {
    pub open: bool,
    pub query: String,
    pub selected: usize,
    request_focus: bool,
}

#[derive(Clone, Copy)]
pub(super) struct CommandContext {
    pub drawing: bool,
}

impl CommandPalette {
    pub fn open(&mut self, query: impl Into<String>) {
        self.open = true;
        self.query = query.into();
        self.selected = 0;
        self.request_focus = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.selected = 0;
        self.request_focus = false;
    }

    fn is_enabled(cx: CommandContext, id: CommandId) -> bool {
        match id {
            CommandId::ClearShape | CommandId::SaveArea | CommandId::CancelDrawing => cx.drawing,
            _ => true,
        }
    }

    pub(super) fn execute(app: &mut MapApp, ctx: &egui::Context, id: CommandId) {
        match id {
            CommandId::ToggleDraw => app.editor.toggle_draw(),
            CommandId::ClearShape => app.editor.clear_shape(),
            CommandId::SaveArea => app.save_area(),
            CommandId::CancelDrawing => app.editor.cancel(),
            CommandId::RobotPowerOn => app.dispatch_robot(RobotCommand::PowerOn),
            CommandId::RobotPowerOff => app.dispatch_robot(RobotCommand::PowerOff),
            CommandId::RobotReturnToBase => app.dispatch_robot(RobotCommand::ReturnToBase),
            CommandId::RobotStop => app.dispatch_robot(RobotCommand::Move(Direction::Stop)),
            CommandId::RobotTogglePumps => app.dispatch_robot(RobotCommand::TogglePumps),
            CommandId::SaveView => app.persist_view_settings(),
        }
        ctx.request_repaint();
    }

    fn filtered(&self) -> Vec<(&'static CommandSpec, i64)> {
        let q = self.query.trim();
        if q.is_empty() {
            return COMMANDS.iter().map(|c| (c, 0)).collect();
        }
        let matcher = SkimMatcherV2::default();
        let mut out: Vec<_> = COMMANDS
            .iter()
            .filter_map(|c| matcher.fuzzy_match(c.search, q).map(|score| (c, score)))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(b.0.name)));
        out
    }

    pub fn ui(&mut self, ctx: &egui::Context, cx: CommandContext) -> Option<CommandId> {
        if !self.open {
            return None;
        }
        let matches = self.filtered();
        if self.selected >= matches.len() {
            self.selected = matches.len().saturating_sub(1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close();
            return None;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) && !matches.is_empty() {
            self.selected = (self.selected + 1).min(matches.len() - 1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) && !matches.is_empty() {
            self.selected = self.selected.saturating_sub(1);
        }
        let mut run_selected = ctx.input(|i| i.key_pressed(egui::Key::Enter));

        let screen = ctx.content_rect();
        let width = 420.0;
        let height = 260.0;
        let pos = egui::pos2(screen.center().x - width * 0.5, screen.top() + 48.0);
        egui::Area::new(egui::Id::new("command_palette"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let frame = egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 20, 240))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 160, 255)))
                    .inner_margin(10.0)
                    .corner_radius(egui::CornerRadius::same(8));
                frame.show(ui, |ui| {
                    ui.set_min_size(egui::vec2(width, height));
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.query)
                            .desired_width(f32::INFINITY)
                            .hint_text("Search commands"),
                    );
                    if self.request_focus {
                        resp.request_focus();
                        self.request_focus = false;
                    }
                    ui.separator();
                    egui::ScrollArea::vertical().max_height(height - 64.0).show(ui, |ui| {
                        for (idx, (spec, _score)) in matches.iter().enumerate() {
                            let enabled = CommandPalette::is_enabled(cx, spec.id);
                            let selected = idx == self.selected;
                            let resp = ui.add_enabled(
                                enabled,
                                egui::Button::new(spec.name).selected(selected),
                            );
                            if resp.clicked() {
                                self.selected = idx;
                                run_selected = true;
                            }
                        }
                    });
                });
            });

        if run_selected {
            if let Some((spec, _)) = matches.get(self.selected) {
                if CommandPalette::is_enabled(cx, spec.id) {
                    let cmd = spec.id;
                    self.close();
                    return Some(cmd);
                }
            }
        }
        None
    }
}
