use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobotCommand {
    PowerOn,
    PowerOff,
    ReturnToBase,
    Move(Direction),
    TogglePumps,
}

impl RobotCommand {
    pub fn label(self) -> &'static str {
        match self {
            RobotCommand::PowerOn => "Power on",
            RobotCommand::PowerOff => "Power off",
            RobotCommand::ReturnToBase => "Return to base",
            RobotCommand::Move(Direction::Forward) => "Move forward",
            RobotCommand::Move(Direction::Backward) => "Move backward",
            RobotCommand::Move(Direction::Left) => "Move left",
            RobotCommand::Move(Direction::Right) => "Move right",
            RobotCommand::Move(Direction::Stop) => "Stop",
            RobotCommand::TogglePumps => "Toggle pumps",
        }
    }
}

/// One-way sink for robot commands. There is no response channel: commands
/// are dispatched fire-and-forget, and a serial or network client to the
/// field controller plugs in behind this trait.
pub trait RobotCommandPort {
    fn send(&mut self, command: RobotCommand);
}

/// Stand-in port while no radio link exists: records the command in the log
/// and drops it.
#[derive(Debug, Default)]
pub struct LogLink;

impl RobotCommandPort for LogLink {
    fn send(&mut self, command: RobotCommand) {
        info!(command = command.label(), "robot command dispatched");
    }
}

#[cfg(test)]
pub struct RecordingLink {
    pub sent: Vec<RobotCommand>,
}

#[cfg(test)]
impl RobotCommandPort for RecordingLink {
    fn send(&mut self, command: RobotCommand) {
        self.sent.push(command);
    }
}
