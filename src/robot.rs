use std::thread;
use std::time::Duration;

use crate::command_log::{Command, CommandLog};
use crate::error::RobotError;
use crate::field::Field;
use crate::side::Side;

/// The grid-and-robot collaborator as the bug solver consumes it.
///
/// Any implementation (the headless engine below, a recording wrapper in
/// tests, a future rendering binding) must behave identically: `has_wall`
/// answers relative to the current position, `step` is fatal on a present
/// wall, `place` repositions without a wall check or a step.
pub trait RobotPort {
    /// Static layout (walls and frame), read by the reachability check
    fn field(&self) -> &Field;

    /// Wall next to the robot's current position, on the given side
    fn has_wall(&mut self, side: Side) -> Result<bool, RobotError>;

    /// Move one cell to the given side; a wall there breaks the robot
    fn step(&mut self, side: Side) -> Result<(), RobotError>;

    /// Immediate placement, no wall check, not a step
    fn place(&mut self, x: i32, y: i32);

    fn size(&self) -> (i32, i32) {
        self.field().size()
    }

    fn has_frame(&self) -> bool {
        self.field().has_frame()
    }
}

/// Headless robot engine on a cellular field.
///
/// Owns the field and the robot position. Driving into a wall is fatal:
/// the robot goes out of service and every later command fails, until a
/// `place` puts it back on its feet. An optional per-command delay slows
/// the session down for an attached visualization; it never affects what
/// the commands do.
pub struct Robot {
    field: Field,
    x: i32,
    y: i32,
    delay: Duration,
    serviceable: bool,
    log: Option<CommandLog>,
}

impl Robot {
    /// Create a robot in the lower-left cell of the given field
    pub fn new(field: Field) -> Self {
        Robot {
            field,
            x: 0,
            y: 0,
            delay: Duration::ZERO,
            serviceable: true,
            log: None,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start recording commands
    pub fn enable_log(&mut self) {
        if self.log.is_none() {
            self.log = Some(CommandLog::new());
        }
    }

    /// Detach the recorded command log, if any
    pub fn take_log(&mut self) -> Option<CommandLog> {
        self.log.take()
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Put a marker in the current cell; re-marking changes nothing
    pub fn mark(&mut self) -> Result<(), RobotError> {
        self.check_service()?;
        self.pause();
        self.field.set_marker(self.x, self.y);
        self.record(Command::Mark);
        Ok(())
    }

    /// Is there a marker in the current cell
    pub fn has_marker(&mut self) -> Result<bool, RobotError> {
        self.check_service()?;
        self.pause();
        let marker = self.field.has_marker(self.x, self.y);
        self.record(Command::QueryMarker { marker });
        Ok(marker)
    }

    /// Temperature of the current cell; outside the field the nearest
    /// cell is measured
    pub fn temperature(&mut self) -> Result<i32, RobotError> {
        self.check_service()?;
        self.pause();
        let value = self.field.temperature(self.x, self.y);
        self.record(Command::MeasureTemperature { value });
        Ok(value)
    }

    fn check_service(&self) -> Result<(), RobotError> {
        if self.serviceable {
            Ok(())
        } else {
            Err(RobotError::OutOfService)
        }
    }

    pub(crate) fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn record(&mut self, command: Command) {
        if let Some(log) = &mut self.log {
            log.log(command);
        }
    }
}

impl RobotPort for Robot {
    fn field(&self) -> &Field {
        &self.field
    }

    fn has_wall(&mut self, side: Side) -> Result<bool, RobotError> {
        self.check_service()?;
        self.pause();
        let wall = self.field.has_wall(self.x, self.y, side);
        self.record(Command::QueryWall { side, wall });
        Ok(wall)
    }

    fn step(&mut self, side: Side) -> Result<(), RobotError> {
        self.check_service()?;
        self.pause();
        if self.field.has_wall(self.x, self.y, side) {
            self.serviceable = false;
            return Err(RobotError::Broken);
        }
        let (dx, dy) = side.offset();
        self.x += dx;
        self.y += dy;
        self.record(Command::Step { side });
        Ok(())
    }

    // Placement also puts a broken robot back into service.
    fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.serviceable = true;
        self.record(Command::Place { x, y });
    }
}
