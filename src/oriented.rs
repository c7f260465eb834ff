use crate::error::RobotError;
use crate::robot::{Robot, RobotPort};
use crate::side::Side;

/// A turn relative to the current heading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
    Back,
}

/// A direction relative to the current heading, for wall queries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relative {
    Forward,
    Left,
    Right,
}

/// Robot driven by heading-relative commands: step forward, turn, check
/// for a wall ahead or to a side. Marker and temperature commands pass
/// straight through to the engine.
pub struct OrientedRobot {
    robot: Robot,
    heading: Side,
}

impl OrientedRobot {
    /// Wrap an engine; the initial heading is North
    pub fn new(robot: Robot) -> Self {
        OrientedRobot {
            robot,
            heading: Side::North,
        }
    }

    pub fn heading(&self) -> Side {
        self.heading
    }

    pub fn position(&self) -> (i32, i32) {
        self.robot.position()
    }

    /// One step in the current heading
    pub fn forward(&mut self) -> Result<(), RobotError> {
        let heading = self.heading;
        self.robot.step(heading)
    }

    /// Turn in place; takes a command's worth of delay but no step
    pub fn turn(&mut self, rotation: Rotation) {
        self.robot.pause();
        self.heading = match rotation {
            Rotation::Left => self.heading.left(),
            Rotation::Right => self.heading.right(),
            Rotation::Back => self.heading.opposite(),
        };
    }

    /// Wall query relative to the heading
    pub fn has_wall(&mut self, relative: Relative) -> Result<bool, RobotError> {
        let side = match relative {
            Relative::Forward => self.heading,
            Relative::Left => self.heading.left(),
            Relative::Right => self.heading.right(),
        };
        self.robot.has_wall(side)
    }

    pub fn mark(&mut self) -> Result<(), RobotError> {
        self.robot.mark()
    }

    pub fn has_marker(&mut self) -> Result<bool, RobotError> {
        self.robot.has_marker()
    }

    pub fn temperature(&mut self) -> Result<i32, RobotError> {
        self.robot.temperature()
    }

    /// Access the wrapped engine
    pub fn inner_mut(&mut self) -> &mut Robot {
        &mut self.robot
    }

    pub fn into_inner(self) -> Robot {
        self.robot
    }
}
