use thiserror::Error;

/// Invalid direction value crossing the command interface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SideError {
    #[error("invalid side index {0}, expected 0..=3")]
    InvalidIndex(usize),
}

/// Errors raised by the robot engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RobotError {
    /// The robot was commanded into a wall. Fatal for this robot.
    #[error("the robot has driven into a wall")]
    Broken,

    /// A command was issued after the robot broke.
    #[error("the robot is out of service")]
    OutOfService,
}

/// Errors raised by the bug solver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The field has no bounding frame; the exploration would be unbounded.
    #[error("the field has no bounding frame")]
    NoFrame,

    /// The static wall layout admits no path from start to exit.
    #[error("there is no way to the exit")]
    NoWayToExit,

    #[error(transparent)]
    Robot(#[from] RobotError),
}

/// Errors raised while saving or restoring a field situation.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to read or write the save file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or parse the save file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed save state: {0}")]
    Malformed(String),
}
