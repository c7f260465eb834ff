use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

use crate::error::SaveError;
use crate::field::Field;
use crate::robot::{Robot, RobotPort};
use crate::side::Side;

/// Saved field situation: walls, markers, temperatures and the robot.
///
/// Wall segments and cells are stored as flat ids so that saved files
/// stay small and diffable.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveState {
    pub width: i32,
    pub height: i32,
    pub frame: bool,
    /// Interior vertical segments as ids x + y * (width + 1)
    pub vertical_walls: Vec<i32>,
    /// Interior horizontal segments as ids x + y * width
    pub horizontal_walls: Vec<i32>,
    /// Marked cells as ids x + y * width
    pub markers: Vec<i32>,
    /// Markers dropped outside the visible field
    pub out_markers: Vec<(i32, i32)>,
    /// Cell temperatures, row-major, length width * height
    pub temperatures: Vec<i32>,
    pub robot_x: i32,
    pub robot_y: i32,
    pub delay_ms: u64,
}

impl SaveState {
    /// Snapshot the current situation
    pub fn capture(robot: &Robot) -> Self {
        let field = robot.field();
        let (width, height) = field.size();

        let mut vertical_walls = Vec::new();
        for y in 0..height {
            for x in 1..width {
                if field.vertical_segment(x, y) {
                    vertical_walls.push(x + y * (width + 1));
                }
            }
        }

        let mut horizontal_walls = Vec::new();
        for y in 1..height {
            for x in 0..width {
                if field.horizontal_segment(x, y) {
                    horizontal_walls.push(x + y * width);
                }
            }
        }

        let mut markers = Vec::new();
        let mut temperatures = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if field.has_marker(x, y) {
                    markers.push(x + y * width);
                }
                temperatures.push(field.temperature(x, y));
            }
        }

        let (robot_x, robot_y) = robot.position();
        SaveState {
            width,
            height,
            frame: field.has_frame(),
            vertical_walls,
            horizontal_walls,
            markers,
            out_markers: field.out_markers(),
            temperatures,
            robot_x,
            robot_y,
            delay_ms: robot.delay().as_millis() as u64,
        }
    }

    /// Save to a JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file
    pub fn load_from_file(path: &str) -> Result<Self, SaveError> {
        let json = fs::read_to_string(path)?;
        let state: SaveState = serde_json::from_str(&json)?;
        Ok(state)
    }

    /// Rebuild the robot and its field from this state
    pub fn restore(&self) -> Result<Robot, SaveError> {
        if self.width < 1 || self.height < 1 {
            return Err(SaveError::Malformed(format!(
                "field size {}x{} is not positive",
                self.width, self.height
            )));
        }
        if self.temperatures.len() != (self.width * self.height) as usize {
            return Err(SaveError::Malformed(format!(
                "expected {} temperatures, found {}",
                self.width * self.height,
                self.temperatures.len()
            )));
        }

        let mut field = Field::new(self.width, self.height);
        field.set_frame(self.frame);

        for &id in &self.vertical_walls {
            let (x, y) = (id % (self.width + 1), id / (self.width + 1));
            if id < 0 || x < 1 || x > self.width - 1 || y >= self.height {
                return Err(SaveError::Malformed(format!(
                    "vertical wall id {} out of range",
                    id
                )));
            }
            field.set_wall(x, y, Side::West, true);
        }

        for &id in &self.horizontal_walls {
            let (x, y) = (id % self.width, id / self.width);
            if id < 0 || y < 1 || y > self.height - 1 {
                return Err(SaveError::Malformed(format!(
                    "horizontal wall id {} out of range",
                    id
                )));
            }
            field.set_wall(x, y, Side::South, true);
        }

        for &id in &self.markers {
            if id < 0 || id >= self.width * self.height {
                return Err(SaveError::Malformed(format!(
                    "marker id {} out of range",
                    id
                )));
            }
            field.set_marker(id % self.width, id / self.width);
        }

        for &(x, y) in &self.out_markers {
            if field.in_bounds(x, y) {
                return Err(SaveError::Malformed(format!(
                    "out-of-field marker ({}, {}) lies inside the field",
                    x, y
                )));
            }
            field.set_marker(x, y);
        }

        for y in 0..self.height {
            for x in 0..self.width {
                field.set_temperature(x, y, self.temperatures[(x + y * self.width) as usize]);
            }
        }

        let mut robot = Robot::new(field);
        robot.place(self.robot_x, self.robot_y);
        robot.set_delay(Duration::from_millis(self.delay_ms));
        Ok(robot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_robot() -> Robot {
        let mut field = Field::new(4, 3);
        field.set_wall(1, 1, Side::East, true);
        field.set_wall(2, 2, Side::South, true);
        field.set_marker(0, 0);
        field.set_marker(3, 2);
        field.set_temperature(1, 2, -9);
        let mut robot = Robot::new(field);
        robot.place(2, 1);
        robot.set_delay(Duration::from_millis(25));
        robot
    }

    #[test]
    fn capture_restore_preserves_the_situation() {
        let robot = sample_robot();
        let state = SaveState::capture(&robot);
        let restored = state.restore().unwrap();

        let field = restored.field();
        assert_eq!(field.size(), (4, 3));
        assert!(field.has_frame());
        assert!(field.has_wall(1, 1, Side::East));
        assert!(field.has_wall(2, 1, Side::West));
        assert!(field.has_wall(2, 2, Side::South));
        assert!(!field.has_wall(0, 0, Side::East));
        assert!(field.has_marker(0, 0));
        assert!(field.has_marker(3, 2));
        assert!(!field.has_marker(1, 1));
        assert_eq!(field.temperature(1, 2), -9);
        assert_eq!(restored.position(), (2, 1));
        assert_eq!(restored.delay(), Duration::from_millis(25));
    }

    #[test]
    fn file_round_trip() {
        let robot = sample_robot();
        let state = SaveState::capture(&robot);

        let path = std::env::temp_dir().join("fieldbug_save_test.map.json");
        let path = path.to_str().unwrap();
        state.save_to_file(path).unwrap();
        let loaded = SaveState::load_from_file(path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(loaded.width, state.width);
        assert_eq!(loaded.vertical_walls, state.vertical_walls);
        assert_eq!(loaded.horizontal_walls, state.horizontal_walls);
        assert_eq!(loaded.markers, state.markers);
        assert_eq!(loaded.temperatures, state.temperatures);
        assert_eq!((loaded.robot_x, loaded.robot_y), (2, 1));
    }

    #[test]
    fn malformed_states_are_rejected() {
        let robot = sample_robot();
        let mut state = SaveState::capture(&robot);
        state.temperatures.pop();
        assert!(matches!(state.restore(), Err(SaveError::Malformed(_))));

        let mut state = SaveState::capture(&robot);
        // boundary column segment, never editable
        state.vertical_walls.push(0);
        assert!(matches!(state.restore(), Err(SaveError::Malformed(_))));
    }
}
