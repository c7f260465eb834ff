use fieldbug::error::RobotError;
use fieldbug::{Field, Robot, RobotPort, Side};

/// Parse a maze drawing into a field with the frame on.
///
/// Format, one text row of junctions and one of cells per field row:
///
/// ```text
/// +--+--+
/// |     |
/// +  +--+
/// |     |
/// +--+--+
/// ```
///
/// `--` between junctions is a horizontal wall, `|` at a junction column
/// is a vertical wall. The first text line is the top of the field
/// (y = height-1). Boundary segments in the drawing are decorative; the
/// frame flag covers the boundary.
pub fn parse_maze(drawing: &str) -> Field {
    let lines: Vec<&str> = drawing
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .collect();
    assert!(
        lines.len() >= 3 && lines.len() % 2 == 1,
        "maze drawing needs 2 * height + 1 lines"
    );
    let height = (lines.len() / 2) as i32;
    let width = ((lines[0].chars().count() - 1) / 3) as i32;
    assert!(width >= 1, "maze drawing too narrow");

    let mut field = Field::new(width, height);

    for (r, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if r % 2 == 0 {
            // junction line t: horizontal segments between rows t-1 and t
            let t = (r / 2) as i32;
            if t == 0 || t == height {
                continue;
            }
            for x in 0..width {
                if chars.get((3 * x + 1) as usize) == Some(&'-') {
                    field.set_wall(x, height - 1 - t, Side::North, true);
                }
            }
        } else {
            // cell line: vertical segments
            let y = height - 1 - (r / 2) as i32;
            for x in 1..width {
                if chars.get((3 * x) as usize) == Some(&'|') {
                    field.set_wall(x, y, Side::West, true);
                }
            }
        }
    }
    field
}

/// Robot wrapper that records every step and placement, for observing
/// what the solver actually did
pub struct Recorder {
    pub robot: Robot,
    pub steps: Vec<Side>,
    pub placements: Vec<(i32, i32)>,
}

impl Recorder {
    pub fn new(field: Field) -> Self {
        Recorder {
            robot: Robot::new(field),
            steps: Vec::new(),
            placements: Vec::new(),
        }
    }
}

impl RobotPort for Recorder {
    fn field(&self) -> &Field {
        self.robot.field()
    }

    fn has_wall(&mut self, side: Side) -> Result<bool, RobotError> {
        self.robot.has_wall(side)
    }

    fn step(&mut self, side: Side) -> Result<(), RobotError> {
        self.robot.step(side)?;
        self.steps.push(side);
        Ok(())
    }

    fn place(&mut self, x: i32, y: i32) {
        self.robot.place(x, y);
        self.placements.push((x, y));
    }
}
