//! The bug: a deterministic maze walker.
//!
//! The bug starts in the upper-left cell and looks for the exit in the
//! lower-right one. It is not optimal; it remembers how many times it has
//! left every cell and always walks towards the least-visited open
//! neighbor, keeping its current heading on ties and otherwise preferring
//! South, then East, then North, then West. Walking this way it reaches
//! the exit whenever a way out exists.

use crate::error::SolveError;
use crate::reachability;
use crate::robot::RobotPort;
use crate::side::Side;

/// Candidate value for a walled-off direction; larger than any possible
/// visit count, so it is never selected
const BLOCKED: u64 = u64::MAX;

/// Walk the robot from the start cell (0, height-1) to the exit cell
/// (width-1, 0) and return the number of steps taken.
///
/// Fails before any movement if the field has no bounding frame or if the
/// wall layout admits no path to the exit. A `Broken` error from the
/// robot mid-walk means the wall bookkeeping here disagreed with the
/// field; it is propagated as-is.
pub fn solve<R: RobotPort>(robot: &mut R) -> Result<u64, SolveError> {
    let (width, height) = robot.size();

    if !robot.has_frame() {
        return Err(SolveError::NoFrame);
    }
    if !reachability::exit_reachable(robot.field()) {
        return Err(SolveError::NoWayToExit);
    }

    robot.place(0, height - 1);

    let at = |x: i32, y: i32| (x + y * width) as usize;
    let mut visits = vec![0u64; (width * height) as usize];
    let mut side = Side::South;
    let mut steps = 0u64;
    let mut x = 0;
    let mut y = height - 1;

    while (x, y) != (width - 1, 0) {
        steps += 1;

        // Open directions offer their neighbor's visit count; walls are
        // never candidates.
        let mut candidates = [0u64; 4];
        for probe in Side::ALL {
            candidates[probe.index()] = if robot.has_wall(probe)? {
                BLOCKED
            } else {
                let (dx, dy) = probe.offset();
                // with the frame up, an open direction always leads to a
                // cell inside the field
                visits[at(x + dx, y + dy)]
            };
        }

        side = choose_side(candidates, side);
        visits[at(x, y)] += 1;
        robot.step(side)?;
        let (dx, dy) = side.offset();
        x += dx;
        y += dy;
    }

    Ok(steps)
}

/// The one decision the bug makes each step, as a pure function of the
/// four candidate values and the current heading.
///
/// Rule 1: if the current heading is tied for the minimum, keep it; this
/// stops the bug from oscillating while its direction stays optimal.
/// Rule 2: otherwise take the first direction of South, East, North, West
/// whose candidate is less than or equal to all the others.
fn choose_side(candidates: [u64; 4], current: Side) -> Side {
    let north = candidates[Side::North.index()];
    let east = candidates[Side::East.index()];
    let south = candidates[Side::South.index()];
    let west = candidates[Side::West.index()];
    let cur = candidates[current.index()];

    if cur <= south && cur <= east && cur <= north && cur <= west {
        current
    } else if south <= east && south <= north && south <= west {
        Side::South
    } else if east <= south && east <= north && east <= west {
        Side::East
    } else if north <= east && north <= south && north <= west {
        Side::North
    } else {
        Side::West
    }
}
