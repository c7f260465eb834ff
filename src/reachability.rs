use crate::field::Field;

/// Decide whether a wall-respecting path connects the start cell
/// (0, height-1) to the exit cell (width-1, 0).
///
/// The flood is seeded at the exit and spreads backwards; walls are
/// symmetric, so the verdict equals the forward one. It runs as repeated
/// full relaxation passes over the grid: a pass that marks nothing new
/// means the search has saturated, and the moment the start cell is
/// marked the answer is known.
pub fn exit_reachable(field: &Field) -> bool {
    let (width, height) = field.size();
    let start = (0, height - 1);
    let exit = (width - 1, 0);
    let at = |x: i32, y: i32| (x + y * width) as usize;

    let mut reached = vec![false; (width * height) as usize];
    reached[at(exit.0, exit.1)] = true;
    if start == exit {
        return true;
    }

    loop {
        let mut changed = false;
        for x in 0..width {
            for y in 0..height {
                if reached[at(x, y)] {
                    continue;
                }
                let connected = (x > 0
                    && reached[at(x - 1, y)]
                    && !field.vertical_segment(x, y))
                    || (x + 1 < width
                        && reached[at(x + 1, y)]
                        && !field.vertical_segment(x + 1, y))
                    || (y > 0
                        && reached[at(x, y - 1)]
                        && !field.horizontal_segment(x, y))
                    || (y + 1 < height
                        && reached[at(x, y + 1)]
                        && !field.horizontal_segment(x, y + 1));
                if connected {
                    reached[at(x, y)] = true;
                    changed = true;
                    if (x, y) == start {
                        return true;
                    }
                }
            }
        }
        if !changed {
            return false;
        }
    }
}
