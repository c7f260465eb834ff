use std::collections::HashSet;

use rand::Rng;

use crate::side::Side;

/// Cellular field: a rectangular grid of cells with independently
/// toggleable walls on cell sides, an optional bounding frame, markers
/// and a per-cell "temperature" map.
///
/// Coordinates: cell (x, y) with 0 <= x < width, 0 <= y < height,
/// x growing East and y growing North, so (0, height-1) is the upper-left
/// corner and (width-1, 0) the lower-right.
///
/// Walls are stored as edge segments shared by the two adjacent cells:
/// a vertical segment (x, y) separates (x-1, y) from (x, y), a horizontal
/// segment (x, y) separates (x, y-1) from (x, y). Only interior segments
/// are editable; the outer boundary is governed by the frame flag alone.
#[derive(Clone, Debug)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    frame: bool,
    /// Vertical segments, (width + 1) * height, index x + y * (width + 1).
    /// Boundary columns (x = 0 and x = width) stay false.
    vertical: Vec<bool>,
    /// Horizontal segments, width * (height + 1), index x + y * width.
    /// Boundary rows (y = 0 and y = height) stay false.
    horizontal: Vec<bool>,
    /// Markers on visible cells, width * height
    markers: Vec<bool>,
    /// Markers dropped outside the visible field (reachable only frameless)
    out_markers: HashSet<(i32, i32)>,
    /// Cell temperatures, width * height
    temperature: Vec<i32>,
    /// Incremented whenever walls or markers change
    pub revision: u64,
}

impl Field {
    /// Create a field with no walls, no markers, the frame on and a
    /// randomly generated temperature map
    pub fn new(width: i32, height: i32) -> Self {
        let mut rng = rand::thread_rng();
        let cells = (width * height) as usize;
        Field {
            width,
            height,
            frame: true,
            vertical: vec![false; ((width + 1) * height) as usize],
            horizontal: vec![false; (width * (height + 1)) as usize],
            markers: vec![false; cells],
            out_markers: HashSet::new(),
            temperature: (0..cells).map(|_| rng.gen_range(-10..10)).collect(),
            revision: 0,
        }
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn has_frame(&self) -> bool {
        self.frame
    }

    pub fn set_frame(&mut self, frame: bool) {
        if self.frame != frame {
            self.frame = frame;
            self.revision += 1;
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn cell_index(&self, x: i32, y: i32) -> usize {
        (x + y * self.width) as usize
    }

    /// Wall on the given side of cell (x, y), frame included.
    ///
    /// Also defined for positions outside the field: the frame is seen as a
    /// wall from the outside row/column directly adjacent to it, and there
    /// are no walls anywhere further out.
    pub fn has_wall(&self, x: i32, y: i32, side: Side) -> bool {
        match side {
            Side::North => {
                if x < 0 || x >= self.width {
                    return false;
                }
                if y < -1 || y > self.height - 1 {
                    return false;
                }
                if y == -1 || y == self.height - 1 {
                    return self.frame;
                }
                self.horizontal_segment(x, y + 1)
            }
            Side::South => {
                if x < 0 || x >= self.width {
                    return false;
                }
                if y < 0 || y > self.height {
                    return false;
                }
                if y == 0 || y == self.height {
                    return self.frame;
                }
                self.horizontal_segment(x, y)
            }
            Side::East => {
                if y < 0 || y >= self.height {
                    return false;
                }
                if x < -1 || x > self.width - 1 {
                    return false;
                }
                if x == -1 || x == self.width - 1 {
                    return self.frame;
                }
                self.vertical_segment(x + 1, y)
            }
            Side::West => {
                if y < 0 || y >= self.height {
                    return false;
                }
                if x < 0 || x > self.width {
                    return false;
                }
                if x == 0 || x == self.width {
                    return self.frame;
                }
                self.vertical_segment(x, y)
            }
        }
    }

    /// Set or clear the wall on the given side of cell (x, y).
    /// Boundary-facing sides are governed by the frame and are left alone.
    pub fn set_wall(&mut self, x: i32, y: i32, side: Side, wall: bool) {
        if !self.in_bounds(x, y) {
            return;
        }
        match side {
            Side::North => self.set_horizontal_segment(x, y + 1, wall),
            Side::South => self.set_horizontal_segment(x, y, wall),
            Side::East => self.set_vertical_segment(x + 1, y, wall),
            Side::West => self.set_vertical_segment(x, y, wall),
        }
    }

    fn set_vertical_segment(&mut self, x: i32, y: i32, wall: bool) {
        if x < 1 || x > self.width - 1 {
            return;
        }
        let index = self.vertical_index(x, y);
        if self.vertical[index] != wall {
            self.vertical[index] = wall;
            self.revision += 1;
        }
    }

    fn set_horizontal_segment(&mut self, x: i32, y: i32, wall: bool) {
        if y < 1 || y > self.height - 1 {
            return;
        }
        let index = self.horizontal_index(x, y);
        if self.horizontal[index] != wall {
            self.horizontal[index] = wall;
            self.revision += 1;
        }
    }

    fn vertical_index(&self, x: i32, y: i32) -> usize {
        (x + y * (self.width + 1)) as usize
    }

    fn horizontal_index(&self, x: i32, y: i32) -> usize {
        (x + y * self.width) as usize
    }

    /// Vertical segment between (x-1, y) and (x, y), interior only
    pub fn vertical_segment(&self, x: i32, y: i32) -> bool {
        self.vertical[self.vertical_index(x, y)]
    }

    /// Horizontal segment between (x, y-1) and (x, y), interior only
    pub fn horizontal_segment(&self, x: i32, y: i32) -> bool {
        self.horizontal[self.horizontal_index(x, y)]
    }

    /// Put a marker in cell (x, y); re-marking changes nothing
    pub fn set_marker(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            let index = self.cell_index(x, y);
            if !self.markers[index] {
                self.markers[index] = true;
                self.revision += 1;
            }
        } else if self.out_markers.insert((x, y)) {
            self.revision += 1;
        }
    }

    /// Markers outside the visible field, in a stable order
    pub fn out_markers(&self) -> Vec<(i32, i32)> {
        let mut positions: Vec<(i32, i32)> = self.out_markers.iter().copied().collect();
        positions.sort();
        positions
    }

    pub fn has_marker(&self, x: i32, y: i32) -> bool {
        if self.in_bounds(x, y) {
            self.markers[self.cell_index(x, y)]
        } else {
            self.out_markers.contains(&(x, y))
        }
    }

    /// Temperature of cell (x, y); an out-of-field position reads the
    /// nearest cell
    pub fn temperature(&self, x: i32, y: i32) -> i32 {
        let cx = x.max(0).min(self.width - 1);
        let cy = y.max(0).min(self.height - 1);
        self.temperature[self.cell_index(cx, cy)]
    }

    pub fn set_temperature(&mut self, x: i32, y: i32, value: i32) {
        if self.in_bounds(x, y) {
            let index = self.cell_index(x, y);
            self.temperature[index] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_are_symmetric() {
        let mut field = Field::new(3, 3);
        field.set_wall(0, 1, Side::East, true);
        assert!(field.has_wall(0, 1, Side::East));
        assert!(field.has_wall(1, 1, Side::West));

        field.set_wall(1, 2, Side::South, true);
        assert!(field.has_wall(1, 2, Side::South));
        assert!(field.has_wall(1, 1, Side::North));

        field.set_wall(1, 1, Side::North, false);
        assert!(!field.has_wall(1, 2, Side::South));
    }

    #[test]
    fn frame_covers_the_boundary() {
        let mut field = Field::new(2, 2);
        assert!(field.has_wall(0, 1, Side::North));
        assert!(field.has_wall(0, 1, Side::West));
        assert!(field.has_wall(1, 0, Side::East));
        assert!(field.has_wall(1, 0, Side::South));

        field.set_frame(false);
        assert!(!field.has_wall(0, 1, Side::North));
        assert!(!field.has_wall(1, 0, Side::South));
    }

    #[test]
    fn boundary_sides_are_not_editable() {
        let mut field = Field::new(2, 2);
        let before = field.revision;
        field.set_wall(0, 1, Side::West, true);
        field.set_wall(0, 1, Side::North, true);
        assert_eq!(field.revision, before);

        field.set_frame(false);
        assert!(!field.has_wall(0, 1, Side::West));
        assert!(!field.has_wall(0, 1, Side::North));
    }

    #[test]
    fn frame_seen_from_outside() {
        let field = Field::new(2, 2);
        // just below the field, facing back in
        assert!(field.has_wall(0, -1, Side::North));
        // two rows out there is nothing
        assert!(!field.has_wall(0, -2, Side::North));
        // off to the side of the field there are no walls at all
        assert!(!field.has_wall(-1, -1, Side::West));
    }

    #[test]
    fn markers_inside_and_outside() {
        let mut field = Field::new(2, 2);
        field.set_marker(1, 1);
        field.set_marker(1, 1);
        assert!(field.has_marker(1, 1));
        assert!(!field.has_marker(0, 0));

        field.set_marker(-1, 5);
        assert!(field.has_marker(-1, 5));
    }

    #[test]
    fn temperature_reads_clamp() {
        let mut field = Field::new(2, 2);
        field.set_temperature(0, 0, -7);
        field.set_temperature(1, 1, 4);
        assert_eq!(field.temperature(0, 0), -7);
        assert_eq!(field.temperature(-3, -3), -7);
        assert_eq!(field.temperature(5, 5), 4);
    }

    #[test]
    fn revision_tracks_changes() {
        let mut field = Field::new(3, 3);
        let start = field.revision;
        field.set_wall(1, 1, Side::East, true);
        field.set_wall(1, 1, Side::East, true); // no change
        field.set_marker(0, 0);
        field.set_frame(false);
        assert_eq!(field.revision, start + 3);
    }
}
