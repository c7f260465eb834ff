use serde::{Deserialize, Serialize};

use crate::error::SideError;

/// Compass direction of movement or wall checks.
///
/// The integer encoding is fixed: North=0, East=1, South=2, West=3.
/// Both the robot engine and the bug solver rely on this mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// All sides in index order
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Encode the side as its fixed index 0..=3
    pub fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::East => 1,
            Side::South => 2,
            Side::West => 3,
        }
    }

    /// Decode a side from its index, rejecting anything outside 0..=3
    pub fn from_index(index: usize) -> Result<Side, SideError> {
        match index {
            0 => Ok(Side::North),
            1 => Ok(Side::East),
            2 => Ok(Side::South),
            3 => Ok(Side::West),
            _ => Err(SideError::InvalidIndex(index)),
        }
    }

    /// Unit offset of one step to this side, in field coordinates
    /// (x grows East, y grows North; y = 0 is the bottom row)
    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::North => (0, 1),
            Side::East => (1, 0),
            Side::South => (0, -1),
            Side::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Side {
        Side::ALL[(self.index() + 2) % 4]
    }

    /// Side after a quarter turn to the left
    pub fn left(self) -> Side {
        Side::ALL[(self.index() + 3) % 4]
    }

    /// Side after a quarter turn to the right
    pub fn right(self) -> Side {
        Side::ALL[(self.index() + 1) % 4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping_is_fixed() {
        assert_eq!(Side::North.index(), 0);
        assert_eq!(Side::East.index(), 1);
        assert_eq!(Side::South.index(), 2);
        assert_eq!(Side::West.index(), 3);
    }

    #[test]
    fn encode_decode_agree() {
        for side in Side::ALL {
            assert_eq!(Side::from_index(side.index()).unwrap(), side);
        }
    }

    #[test]
    fn invalid_index_is_rejected() {
        assert!(Side::from_index(4).is_err());
        assert!(Side::from_index(usize::MAX).is_err());
    }

    #[test]
    fn turns_and_opposites() {
        assert_eq!(Side::North.opposite(), Side::South);
        assert_eq!(Side::East.opposite(), Side::West);
        assert_eq!(Side::South.left(), Side::East);
        assert_eq!(Side::South.right(), Side::West);
        assert_eq!(Side::West.right(), Side::North);
        for side in Side::ALL {
            assert_eq!(side.left().right(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn offsets_cancel_for_opposites() {
        for side in Side::ALL {
            let (dx, dy) = side.offset();
            let (ox, oy) = side.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
