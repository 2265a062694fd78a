//! Center shapes: the eight glyph variants drawn on the middle tile.

use super::UnitPoint;

const FILL: &[UnitPoint] = &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

const DIAMOND: &[UnitPoint] = &[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)];

const REVERSE_DIAMOND: &[UnitPoint] = &[
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (0.0, 0.5),
    (0.5, 1.0),
    (1.0, 0.5),
    (0.5, 0.0),
    (0.0, 0.5),
];

const CROSS: &[UnitPoint] = &[
    (0.25, 0.0),
    (0.75, 0.0),
    (0.5, 0.5),
    (1.0, 0.25),
    (1.0, 0.75),
    (0.5, 0.5),
    (0.75, 1.0),
    (0.25, 1.0),
    (0.5, 0.5),
    (0.0, 0.75),
    (0.0, 0.25),
    (0.5, 0.5),
];

const MORNING_STAR: &[UnitPoint] = &[
    (0.0, 0.0),
    (0.5, 0.25),
    (1.0, 0.0),
    (0.75, 0.5),
    (1.0, 1.0),
    (0.5, 0.75),
    (0.0, 1.0),
    (0.25, 0.5),
];

const SMALL_SQUARE: &[UnitPoint] = &[
    (0.33, 0.33),
    (0.67, 0.33),
    (0.67, 0.67),
    (0.33, 0.67),
];

// The lone 0.66 in the second vertex row is historical; rendered output
// depends on it staying that way.
const CHECKERBOARD: &[UnitPoint] = &[
    (0.0, 0.0),
    (0.33, 0.0),
    (0.33, 0.33),
    (0.66, 0.33),
    (0.67, 0.0),
    (1.0, 0.0),
    (1.0, 0.33),
    (0.67, 0.33),
    (0.67, 0.67),
    (1.0, 0.67),
    (0.67, 1.0),
    (0.67, 0.67),
    (0.33, 0.67),
    (0.33, 1.0),
    (0.0, 1.0),
    (0.0, 0.67),
    (0.33, 0.67),
    (0.33, 0.33),
    (0.0, 0.33),
];

/// Shape drawn on the middle tile.
///
/// Id 0 is the blank variant: no polygon at all, the tile keeps its
/// background color. Ids are masked to the low three bits during lookup, so
/// any decoded value selects one of the eight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CenterShape {
    Blank,
    Fill,
    Diamond,
    ReverseDiamond,
    Cross,
    MorningStar,
    SmallSquare,
    Checkerboard,
}

impl CenterShape {
    /// Maps a decoded shape id to its catalog entry, masking to 0-7.
    pub fn from_id(id: u32) -> Self {
        match id & 7 {
            1 => Self::Fill,
            2 => Self::Diamond,
            3 => Self::ReverseDiamond,
            4 => Self::Cross,
            5 => Self::MorningStar,
            6 => Self::SmallSquare,
            7 => Self::Checkerboard,
            _ => Self::Blank,
        }
    }

    /// The polygon outline in unit-square coordinates, or `None` for
    /// [`CenterShape::Blank`].
    pub fn vertices(self) -> Option<&'static [UnitPoint]> {
        match self {
            Self::Blank => None,
            Self::Fill => Some(FILL),
            Self::Diamond => Some(DIAMOND),
            Self::ReverseDiamond => Some(REVERSE_DIAMOND),
            Self::Cross => Some(CROSS),
            Self::MorningStar => Some(MORNING_STAR),
            Self::SmallSquare => Some(SMALL_SQUARE),
            Self::Checkerboard => Some(CHECKERBOARD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_mask_to_the_low_three_bits() {
        assert_eq!(CenterShape::from_id(0), CenterShape::Blank);
        assert_eq!(CenterShape::from_id(8), CenterShape::Blank);
        assert_eq!(CenterShape::from_id(7), CenterShape::Checkerboard);
        assert_eq!(CenterShape::from_id(9), CenterShape::Fill);
        assert_eq!(CenterShape::from_id(126), CenterShape::SmallSquare);
    }

    #[test]
    fn blank_has_no_polygon() {
        assert!(CenterShape::Blank.vertices().is_none());
    }

    #[test]
    fn checkerboard_keeps_its_uneven_coordinate() {
        let board = CenterShape::Checkerboard.vertices().unwrap();
        assert_eq!(board[3], (0.66, 0.33));
        assert_eq!(board[4], (0.67, 0.0));
    }

    #[test]
    fn diamond_touches_all_four_edge_midpoints() {
        assert_eq!(
            CenterShape::Diamond.vertices().unwrap(),
            &[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)]
        );
    }
}
