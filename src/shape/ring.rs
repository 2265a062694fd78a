//! Ring shapes: the sixteen polygon variants drawn on corner and side tiles.

use super::UnitPoint;

const TRIANGLE: &[UnitPoint] = &[(0.5, 1.0), (1.0, 0.0), (1.0, 1.0)];

const PARALLELOGRAM: &[UnitPoint] = &[(0.5, 0.0), (1.0, 0.0), (0.5, 1.0), (0.0, 1.0)];

const MOUSE_EARS: &[UnitPoint] = &[
    (0.5, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.5, 1.0),
    (1.0, 0.5),
];

const RIBBON: &[UnitPoint] = &[
    (0.0, 0.5),
    (0.5, 0.0),
    (1.0, 0.5),
    (0.5, 1.0),
    (0.5, 0.5),
];

const SAILS: &[UnitPoint] = &[
    (0.0, 0.5),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (1.0, 0.5),
];

const FINS: &[UnitPoint] = &[
    (1.0, 0.0),
    (1.0, 1.0),
    (0.5, 1.0),
    (1.0, 0.5),
    (0.5, 0.5),
];

const BEAK: &[UnitPoint] = &[
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 0.5),
    (0.0, 0.0),
    (0.5, 1.0),
    (0.0, 1.0),
];

const CHEVRON: &[UnitPoint] = &[
    (0.0, 0.0),
    (0.5, 0.0),
    (1.0, 0.5),
    (0.5, 1.0),
    (0.0, 1.0),
    (0.5, 0.5),
];

const FISH: &[UnitPoint] = &[
    (0.5, 0.0),
    (0.5, 0.5),
    (1.0, 0.5),
    (1.0, 1.0),
    (0.5, 1.0),
    (0.5, 0.5),
    (0.0, 0.5),
];

const KITE: &[UnitPoint] = &[
    (0.0, 0.0),
    (1.0, 0.0),
    (0.5, 0.5),
    (1.0, 0.5),
    (0.5, 1.0),
    (0.5, 0.5),
    (0.0, 1.0),
];

const TROUGH: &[UnitPoint] = &[
    (0.0, 0.5),
    (0.5, 1.0),
    (1.0, 0.5),
    (0.5, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
];

const RAYS: &[UnitPoint] = &[
    (0.5, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.5, 1.0),
    (1.0, 0.75),
    (0.5, 0.5),
    (1.0, 0.25),
];

const DOUBLE_RHOMBUS: &[UnitPoint] = &[
    (0.0, 0.5),
    (0.5, 0.0),
    (0.5, 0.5),
    (1.0, 0.0),
    (1.0, 0.5),
    (0.5, 1.0),
    (0.5, 0.5),
    (0.0, 1.0),
];

const CROWN: &[UnitPoint] = &[
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (1.0, 0.5),
    (0.5, 0.25),
    (0.5, 0.75),
    (0.0, 0.5),
    (0.5, 0.25),
];

const RADIOACTIVE: &[UnitPoint] = &[
    (0.0, 0.5),
    (0.5, 0.5),
    (0.5, 0.0),
    (1.0, 0.0),
    (0.5, 0.5),
    (1.0, 0.5),
    (0.5, 1.0),
    (0.5, 0.5),
    (0.0, 1.0),
];

const TILES: &[UnitPoint] = &[
    (0.0, 0.0),
    (1.0, 0.0),
    (0.5, 0.5),
    (0.5, 0.0),
    (0.0, 0.5),
    (1.0, 0.5),
    (0.5, 1.0),
    (0.5, 0.5),
    (0.0, 1.0),
];

/// Shape drawn on the four corner tiles or the four side tiles.
///
/// Ids 0 through 14 select a specific polygon; every other id falls back to
/// [`RingShape::Tiles`], so a lookup never fails no matter what the hash
/// decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingShape {
    Triangle,
    Parallelogram,
    MouseEars,
    Ribbon,
    Sails,
    Fins,
    Beak,
    Chevron,
    Fish,
    Kite,
    Trough,
    Rays,
    DoubleRhombus,
    Crown,
    Radioactive,
    /// Catch-all pattern for ids outside the enumerated range.
    Tiles,
}

impl RingShape {
    /// Maps a decoded shape id to its catalog entry.
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => Self::Triangle,
            1 => Self::Parallelogram,
            2 => Self::MouseEars,
            3 => Self::Ribbon,
            4 => Self::Sails,
            5 => Self::Fins,
            6 => Self::Beak,
            7 => Self::Chevron,
            8 => Self::Fish,
            9 => Self::Kite,
            10 => Self::Trough,
            11 => Self::Rays,
            12 => Self::DoubleRhombus,
            13 => Self::Crown,
            14 => Self::Radioactive,
            _ => Self::Tiles,
        }
    }

    /// The polygon outline in unit-square coordinates.
    pub fn vertices(self) -> &'static [UnitPoint] {
        match self {
            Self::Triangle => TRIANGLE,
            Self::Parallelogram => PARALLELOGRAM,
            Self::MouseEars => MOUSE_EARS,
            Self::Ribbon => RIBBON,
            Self::Sails => SAILS,
            Self::Fins => FINS,
            Self::Beak => BEAK,
            Self::Chevron => CHEVRON,
            Self::Fish => FISH,
            Self::Kite => KITE,
            Self::Trough => TROUGH,
            Self::Rays => RAYS,
            Self::DoubleRhombus => DOUBLE_RHOMBUS,
            Self::Crown => CROWN,
            Self::Radioactive => RADIOACTIVE,
            Self::Tiles => TILES,
        }
    }
}
