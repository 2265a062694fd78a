//! Fixed polygon catalog for identicon tiles.
//!
//! Every shape is an ordered vertex list in unit-square coordinates, scaled
//! by the sprite size at draw time. The catalog is split into the [ring
//! shapes](RingShape) drawn on the corner and side tiles and the [center
//! shapes](CenterShape) drawn on the middle tile.
//!
//! Several outlines deliberately self-intersect (the cross, the reverse
//! diamond, the checkerboard); drawn with an even-odd fill they produce
//! cut-out interiors rather than solid blobs. The vertex data is part of the
//! output contract and is not normalized or deduplicated.

mod center;
mod ring;

pub use center::CenterShape;
pub use ring::RingShape;

/// A polygon vertex as `(x, y)` fractions of the unit square.
pub type UnitPoint = (f32, f32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_vertices_stay_inside_the_unit_square() {
        let ring_ids = 0..16;
        let center_ids = 0..8;

        let vertices = ring_ids
            .map(RingShape::from_id)
            .flat_map(|shape| shape.vertices().iter().copied())
            .chain(
                center_ids
                    .map(CenterShape::from_id)
                    .flat_map(|shape| shape.vertices().unwrap_or_default().iter().copied()),
            );

        for (x, y) in vertices {
            assert!((0.0..=1.0).contains(&x), "x out of range: {x}");
            assert!((0.0..=1.0).contains(&y), "y out of range: {y}");
        }
    }

    #[test]
    fn every_drawable_shape_has_a_polygon() {
        for id in 0..16 {
            assert!(RingShape::from_id(id).vertices().len() >= 3);
        }
        for id in 1..8 {
            let shape = CenterShape::from_id(id);
            assert!(shape.vertices().is_some_and(|pts| pts.len() >= 3));
        }
    }
}
