//! Compositing sprites into the 3×3 base canvas.
//!
//! The corner sprite occupies the four corner cells and the side sprite the
//! four edge cells. Each successive placement rotates the previous sprite one
//! more quarter-turn, so every ring carries the same shape spun around the
//! center and the four placements stay bit-identical copies of one another
//! under rotation.

use image::{RgbaImage, imageops};

use crate::color::Rgb;
use crate::sprite::rotate_sprite;

/// Grid cells for the corner sprite as `(column, row)`, in placement order:
/// each step is one more quarter-turn than the previous.
const CORNER_CELLS: [(u32, u32); 4] = [(0, 0), (0, 2), (2, 2), (2, 0)];

/// Grid cells for the side sprite, in placement order.
const SIDE_CELLS: [(u32, u32); 4] = [(1, 0), (0, 1), (1, 2), (2, 1)];

/// The composed identicon before resizing and encoding.
///
/// Carries the background color recorded at creation so the finisher can key
/// it out when transparency is requested.
pub struct Canvas {
    /// The composed pixel data, `3 × sprite_size` on each edge.
    pub image: RgbaImage,
    /// Background color the canvas was filled with.
    pub background: Rgb,
}

/// Assembles the base canvas from the three sprites.
///
/// The canvas is pre-filled with white, the corner and side sprites are
/// placed with their rotation loops, and the center sprite lands unrotated in
/// the middle cell. Placements copy pixels directly; sprites never blend
/// across tile boundaries.
pub fn compose(corner: RgbaImage, side: RgbaImage, center: RgbaImage, sprite_size: u32) -> Canvas {
    let background = Rgb::WHITE;
    let edge = sprite_size * 3;
    let mut image = RgbaImage::from_pixel(edge, edge, background.to_rgba());

    place_ring(&mut image, corner, sprite_size, &CORNER_CELLS);
    place_ring(&mut image, side, sprite_size, &SIDE_CELLS);
    imageops::replace(&mut image, &center, sprite_size as i64, sprite_size as i64);

    Canvas { image, background }
}

/// Places a sprite on its four ring cells, rotating one quarter-turn between
/// placements.
fn place_ring(
    base: &mut RgbaImage,
    mut sprite: RgbaImage,
    sprite_size: u32,
    cells: &[(u32, u32); 4],
) {
    place(base, &sprite, sprite_size, cells[0]);
    for &cell in &cells[1..] {
        sprite = rotate_sprite(sprite, 1);
        place(base, &sprite, sprite_size, cell);
    }
}

fn place(base: &mut RgbaImage, sprite: &RgbaImage, sprite_size: u32, (column, row): (u32, u32)) {
    imageops::replace(
        base,
        sprite,
        (column * sprite_size) as i64,
        (row * sprite_size) as i64,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const SPRITE: u32 = 4;

    /// A 4×4 sprite with no rotational symmetry at all.
    fn asymmetric_sprite(seed: u8) -> RgbaImage {
        RgbaImage::from_fn(SPRITE, SPRITE, |x, y| {
            Rgba([seed, x as u8 * 40 + 1, y as u8 * 40 + 2, 255])
        })
    }

    fn tile(canvas: &Canvas, column: u32, row: u32) -> RgbaImage {
        imageops::crop_imm(&canvas.image, column * SPRITE, row * SPRITE, SPRITE, SPRITE).to_image()
    }

    fn composed() -> Canvas {
        compose(
            asymmetric_sprite(10),
            asymmetric_sprite(20),
            asymmetric_sprite(30),
            SPRITE,
        )
    }

    #[test]
    fn canvas_is_three_sprites_wide_and_records_white() {
        let canvas = composed();
        assert_eq!(canvas.image.dimensions(), (SPRITE * 3, SPRITE * 3));
        assert_eq!(canvas.background, Rgb::WHITE);
    }

    #[test]
    fn corner_cells_are_successive_rotations_of_the_first() {
        let canvas = composed();
        let top_left = tile(&canvas, 0, 0);

        assert_eq!(top_left, asymmetric_sprite(10));
        assert_eq!(tile(&canvas, 0, 2), rotate_sprite(top_left.clone(), 1));
        assert_eq!(tile(&canvas, 2, 2), rotate_sprite(top_left.clone(), 2));
        assert_eq!(tile(&canvas, 2, 0), rotate_sprite(top_left, 3));
    }

    #[test]
    fn side_cells_are_successive_rotations_of_the_first() {
        let canvas = composed();
        let top_middle = tile(&canvas, 1, 0);

        assert_eq!(top_middle, asymmetric_sprite(20));
        assert_eq!(tile(&canvas, 0, 1), rotate_sprite(top_middle.clone(), 1));
        assert_eq!(tile(&canvas, 1, 2), rotate_sprite(top_middle.clone(), 2));
        assert_eq!(tile(&canvas, 2, 1), rotate_sprite(top_middle, 3));
    }

    #[test]
    fn center_cell_holds_the_center_sprite_unrotated() {
        let canvas = composed();
        assert_eq!(tile(&canvas, 1, 1), asymmetric_sprite(30));
    }

    #[test]
    fn placements_overwrite_rather_than_blend() {
        // Half-transparent sprites must land verbatim, alpha included.
        let translucent = RgbaImage::from_pixel(SPRITE, SPRITE, Rgba([10, 20, 30, 128]));
        let canvas = compose(
            translucent.clone(),
            translucent.clone(),
            translucent,
            SPRITE,
        );
        assert_eq!(*canvas.image.get_pixel(0, 0), Rgba([10, 20, 30, 128]));
    }
}
