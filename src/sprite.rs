//! Sprite rendering: one catalog shape drawn into one square tile.
//!
//! Sprites are rasterized with tiny_skia at a fixed size and converted to
//! [`RgbaImage`] buffers for the compositor. The requested output size never
//! reaches this module; scaling happens once, after compositing.

use image::{Rgba, RgbaImage, imageops};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

use crate::color::Rgb;
use crate::error::{RenderError, Result};
use crate::params::{ImageParams, RingSpec};
use crate::shape::UnitPoint;

// ============================================================================
// Sprite Rendering
// ============================================================================

/// Edge length of every sprite tile in pixels.
///
/// Independent of the requested output size, so rotation and compositing
/// always run on the same geometry.
pub const SPRITE_SIZE: u32 = 128;

/// Renders one ring sprite (corner or side).
///
/// The tile is filled white, the selected shape is drawn in the ring color,
/// then the decoded rotation is applied as quarter-turns.
pub fn render_ring_sprite(ring: &RingSpec) -> Result<RgbaImage> {
    let mut pixmap = filled_sprite(Rgb::WHITE)?;
    draw_polygon(&mut pixmap, ring.shape.vertices(), ring.color);
    Ok(rotate_sprite(pixmap_to_rgba(&pixmap), ring.rotation))
}

/// Renders the center sprite.
///
/// The foreground is always the corner color; the background follows
/// [`ImageParams::center_background`]. A blank center shape leaves the
/// background untouched. The center tile is never rotated.
pub fn render_center_sprite(params: &ImageParams) -> Result<RgbaImage> {
    let mut pixmap = filled_sprite(params.center_background())?;
    if let Some(vertices) = params.center.shape.vertices() {
        draw_polygon(&mut pixmap, vertices, params.corner.color);
    }
    Ok(pixmap_to_rgba(&pixmap))
}

/// Applies `turns` quarter-turn clockwise rotations, each producing a fresh
/// buffer and discarding the previous one.
pub fn rotate_sprite(sprite: RgbaImage, turns: u8) -> RgbaImage {
    let mut sprite = sprite;
    for _ in 0..turns {
        sprite = imageops::rotate90(&sprite);
    }
    sprite
}

// ============================================================================
// Rasterization
// ============================================================================

/// Allocates a sprite pixmap pre-filled with `background`.
fn filled_sprite(background: Rgb) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(SPRITE_SIZE, SPRITE_SIZE).ok_or(RenderError::Allocation {
        width: SPRITE_SIZE,
        height: SPRITE_SIZE,
    })?;
    pixmap.fill(Color::from_rgba8(
        background.red,
        background.green,
        background.blue,
        0xff,
    ));
    Ok(pixmap)
}

/// Draws one catalog polygon scaled to the sprite size.
///
/// Catalog outlines may self-intersect; the even-odd rule keeps their
/// cut-outs open instead of flooding them.
fn draw_polygon(pixmap: &mut Pixmap, vertices: &[UnitPoint], color: Rgb) {
    let Some(path) = polygon_path(vertices, SPRITE_SIZE) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, 0xff);
    paint.anti_alias = true;

    pixmap.fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);
}

/// Builds a closed path from unit-square vertices scaled by `size`.
fn polygon_path(vertices: &[UnitPoint], size: u32) -> Option<Path> {
    let (&(x0, y0), rest) = vertices.split_first()?;
    let size = size as f32;

    let mut pb = PathBuilder::new();
    pb.move_to(x0 * size, y0 * size);
    for &(x, y) in rest {
        pb.line_to(x * size, y * size);
    }
    pb.close();
    pb.finish()
}

// ============================================================================
// Pixmap Conversion
// ============================================================================

/// Converts a tiny_skia pixmap into an [`RgbaImage`].
fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    // Both buffers are row-major with matching dimensions.
    for (src, dst) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        // tiny_skia uses premultiplied alpha, we need to unpremultiply
        let (r, g, b, a) = unpremultiply(src.red(), src.green(), src.blue(), src.alpha());
        *dst = Rgba([r, g, b, a]);
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
