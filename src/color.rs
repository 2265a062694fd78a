//! RGB color values used across the rendering pipeline.

use std::fmt;

use image::Rgba;

/// An opaque RGB color.
///
/// Colors are decoded straight from hash bytes and compared channel by
/// channel; no color-space conversion is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// The canvas background color.
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    /// Creates a color from its channel values.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns true if any channel differs from `other` by more than
    /// `threshold`.
    ///
    /// This drives the center-tile background rule: the side color only
    /// becomes the center background when it contrasts strongly enough with
    /// the corner color.
    pub fn channel_distance_exceeds(&self, other: Rgb, threshold: u8) -> bool {
        self.red.abs_diff(other.red) > threshold
            || self.green.abs_diff(other.green) > threshold
            || self.blue.abs_diff(other.blue) > threshold
    }

    /// Converts to a fully opaque RGBA pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.red, self.green, self.blue, 0xff])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
