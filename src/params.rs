//! Hash decoding into shape, rotation, and color parameters.
//!
//! A hash is consumed as raw bytes: the first six select shapes, rotations,
//! and the center background rule, the next twelve form two RGB colors as
//! hex-style pairs. Anything past byte 17 is ignored.

use crate::color::Rgb;
use crate::shape::{CenterShape, RingShape};

/// Fallback hash rendered when the input is missing or shorter than
/// [`MIN_HASH_LEN`] bytes.
pub const DEFAULT_HASH: &str = "098f6bcd4621d373cade4e832627b4f6";

/// Minimum number of bytes a hash must supply to be used as-is.
pub const MIN_HASH_LEN: usize = 20;

/// Shape, rotation, and color for one ring region (corner or side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSpec {
    /// Catalog entry to draw.
    pub shape: RingShape,
    /// Quarter-turns applied to the rendered sprite, 0-3.
    pub rotation: u8,
    /// Foreground color of the shape.
    pub color: Rgb,
}

/// Shape selection and background rule for the center tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterSpec {
    /// Catalog entry to draw; [`CenterShape::Blank`] draws nothing.
    pub shape: CenterShape,
    /// Allows the side color as the center background, provided the corner
    /// and side colors are far enough apart.
    pub side_background: bool,
}

/// Complete parameter set decoded from one hash.
///
/// Derived once per render and immutable afterwards; nothing here is shared
/// between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageParams {
    pub corner: RingSpec,
    pub side: RingSpec,
    pub center: CenterSpec,
}

impl ImageParams {
    /// Decodes `hash` into render parameters.
    ///
    /// Hashes shorter than [`MIN_HASH_LEN`] bytes, the empty string included,
    /// are replaced by [`DEFAULT_HASH`] before decoding, so this always
    /// succeeds and always yields the same parameters for the same input.
    pub fn from_hash(hash: &str) -> Self {
        let hash = if hash.len() < MIN_HASH_LEN {
            DEFAULT_HASH
        } else {
            hash
        };
        let b = hash.as_bytes();

        Self {
            corner: RingSpec {
                shape: RingShape::from_id(decode_single(b[0])),
                rotation: (decode_single(b[3]) & 3) as u8,
                color: Rgb::new(channel(b[6], b[7]), channel(b[8], b[9]), channel(b[10], b[11])),
            },
            side: RingSpec {
                shape: RingShape::from_id(decode_single(b[1])),
                rotation: (decode_single(b[4]) & 3) as u8,
                color: Rgb::new(
                    channel(b[12], b[13]),
                    channel(b[14], b[15]),
                    channel(b[16], b[17]),
                ),
            },
            center: CenterSpec {
                shape: CenterShape::from_id(decode_single(b[2])),
                side_background: decode_single(b[5]) % 2 != 0,
            },
        }
    }

    /// The background color for the center tile.
    ///
    /// White, unless the side-background flag is set and the corner and side
    /// colors differ by more than 127 on at least one channel; then the side
    /// color takes over so the center glyph keeps contrast against its
    /// surroundings.
    pub fn center_background(&self) -> Rgb {
        if self.center.side_background
            && self.corner.color.channel_distance_exceeds(self.side.color, 127)
        {
            self.side.color
        } else {
            Rgb::WHITE
        }
    }
}

/// Decodes one hash byte.
///
/// Digits map to 0-9 and letters of either case to 10-35. Any other byte
/// keeps its raw value rather than being rejected, so single-character fields
/// can exceed 15 before their masks apply; decoders of this image format have
/// always been permissive and stable output for arbitrary input is part of
/// the contract.
fn decode_single(byte: u8) -> u32 {
    match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'A'..=b'Z' => (byte - b'A') as u32 + 10,
        b'a'..=b'z' => (byte - b'a') as u32 + 10,
        other => other as u32,
    }
}

/// Decodes a two-byte pair as a base-16 value.
fn decode_pair(first: u8, second: u8) -> u32 {
    decode_single(first) * 16 + decode_single(second)
}

/// Decodes a color channel pair, keeping the low byte when out-of-range
/// characters push the value past 255.
fn channel(first: u8, second: u8) -> u8 {
    decode_pair(first, second) as u8
}
