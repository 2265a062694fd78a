//! identicon-renderer: deterministic avatar image generation
//!
//! This crate renders an identicon: a small square image derived entirely
//! from a hash string, usable as a stand-in avatar. The hash picks three
//! shapes from a fixed catalog along with their colors and rotations; the
//! shapes are composed into a 3×3 grid whose corner and side tiles are
//! quarter-turn copies of one another, then resized and encoded as PNG. The
//! same input always produces byte-identical output.
//!
//! # Example
//!
//! ```
//! use identicon_renderer::{RenderOptions, render};
//!
//! let icon = render(
//!     "098f6bcd4621d373cade4e832627b4f6",
//!     &RenderOptions::new().with_size(160),
//! )
//! .unwrap();
//!
//! assert_eq!(icon.content_type(), "image/png");
//! assert!(!icon.is_empty());
//! ```
//!
//! # Serializable Requests
//!
//! For handing render inputs across a process or service boundary, use
//! [`RenderRequest`]:
//!
//! ```
//! use identicon_renderer::RenderRequest;
//!
//! let request = RenderRequest::from_json(r#"{"hash":"no-hash-this-short","size":40}"#).unwrap();
//! let icon = request.render().unwrap();
//! ```

mod color;
mod compose;
mod error;
mod finish;
mod params;
mod renderer;
mod request;
mod shape;
mod sprite;

pub use color::Rgb;
pub use error::{RenderError, Result};
pub use params::{CenterSpec, DEFAULT_HASH, ImageParams, MIN_HASH_LEN, RingSpec};
pub use renderer::{CONTENT_TYPE, DEFAULT_SIZE, EncodedIcon, RenderOptions, render};
pub use request::RenderRequest;
pub use shape::{CenterShape, RingShape, UnitPoint};
pub use sprite::SPRITE_SIZE;
