//! Identicon rendering entry point.

use crate::compose::compose;
use crate::error::Result;
use crate::finish::finish;
use crate::params::ImageParams;
use crate::sprite::{SPRITE_SIZE, render_center_sprite, render_ring_sprite};

/// Output dimension used when the caller does not request one.
pub const DEFAULT_SIZE: u32 = 80;

/// MIME type of every rendered image.
pub const CONTENT_TYPE: &str = "image/png";

/// Output options for [`render`].
///
/// # Example
///
/// ```
/// use identicon_renderer::RenderOptions;
///
/// let options = RenderOptions::new().with_size(160).with_transparent(true);
/// assert_eq!(options.size, 160);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Square output size in pixels. Zero means [`DEFAULT_SIZE`].
    pub size: u32,

    /// Keys out the white background when set.
    pub transparent: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            transparent: false,
        }
    }
}

impl RenderOptions {
    /// Creates the default options: 80×80, opaque.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets background transparency.
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}

/// An encoded identicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedIcon {
    bytes: Vec<u8>,
}

impl EncodedIcon {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The encoded image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the icon, returning the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of encoded bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when no bytes were produced.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type to serve alongside [`bytes`](Self::bytes).
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}

/// Renders the identicon for `hash`.
///
/// The hash is decoded into shape parameters, the corner, side, and center
/// sprites are rendered and composed into the 3×3 ring canvas, and the
/// result is resized to the requested square size and encoded as PNG.
///
/// Output is a pure function of `(hash, options)`: repeated calls return
/// byte-identical results, and no state is shared between calls, so renders
/// may run concurrently on any number of threads. Hashes shorter than
/// [`MIN_HASH_LEN`](crate::MIN_HASH_LEN) bytes render the
/// [`DEFAULT_HASH`](crate::DEFAULT_HASH) identicon instead of failing.
///
/// # Example
///
/// ```
/// use identicon_renderer::{RenderOptions, render};
///
/// let icon = render("098f6bcd4621d373cade4e832627b4f6", &RenderOptions::new()).unwrap();
/// assert_eq!(icon.content_type(), "image/png");
/// assert!(!icon.is_empty());
/// ```
pub fn render(hash: &str, options: &RenderOptions) -> Result<EncodedIcon> {
    let params = ImageParams::from_hash(hash);

    let corner = render_ring_sprite(&params.corner)?;
    let side = render_ring_sprite(&params.side)?;
    let center = render_center_sprite(&params)?;

    let canvas = compose(corner, side, center, SPRITE_SIZE);

    let size = if options.size == 0 {
        DEFAULT_SIZE
    } else {
        options.size
    };

    let bytes = finish(canvas, size, size, options.transparent)?;
    Ok(EncodedIcon::new(bytes))
}
