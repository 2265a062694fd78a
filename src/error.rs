//! Error types for identicon rendering.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering an identicon.
///
/// A missing or too-short hash is never an error: decoding falls back to
/// [`DEFAULT_HASH`](crate::DEFAULT_HASH) and still produces an image. The
/// pipeline can only fail when a pixel buffer cannot be allocated or when the
/// final PNG encoding fails.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A sprite or canvas buffer could not be allocated.
    #[error("failed to allocate a {width}x{height} pixel buffer")]
    Allocation {
        /// Requested buffer width in pixels.
        width: u32,
        /// Requested buffer height in pixels.
        height: u32,
    },

    /// The composed image could not be encoded as PNG.
    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_error_reports_dimensions() {
        let err = RenderError::Allocation {
            width: 128,
            height: 384,
        };
        assert_eq!(err.to_string(), "failed to allocate a 128x384 pixel buffer");
    }
}
