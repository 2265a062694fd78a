//! Serializable render request for cross-process communication.
//!
//! A [`RenderRequest`] captures the three render inputs in a format that can
//! be serialized to JSON and handed across the boundary between an HTTP
//! front end and the renderer. Every field has a default, so the empty
//! object `{}` is a valid request for the default identicon.
//!
//! The historical wire format used single-letter query parameters; those
//! names are accepted as aliases:
//!
//! ```json
//! { "hash": "098f6bcd4621d373cade4e832627b4f6", "size": 160, "transparent": true }
//! { "u": "098f6bcd4621d373cade4e832627b4f6", "s": 160, "t": true }
//! ```
//!
//! # Example
//!
//! ```
//! use identicon_renderer::RenderRequest;
//!
//! let request = RenderRequest::new()
//!     .with_hash("098f6bcd4621d373cade4e832627b4f6")
//!     .with_size(64);
//!
//! let json = request.to_json().unwrap();
//! let restored = RenderRequest::from_json(&json).unwrap();
//! let icon = restored.render().unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::renderer::{EncodedIcon, RenderOptions, render};

// ============================================================================
// RenderRequest
// ============================================================================

/// A complete render request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// Hash to render. Absent or shorter than
    /// [`MIN_HASH_LEN`](crate::MIN_HASH_LEN) bytes falls back to
    /// [`DEFAULT_HASH`](crate::DEFAULT_HASH).
    #[serde(default, alias = "u", skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Requested square size; zero or absent means
    /// [`DEFAULT_SIZE`](crate::DEFAULT_SIZE).
    #[serde(default, alias = "s")]
    pub size: u32,

    /// Background transparency.
    #[serde(default, alias = "t")]
    pub transparent: bool,
}

impl RenderRequest {
    /// Creates an empty request: default identicon, default size, opaque.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hash.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Sets the output size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Requests background transparency.
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Renders this request.
    pub fn render(&self) -> Result<EncodedIcon, RenderError> {
        let options = RenderOptions {
            size: self.size,
            transparent: self.transparent,
        };
        render(self.hash.as_deref().unwrap_or(""), &options)
    }
}

// ============================================================================
// JSON Helpers
// ============================================================================

impl RenderRequest {
    /// Serializes the request to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_HASH;

    #[test]
    fn request_serialization_roundtrip() {
        let request = RenderRequest::new()
            .with_hash(DEFAULT_HASH)
            .with_size(160)
            .with_transparent(true);

        let json = request.to_json().unwrap();
        let restored = RenderRequest::from_json(&json).unwrap();
        assert_eq!(restored, request);
    }

    #[test]
    fn empty_object_is_a_valid_request() {
        let request = RenderRequest::from_json("{}").unwrap();
        assert!(request.hash.is_none());
        assert_eq!(request.size, 0);
        assert!(!request.transparent);
    }

    #[test]
    fn absent_hash_is_not_serialized() {
        let json = RenderRequest::new().with_size(32).to_json().unwrap();
        assert!(!json.contains("hash"));
        assert!(json.contains("\"size\":32"));
    }

    #[test]
    fn legacy_single_letter_names_are_accepted() {
        let request =
            RenderRequest::from_json(r#"{"u":"098f6bcd4621d373cade4e832627b4f6","s":64,"t":true}"#)
                .unwrap();
        assert_eq!(request.hash.as_deref(), Some(DEFAULT_HASH));
        assert_eq!(request.size, 64);
        assert!(request.transparent);
    }

    #[test]
    fn request_render_matches_direct_render() {
        let request = RenderRequest::new().with_hash(DEFAULT_HASH).with_size(48);
        let direct = render(DEFAULT_HASH, &RenderOptions::new().with_size(48)).unwrap();
        assert_eq!(request.render().unwrap(), direct);
    }

    #[test]
    fn missing_hash_renders_the_fallback() {
        let request = RenderRequest::from_json("{}").unwrap();
        let icon = request.render().unwrap();
        let default = render(DEFAULT_HASH, &RenderOptions::new()).unwrap();
        assert_eq!(icon, default);
    }
}
