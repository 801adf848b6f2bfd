//! The image being annotated.
//!
//! The editor never decodes pixels. It keeps the encoded bytes for the
//! detection request, the natural pixel size reported by the host's decoder,
//! and where the image is drawn inside the container.

use crate::types::{Point, Size};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Fallback content type for bytes of unknown format
pub const DEFAULT_MIME: &str = "application/octet-stream";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageSourceError {
    #[error("not a data URL")]
    NotDataUrl,

    #[error("data URL is not base64 encoded")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// Encoded image bytes plus the metadata the editor needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    pub bytes: Vec<u8>,
    pub mime: String,
    /// Natural (decoded) size in image pixels
    pub natural: Size,
}

impl ImageSource {
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>, natural: Size) -> Self {
        Self {
            bytes,
            mime: mime.into(),
            natural,
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URL as produced by file
    /// readers in browser-style hosts.
    pub fn from_data_url(url: &str, natural: Size) -> Result<Self, ImageSourceError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or(ImageSourceError::NotDataUrl)?;
        let (meta, payload) = rest.split_once(',').ok_or(ImageSourceError::NotDataUrl)?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or(ImageSourceError::NotBase64)?;

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| ImageSourceError::InvalidBase64(e.to_string()))?;

        let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };
        Ok(Self::new(bytes, mime, natural))
    }
}

/// Where and how large the image is drawn inside the container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageLayout {
    /// Rendered size in container units
    pub rendered: Size,
    /// Top-left of the rendered image, container-local
    pub offset: Point,
}

impl ImageLayout {
    pub fn new(rendered: Size, offset: Point) -> Self {
        Self { rendered, offset }
    }

    /// Image drawn at the container origin.
    pub fn at_origin(rendered: Size) -> Self {
        Self::new(rendered, Point::ZERO)
    }
}
