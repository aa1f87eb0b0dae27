//! Image payloads exchanged with the generation service.

use crate::ad::{AspectRatio, ImageSize, ModelType, Variation};
use crate::error::{AdGenError, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// MIME type assumed when neither a data URL header nor magic bytes tell us.
const FALLBACK_MIME: &str = "image/jpeg";

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG format (lossless).
    Png,
    /// JPEG format (lossy).
    #[default]
    Jpeg,
    /// WebP format.
    WebP,
}

impl ImageFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// Maps a MIME type onto a format.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.trim().to_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Detects image format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 12 {
            return None;
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // WebP: RIFF....WEBP
        if data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }

        None
    }
}

/// Decoded image bytes plus their MIME type.
///
/// Product and reference images travel as data URLs
/// (`data:image/png;base64,...`); this is their binary form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
}

impl ImageData {
    /// Wraps raw bytes, sniffing the MIME type from magic bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let mime_type = ImageFormat::from_magic_bytes(&bytes)
            .map(|f| f.mime_type())
            .unwrap_or(FALLBACK_MIME)
            .to_string();
        Self { bytes, mime_type }
    }

    /// Parses a `data:<mime>;base64,<payload>` URL.
    ///
    /// A bare base64 string is accepted too; its MIME type is then sniffed.
    pub fn from_data_url(input: &str) -> Result<Self> {
        let input = input.trim();
        let (header, payload) = match input.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest
                    .split_once(',')
                    .ok_or_else(|| AdGenError::Decode("data URL has no payload".into()))?;
                (Some(header), payload)
            }
            None => (None, input),
        };

        if let Some(header) = header {
            if !header.ends_with(";base64") {
                return Err(AdGenError::Decode(
                    "only base64-encoded data URLs are supported".into(),
                ));
            }
        }

        if payload.is_empty() {
            return Err(AdGenError::Decode("image payload is empty".into()));
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| AdGenError::Decode(e.to_string()))?;

        let declared = header
            .map(|h| h.trim_end_matches(";base64"))
            .filter(|mime| mime.starts_with("image/"));

        Ok(match declared {
            Some(mime) => Self {
                bytes,
                mime_type: mime.to_string(),
            },
            None => Self::from_bytes(bytes),
        })
    }

    /// Reads an image file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(AdGenError::InvalidRequest("image file is empty".into()));
        }
        Ok(Self::from_bytes(bytes))
    }

    /// Encodes the image data as base64.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Returns the image as a data URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

/// Everything the image service needs for one variation.
#[derive(Debug, Clone)]
pub struct VariationRequest {
    /// Which of the three attempts this is.
    pub variation: Variation,
    /// Final instruction text.
    pub prompt: String,
    /// Product image (always the first input).
    pub product: ImageData,
    /// Optional style reference image (second input).
    pub reference: Option<ImageData>,
    /// Target aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Backend model.
    pub model: ModelType,
    /// Resolution hint (premium model only).
    pub image_size: Option<ImageSize>,
}

/// A generated ad image.
#[derive(Debug, Clone)]
#[must_use = "generated image should be saved or processed"]
pub struct GeneratedImage {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// Image format.
    pub format: ImageFormat,
    /// Variation that produced this image.
    pub variation: Variation,
    /// Model identifier used.
    pub model: String,
    /// Generation duration in milliseconds.
    pub duration_ms: Option<u64>,
}

impl GeneratedImage {
    /// Returns the size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Saves the image to the specified path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }

    /// File name used when saving, e.g. `ad-genius-generated-2.png`.
    pub fn default_file_name(&self) -> String {
        format!(
            "ad-genius-generated-{}.{}",
            self.variation.number(),
            self.format.extension()
        )
    }

    /// Encodes the image data as base64.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }

    /// Returns the image as a data URL.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            self.to_base64()
        )
    }
}
