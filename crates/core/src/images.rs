//! Validation of uploaded show images.
//!
//! The payload is sniffed from its magic bytes (the filename and declared
//! content type are never trusted) and then fully decoded, so truncated or
//! corrupt files are rejected as well as non-images.

use image::ImageFormat;

use crate::error::CoreError;

/// Raster formats accepted for show images.
pub const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Message returned for anything that is not a decodable image.
const INVALID_IMAGE_MESSAGE: &str =
    "Upload a valid image. The file you uploaded was either not an image or a corrupted image.";

/// An upload that decoded successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedImage {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl ValidatedImage {
    /// File extension used when storing the image.
    pub fn extension(&self) -> &'static str {
        match self.format {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
            _ => "png",
        }
    }
}

/// Validate that `data` is a complete image in one of [`ACCEPTED_FORMATS`].
pub fn validate_image(data: &[u8]) -> Result<ValidatedImage, CoreError> {
    if data.is_empty() {
        return Err(CoreError::Validation("The submitted file is empty.".into()));
    }

    let format = image::guess_format(data)
        .map_err(|_| CoreError::Validation(INVALID_IMAGE_MESSAGE.into()))?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(CoreError::Validation(format!(
            "Unsupported image format {format:?}. Supported: PNG, JPEG, GIF, WebP"
        )));
    }

    let decoded = image::load_from_memory_with_format(data, format)
        .map_err(|_| CoreError::Validation(INVALID_IMAGE_MESSAGE.into()))?;

    Ok(ValidatedImage {
        format,
        width: decoded.width(),
        height: decoded.height(),
    })
}
