//! Image decode/encode collaborators.
//!
//! All file I/O goes through the [`image`] crate, so every format it can
//! read or write (PNG, JPEG, BMP, TIFF, ...) works here. Decoded sheets are
//! normalised to RGBA8 regardless of the on-disk colour model.

use std::path::Path;

use image::RgbaImage;

use crate::buffer::PixelBuffer;
use crate::error::RetileError;

/// Decode an image file into an RGBA [`PixelBuffer`].
///
/// # Errors
///
/// Returns [`RetileError::Decode`] when the path is unreadable or the file is
/// not a recognisable image.
pub fn decode_sheet<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, RetileError> {
    let path = path.as_ref();
    log::debug!("Decoding sheet: {}", path.display());

    let decoded = image::open(path).map_err(|error| RetileError::Decode {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;

    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Decoded {}x{} sheet", width, height);

    // The image crate guarantees len == width * height * 4 here.
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

/// Encode an RGBA [`PixelBuffer`] to an image file.
///
/// The output format is inferred from the path's extension, as with
/// [`image::DynamicImage::save`].
///
/// # Errors
///
/// Returns [`RetileError::Encode`] on write failure or an unsupported
/// extension. Encode failures are fatal: a run never reports success with a
/// missing or truncated output file.
pub fn encode_sheet<P: AsRef<Path>>(path: P, sheet: &PixelBuffer) -> Result<(), RetileError> {
    let path = path.as_ref();
    log::debug!(
        "Encoding {}x{} sheet to {}",
        sheet.width(),
        sheet.height(),
        path.display(),
    );

    let image = RgbaImage::from_raw(sheet.width(), sheet.height(), sheet.as_bytes().to_vec())
        .ok_or_else(|| RetileError::Encode {
            path: path.to_path_buf(),
            reason: "pixel buffer does not match its declared dimensions".to_string(),
        })?;

    image.save(path).map_err(|error| RetileError::Encode {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })
}
