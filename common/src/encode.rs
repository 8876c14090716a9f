//! Image transport encoding
//!
//! The upload arrives as a browser data URL in whatever format the user
//! picked; the API call always carries a PNG. Helpers here split data
//! URLs, re-encode the raster losslessly to PNG and wrap it back into a
//! data URL for embedding.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::ImageFormat;

use crate::error::{Error, Result};

/// Extract the base64 payload of a data URL.
///
/// # Arguments
/// * `data_url` - a "data:image/jpeg;base64,/9j/4AAQ..." style data URL
///
/// # Returns
/// The base64 payload, or None when the URL has no comma separator
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extract the MIME type of a data URL.
///
/// Returns "image/jpeg" as the default when extraction fails.
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Decode the payload of a data URL into raw image bytes.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = extract_base64_from_data_url(data_url)
        .ok_or_else(|| Error::DataUrl("missing base64 payload".into()))?;
    Ok(STANDARD.decode(payload)?)
}

/// Re-encode any supported raster (JPEG, PNG) to PNG.
///
/// PNG input round-trips losslessly; a corrupt or unsupported upload
/// surfaces here as an image error.
pub fn reencode_png(bytes: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes)?;
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// PNG data URL for transport embedding.
pub fn to_png_data_url(bytes: &[u8]) -> Result<String> {
    let png = reencode_png(bytes)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
