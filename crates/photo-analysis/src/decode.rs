use crate::analyzer::analyze_pixels;
use crate::error::AnalysisResult;
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;
use story_metadata::PhotoSummary;
use tracing::debug;

/// Decoded RGBA pixel data, row-major.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode an uploaded image (any format the `image` crate can sniff) into
/// an RGBA buffer.
pub fn decode_image(bytes: &[u8]) -> AnalysisResult<PixelBuffer> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;
    let rgba = image.to_rgba8();
    debug!(width = rgba.width(), height = rgba.height(), "decoded image");
    Ok(PixelBuffer {
        width: rgba.width(),
        height: rgba.height(),
        data: rgba.into_raw(),
    })
}

pub fn open_image(file_path: impl AsRef<Path>) -> AnalysisResult<PixelBuffer> {
    let image = ImageReader::open(file_path.as_ref())?
        .with_guessed_format()?
        .decode()?;
    let rgba = image.to_rgba8();
    Ok(PixelBuffer {
        width: rgba.width(),
        height: rgba.height(),
        data: rgba.into_raw(),
    })
}

/// Decode-then-analyze front door for callers holding encoded bytes.
pub fn analyze_image_bytes(bytes: &[u8]) -> AnalysisResult<PhotoSummary> {
    let buffer = decode_image(bytes)?;
    Ok(analyze_pixels(&buffer.data, buffer.width, buffer.height))
}
