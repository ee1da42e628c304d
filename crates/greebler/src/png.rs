//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same pixels always encode to
//! the same bytes.

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl PngError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            PngError::Io(_) => "PNG_001",
            PngError::Encoding(_) => "PNG_002",
            PngError::InvalidDimensions(_) => "PNG_003",
        }
    }
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smaller files, slower encode.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Faster encode, larger files.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA8 pixel buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    data: &[u8],
    width: u32,
    height: u32,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let expected = width as usize * height as usize * 4;
    if data.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} bytes for {}x{} RGBA, got {}",
            expected,
            width,
            height,
            data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;

    Ok(())
}

/// Write an RGBA8 pixel buffer to a PNG file.
pub fn write_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgba_to_writer(data, width, height, writer, config)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a Vec<u8> and return it with its hash.
pub fn write_rgba_to_vec_with_hash(
    data: &[u8],
    width: u32,
    height: u32,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut encoded = Vec::new();
    write_rgba_to_writer(data, width, height, &mut encoded, config)?;
    let hash = hash_png(&encoded);
    Ok((encoded, hash))
}
