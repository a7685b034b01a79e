//! Image format detection
//!
//! Input files are identified by the magic numbers in their header, output
//! files by their extension.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
}

/// Image formats understood by the codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Canonical file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// Look up a format by extension (case-insensitive, leading dot optional)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Pick the output format from a file name
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] for unknown or missing extensions.
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| {
                IoError::UnsupportedFormat(format!("no encoder for '{}'", path.display()))
            })
    }
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 3 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    // Check PNG (needs 8 bytes)
    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}
