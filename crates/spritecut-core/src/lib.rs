//! spritecut core - Basic data structures for sprite partitioning
//!
//! This crate provides the fundamental data structures used throughout
//! the spritecut workspace:
//!
//! - [`Point`] - Integer image coordinate, usable as a map key
//! - [`Rect`] - Half-open axis-aligned rectangle
//! - [`PointSet`] - Sparse set of colored points (transparent pixels excluded)
//! - [`Raster`] - Dense RGBA pixel grid exchanged with the codecs

pub mod error;
pub mod point;
pub mod pointset;
pub mod raster;
pub mod rect;

pub use error::{Error, Result};
pub use point::Point;
pub use pointset::PointSet;
pub use raster::Raster;
pub use rect::Rect;

/// Color channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
/// A pixel whose four channels are all zero is fully transparent and is
/// never stored in a [`PointSet`].
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// The fully transparent pixel value.
    pub const TRANSPARENT: u32 = 0;

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// True when all four channels are zero.
    #[inline]
    pub fn is_transparent(pixel: u32) -> bool {
        pixel == TRANSPARENT
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (
            ((pixel >> RED_SHIFT) & 0xff) as u8,
            ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            ((pixel >> BLUE_SHIFT) & 0xff) as u8,
            alpha(pixel),
        )
    }

    /// Convert a CMYK sample to an opaque RGBA pixel.
    ///
    /// Inputs are the plain (non-inverted) ink amounts.
    pub fn cmyk_to_rgba(c: u8, m: u8, y: u8, k: u8) -> u32 {
        let scale = |ink: u8| -> u8 {
            let v = (255 - ink as u32) * (255 - k as u32) / 255;
            v as u8
        };
        compose_rgb(scale(c), scale(m), scale(y))
    }

}
