//! Raster - Dense RGBA pixel grid
//!
//! The form an image takes between the codecs and a [`PointSet`].
//! Pixels are packed `0xRRGGBBAA` words stored row-major.
//!
//! [`PointSet`]: crate::PointSet

use crate::color;
use crate::error::{Error, Result};

/// A dense `width x height` grid of packed RGBA pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Raster {
    /// Create a fully transparent raster
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![color::TRANSPARENT; width as usize * height as usize],
        })
    }

    /// Wrap an existing row-major pixel buffer
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or the buffer length does not
    /// equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel data
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a pixel, `None` if out of bounds
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Set a pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if `(x, y)` lies outside the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: u32) -> Result<()> {
        let i = self.index(x, y).ok_or(Error::PixelOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[i] = pixel;
        Ok(())
    }

    /// Get a pixel as its RGBA channels
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }

    /// Set a pixel from RGBA channels
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }

    /// Count pixels that are not fully transparent
    pub fn count_opaque(&self) -> usize {
        self.data
            .iter()
            .filter(|&&p| !color::is_transparent(p))
            .count()
    }
}
