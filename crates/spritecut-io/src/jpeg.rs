//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. JPEG has no alpha channel: decoded pixels are opaque,
//! and on write every pixel is premultiplied by its alpha, so transparent
//! areas come out black.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use spritecut_core::{Raster, color};
use std::io::{Read, Write};

/// Quality used for every JPEG written by spritecut
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// Grayscale (8 and 16 bit), RGB and CMYK images are decoded to opaque
/// 32-bit pixels.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData("empty image".to_string()));
    }

    let pixels: Vec<u32> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&v| color::compose_rgb(v, v, v)).collect(),
        // Big-endian samples; keep the high byte
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|s| color::compose_rgb(s[0], s[0], s[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|s| color::compose_rgb(s[0], s[1], s[2]))
            .collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|s| color::cmyk_to_rgba(s[0], s[1], s[2], s[3]))
            .collect(),
    };

    Ok(Raster::from_pixels(width, height, pixels)?)
}

/// Write a raster as an RGB JPEG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if a dimension exceeds the 65535-pixel
/// JPEG limit or the encoder fails.
pub fn write_jpeg<W: Write>(raster: &Raster, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(raster.width()).map_err(|_| {
        IoError::EncodeError(format!("JPEG width {} too large", raster.width()))
    })?;
    let height = u16::try_from(raster.height()).map_err(|_| {
        IoError::EncodeError(format!("JPEG height {} too large", raster.height()))
    })?;

    let mut data = Vec::with_capacity(raster.pixels().len() * 3);
    for &pixel in raster.pixels() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        let premultiply = |c: u8| ((c as u32 * a as u32 + 127) / 255) as u8;
        data.extend_from_slice(&[premultiply(r), premultiply(g), premultiply(b)]);
    }

    let encoder = Encoder::new(writer, quality);
    encoder
        .encode(&data, width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}
