//! PNG image format support
//!
//! Every PNG flavor is decoded to 8-bit RGBA: palettes, low bit depths and
//! `tRNS` chunks are expanded by the decoder, and 16-bit channels keep their
//! high byte. Images are always written as 8-bit RGBA.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use spritecut_core::{Raster, color};
use std::io::{BufRead, Seek, Write};

/// Pack one decoded sample into a pixel, folding every zero-alpha pixel
/// into the canonical transparent value.
#[inline]
fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    if a == 0 {
        color::TRANSPARENT
    } else {
        color::compose_rgba(r, g, b, a)
    }
}

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData("empty image".to_string()));
    }

    let channels = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = if output_info.bit_depth == BitDepth::Sixteen {
        2
    } else {
        1
    };
    let stride = channels * bytes_per_sample;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..(y + 1) * bytes_per_row];
        for x in 0..width as usize {
            let px = &row[x * stride..(x + 1) * stride];
            // Big-endian 16-bit samples keep their high byte at offset 0
            let sample = |i: usize| px[i * bytes_per_sample];
            let pixel = match channels {
                1 => pack(sample(0), sample(0), sample(0), 255),
                2 => pack(sample(0), sample(0), sample(0), sample(1)),
                3 => pack(sample(0), sample(1), sample(2), 255),
                _ => pack(sample(0), sample(1), sample(2), sample(3)),
            };
            pixels.push(pixel);
        }
    }

    Ok(Raster::from_pixels(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(raster.pixels().len() * 4);
    for &pixel in raster.pixels() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
