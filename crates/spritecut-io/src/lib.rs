//! spritecut-io - Image and index I/O for spritecut
//!
//! Reads sprite sheets into [`PointSet`]s, writes partitioned regions back
//! out as standalone images, and handles the JSON placement and position
//! index files used by the batch tool.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | yes   | `jpeg`       |

pub mod error;
pub mod format;
pub mod index;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use index::{PositionIndex, index_file_name, load_placements, parse_placements, save_index};

use spritecut_core::{PointSet, Raster};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image file into a raster, detecting the format from its header
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    match detect_format(path)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(BufReader::new(File::open(path)?)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(BufReader::new(File::open(path)?)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Decode an in-memory image
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write a raster to a file in the given format
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(raster, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode a raster into memory
pub fn write_image_mem(raster: &Raster, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(raster, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_to<W: Write>(raster: &Raster, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(raster, writer, jpeg::DEFAULT_QUALITY),
        #[allow(unreachable_patterns)]
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                other
            )))
        }
    }
}

/// Load the visible pixels of an image as a point set
///
/// Pixel `(x, y)` of the image becomes point `(x, y)`; fully transparent
/// pixels are dropped.
pub fn read_points<P: AsRef<Path>>(path: P) -> IoResult<PointSet> {
    let path = path.as_ref();
    let raster = read_image(path)?;
    let points = PointSet::from_raster(&raster);
    tracing::debug!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        points = points.len(),
        "loaded image points"
    );
    Ok(points)
}

/// Write a region as a standalone image cropped to its boundary
///
/// The format is chosen from the file extension.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] for an empty region.
pub fn write_region<P: AsRef<Path>>(region: &PointSet, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    if region.is_empty() {
        return Err(IoError::InvalidData(format!(
            "empty region for '{}'",
            path.display()
        )));
    }
    let (raster, _origin) = region.to_raster()?;
    write_image(&raster, path, format)
}
