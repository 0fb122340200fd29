//! Raw dump and PNG exporters.
//!
//! Two independent consumers of extracted device memory:
//! 1. **Raw dump:** The unconverted bytes written verbatim in one pass, no header.
//!    Exact byte-count fidelity is the only contract.
//! 2. **PNG:** 8-bit-per-channel RGB, no interlacing; the header is written first,
//!    then `height` rows are streamed, each row converted from packed RGB332 on
//!    the fly.
//!
//! Every failure here is fatal to the caller: a broken output path or encoder is
//! a broken environment, not a runtime condition worth recovering from.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::HarnessError;
use crate::frame::Framebuffer;
use crate::frame::pixel::expand_rgb332;

/// Writes `bytes` verbatim to `path`.
///
/// # Errors
///
/// [`HarnessError::CreateOutput`] if the file cannot be created,
/// [`HarnessError::WriteOutput`] if the write fails.
pub fn write_raw(path: &Path, bytes: &[u8]) -> Result<(), HarnessError> {
    let mut file = File::create(path).map_err(|source| HarnessError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(bytes)
        .map_err(|source| HarnessError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), len = bytes.len(), "raw dump written");
    Ok(())
}

/// Encodes the framebuffer as an RGB PNG at `path`.
///
/// Streams one converted row at a time rather than materializing the full
/// 3-bytes-per-pixel image.
///
/// # Errors
///
/// [`HarnessError::CreateOutput`] if the file cannot be created,
/// [`HarnessError::PngEncode`] if encoder setup or encoding fails,
/// [`HarnessError::WriteOutput`] if a row write fails.
pub fn write_png(path: &Path, fb: &Framebuffer) -> Result<(), HarnessError> {
    let geometry = fb.geometry();
    let file = File::create(path).map_err(|source| HarnessError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), geometry.width, geometry.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    let mut stream = writer.stream_writer()?;

    let mut row = vec![0u8; geometry.width as usize * 3];
    for src in fb.rows() {
        for (byte, rgb) in src.iter().zip(row.chunks_exact_mut(3)) {
            rgb.copy_from_slice(&expand_rgb332(*byte));
        }
        stream
            .write_all(&row)
            .map_err(|source| HarnessError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
    }
    stream.finish()?;
    debug!(path = %path.display(), width = geometry.width, height = geometry.height, "PNG written");
    Ok(())
}
