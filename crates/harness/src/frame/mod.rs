//! Framebuffer extraction and geometry.
//!
//! This module implements the post-run half of the pipeline. It provides:
//! 1. **Extraction:** A pure read of a contiguous region of device memory into
//!    host storage, bounds-checked against the device's memory size.
//! 2. **Geometry:** `FrameGeometry` (width x height) and `Framebuffer`, whose
//!    constructor enforces that the extracted length equals the pixel count.
//! 3. **Conversion & Export:** RGB332 expansion ([`pixel`]) and raw/PNG file
//!    writers ([`export`]).

/// Raw dump and PNG exporters.
pub mod export;
/// Packed RGB332 pixel expansion.
pub mod pixel;

use serde::Deserialize;

use crate::device::Device;
use crate::error::HarnessError;

/// Frame dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FrameGeometry {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameGeometry {
    /// Total number of pixels (one packed byte each).
    pub const fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Copies `len` bytes starting at `base` out of the device's memory.
///
/// Performed strictly after the run completes and before `finalize`.
///
/// # Errors
///
/// Returns [`HarnessError::RegionOutOfBounds`] if the region does not fit inside
/// the device memory.
pub fn extract(dut: &dyn Device, base: usize, len: usize) -> Result<Vec<u8>, HarnessError> {
    let mem = dut.memory();
    let region = base
        .checked_add(len)
        .and_then(|end| mem.get(base..end))
        .ok_or(HarnessError::RegionOutOfBounds {
            base,
            len,
            mem_len: mem.len(),
        })?;
    Ok(region.to_vec())
}

/// An extracted frame: geometry plus one packed RGB332 byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    geometry: FrameGeometry,
    data: Vec<u8>,
}

impl Framebuffer {
    /// Wraps extracted bytes, enforcing `data.len() == width * height`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::GeometryMismatch`] on any length mismatch; this is
    /// the startup precondition that keeps the raw and image consumers in
    /// agreement.
    pub fn new(geometry: FrameGeometry, data: Vec<u8>) -> Result<Self, HarnessError> {
        let expected = geometry.pixel_count();
        if data.len() != expected {
            return Err(HarnessError::GeometryMismatch {
                len: data.len(),
                width: geometry.width,
                height: geometry.height,
                expected,
            });
        }
        Ok(Self { geometry, data })
    }

    /// Frame dimensions.
    pub const fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// The packed pixel bytes, row-major.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterates over the frame's rows, `width` packed bytes each.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.geometry.width as usize)
    }
}
