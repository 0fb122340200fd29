//! Fatal error taxonomy for the harness.
//!
//! This module defines the error handling for the simulation harness. It provides:
//! 1. **Configuration Errors:** Geometry mismatches and out-of-bounds memory regions,
//!    caught at startup before any output file is opened.
//! 2. **I/O Errors:** File creation, trace, and output write failures, each kept as a
//!    distinct kind so callers (and tests) can tell them apart.
//! 3. **Run Errors:** The condition-never-met outcome of a capped conditional run.
//!
//! There are no recoverable runtime errors in this domain: a device evaluation is
//! total, and every variant below is a one-shot abort from the caller's view.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal harness error.
///
/// The binary maps any of these to a diagnostic on stderr followed by a non-zero
/// exit; the library itself never retries.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A configured memory region does not fit inside the device's memory.
    #[error("memory region {base:#x}+{len} is out of bounds for a {mem_len}-byte device memory")]
    RegionOutOfBounds {
        /// Region base offset in bytes.
        base: usize,
        /// Region length in bytes.
        len: usize,
        /// Total device memory size in bytes.
        mem_len: usize,
    },

    /// Extracted byte count does not match the configured frame geometry.
    #[error("framebuffer geometry mismatch: {len} bytes extracted, {width}x{height} requires {expected}")]
    GeometryMismatch {
        /// Number of bytes actually extracted.
        len: usize,
        /// Configured frame width in pixels.
        width: u32,
        /// Configured frame height in pixels.
        height: u32,
        /// Required byte count (`width * height`).
        expected: usize,
    },

    /// An output or trace file could not be created.
    #[error("could not create output file {}: {source}", .path.display())]
    CreateOutput {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A write to an already-open output file failed.
    #[error("could not write output file {}: {source}", .path.display())]
    WriteOutput {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing to the waveform trace failed.
    #[error("trace write failed: {0}")]
    Trace(#[source] io::Error),

    /// The PNG encoder could not be initialized or failed mid-stream.
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),

    /// A condition-terminated run exhausted its safety bound.
    #[error("stop condition not met within {max_cycles} cycles")]
    ConditionNeverMet {
        /// The configured maximum number of full cycles.
        max_cycles: u64,
    },

    /// The configuration file could not be read.
    #[error("could not read config {}: {source}", .path.display())]
    ReadConfig {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not valid JSON for the config schema.
    #[error("invalid config {}: {source}", .path.display())]
    ParseConfig {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}
