//! Clock-driven simulation harness library.
//!
//! This crate implements a reusable testbench driver for clocked hardware device
//! models with the following:
//! 1. **Device:** A capability trait (ports, evaluate, memory region, finalize) the
//!    harness depends on, plus two behavioral models (counter, VGA wrapper).
//! 2. **Simulation:** Clock driver, reset sequencer, and a single run controller
//!    supporting fixed-length and condition-terminated runs.
//! 3. **Tracing:** An optional waveform backend (VCD text format) fed one sample
//!    per clock half-cycle; a null backend when tracing is disabled.
//! 4. **Frame:** Framebuffer extraction from device memory, RGB332 pixel expansion,
//!    and export to a raw byte dump plus an 8-bit-per-channel RGB PNG.
//! 5. **Configuration:** Hierarchical config with defaults matching the reference
//!    VGA testbench (320x240 frame, 128 KiB memory, 2 reset half-cycles).

/// Simulator configuration (defaults, hierarchical config structures, JSON loading).
pub mod config;
/// Device boundary: the `Device` trait, port descriptors, and behavioral models.
pub mod device;
/// Fatal error taxonomy for the harness.
pub mod error;
/// Framebuffer extraction, pixel format conversion, and file export.
pub mod frame;
/// Clock, reset, and run control; top-level harness orchestration.
pub mod sim;
/// Waveform tracing backends.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Capability trait every device model implements.
pub use crate::device::Device;
/// Error type for all fatal harness conditions.
pub use crate::error::HarnessError;
/// Top-level harness; drives reset, run, extraction, and export in order.
pub use crate::sim::Harness;
