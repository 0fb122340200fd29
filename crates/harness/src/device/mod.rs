//! Device boundary for clocked hardware models.
//!
//! This module defines the `Device` trait implemented by every model the harness can
//! drive. It provides:
//! 1. **Ports:** Named single- or multi-bit input and output signals, enumerable for
//!    waveform tracing.
//! 2. **Evaluation:** `eval` propagates the current inputs to outputs and internal
//!    state for the current logical instant.
//! 3. **Memory:** An optional byte-addressed memory region, readable by the
//!    framebuffer extractor after the run.
//! 4. **Lifecycle:** `finalize` flushes end-of-run bookkeeping; a device must not be
//!    evaluated afterwards.
//!
//! The harness components depend only on this trait, so structurally different
//! devices (a counter, a display wrapper) plug into the same clock, reset, and run
//! machinery.

/// Synchronous counter model.
pub mod counter;
/// VGA wrapper model with a 128 KiB framebuffer memory.
pub mod vga;

pub use counter::SyncCounter;
pub use vga::VgaPattern;

/// Direction of a device port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDir {
    /// Driven by the harness before `eval`.
    Input,
    /// Driven by the device, readable after `eval`.
    Output,
}

/// Static description of one device port.
#[derive(Debug, Clone, Copy)]
pub struct PortDesc {
    /// Signal name as it appears in waveform output.
    pub name: &'static str,
    /// Width in bits (1 for single-bit signals).
    pub width: u32,
    /// Port direction.
    pub dir: PortDir,
}

/// Trait for clocked device models driven by the harness.
///
/// All port accessors take the port name; passing a name the device does not
/// declare in [`Device::ports`] is a programming error, not a runtime condition.
pub trait Device {
    /// Returns the device's port list. Stable for the lifetime of the device.
    fn ports(&self) -> &[PortDesc];

    /// Sets an input port to the given value before the next `eval`.
    ///
    /// # Panics
    ///
    /// Panics if `port` is not a declared input.
    fn set_input(&mut self, port: &str, value: u64);

    /// Reads the current value of any declared port (input or output).
    ///
    /// Used by the clock driver to invert the clock level and by trace backends
    /// to sample every signal.
    ///
    /// # Panics
    ///
    /// Panics if `port` is not declared.
    fn peek(&self, port: &str) -> u64;

    /// Reads an output port after `eval`.
    ///
    /// # Panics
    ///
    /// Panics if `port` is not a declared port.
    fn read_output(&self, port: &str) -> u64 {
        self.peek(port)
    }

    /// Propagates inputs to outputs and internal state for the current instant.
    fn eval(&mut self);

    /// Returns the device's byte-addressed internal memory, if it has one.
    ///
    /// Read-only from the harness's perspective; the device writes it during
    /// evaluation. Defaults to an empty region.
    fn memory(&self) -> &[u8] {
        &[]
    }

    /// Flushes end-of-run bookkeeping. `eval` must not be called afterwards.
    fn finalize(&mut self) {}
}
