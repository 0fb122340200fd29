//! Waveform tracing backends.
//!
//! This module defines the trace-recording boundary of the harness. It provides:
//! 1. **Tracer:** The `init`/`sample`/`finish` lifecycle every backend implements;
//!    the clock driver feeds one sample per half-cycle.
//! 2. **NullTracer:** The disabled backend; a run with it must be byte-identical
//!    in its outputs to a traced run.
//! 3. **VcdTracer:** A VCD text writer (see [`vcd`]).

/// VCD waveform writer.
pub mod vcd;

pub use vcd::VcdTracer;

use crate::device::Device;
use crate::error::HarnessError;

/// A trace backend fed timestamped device snapshots.
///
/// Timestamps are non-decreasing; ties are legal and represent sub-cycle detail.
pub trait Tracer {
    /// Called once before the first sample, with inputs at their initial values.
    fn init(&mut self, dut: &dyn Device) -> Result<(), HarnessError>;

    /// Records the device's current signal values at logical time `time`.
    fn sample(&mut self, time: u64, dut: &dyn Device) -> Result<(), HarnessError>;

    /// Called once after the final sample; flushes the destination.
    fn finish(&mut self) -> Result<(), HarnessError>;
}

/// Backend used when tracing is disabled; does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTracer;

impl Tracer for NullTracer {
    fn init(&mut self, _dut: &dyn Device) -> Result<(), HarnessError> {
        Ok(())
    }

    fn sample(&mut self, _time: u64, _dut: &dyn Device) -> Result<(), HarnessError> {
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        Ok(())
    }
}
