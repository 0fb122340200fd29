//! Clock driver.
//!
//! One tick is one clock half-cycle: invert the clock input, evaluate the
//! device, feed the trace backend, and advance logical time by exactly one.
//! The driver itself is stateless beyond the bound port name; logical time is
//! explicit and owned by the caller.

use crate::device::Device;
use crate::error::HarnessError;
use crate::trace::Tracer;

/// Toggles a device's clock input and advances logical time.
#[derive(Debug, Clone)]
pub struct ClockDriver {
    port: String,
}

impl ClockDriver {
    /// Binds the driver to the named clock input port.
    pub fn new(port: impl Into<String>) -> Self {
        Self { port: port.into() }
    }

    /// The bound clock port name.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Performs one half-cycle: clock inversion, `eval`, trace sample.
    ///
    /// Returns `time + 1`. Callable an arbitrary number of times.
    ///
    /// # Errors
    ///
    /// Propagates trace backend I/O failures; device evaluation itself is total.
    pub fn tick(
        &self,
        dut: &mut dyn Device,
        tracer: &mut dyn Tracer,
        time: u64,
    ) -> Result<u64, HarnessError> {
        let level = dut.peek(&self.port);
        dut.set_input(&self.port, level ^ 1);
        dut.eval();
        tracer.sample(time, dut)?;
        Ok(time + 1)
    }
}
