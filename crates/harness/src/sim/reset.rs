//! Reset sequencer.
//!
//! Drives the device into a defined state before the main run: all inputs low
//! (clock included), reset asserted across a configurable number of half-cycles,
//! then deasserted. The default of two half-cycles covers one full rising plus
//! falling transition, the minimum for a synchronous-reset design; devices that
//! need a longer settle raise the count in [`crate::config::ResetConfig`].

use tracing::debug;

use crate::device::{Device, PortDir};
use crate::error::HarnessError;
use crate::sim::clock::ClockDriver;
use crate::trace::Tracer;

/// Applies the assert/settle/deassert reset sequence.
#[derive(Debug, Clone)]
pub struct ResetSequencer {
    port: String,
    settle_half_cycles: u32,
}

impl ResetSequencer {
    /// Creates a sequencer for the named active-high reset port.
    pub fn new(port: impl Into<String>, settle_half_cycles: u32) -> Self {
        Self {
            port: port.into(),
            settle_half_cycles,
        }
    }

    /// Runs the reset sequence and returns the advanced logical time.
    ///
    /// All declared inputs are first driven to zero, so auxiliary signals start
    /// the run in a defined state.
    ///
    /// # Errors
    ///
    /// Propagates trace backend I/O failures from the settle ticks.
    pub fn apply(
        &self,
        dut: &mut dyn Device,
        clock: &ClockDriver,
        tracer: &mut dyn Tracer,
        mut time: u64,
    ) -> Result<u64, HarnessError> {
        let inputs: Vec<&'static str> = dut
            .ports()
            .iter()
            .filter(|p| p.dir == PortDir::Input)
            .map(|p| p.name)
            .collect();
        for name in inputs {
            dut.set_input(name, 0);
        }

        dut.set_input(&self.port, 1);
        for _ in 0..self.settle_half_cycles {
            time = clock.tick(dut, tracer, time)?;
        }
        dut.set_input(&self.port, 0);
        debug!(
            settle_half_cycles = self.settle_half_cycles,
            time, "reset deasserted"
        );
        Ok(time)
    }
}
