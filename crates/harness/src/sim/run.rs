//! Run controller.
//!
//! One tick loop serving both termination policies: a fixed half-cycle count, or
//! an output-threshold condition polled after each full cycle with an optional
//! maximum-cycle safety bound. The policies are configurations of the same loop,
//! never separate code paths.

use serde::Deserialize;
use tracing::debug;

use crate::device::Device;
use crate::error::HarnessError;
use crate::sim::clock::ClockDriver;
use crate::trace::Tracer;

/// Termination policy for the main run loop.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPolicy {
    /// Run exactly this many half-cycles.
    FixedHalfCycles(u64),
    /// Run full cycles until the named output exceeds `threshold`.
    UntilOutputExceeds {
        /// Output port to poll after each full cycle.
        port: String,
        /// Stop once the output value is strictly greater than this.
        threshold: u64,
        /// Optional bound on full cycles; exhausting it is a
        /// [`HarnessError::ConditionNeverMet`] failure rather than a hang.
        #[serde(default)]
        max_cycles: Option<u64>,
    },
}

/// What a completed run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Half-cycles executed.
    pub half_cycles: u64,
    /// Completed full cycles (half-cycles / 2, rounded down).
    pub full_cycles: u64,
    /// Logical time after the final tick.
    pub end_time: u64,
}

/// Executes the main run loop under a [`RunPolicy`].
#[derive(Debug)]
pub struct RunController {
    clock: ClockDriver,
    policy: RunPolicy,
}

impl RunController {
    /// Creates a controller from a clock driver and a termination policy.
    pub fn new(clock: ClockDriver, policy: RunPolicy) -> Self {
        Self { clock, policy }
    }

    /// Runs the device until the policy terminates, starting at logical `time`.
    ///
    /// The condition of [`RunPolicy::UntilOutputExceeds`] is evaluated after
    /// every second tick, i.e. once per full cycle.
    ///
    /// # Errors
    ///
    /// [`HarnessError::ConditionNeverMet`] if a capped conditional run exhausts
    /// its bound; otherwise only trace backend I/O failures.
    pub fn run(
        &self,
        dut: &mut dyn Device,
        tracer: &mut dyn Tracer,
        mut time: u64,
    ) -> Result<RunOutcome, HarnessError> {
        let mut half_cycles = 0u64;
        let mut full_cycles = 0u64;

        loop {
            if let RunPolicy::FixedHalfCycles(n) = self.policy {
                if half_cycles >= n {
                    break;
                }
            }

            time = self.clock.tick(dut, tracer, time)?;
            half_cycles += 1;
            if half_cycles % 2 != 0 {
                continue;
            }
            full_cycles += 1;

            if let RunPolicy::UntilOutputExceeds {
                ref port,
                threshold,
                max_cycles,
            } = self.policy
            {
                if dut.read_output(port) > threshold {
                    break;
                }
                if let Some(cap) = max_cycles {
                    if full_cycles >= cap {
                        return Err(HarnessError::ConditionNeverMet { max_cycles: cap });
                    }
                }
            }
        }

        let outcome = RunOutcome {
            half_cycles,
            full_cycles,
            end_time: time,
        };
        debug!(?outcome, "run complete");
        Ok(outcome)
    }
}
