//! Simulation control: clock, reset, run, and top-level orchestration.
//!
//! The `Harness` drives the strictly linear run/export state machine:
//! reset, run, extract, raw dump, PNG export, device finalize, trace finish.
//! No back-edges, no retries; any failure aborts the sequence where it stands.

/// Clock driver (half-cycle ticks, explicit logical time).
pub mod clock;
/// Reset sequencer (assert/settle/deassert).
pub mod reset;
/// Run controller (fixed or condition-terminated loop).
pub mod run;

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::device::Device;
use crate::error::HarnessError;
use crate::frame::{self, Framebuffer, export};
use crate::sim::clock::ClockDriver;
use crate::sim::reset::ResetSequencer;
use crate::sim::run::{RunController, RunOutcome};
use crate::trace::{NullTracer, Tracer, VcdTracer};

/// Summary of one completed harness execution.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Outcome of the main run loop.
    pub outcome: RunOutcome,
    /// Raw dump destination, if the export stage ran.
    pub raw_path: Option<PathBuf>,
    /// PNG destination, if the export stage ran.
    pub image_path: Option<PathBuf>,
    /// Trace destination, if tracing was enabled.
    pub trace_path: Option<PathBuf>,
}

/// Top-level harness tying the components together for one device run.
#[derive(Debug)]
pub struct Harness {
    config: Config,
}

impl Harness {
    /// Creates a harness from a fully resolved configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the full sequence against an exclusively owned device.
    ///
    /// Memory-region configuration is validated up front when the export stage
    /// is enabled, so a geometry mistake aborts before the first tick.
    ///
    /// # Errors
    ///
    /// Any [`HarnessError`]; all are fatal from the caller's perspective.
    pub fn execute(&self, dut: &mut dyn Device) -> Result<RunReport, HarnessError> {
        let cfg = &self.config;
        if cfg.output.export {
            cfg.validate(dut.memory().len())?;
        }

        let mut tracer: Box<dyn Tracer> = if cfg.trace.enabled {
            Box::new(VcdTracer::create(&cfg.trace.path)?)
        } else {
            Box::new(NullTracer)
        };
        tracer.init(dut)?;

        let clock = ClockDriver::new(cfg.clock_port.clone());
        let reset = ResetSequencer::new(cfg.reset.port.clone(), cfg.reset.settle_half_cycles);
        let time = reset.apply(dut, &clock, tracer.as_mut(), 0)?;

        let controller = RunController::new(clock, cfg.run.policy.clone());
        let outcome = controller.run(dut, tracer.as_mut(), time)?;
        info!(
            half_cycles = outcome.half_cycles,
            end_time = outcome.end_time,
            "run finished"
        );

        let (mut raw_path, mut image_path) = (None, None);
        if cfg.output.export {
            let dump = frame::extract(dut, cfg.dump.base, cfg.dump.len)?;
            export::write_raw(&cfg.output.raw_path, &dump)?;
            raw_path = Some(cfg.output.raw_path.clone());

            let bytes = frame::extract(dut, cfg.frame.base, cfg.frame.geometry.pixel_count())?;
            let fb = Framebuffer::new(cfg.frame.geometry, bytes)?;
            export::write_png(&cfg.output.image_path, &fb)?;
            image_path = Some(cfg.output.image_path.clone());
        }

        dut.finalize();
        tracer.finish()?;

        Ok(RunReport {
            outcome,
            raw_path,
            image_path,
            trace_path: cfg.trace.enabled.then(|| cfg.trace.path.clone()),
        })
    }
}
