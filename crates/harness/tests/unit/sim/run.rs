//! Run controller: fixed and condition-terminated policies through one loop.

use tickbench_core::HarnessError;
use tickbench_core::device::{Device, SyncCounter};
use tickbench_core::sim::clock::ClockDriver;
use tickbench_core::sim::reset::ResetSequencer;
use tickbench_core::sim::run::{RunController, RunPolicy};
use tickbench_core::trace::NullTracer;

use crate::common::mocks::ProbeDevice;

#[test]
fn fixed_policy_runs_exactly_the_requested_half_cycles() {
    let mut dut = ProbeDevice::new();
    let mut tracer = NullTracer;
    let controller = RunController::new(ClockDriver::new("clk"), RunPolicy::FixedHalfCycles(10_000));

    let outcome = controller.run(&mut dut, &mut tracer, 0).unwrap();
    assert_eq!(outcome.half_cycles, 10_000);
    assert_eq!(outcome.full_cycles, 5_000);
    assert_eq!(outcome.end_time, 10_000);
    assert_eq!(dut.evals, 10_000);
}

#[test]
fn fixed_policy_accepts_an_odd_half_cycle_count() {
    let mut dut = ProbeDevice::new();
    let mut tracer = NullTracer;
    let controller = RunController::new(ClockDriver::new("clk"), RunPolicy::FixedHalfCycles(7));

    let outcome = controller.run(&mut dut, &mut tracer, 0).unwrap();
    assert_eq!(outcome.half_cycles, 7);
    assert_eq!(outcome.full_cycles, 3);
    // Ends mid-cycle with the clock still high.
    assert_eq!(dut.peek("clk"), 1);
}

#[test]
fn zero_length_run_does_nothing() {
    let mut dut = ProbeDevice::new();
    let mut tracer = NullTracer;
    let controller = RunController::new(ClockDriver::new("clk"), RunPolicy::FixedHalfCycles(0));

    let outcome = controller.run(&mut dut, &mut tracer, 5).unwrap();
    assert_eq!(outcome.half_cycles, 0);
    assert_eq!(outcome.end_time, 5);
    assert_eq!(dut.evals, 0);
}

/// The reference counter run: threshold 15 is first exceeded after 17 full
/// cycles, i.e. 34 run ticks on top of the 2 reset ticks.
#[test]
fn counter_threshold_run_takes_seventeen_cycles() {
    let mut dut = SyncCounter::new();
    let mut tracer = NullTracer;
    let clock = ClockDriver::new("clk");
    let reset = ResetSequencer::new("reset", 2);

    let time = reset.apply(&mut dut, &clock, &mut tracer, 0).unwrap();
    let controller = RunController::new(
        clock,
        RunPolicy::UntilOutputExceeds {
            port: "count".to_string(),
            threshold: 15,
            max_cycles: None,
        },
    );
    let outcome = controller.run(&mut dut, &mut tracer, time).unwrap();

    assert_eq!(outcome.full_cycles, 17);
    assert_eq!(outcome.half_cycles, 34);
    assert_eq!(outcome.end_time, 36);
    assert_eq!(dut.read_output("count"), 16);
}

#[test]
fn capped_conditional_run_fails_instead_of_hanging() {
    let mut dut = SyncCounter::new();
    let mut tracer = NullTracer;
    let clock = ClockDriver::new("clk");
    let reset = ResetSequencer::new("reset", 2);

    let time = reset.apply(&mut dut, &clock, &mut tracer, 0).unwrap();
    let controller = RunController::new(
        clock,
        RunPolicy::UntilOutputExceeds {
            port: "count".to_string(),
            threshold: u64::MAX,
            max_cycles: Some(10),
        },
    );
    let err = controller.run(&mut dut, &mut tracer, time).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::ConditionNeverMet { max_cycles: 10 }
    ));
}
