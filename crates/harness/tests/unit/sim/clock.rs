//! Clock driver behavior: time advances by one per tick, clock alternates.

use tickbench_core::device::Device;
use tickbench_core::sim::clock::ClockDriver;
use tickbench_core::trace::NullTracer;

use crate::common::mocks::ProbeDevice;

#[test]
fn time_starts_at_zero_and_increments_by_one() {
    let mut dut = ProbeDevice::new();
    let mut tracer = NullTracer;
    let clock = ClockDriver::new("clk");

    let mut time = 0;
    for expected in 1..=10 {
        time = clock.tick(&mut dut, &mut tracer, time).unwrap();
        assert_eq!(time, expected);
    }
}

#[test]
fn each_tick_inverts_the_clock_and_evaluates_once() {
    let mut dut = ProbeDevice::new();
    let mut tracer = NullTracer;
    let clock = ClockDriver::new("clk");

    let mut time = 0;
    for _ in 0..6 {
        time = clock.tick(&mut dut, &mut tracer, time).unwrap();
    }

    assert_eq!(dut.evals, 6);
    // Clock starts low, so evaluations see 1, 0, 1, 0, ...
    assert_eq!(dut.clk_levels, vec![1, 0, 1, 0, 1, 0]);
    assert_eq!(dut.peek("clk"), 0);
}
