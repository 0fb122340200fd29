//! Counter model semantics at the port level.

use tickbench_core::device::{Device, SyncCounter};

fn full_cycle(dut: &mut SyncCounter) {
    dut.set_input("clk", 1);
    dut.eval();
    dut.set_input("clk", 0);
    dut.eval();
}

fn reset_preamble(dut: &mut SyncCounter) {
    dut.set_input("clk", 0);
    dut.set_input("reset", 1);
    full_cycle(dut);
    dut.set_input("reset", 0);
}

/// Output observed after full cycle `n` is `n - 1`: the first post-reset edge
/// re-arms the register, counting starts on the second.
#[test]
fn count_sequence_starts_at_zero() {
    let mut dut = SyncCounter::new();
    reset_preamble(&mut dut);

    let mut seen = Vec::new();
    for _ in 0..5 {
        full_cycle(&mut dut);
        seen.push(dut.read_output("count"));
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[test]
fn reset_is_synchronous() {
    let mut dut = SyncCounter::new();
    reset_preamble(&mut dut);
    for _ in 0..4 {
        full_cycle(&mut dut);
    }
    assert_eq!(dut.read_output("count"), 3);

    // Asserting reset without a clock edge changes nothing.
    dut.set_input("reset", 1);
    dut.eval();
    assert_eq!(dut.read_output("count"), 3);

    // The next rising edge clears it.
    full_cycle(&mut dut);
    assert_eq!(dut.read_output("count"), 0);
}

#[test]
fn repeated_eval_without_an_edge_is_idempotent() {
    let mut dut = SyncCounter::new();
    reset_preamble(&mut dut);
    full_cycle(&mut dut);
    full_cycle(&mut dut);
    let before = dut.read_output("count");

    dut.eval();
    dut.eval();
    assert_eq!(dut.read_output("count"), before);
}

#[test]
#[should_panic(expected = "no input port")]
fn unknown_input_port_is_a_programming_error() {
    let mut dut = SyncCounter::new();
    dut.set_input("enable", 1);
}
