//! VGA pattern model: memory layout and frame progress.

use tickbench_core::device::{Device, VgaPattern, vga};

fn full_cycle(dut: &mut VgaPattern) {
    dut.set_input("clk", 1);
    dut.eval();
    dut.set_input("clk", 0);
    dut.eval();
}

fn reset_preamble(dut: &mut VgaPattern) {
    dut.set_input("clk", 0);
    dut.set_input("reset", 1);
    full_cycle(dut);
    dut.set_input("reset", 0);
}

#[test]
fn memory_is_128k_and_initially_zero() {
    let dut = VgaPattern::new();
    assert_eq!(dut.memory().len(), vga::MEM_BYTES);
    assert!(dut.memory().iter().all(|&b| b == 0));
}

#[test]
fn one_pixel_is_written_per_rising_edge() {
    let mut dut = VgaPattern::new();
    reset_preamble(&mut dut);

    for _ in 0..5 {
        full_cycle(&mut dut);
    }
    // Leftmost color bar is white in RGB332.
    assert_eq!(&dut.memory()[..5], &[0xFF; 5]);
    assert_eq!(dut.memory()[5], 0x00);
}

#[test]
fn rows_contain_eight_color_bars() {
    let mut dut = VgaPattern::new();
    reset_preamble(&mut dut);
    for _ in 0..vga::WIDTH {
        full_cycle(&mut dut);
    }

    let row = &dut.memory()[..vga::WIDTH];
    let bar_width = vga::WIDTH / 8;
    let bars: Vec<u8> = (0..8).map(|i| row[i * bar_width]).collect();
    assert_eq!(bars, vec![0xFF, 0xFC, 0x1F, 0x1C, 0xE3, 0xE0, 0x03, 0x00]);
}

#[test]
fn frame_done_rises_after_the_last_pixel() {
    let mut dut = VgaPattern::new();
    reset_preamble(&mut dut);

    for _ in 0..vga::PIXELS - 1 {
        full_cycle(&mut dut);
    }
    assert_eq!(dut.read_output("frame_done"), 0);

    full_cycle(&mut dut);
    assert_eq!(dut.read_output("frame_done"), 1);

    // Further cycles write nothing past the frame.
    full_cycle(&mut dut);
    assert!(dut.memory()[vga::PIXELS..].iter().all(|&b| b == 0));
}

#[test]
fn switches_xor_into_the_pattern() {
    let mut dut = VgaPattern::new();
    reset_preamble(&mut dut);
    dut.set_input("switches", 0x0F);
    full_cycle(&mut dut);
    assert_eq!(dut.memory()[0], 0xFF ^ 0x0F);
}
