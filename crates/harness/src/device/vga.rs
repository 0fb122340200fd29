//! VGA wrapper model with a 128 KiB framebuffer memory.
//!
//! Stands in for the Verilated display wrapper the harness was written around: it
//! owns a byte-addressed memory whose first `320 * 240` bytes hold one RGB332
//! sample per pixel. On every rising clock edge the model writes the next pixel of
//! a color-bar test card, so after enough cycles the memory contains a full frame
//! for the extractor to pull out.

use super::{Device, PortDesc, PortDir};

/// Total device memory size in bytes (128 KiB, `ram128kx8`).
pub const MEM_BYTES: usize = 1 << 17;
/// Frame width in pixels.
pub const WIDTH: usize = 320;
/// Frame height in pixels.
pub const HEIGHT: usize = 240;
/// Pixels per frame.
pub const PIXELS: usize = WIDTH * HEIGHT;

/// RGB332 palette for the eight vertical color bars (white to black).
const BARS: [u8; 8] = [0xFF, 0xFC, 0x1F, 0x1C, 0xE3, 0xE0, 0x03, 0x00];

const PORTS: &[PortDesc] = &[
    PortDesc {
        name: "clk",
        width: 1,
        dir: PortDir::Input,
    },
    PortDesc {
        name: "reset",
        width: 1,
        dir: PortDir::Input,
    },
    PortDesc {
        name: "switches",
        width: 16,
        dir: PortDir::Input,
    },
    PortDesc {
        name: "frame_done",
        width: 1,
        dir: PortDir::Output,
    },
];

/// Display wrapper model that fills its framebuffer with a color-bar pattern.
#[derive(Debug)]
pub struct VgaPattern {
    clk: bool,
    prev_clk: bool,
    reset: bool,
    switches: u16,
    /// Next pixel address to write; stops at [`PIXELS`].
    addr: usize,
    mem: Vec<u8>,
}

impl VgaPattern {
    /// Creates the model with zeroed memory and all inputs low.
    pub fn new() -> Self {
        Self {
            clk: false,
            prev_clk: false,
            reset: false,
            switches: 0,
            addr: 0,
            mem: vec![0; MEM_BYTES],
        }
    }

    /// Pattern byte for the pixel at linear address `addr`.
    fn pattern(&self, addr: usize) -> u8 {
        let x = addr % WIDTH;
        let bar = x / (WIDTH / BARS.len());
        BARS[bar.min(BARS.len() - 1)] ^ (self.switches as u8)
    }
}

impl Default for VgaPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for VgaPattern {
    fn ports(&self) -> &[PortDesc] {
        PORTS
    }

    fn set_input(&mut self, port: &str, value: u64) {
        match port {
            "clk" => self.clk = value & 1 == 1,
            "reset" => self.reset = value & 1 == 1,
            "switches" => self.switches = value as u16,
            other => panic!("VgaPattern has no input port {other:?}"),
        }
    }

    fn peek(&self, port: &str) -> u64 {
        match port {
            "clk" => u64::from(self.clk),
            "reset" => u64::from(self.reset),
            "switches" => u64::from(self.switches),
            "frame_done" => u64::from(self.addr >= PIXELS),
            other => panic!("VgaPattern has no port {other:?}"),
        }
    }

    fn eval(&mut self) {
        let rising = self.clk && !self.prev_clk;
        if rising {
            if self.reset {
                self.addr = 0;
            } else if self.addr < PIXELS {
                let byte = self.pattern(self.addr);
                self.mem[self.addr] = byte;
                self.addr += 1;
            }
        }
        self.prev_clk = self.clk;
    }

    fn memory(&self) -> &[u8] {
        &self.mem
    }
}
