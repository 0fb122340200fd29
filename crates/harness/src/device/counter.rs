//! Synchronous counter model.
//!
//! The classic introductory testbench device: a free-running counter with a
//! synchronous active-high reset. After reset release the first rising edge
//! re-arms the register without incrementing, so the output observed after
//! full cycle `n` is `n - 1` (0, 1, 2, ... per cycle).

use super::{Device, PortDesc, PortDir};

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
        name: "count",
        width: 32,
        dir: PortDir::Output,
    },
];

/// Free-running counter with synchronous reset.
#[derive(Debug, Default)]
pub struct SyncCounter {
    clk: bool,
    prev_clk: bool,
    reset: bool,
    /// Set on the first rising edge with reset low; increments happen afterwards.
    armed: bool,
    count: u32,
}

impl SyncCounter {
    /// Creates a counter with all signals low and the count at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Device for SyncCounter {
    fn ports(&self) -> &[PortDesc] {
        PORTS
    }

    fn set_input(&mut self, port: &str, value: u64) {
        match port {
            "clk" => self.clk = value & 1 == 1,
            "reset" => self.reset = value & 1 == 1,
            other => panic!("SyncCounter has no input port {other:?}"),
        }
    }

    fn peek(&self, port: &str) -> u64 {
        match port {
            "clk" => u64::from(self.clk),
            "reset" => u64::from(self.reset),
            "count" => u64::from(self.count),
            other => panic!("SyncCounter has no port {other:?}"),
        }
    }

    fn eval(&mut self) {
        let rising = self.clk && !self.prev_clk;
        if rising {
            if self.reset {
                self.count = 0;
                self.armed = false;
            } else if self.armed {
                self.count = self.count.wrapping_add(1);
            } else {
                // Reset release is sampled one edge before counting starts.
                self.armed = true;
                self.count = 0;
            }
        }
        self.prev_clk = self.clk;
    }
}
