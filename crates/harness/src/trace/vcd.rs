//! VCD waveform writer.
//!
//! Writes IEEE 1364 value-change-dump text: a `$timescale`/`$scope`/`$var` header
//! built from the device's port list, then one `#time` stanza per sample with
//! change-only value emission. Identifier codes are assigned from the printable
//! ASCII range the way every VCD producer does.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::device::Device;
use crate::error::HarnessError;
use crate::trace::Tracer;

/// First and last printable characters usable as VCD identifier codes.
const ID_FIRST: u8 = b'!';
const ID_RANGE: u8 = b'~' - b'!' + 1;

struct Signal {
    name: &'static str,
    width: u32,
    id: String,
}

/// Trace backend that writes a `.vcd` file.
pub struct VcdTracer {
    out: BufWriter<File>,
    signals: Vec<Signal>,
    /// Last emitted value per signal; `None` until first emission.
    last: Vec<Option<u64>>,
}

impl std::fmt::Debug for VcdTracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VcdTracer")
            .field("signals", &self.signals.len())
            .finish()
    }
}

impl VcdTracer {
    /// Opens the destination file for writing.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::CreateOutput`] if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self, HarnessError> {
        let file = File::create(path).map_err(|source| HarnessError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            out: BufWriter::new(file),
            signals: Vec::new(),
            last: Vec::new(),
        })
    }

    /// Identifier code for the signal at `index` (base-94, `!` through `~`).
    fn ident(index: usize) -> String {
        let mut n = index;
        let mut id = String::new();
        loop {
            id.push(char::from(ID_FIRST + (n % ID_RANGE as usize) as u8));
            n /= ID_RANGE as usize;
            if n == 0 {
                break;
            }
            n -= 1;
        }
        id
    }
}

impl Tracer for VcdTracer {
    fn init(&mut self, dut: &dyn Device) -> Result<(), HarnessError> {
        self.signals = dut
            .ports()
            .iter()
            .enumerate()
            .map(|(i, p)| Signal {
                name: p.name,
                width: p.width,
                id: Self::ident(i),
            })
            .collect();
        self.last = vec![None; self.signals.len()];

        writeln!(self.out, "$timescale 1ns $end").map_err(HarnessError::Trace)?;
        writeln!(self.out, "$scope module top $end").map_err(HarnessError::Trace)?;
        for sig in &self.signals {
            writeln!(self.out, "$var wire {} {} {} $end", sig.width, sig.id, sig.name)
                .map_err(HarnessError::Trace)?;
        }
        writeln!(self.out, "$upscope $end").map_err(HarnessError::Trace)?;
        writeln!(self.out, "$enddefinitions $end").map_err(HarnessError::Trace)?;
        Ok(())
    }

    fn sample(&mut self, time: u64, dut: &dyn Device) -> Result<(), HarnessError> {
        writeln!(self.out, "#{time}").map_err(HarnessError::Trace)?;
        for (sig, last) in self.signals.iter().zip(self.last.iter_mut()) {
            let value = dut.peek(sig.name);
            if *last == Some(value) {
                continue;
            }
            if sig.width == 1 {
                writeln!(self.out, "{}{}", value & 1, sig.id).map_err(HarnessError::Trace)?;
            } else {
                writeln!(self.out, "b{value:b} {}", sig.id).map_err(HarnessError::Trace)?;
            }
            *last = Some(value);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        self.out.flush().map_err(HarnessError::Trace)
    }
}
