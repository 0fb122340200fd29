//! Configuration system for the simulation harness.
//!
//! This module defines all configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants matching the reference VGA testbench
//!    (320x240 frame, 128 KiB dump region, 2 reset half-cycles, 10M-tick run).
//! 2. **Structures:** Hierarchical config for reset, run, trace, frame, dump, and
//!    output concerns.
//! 3. **Loading:** JSON deserialization for the CLI's `--config` flag, plus the
//!    one-shot environment read that decides trace enablement.
//!
//! Tracing enablement is resolved exactly once at startup and injected through
//! this structure; no component re-reads the environment during the run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::HarnessError;
use crate::frame::FrameGeometry;
use crate::sim::run::RunPolicy;

/// Default configuration constants for the harness.
///
/// These values reproduce the reference VGA testbench when not explicitly
/// overridden.
mod defaults {
    /// Clock input port name.
    pub const CLOCK_PORT: &str = "clk";

    /// Reset input port name.
    pub const RESET_PORT: &str = "reset";

    /// Half-cycles to hold reset asserted: one full rising+falling transition,
    /// the minimum for a synchronous-reset design.
    pub const RESET_SETTLE_HALF_CYCLES: u32 = 2;

    /// Fixed run length in half-cycles (10 million ticks).
    pub const RUN_HALF_CYCLES: u64 = 10_000_000;

    /// Frame width in pixels.
    pub const FRAME_WIDTH: u32 = 320;

    /// Frame height in pixels.
    pub const FRAME_HEIGHT: u32 = 240;

    /// Base offset of the frame region inside device memory.
    pub const FRAME_BASE: usize = 0;

    /// Base offset of the raw dump region.
    pub const DUMP_BASE: usize = 0;

    /// Raw dump length in bytes (the full 128 KiB device memory).
    pub const DUMP_LEN: usize = 1 << 17;

    /// Waveform trace destination.
    pub const TRACE_PATH: &str = "waveform.vcd";

    /// Raw framebuffer dump destination.
    pub const RAW_PATH: &str = "vga_image.raw";

    /// PNG image destination.
    pub const IMAGE_PATH: &str = "output_image.png";
}

/// Root harness configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Clock input port name.
    pub clock_port: String,
    /// Reset sequencing.
    pub reset: ResetConfig,
    /// Run termination policy.
    pub run: RunConfig,
    /// Waveform trace settings.
    pub trace: TraceConfig,
    /// Framebuffer region and geometry.
    pub frame: FrameConfig,
    /// Raw dump region.
    pub dump: DumpConfig,
    /// Output destinations.
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_port: defaults::CLOCK_PORT.to_string(),
            reset: ResetConfig::default(),
            run: RunConfig::default(),
            trace: TraceConfig::default(),
            frame: FrameConfig::default(),
            dump: DumpConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// [`HarnessError::ReadConfig`] if the file cannot be read,
    /// [`HarnessError::ParseConfig`] if it does not match the schema.
    pub fn from_json_file(path: &Path) -> Result<Self, HarnessError> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| HarnessError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the memory-region configuration against a device memory size.
    ///
    /// Called once before reset so a geometry or bounds mistake aborts at
    /// startup rather than after a multi-million-tick run.
    ///
    /// # Errors
    ///
    /// [`HarnessError::RegionOutOfBounds`] if the frame or dump region does not
    /// fit inside `mem_len` bytes.
    pub fn validate(&self, mem_len: usize) -> Result<(), HarnessError> {
        let check = |base: usize, len: usize| {
            let fits = base.checked_add(len).is_some_and(|end| end <= mem_len);
            if fits {
                Ok(())
            } else {
                Err(HarnessError::RegionOutOfBounds { base, len, mem_len })
            }
        };
        check(self.frame.base, self.frame.geometry.pixel_count())?;
        check(self.dump.base, self.dump.len)
    }
}

/// Reset sequencing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResetConfig {
    /// Reset input port name (active high).
    pub port: String,
    /// Half-cycles to hold reset asserted before deasserting.
    pub settle_half_cycles: u32,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            port: defaults::RESET_PORT.to_string(),
            settle_half_cycles: defaults::RESET_SETTLE_HALF_CYCLES,
        }
    }
}

/// Run termination configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Termination policy for the main run loop.
    pub policy: RunPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            policy: RunPolicy::FixedHalfCycles(defaults::RUN_HALF_CYCLES),
        }
    }
}

/// Waveform trace configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// Whether a VCD trace is recorded at all.
    pub enabled: bool,
    /// Trace destination path.
    pub path: PathBuf,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(defaults::TRACE_PATH),
        }
    }
}

impl TraceConfig {
    /// Resolves trace enablement from the `VCD` environment variable, read once
    /// at startup: `VCD=0` disables, anything else or unset enables.
    pub fn from_env() -> Self {
        Self {
            enabled: Self::enabled_from(std::env::var("VCD").ok().as_deref()),
            ..Self::default()
        }
    }

    /// The enablement rule, separated out so it is unit-testable.
    pub fn enabled_from(value: Option<&str>) -> bool {
        value != Some("0")
    }
}

/// Framebuffer region and geometry configuration.
///
/// The region length is always `width * height`; it is not independently
/// configurable, which is what keeps the geometry precondition checkable at
/// startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Base offset of the frame inside device memory.
    pub base: usize,
    /// Frame dimensions.
    pub geometry: FrameGeometry,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            base: defaults::FRAME_BASE,
            geometry: FrameGeometry {
                width: defaults::FRAME_WIDTH,
                height: defaults::FRAME_HEIGHT,
            },
        }
    }
}

/// Raw dump region configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpConfig {
    /// Base offset of the dump region inside device memory.
    pub base: usize,
    /// Dump length in bytes.
    pub len: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            base: defaults::DUMP_BASE,
            len: defaults::DUMP_LEN,
        }
    }
}

/// Output destination configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Whether the extract/export stage runs at all (off for devices without a
    /// framebuffer, such as the bare counter).
    pub export: bool,
    /// Raw dump destination.
    pub raw_path: PathBuf,
    /// PNG destination.
    pub image_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export: true,
            raw_path: PathBuf::from(defaults::RAW_PATH),
            image_path: PathBuf::from(defaults::IMAGE_PATH),
        }
    }
}
