//! Simulation harness CLI.
//!
//! This binary is the process wiring around `tickbench-core`. It performs:
//! 1. **Device selection:** Pick one of the built-in device models.
//! 2. **Configuration:** Defaults (or a JSON file) plus command-line overrides;
//!    the `VCD` environment variable is read exactly once here.
//! 3. **Exit codes:** 0 on normal completion; any fatal harness error prints a
//!    diagnostic to stderr and exits 1 immediately.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use tickbench_core::config::{Config, TraceConfig};
use tickbench_core::device::{Device, SyncCounter, VgaPattern};
use tickbench_core::sim::Harness;
use tickbench_core::sim::run::RunPolicy;

/// Default full-cycle safety bound for condition-terminated CLI runs.
const DEFAULT_MAX_CYCLES: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(
    name = "tickbench",
    author,
    version,
    about = "Clock-driven simulation harness with waveform tracing and framebuffer export",
    long_about = "Drive a clocked device model through reset and a fixed or condition-terminated \
                  run, optionally recording a VCD trace (disable with VCD=0), then export the \
                  framebuffer as a raw dump and a PNG.\n\nExamples:\n  \
                  tickbench run --device vga\n  \
                  tickbench run --device counter --threshold 15\n  \
                  VCD=0 tickbench run --device vga --half-cycles 200000"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a device model through the full harness sequence.
    Run {
        /// Device model to drive.
        #[arg(short, long, value_enum, default_value = "vga")]
        device: DeviceKind,

        /// JSON configuration file (defaults are the reference VGA testbench).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the fixed run length in half-cycles.
        #[arg(long)]
        half_cycles: Option<u64>,

        /// Stop once the device's count output exceeds this value (counter mode).
        #[arg(long)]
        threshold: Option<u64>,

        /// Safety bound in full cycles for condition-terminated runs.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Override the VCD trace destination.
        #[arg(long)]
        trace: Option<PathBuf>,
    },
}

/// Built-in device models.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceKind {
    /// Display wrapper with a 128 KiB framebuffer; fixed-length run + export.
    Vga,
    /// Synchronous counter; condition-terminated run, no export.
    Counter,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            device,
            config,
            half_cycles,
            threshold,
            max_cycles,
            trace,
        } => cmd_run(device, config, half_cycles, threshold, max_cycles, trace),
    }
}

/// Builds the configuration, runs the harness, and prints the report.
///
/// Any harness error is fatal: diagnostic to stderr, exit code 1, no cleanup of
/// already-opened outputs beyond what the OS provides.
fn cmd_run(
    device: DeviceKind,
    config_path: Option<PathBuf>,
    half_cycles: Option<u64>,
    threshold: Option<u64>,
    max_cycles: Option<u64>,
    trace: Option<PathBuf>,
) {
    let mut config = match config_path {
        Some(path) => match Config::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[!] FATAL: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    // The one process-wide read of the VCD toggle; everything downstream gets
    // the resolved value through the config.
    config.trace.enabled = TraceConfig::from_env().enabled;
    if let Some(path) = trace {
        config.trace.path = path;
    }

    match device {
        DeviceKind::Vga => {
            if let Some(n) = half_cycles {
                config.run.policy = RunPolicy::FixedHalfCycles(n);
            }
        }
        DeviceKind::Counter => {
            config.output.export = false;
            config.run.policy = RunPolicy::UntilOutputExceeds {
                port: "count".to_string(),
                threshold: threshold.unwrap_or(15),
                max_cycles: Some(max_cycles.unwrap_or(DEFAULT_MAX_CYCLES)),
            };
        }
    }

    let mut dut: Box<dyn Device> = match device {
        DeviceKind::Vga => Box::new(VgaPattern::new()),
        DeviceKind::Counter => Box::new(SyncCounter::new()),
    };

    println!(
        "[*] Device: {device:?}  Trace: {}",
        if config.trace.enabled {
            config.trace.path.display().to_string()
        } else {
            "disabled (VCD=0)".to_string()
        }
    );

    let harness = Harness::new(config);
    match harness.execute(dut.as_mut()) {
        Ok(report) => {
            println!(
                "[*] Run complete: {} half-cycles, {} full cycles, end time {}",
                report.outcome.half_cycles, report.outcome.full_cycles, report.outcome.end_time
            );
            if device == DeviceKind::Counter {
                println!("    Count: {}", dut.read_output("count"));
            }
            if let Some(path) = report.raw_path {
                println!("    Raw dump: {}", path.display());
            }
            if let Some(path) = report.image_path {
                println!("    Image:    {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }
}
