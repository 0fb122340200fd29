//! Configuration defaults, JSON loading, env toggle, and region validation.

use std::io::Write;

use pretty_assertions::assert_eq;
use tickbench_core::HarnessError;
use tickbench_core::config::{Config, TraceConfig};
use tickbench_core::sim::run::RunPolicy;

#[test]
fn defaults_match_the_reference_testbench() {
    let config = Config::default();
    assert_eq!(config.clock_port, "clk");
    assert_eq!(config.reset.port, "reset");
    assert_eq!(config.reset.settle_half_cycles, 2);
    assert_eq!(config.run.policy, RunPolicy::FixedHalfCycles(10_000_000));
    assert!(config.trace.enabled);
    assert_eq!(config.trace.path.to_str(), Some("waveform.vcd"));
    assert_eq!(config.frame.geometry.width, 320);
    assert_eq!(config.frame.geometry.height, 240);
    assert_eq!(config.frame.geometry.pixel_count(), 76_800);
    assert_eq!(config.dump.len, 1 << 17);
    assert!(config.output.export);
}

#[test]
fn vcd_env_rule_only_zero_disables() {
    assert!(TraceConfig::enabled_from(None));
    assert!(!TraceConfig::enabled_from(Some("0")));
    assert!(TraceConfig::enabled_from(Some("1")));
    assert!(TraceConfig::enabled_from(Some("")));
    assert!(TraceConfig::enabled_from(Some("no")));
}

#[test]
fn json_config_overrides_nested_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "run": {{
                "policy": {{
                    "until_output_exceeds": {{
                        "port": "count",
                        "threshold": 15,
                        "max_cycles": 100
                    }}
                }}
            }},
            "frame": {{ "geometry": {{ "width": 4, "height": 2 }} }},
            "trace": {{ "enabled": false }}
        }}"#
    )
    .unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(
        config.run.policy,
        RunPolicy::UntilOutputExceeds {
            port: "count".to_string(),
            threshold: 15,
            max_cycles: Some(100),
        }
    );
    assert_eq!(config.frame.geometry.pixel_count(), 8);
    assert!(!config.trace.enabled);
    // Untouched sections keep their defaults.
    assert_eq!(config.reset.settle_half_cycles, 2);
}

#[test]
fn unknown_fields_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "tick_rate": 100 }}"#).unwrap();
    let err = Config::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, HarnessError::ParseConfig { .. }));
}

#[test]
fn missing_config_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_json_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, HarnessError::ReadConfig { .. }));
}

#[test]
fn validate_accepts_the_default_regions_in_128k() {
    let config = Config::default();
    config.validate(1 << 17).unwrap();
}

#[test]
fn validate_rejects_regions_larger_than_memory() {
    let config = Config::default();
    let err = config.validate(1_000).unwrap_err();
    assert!(matches!(err, HarnessError::RegionOutOfBounds { .. }));
}
