//! Build script for wiper-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates wiper.toml at compile time
//! - Generates the configuration constants the firmware boots with

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use wiper_core::config::{PinConfig, WiperConfig};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Linker scripts from cortex-m-rt and defmt, only for the embedded target
    if env::var("TARGET").map_or(false, |t| t.starts_with("thumb")) {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate wiper.toml configuration at compile time
fn validate_config() -> WiperConfig {
    // Re-run if wiper.toml changes
    println!("cargo:rerun-if-changed=wiper.toml");

    let config_path = Path::new("wiper.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: wiper.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a wiper.toml configuration file.          ║\n\
            ║  Please create one in the wiper-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read wiper.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and section shapes in one go
    let config: WiperConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid wiper.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Validate ranges and pin assignments
    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in wiper.toml                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("{:?}", e))
        );
    }

    println!("cargo:warning=wiper.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated configuration as a Rust constant
fn generate_config(config: &WiperConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let mut src = String::new();
    writeln!(src, "// Generated from wiper.toml by build.rs").unwrap();
    writeln!(src, "pub const CONFIG: WiperConfig = WiperConfig {{").unwrap();
    writeln!(
        src,
        "    timing: TimingConfig {{ quantum_ms: {} }},",
        config.timing.quantum_ms
    )
    .unwrap();
    writeln!(
        src,
        "    buttons: ButtonConfig {{ wipe: {}, wash: {} }},",
        pin_literal(&config.buttons.wipe),
        pin_literal(&config.buttons.wash)
    )
    .unwrap();
    writeln!(
        src,
        "    motor: MotorConfig {{ windings: {:?} }},",
        config.motor.windings
    )
    .unwrap();
    writeln!(
        src,
        "    pump: PumpConfig {{ pin: {} }},",
        pin_literal(&config.pump.pin)
    )
    .unwrap();
    writeln!(src, "}};").unwrap();

    fs::write(out_dir.join("wiper_config.rs"), src).unwrap();
}

fn pin_literal(pin: &PinConfig) -> String {
    format!(
        "PinConfig {{ pin: {}, inverted: {}, pull_up: {} }}",
        pin.pin, pin.inverted, pin.pull_up
    )
}
