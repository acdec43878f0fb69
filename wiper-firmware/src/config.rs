//! Build-time configuration
//!
//! `build.rs` validates `wiper.toml` and turns it into the [`CONFIG`]
//! constant included here, so a bad configuration fails the build rather
//! than the boot.

use wiper_core::config::{
    ButtonConfig, MotorConfig, PinConfig, PumpConfig, TimingConfig, WiperConfig,
};

include!(concat!(env!("OUT_DIR"), "/wiper_config.rs"));
