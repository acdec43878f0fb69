//! Wiper - Stepper Wiper & Washer Controller Firmware
//!
//! Main firmware binary for RP2040-based boards. Samples the wipe and wash
//! buttons, steps a five-winding stepper motor through the sweep table and
//! pulses the washer pump.
//!
//! The interpreter loop owns the core: every dwell is a blocking wait, so
//! the button sampling interval never drops below one state's dwell.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use wiper_core::actuator::ToggleOnWrite;
use wiper_core::config::WiperConfig;
use wiper_core::fsm::{Interpreter, Position, Step, WIPER_TABLE};
use wiper_drivers::{ButtonPair, PinBank, QuantumDelay};
use wiper_hal_rp2040::{GpioPool, PinError, RpInput, RpOutput};

mod config;

type Buttons = ButtonPair<RpInput<'static>, RpInput<'static>>;
type Actuators = ToggleOnWrite<PinBank<RpOutput<'static>, RpOutput<'static>>>;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Wiper firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let mut pins = GpioPool::new(p);
    info!("Peripherals initialized");

    let config = config::CONFIG;
    info!(
        "Config: quantum={}ms, wipe=gpio{}, wash=gpio{}, pump=gpio{}",
        config.timing.quantum_ms,
        config.buttons.wipe.pin,
        config.buttons.wash.pin,
        config.pump.pin.pin
    );

    if let Err(e) = WIPER_TABLE.validate() {
        defmt::panic!("Transition table rejected: {}", e);
    }
    info!("Transition table: {} states", WIPER_TABLE.len());

    let (buttons, actuators) = match setup_io(&mut pins, &config) {
        Ok(io) => io,
        Err(e) => defmt::panic!("Pin setup failed: {}", e),
    };
    info!("Buttons and actuators ready");

    let dwell = QuantumDelay::new(Delay, config.timing);
    let mut fsm = Interpreter::new(&WIPER_TABLE, buttons, actuators, dwell);

    info!("Starting at {}", Position::of(fsm.cursor()));
    fsm.run_with(log_step)
}

/// Claim the configured pins and build the input and output collaborators
fn setup_io(pins: &mut GpioPool, config: &WiperConfig) -> Result<(Buttons, Actuators), PinError> {
    let wipe = pins.input(config.buttons.wipe)?;
    let wash = pins.input(config.buttons.wash)?;
    let buttons = ButtonPair::new(wipe, wash, config.buttons);

    let [w0, w1, w2, w3, w4] = config.motor.windings;
    let windings = [
        pins.output(w0)?,
        pins.output(w1)?,
        pins.output(w2)?,
        pins.output(w3)?,
        pins.output(w4)?,
    ];
    let pump = pins.inactive_output(config.pump.pin)?;
    let bank = PinBank::new(windings, pump, config.pump);

    Ok((buttons, ToggleOnWrite::new(bank)))
}

fn log_step(step: &Step) {
    if step.from != step.to {
        debug!(
            "{} --{}--> {}",
            Position::of(step.from),
            step.input.bits(),
            Position::of(step.to)
        );
    } else {
        trace!("hold {}", Position::of(step.from));
    }
}
