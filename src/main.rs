//! Chef HAT controller binary.
//!
//! Runs cook sessions back to back, forever: setup dialogue, cook,
//! repeat. A crashed session logs its error, powers everything down,
//! and the next session starts fresh.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};

use chef_hat::adapters::{HardwareAdapter, LogEventSink, MonotonicClock};
use chef_hat::app::commands::CookCommand;
use chef_hat::app::ports::{CookerPort, DisplayPort, Line};
use chef_hat::app::service::{CookService, SessionParams};
use chef_hat::app::setup::{SetupOutcome, SetupSession};
use chef_hat::config::CookConfig;
use chef_hat::drivers::ButtonBindings;
use chef_hat::events::{self, Event};

/// Poll interval while waiting for setup button presses.
const SETUP_POLL_MS: u64 = 50;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Chef HAT controller v{}", env!("CARGO_PKG_VERSION"));

    let (config, params) = parse_args().context("bad command line")?;
    let clock = MonotonicClock::new();

    loop {
        match run_session(&clock, &config, params) {
            Ok(()) if !params.auto_start => return Ok(()),
            Ok(()) => info!("SESSION | complete"),
            Err(e) => {
                warn!("SESSION | failed: {e}");
                thread::sleep(Duration::from_secs(1));
            }
        }
    }
}

/// One full session: bind buttons, run the setup dialogue, cook until
/// Finished, power down. Buttons are released when `_buttons` drops.
fn run_session(
    clock: &MonotonicClock,
    config: &CookConfig,
    params: SessionParams,
) -> Result<()> {
    let mut hw = HardwareAdapter::new()?;
    let gpio = rppal::gpio::Gpio::new().context("gpio unavailable")?;
    let _buttons = ButtonBindings::bind(&gpio)?;

    events::clear_events();

    let Some((target_c, duration_mins)) = run_setup(config, params, &mut hw) else {
        hw.all_off();
        return Ok(());
    };

    show_cook_info(&mut hw, target_c, duration_mins);

    if !params.auto_start {
        info!("SESSION | configured only, not starting");
        hw.all_off();
        return Ok(());
    }

    let cook_config = CookConfig {
        target_temperature_c: target_c,
        duration_mins,
        ..config.clone()
    };
    let tick_interval = Duration::from_millis(cook_config.tick_interval_ms);

    let mut sink = LogEventSink;
    let mut service = CookService::new(cook_config);
    service.start(clock.now_ms(), &mut sink);

    while !service.finished() {
        thread::sleep(tick_interval);
        if !events::push_event(Event::ControlTick) {
            warn!("EVENT | queue full, tick dropped");
        }
        events::drain_events(|event| match event {
            Event::ControlTick => service.tick(clock.now_ms(), &mut hw, &mut sink),
            Event::ButtonEnter => service.handle_command(CookCommand::Confirm, &mut hw, &mut sink),
            Event::ButtonBack => service.handle_command(CookCommand::Abort, &mut hw, &mut sink),
            // Up/down only mean something during setup.
            Event::ButtonUp | Event::ButtonDown => {}
        });
    }

    hw.all_off();
    Ok(())
}

/// Block on the setup dialogue. Returns the confirmed
/// `(temperature, duration)` pair, or `None` if the operator cancelled.
fn run_setup(
    config: &CookConfig,
    params: SessionParams,
    hw: &mut HardwareAdapter,
) -> Option<(f32, i64)> {
    let mut setup = SetupSession::new(config, params.temperature, params.duration);
    if setup.is_done() {
        return Some(setup.values());
    }
    setup.begin(hw);

    loop {
        match events::pop_event() {
            Some(event) => match setup.handle_button(event, hw) {
                SetupOutcome::Pending => {}
                SetupOutcome::Confirmed => return Some(setup.values()),
                SetupOutcome::Cancelled => return None,
            },
            None => thread::sleep(Duration::from_millis(SETUP_POLL_MS)),
        }
    }
}

fn show_cook_info(hw: &mut HardwareAdapter, target_c: f32, duration_mins: i64) {
    info!("COOK | target {target_c:.1} C for {duration_mins} min");
    for (line, text) in [
        (Line::Top, format!("{target_c:.0}C")),
        (Line::Bottom, format!("{duration_mins} mins")),
    ] {
        if let Err(e) = hw.write_line(line, &text) {
            warn!("LCD | write failed: {e}");
        }
    }
}

/// Minimal argument parsing:
///   --config <path>   JSON CookConfig overriding the built-in defaults
///   --temp <celsius>  skip the temperature stage of setup
///   --mins <minutes>  skip the timer stage of setup
///   --no-start        configure and show the cook info, then stop
fn parse_args() -> Result<(CookConfig, SessionParams)> {
    let mut config = CookConfig::default();
    let mut params = SessionParams::default();

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .with_context(|| format!("{flag} requires a value"))
        };
        match flag.as_str() {
            "--config" => {
                let path = value()?;
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {path}"))?;
                config = serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
            }
            "--temp" => {
                params.temperature = Some(value()?.parse().context("--temp must be a number")?);
            }
            "--mins" => {
                params.duration = Some(value()?.parse().context("--mins must be an integer")?);
            }
            "--no-start" => params.auto_start = false,
            other => anyhow::bail!("unknown flag: {other}"),
        }
    }
    Ok((config, params))
}
