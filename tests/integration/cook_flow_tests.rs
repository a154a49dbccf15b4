//! End-to-end cook sessions: CookService → FSM → actuators.
//!
//! Fast-cook scenario throughout: target 26 C, margin 1 C, 5 minute
//! timer, one tick every 5 s of simulated time.

use chef_hat::app::commands::CookCommand;
use chef_hat::app::events::AppEvent;
use chef_hat::app::service::CookService;
use chef_hat::config::CookConfig;
use chef_hat::fsm::StateId;

use crate::mock_hw::{HwCall, MockHardware, RecordingSink};

const TICK_MS: u64 = 5_000;

fn fast_config() -> CookConfig {
    CookConfig {
        target_temperature_c: 26.0,
        duration_mins: 5,
        temperature_margin_c: 1.0,
        tick_interval_ms: TICK_MS,
        ..CookConfig::default()
    }
}

fn started_service(sink: &mut RecordingSink) -> CookService {
    let mut service = CookService::new(fast_config());
    service.start(0, sink);
    service
}

#[test]
fn full_session_reaches_finished() {
    let mut hw = MockHardware::new(20.0);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);
    assert_eq!(service.phase(), StateId::Preparing);

    // Cold bath: the heater comes on, the phase holds.
    service.tick(TICK_MS, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Preparing);
    assert!(hw.relay_on);
    assert!(hw.led_on);

    // Bath reaches the margin window: Preparing -> Ready.
    hw.temperature = 26.0;
    service.tick(2 * TICK_MS, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Ready);

    // Ready holds until the operator confirms.
    service.tick(3 * TICK_MS, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Ready);
    service.handle_command(CookCommand::Confirm, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::FoodIn);

    // Food knocked the bath below the window; FoodIn waits for recovery.
    hw.temperature = 24.0;
    service.tick(4 * TICK_MS, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::FoodIn);

    // Back in the window: FoodIn -> Cooking, timer armed once.
    hw.temperature = 26.0;
    service.tick(5 * TICK_MS, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Cooking);
    let end = service.end_time_ms().unwrap();
    assert_eq!(end, 5 * TICK_MS + 5 * 60_000);

    // One tick before expiry: still cooking, end time untouched.
    service.tick(end - 1, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Cooking);
    assert_eq!(service.end_time_ms(), Some(end));

    // Expiry: Cooking -> Cooked, then confirm to finish.
    service.tick(end, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Cooked);
    service.handle_command(CookCommand::Confirm, &mut hw, &mut sink);
    assert!(service.finished());

    let changes: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::StateChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        changes,
        vec![
            (StateId::Preparing, StateId::Ready),
            (StateId::Ready, StateId::FoodIn),
            (StateId::FoodIn, StateId::Cooking),
            (StateId::Cooking, StateId::Cooked),
            (StateId::Cooked, StateId::Finished),
        ]
    );
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::CookingStarted { .. })));
}

#[test]
fn abort_turns_the_cooker_off_from_any_phase() {
    for advance_to in [
        StateId::Preparing,
        StateId::Ready,
        StateId::FoodIn,
        StateId::Cooking,
    ] {
        let mut hw = MockHardware::new(20.0);
        let mut sink = RecordingSink::default();
        let mut service = started_service(&mut sink);

        // Heat the bath so the relay is on, then walk to the phase.
        service.tick(TICK_MS, &mut hw, &mut sink);
        assert!(hw.relay_on);
        if advance_to >= StateId::Ready {
            hw.temperature = 26.0;
            service.tick(2 * TICK_MS, &mut hw, &mut sink);
        }
        if advance_to >= StateId::FoodIn {
            service.handle_command(CookCommand::Confirm, &mut hw, &mut sink);
        }
        if advance_to >= StateId::Cooking {
            service.tick(3 * TICK_MS, &mut hw, &mut sink);
        }
        assert_eq!(service.phase(), advance_to);

        service.handle_command(CookCommand::Abort, &mut hw, &mut sink);
        assert!(service.finished());
        assert!(!hw.relay_on, "relay still on after abort from {advance_to:?}");
        assert!(!hw.led_on);
        assert!(sink.events.contains(&AppEvent::Aborted));
    }
}

#[test]
fn tick_after_finish_never_reenergizes() {
    let mut hw = MockHardware::new(20.0);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    service.tick(TICK_MS, &mut hw, &mut sink);
    assert!(hw.relay_on);
    service.handle_command(CookCommand::Abort, &mut hw, &mut sink);
    assert!(!hw.relay_on);

    // A stale tick drained from the same batch as the abort.
    service.tick(2 * TICK_MS, &mut hw, &mut sink);
    assert!(!hw.relay_on);
    assert!(!hw.led_on);
}

#[test]
fn abort_when_already_finished_is_a_no_op() {
    let mut hw = MockHardware::new(20.0);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    service.handle_command(CookCommand::Abort, &mut hw, &mut sink);
    assert!(service.finished());
    let events_before = sink.events.len();

    service.handle_command(CookCommand::Abort, &mut hw, &mut sink);
    assert_eq!(sink.events.len(), events_before);
}

#[test]
fn confirm_is_ignored_outside_ready_and_cooked() {
    let mut hw = MockHardware::new(20.0);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    service.handle_command(CookCommand::Confirm, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Preparing);
    assert!(sink
        .events
        .iter()
        .all(|e| !matches!(e, AppEvent::StateChanged { .. })));
}

#[test]
fn hysteresis_holds_through_the_dead_band() {
    let mut hw = MockHardware::new(20.0);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    // Below the window: heater on.
    service.tick(TICK_MS, &mut hw, &mut sink);
    assert!(hw.relay_on);

    // Inside the dead band: no change, no redundant relay command.
    let relay_calls = hw.relay_calls();
    hw.temperature = 26.5;
    service.tick(2 * TICK_MS, &mut hw, &mut sink);
    assert!(hw.relay_on);
    assert_eq!(hw.relay_calls(), relay_calls);

    // Above the window: heater off.
    hw.temperature = 27.1;
    service.tick(3 * TICK_MS, &mut hw, &mut sink);
    assert!(!hw.relay_on);
    assert!(!hw.led_on);

    // Back inside the band: stays off.
    hw.temperature = 26.5;
    service.tick(4 * TICK_MS, &mut hw, &mut sink);
    assert!(!hw.relay_on);

    // Below again: heater back on.
    hw.temperature = 24.9;
    service.tick(5 * TICK_MS, &mut hw, &mut sink);
    assert!(hw.relay_on);
}

#[test]
fn sensor_failure_keeps_last_good_reading() {
    use chef_hat::error::SensorError;

    let mut hw = MockHardware::new(24.0);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    service.tick(TICK_MS, &mut hw, &mut sink);
    assert!(hw.relay_on);

    // Probe drops out: the loop warns but keeps moderating on the last
    // good reading, so the heater stays on rather than slamming off.
    hw.sensor_error = Some(SensorError::ReadFailed);
    service.tick(2 * TICK_MS, &mut hw, &mut sink);
    assert!(hw.relay_on);
    assert!(sink.events.contains(&AppEvent::SensorUnavailable));

    // Probe recovers at a temperature above the window: heater off.
    hw.sensor_error = None;
    hw.temperature = 28.0;
    service.tick(3 * TICK_MS, &mut hw, &mut sink);
    assert!(!hw.relay_on);
}

#[test]
fn sensor_dead_from_the_start_never_heats_or_advances() {
    use chef_hat::error::SensorError;

    let mut hw = MockHardware::new(26.0);
    hw.sensor_error = Some(SensorError::Unavailable);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    for i in 1..=5 {
        service.tick(i * TICK_MS, &mut hw, &mut sink);
    }
    assert_eq!(service.phase(), StateId::Preparing);
    assert!(!hw.relay_on);
    assert_eq!(hw.relay_calls(), 0);
}

#[test]
fn relay_failure_is_retried_next_tick() {
    let mut hw = MockHardware::new(20.0);
    hw.relay_fail = true;
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    service.tick(TICK_MS, &mut hw, &mut sink);
    assert!(!hw.relay_on);
    assert_eq!(hw.calls[0], HwCall::SwitchOn);

    // Transmitter recovers; the very next tick retries the command.
    hw.relay_fail = false;
    service.tick(2 * TICK_MS, &mut hw, &mut sink);
    assert!(hw.relay_on);
}

#[test]
fn display_failure_does_not_stop_the_cook() {
    let mut hw = MockHardware::new(26.0);
    hw.display_fail = true;
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    service.tick(TICK_MS, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Ready);
    // Status events still flow even though the panel is dark.
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::Status { .. })));
}

#[test]
fn status_frame_reaches_the_display() {
    let mut hw = MockHardware::new(20.0);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    service.tick(TICK_MS, &mut hw, &mut sink);
    assert_eq!(hw.lines[0], "Prepare");
    assert_eq!(hw.lines[1], "20.0C");

    hw.temperature = 26.0;
    service.tick(2 * TICK_MS, &mut hw, &mut sink);
    assert_eq!(hw.lines[0], "Ready");
    assert_eq!(hw.lines[1], "Add food");
}

#[test]
fn end_time_is_armed_exactly_once() {
    let mut hw = MockHardware::new(26.0);
    let mut sink = RecordingSink::default();
    let mut service = started_service(&mut sink);

    service.tick(TICK_MS, &mut hw, &mut sink);
    service.handle_command(CookCommand::Confirm, &mut hw, &mut sink);
    service.tick(2 * TICK_MS, &mut hw, &mut sink);
    assert_eq!(service.phase(), StateId::Cooking);
    let end = service.end_time_ms().unwrap();

    for i in 3..20 {
        service.tick(i * TICK_MS, &mut hw, &mut sink);
        if service.phase() != StateId::Cooking {
            break;
        }
        assert_eq!(service.end_time_ms(), Some(end));
    }
}
