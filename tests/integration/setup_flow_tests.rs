//! Setup dialogue driven through the display port.

use chef_hat::app::setup::{SetupOutcome, SetupSession};
use chef_hat::config::CookConfig;
use chef_hat::events::Event;

use crate::mock_hw::MockHardware;

#[test]
fn dialogue_renders_both_prompts() {
    let mut hw = MockHardware::new(20.0);
    let config = CookConfig::default();
    let mut setup = SetupSession::new(&config, None, None);

    setup.begin(&mut hw);
    assert_eq!(hw.lines[0], "Temp:");
    assert_eq!(hw.lines[1], "     55C");

    assert_eq!(setup.handle_button(Event::ButtonUp, &mut hw), SetupOutcome::Pending);
    assert_eq!(hw.lines[0], "Temp:");
    assert_eq!(hw.lines[1], "     56C");

    assert_eq!(
        setup.handle_button(Event::ButtonEnter, &mut hw),
        SetupOutcome::Pending
    );
    assert_eq!(hw.lines[0], "Timer:");
    assert_eq!(hw.lines[1], "120 mins");

    setup.handle_button(Event::ButtonDown, &mut hw);
    assert_eq!(hw.lines[0], "Timer:");
    assert_eq!(hw.lines[1], "115 mins");

    assert_eq!(
        setup.handle_button(Event::ButtonEnter, &mut hw),
        SetupOutcome::Confirmed
    );
    assert_eq!(setup.values(), (56.0, 115));
}

#[test]
fn seeded_default_is_rendered_before_any_press() {
    let mut hw = MockHardware::new(20.0);
    let config = CookConfig::default();
    let setup = SetupSession::new(&config, None, None);

    // An operator who confirms immediately must see the value a bare
    // confirm would keep.
    setup.begin(&mut hw);
    assert_eq!(hw.lines[0], "Temp:");
    assert_eq!(hw.lines[1], "     55C");
}

#[test]
fn dialogue_survives_a_dark_panel() {
    let mut hw = MockHardware::new(20.0);
    hw.display_fail = true;
    let config = CookConfig::default();
    let mut setup = SetupSession::new(&config, None, None);

    setup.begin(&mut hw);
    setup.handle_button(Event::ButtonUp, &mut hw);
    setup.handle_button(Event::ButtonEnter, &mut hw);
    assert_eq!(
        setup.handle_button(Event::ButtonEnter, &mut hw),
        SetupOutcome::Confirmed
    );
    assert_eq!(setup.values(), (56.0, 120));
}

#[test]
fn cancel_mid_dialogue() {
    let mut hw = MockHardware::new(20.0);
    let config = CookConfig::default();
    let mut setup = SetupSession::new(&config, None, None);

    setup.handle_button(Event::ButtonUp, &mut hw);
    setup.handle_button(Event::ButtonEnter, &mut hw);
    assert_eq!(
        setup.handle_button(Event::ButtonBack, &mut hw),
        SetupOutcome::Cancelled
    );
}

#[test]
fn preset_values_bypass_the_dialogue() {
    let config = CookConfig::default();
    let setup = SetupSession::new(&config, Some(62.5), Some(45));
    assert!(setup.is_done());
    assert_eq!(setup.values(), (62.5, 45));
}
