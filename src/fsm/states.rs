//! Concrete state handler functions and table builder.
//!
//! Each phase is defined by plain `fn` pointers in a static table. The
//! temperature-driven transitions live here; the two confirm-button
//! advances (Ready → FoodIn, Cooked → Finished) and the back-button
//! abort are forced from the service when the corresponding event is
//! drained, so those states simply hold.

use super::context::CookContext;
use super::{StateDescriptor, StateId};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table. Called once per session.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Preparing
        StateDescriptor {
            id: StateId::Preparing,
            name: "Preparing",
            on_enter: Some(preparing_enter),
            on_exit: None,
            on_update: preparing_update,
        },
        // Index 1 — Ready
        StateDescriptor {
            id: StateId::Ready,
            name: "Ready",
            on_enter: Some(ready_enter),
            on_exit: None,
            on_update: hold,
        },
        // Index 2 — FoodIn
        StateDescriptor {
            id: StateId::FoodIn,
            name: "FoodIn",
            on_enter: Some(food_in_enter),
            on_exit: None,
            on_update: food_in_update,
        },
        // Index 3 — Cooking
        StateDescriptor {
            id: StateId::Cooking,
            name: "Cooking",
            on_enter: Some(cooking_enter),
            on_exit: None,
            on_update: cooking_update,
        },
        // Index 4 — Cooked
        StateDescriptor {
            id: StateId::Cooked,
            name: "Cooked",
            on_enter: Some(cooked_enter),
            on_exit: None,
            on_update: hold,
        },
        // Index 5 — Finished
        StateDescriptor {
            id: StateId::Finished,
            name: "Finished",
            on_enter: Some(finished_enter),
            on_exit: None,
            on_update: hold,
        },
    ]
}

/// Shared handler for button-driven and terminal states: stay put until
/// an external force-transition moves us.
fn hold(_ctx: &mut CookContext) -> Option<StateId> {
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  PREPARING — bringing the water bath up to temperature
// ═══════════════════════════════════════════════════════════════════════════

fn preparing_enter(ctx: &mut CookContext) {
    info!(
        "PREPARING: heating bath to {:.1}C (±{:.1}C)",
        ctx.config.target_temperature_c, ctx.config.temperature_margin_c
    );
}

fn preparing_update(ctx: &mut CookContext) -> Option<StateId> {
    if ctx.bath_in_range() {
        return Some(StateId::Ready);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  READY — bath at temperature, waiting for the food
// ═══════════════════════════════════════════════════════════════════════════

fn ready_enter(ctx: &mut CookContext) {
    info!(
        "READY: bath at {:.2}C — add food and press enter to continue",
        ctx.probe.celsius
    );
}

// ═══════════════════════════════════════════════════════════════════════════
//  FOOD IN — cold food dropped the bath, waiting for recovery
// ═══════════════════════════════════════════════════════════════════════════

fn food_in_enter(_ctx: &mut CookContext) {
    info!("FOOD IN: waiting for bath to recover to the margin window");
}

fn food_in_update(ctx: &mut CookContext) -> Option<StateId> {
    if ctx.bath_in_range() {
        return Some(StateId::Cooking);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  COOKING — timer running
// ═══════════════════════════════════════════════════════════════════════════

fn cooking_enter(ctx: &mut CookContext) {
    // The end time is written exactly once, here; re-entry cannot happen
    // (phases are monotonic) but the guard keeps the invariant explicit.
    if ctx.end_time_ms.is_none() {
        let end = ctx.now_ms + ctx.config.duration_ms();
        ctx.end_time_ms = Some(end);
        info!(
            "COOKING: {} minutes on the clock",
            ctx.config.duration_mins.max(0)
        );
    }
}

fn cooking_update(ctx: &mut CookContext) -> Option<StateId> {
    match ctx.end_time_ms {
        Some(end) if ctx.now_ms >= end => Some(StateId::Cooked),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  COOKED — done, waiting for acknowledgement
// ═══════════════════════════════════════════════════════════════════════════

fn cooked_enter(_ctx: &mut CookContext) {
    info!("COOKED: press enter to finish");
}

// ═══════════════════════════════════════════════════════════════════════════
//  FINISHED — loop sentinel
// ═══════════════════════════════════════════════════════════════════════════

fn finished_enter(ctx: &mut CookContext) {
    // Kill the relay and LED on the way out; the abort path arrives here
    // directly, so this is the one place that guarantees everything off.
    ctx.commands = super::context::ActuatorCommands::all_off();
    info!("FINISHED");
}
