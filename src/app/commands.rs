//! Inbound commands to the cook service.
//!
//! These represent button-driven actions drained from the event queue
//! that the [`CookService`](super::service::CookService) interprets and
//! acts upon.

/// Commands the main loop can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookCommand {
    /// Enter button: advances Ready → FoodIn or Cooked → Finished.
    /// Ignored in every other phase (no binding is installed there).
    Confirm,

    /// Back button: jump straight to Finished from any phase.
    Abort,
}
