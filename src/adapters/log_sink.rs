//! Event sink that writes structured application events to the log.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::format;
use crate::app::ports::EventSink;

/// Production sink: every [`AppEvent`] becomes one log line with a
/// `CATEGORY | detail` shape, greppable per subsystem.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(phase) => info!("START | session begins in {phase:?}"),
            AppEvent::StateChanged { from, to } => info!("PHASE | {from:?} -> {to:?}"),
            AppEvent::CookingStarted { end_time_ms } => {
                info!("TIMER | cook ends at t+{end_time_ms} ms");
            }
            AppEvent::Status {
                phase,
                celsius,
                cooker_on,
                remaining_ms,
            } => {
                info!(
                    "STATUS | {}",
                    format::status_line(*phase, *celsius, *cooker_on, *remaining_ms)
                );
            }
            AppEvent::SensorUnavailable => warn!("PROBE | no reading this tick"),
            AppEvent::Aborted => info!("ABORT | session cancelled by operator"),
        }
    }
}
