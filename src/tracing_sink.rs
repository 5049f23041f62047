use crate::event::UserEvent;
use crate::logger::UserEventLogger;
use tracing::{info, warn};

/// Target used for every analytics record, so subscribers can route them separately.
pub const TRACING_TARGET: &str = "wallpaper_events";

/// Sink that writes each event as one structured `tracing` record.
///
/// Fields: `event` (stable event name) and `payload` (the event serialized as JSON,
/// codes as integers). Failure outcomes go out at WARN when `warn_on_failure` is set.
#[derive(Debug, Clone)]
pub struct TracingUserEventLogger {
    warn_on_failure: bool,
}

impl Default for TracingUserEventLogger {
    fn default() -> Self {
        Self {
            warn_on_failure: true,
        }
    }
}

impl TracingUserEventLogger {
    pub fn new(warn_on_failure: bool) -> Self {
        Self { warn_on_failure }
    }
}

impl UserEventLogger for TracingUserEventLogger {
    fn log_event(&self, event: UserEvent) {
        let name = event.name();
        // Сериализация не должна ронять вызывающего: при ошибке пишем только имя
        let payload = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => {
                warn!("[EVENTS] Failed to serialize {} payload: {}", name, e);
                String::new()
            }
        };

        if self.warn_on_failure && event.is_failure() {
            warn!(target: TRACING_TARGET, event = name, payload = %payload, "[EVENTS] {}", name);
        } else {
            info!(target: TRACING_TARGET, event = name, payload = %payload, "[EVENTS] {}", name);
        }
    }
}
