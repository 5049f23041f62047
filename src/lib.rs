//! Wallpaper picker user event logging.
//!
//! [`UserEventLogger`] is the port every feature reports into. Sinks:
//! [`TracingUserEventLogger`] (structured logs), [`QueuedUserEventLogger`]
//! (non-blocking background dispatch), [`RecordingUserEventLogger`] (test double)
//! and [`NoOpUserEventLogger`].

use std::sync::Arc;
use tracing::info;

mod codes;
mod config;
mod dispatch;
mod event;
mod logger;
mod models;
pub mod names;
mod recording;
mod tracing_sink;

pub use codes::{
    CodeError, DailyMetadataFailure, DailyRotationStatus, DailyUpdateCrash, DailyUpdateResult,
    EffectStatus, WallpaperSetFailureReason, WallpaperSetResult,
};
pub use config::LoggingConfig;
pub use dispatch::{DispatchConfig, DispatchError, QueuedUserEventLogger};
pub use event::UserEvent;
pub use logger::{NoOpUserEventLogger, UserEventLogger};
pub use models::{ActionLabelRef, DispatchStats, LaunchSource};
pub use recording::RecordingUserEventLogger;
pub use tracing_sink::{TracingUserEventLogger, TRACING_TARGET};


/// Инициализация логирования: по умолчанию info (если RUST_LOG не задан).
/// Returns false when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .is_ok()
}

/// Собрать логгер по конфигурации: tracing sink, при необходимости за очередью
pub fn build_logger(config: &LoggingConfig) -> Result<Arc<dyn UserEventLogger>, DispatchError> {
    if !config.enabled {
        info!("[EVENTS] Event logging disabled, using no-op logger");
        return Ok(Arc::new(NoOpUserEventLogger));
    }

    let sink = Arc::new(TracingUserEventLogger::new(config.warn_on_failure));
    if !config.queued {
        return Ok(sink);
    }

    let queued = QueuedUserEventLogger::spawn(sink, config.dispatch.clone())?;
    Ok(Arc::new(queued))
}
