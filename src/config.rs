use crate::dispatch::{DispatchConfig, MAX_QUEUE_CAPACITY};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const ENV_ENABLED: &str = "WALLPAPER_EVENTS_ENABLED";
pub const ENV_QUEUED: &str = "WALLPAPER_EVENTS_QUEUED";
pub const ENV_WARN_ON_FAILURE: &str = "WALLPAPER_EVENTS_WARN_ON_FAILURE";
pub const ENV_QUEUE_CAPACITY: &str = "WALLPAPER_EVENTS_QUEUE_CAPACITY";

/// Конфигурация логирования событий.
/// Missing fields fall back to defaults, so it can be embedded in a larger app config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// false → все события отбрасываются (NoOp)
    pub enabled: bool,
    /// Пропускать события через фоновую очередь вместо синхронной записи
    pub queued: bool,
    pub warn_on_failure: bool,
    pub dispatch: DispatchConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            queued: true,
            warn_on_failure: true,
            dispatch: DispatchConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Defaults overridden by `WALLPAPER_EVENTS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = parse_var(&lookup, ENV_ENABLED) {
            config.enabled = value;
        }
        if let Some(value) = parse_var(&lookup, ENV_QUEUED) {
            config.queued = value;
        }
        if let Some(value) = parse_var(&lookup, ENV_WARN_ON_FAILURE) {
            config.warn_on_failure = value;
        }
        if let Some(value) = parse_var::<_, usize>(&lookup, ENV_QUEUE_CAPACITY) {
            if value == 0 || value > MAX_QUEUE_CAPACITY {
                warn!(
                    "[CONFIG] Ignoring out-of-range value {} for {} (allowed 1..={})",
                    value, ENV_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY
                );
            } else {
                config.dispatch.queue_capacity = value;
            }
        }
        config
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("[CONFIG] Ignoring invalid value {:?} for {}", raw, key);
            None
        }
    }
}
