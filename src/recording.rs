use crate::event::UserEvent;
use crate::logger::UserEventLogger;
use std::sync::{Arc, Mutex, MutexGuard};

/// Логгер-двойник для тестов: записывает каждый вызов порта в порядке поступления.
/// Clones share the same record, so one handle can be given to the code under test
/// and another kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingUserEventLogger {
    events: Arc<Mutex<Vec<UserEvent>>>,
}

impl RecordingUserEventLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poisoning is ignored: a panicking caller must not hide the calls recorded before it.
    fn lock(&self) -> MutexGuard<'_, Vec<UserEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn events(&self) -> Vec<UserEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn last(&self) -> Option<UserEvent> {
        self.lock().last().cloned()
    }

    /// Количество записанных событий с данным именем
    pub fn count(&self, name: &str) -> usize {
        self.lock().iter().filter(|e| e.name() == name).count()
    }

    /// Забрать все записанные события, очистив журнал
    pub fn take(&self) -> Vec<UserEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl UserEventLogger for RecordingUserEventLogger {
    fn log_event(&self, event: UserEvent) {
        self.lock().push(event);
    }
}
