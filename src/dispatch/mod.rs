use crate::event::UserEvent;
use crate::logger::UserEventLogger;
use crate::models::DispatchStats;
use chrono::Utc;
use scopeguard::guard;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error, info, warn};

/// Ошибки запуска очереди отправки
#[derive(Debug)]
pub enum DispatchError {
    ZeroCapacity,
    CapacityTooLarge(usize),
    Runtime(String),
    Spawn(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::ZeroCapacity => write!(f, "Queue capacity must be greater than zero"),
            DispatchError::CapacityTooLarge(capacity) => write!(
                f,
                "Queue capacity {} exceeds the maximum of {}",
                capacity, MAX_QUEUE_CAPACITY
            ),
            DispatchError::Runtime(s) => write!(f, "Runtime: {}", s),
            DispatchError::Spawn(s) => write!(f, "Worker spawn: {}", s),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Верхняя граница ёмкости: tokio mpsc паникует при большем числе permits
pub const MAX_QUEUE_CAPACITY: usize = tokio::sync::Semaphore::MAX_PERMITS;

/// Конфигурация очереди (ёмкость, имя рабочего потока)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub queue_capacity: usize,
    pub worker_name: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 256,
            worker_name: "wallpaper-events-dispatch".to_string(),
        }
    }
}

struct Envelope {
    event: UserEvent,
    enqueued_at_ms: i64,
}

#[derive(Default)]
struct Counters {
    enqueued: AtomicU64,
    delivered: AtomicU64,
    dropped: AtomicU64,
    is_running: AtomicBool,
}

/// Non-blocking sink: events go into a bounded queue and a dedicated worker thread
/// replays them onto the inner logger.
///
/// Callers are never blocked and never see an error. A full or closed queue drops
/// the event and bumps the `dropped` counter.
pub struct QueuedUserEventLogger {
    sender: Option<mpsc::Sender<Envelope>>,
    worker: Option<JoinHandle<()>>,
    counters: Arc<Counters>,
}

impl QueuedUserEventLogger {
    pub fn spawn(
        inner: Arc<dyn UserEventLogger>,
        config: DispatchConfig,
    ) -> Result<Self, DispatchError> {
        if config.queue_capacity == 0 {
            return Err(DispatchError::ZeroCapacity);
        }
        if config.queue_capacity > MAX_QUEUE_CAPACITY {
            return Err(DispatchError::CapacityTooLarge(config.queue_capacity));
        }

        // Отдельный runtime: вызывающий код может вообще не работать внутри tokio
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DispatchError::Runtime(e.to_string()))?;

        let (sender, receiver) = mpsc::channel(config.queue_capacity);
        let counters = Arc::new(Counters::default());
        counters.is_running.store(true, Ordering::Release);

        let worker_counters = counters.clone();
        let worker = std::thread::Builder::new()
            .name(config.worker_name.clone())
            .spawn(move || {
                // is_running сбрасывается всегда, даже при панике внутри worker
                let flag = worker_counters.clone();
                let _guard = guard((), move |_| {
                    flag.is_running.store(false, Ordering::Release);
                });
                runtime.block_on(drain(receiver, inner, &worker_counters));
            })
            .map_err(|e| {
                counters.is_running.store(false, Ordering::Release);
                DispatchError::Spawn(e.to_string())
            })?;

        info!(
            "[DISPATCH] Event queue started (capacity {}, worker {})",
            config.queue_capacity, config.worker_name
        );

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
            counters,
        })
    }

    pub fn stats(&self) -> DispatchStats {
        DispatchStats {
            enqueued: self.counters.enqueued.load(Ordering::Acquire),
            delivered: self.counters.delivered.load(Ordering::Acquire),
            dropped: self.counters.dropped.load(Ordering::Acquire),
            is_running: self.counters.is_running.load(Ordering::Acquire),
        }
    }

    /// Закрыть очередь, дождаться доставки оставшихся событий и остановить worker
    pub fn shutdown(mut self) -> DispatchStats {
        self.close_and_join();
        self.stats()
    }

    fn close_and_join(&mut self) {
        // Drop sender: worker дочитывает очередь и выходит по закрытию канала
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("[DISPATCH] Worker thread panicked during shutdown");
            }
        }
    }
}

impl Drop for QueuedUserEventLogger {
    fn drop(&mut self) {
        self.close_and_join();
    }
}

impl UserEventLogger for QueuedUserEventLogger {
    fn log_event(&self, event: UserEvent) {
        let name = event.name();
        let Some(sender) = self.sender.as_ref() else {
            self.counters.dropped.fetch_add(1, Ordering::AcqRel);
            debug!("[DISPATCH] Queue already shut down, dropping {}", name);
            return;
        };

        let envelope = Envelope {
            event,
            enqueued_at_ms: Utc::now().timestamp_millis(),
        };
        match sender.try_send(envelope) {
            Ok(()) => {
                self.counters.enqueued.fetch_add(1, Ordering::AcqRel);
            }
            Err(TrySendError::Full(_)) => {
                self.counters.dropped.fetch_add(1, Ordering::AcqRel);
                warn!("[DISPATCH] Queue full, dropping {}", name);
            }
            Err(TrySendError::Closed(_)) => {
                self.counters.dropped.fetch_add(1, Ordering::AcqRel);
                debug!("[DISPATCH] Queue closed, dropping {}", name);
            }
        }
    }
}

async fn drain(
    mut receiver: mpsc::Receiver<Envelope>,
    inner: Arc<dyn UserEventLogger>,
    counters: &Counters,
) {
    debug!("[DISPATCH] Worker started");
    while let Some(envelope) = receiver.recv().await {
        let name = envelope.event.name();
        // Паника во внутреннем sink теряет одно событие, но не останавливает очередь
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            envelope.event.replay(inner.as_ref());
        }));
        match outcome {
            Ok(()) => {
                counters.delivered.fetch_add(1, Ordering::AcqRel);
                let waited_ms = Utc::now().timestamp_millis() - envelope.enqueued_at_ms;
                debug!("[DISPATCH] Delivered {} after {}ms in queue", name, waited_ms);
            }
            Err(_) => {
                counters.dropped.fetch_add(1, Ordering::AcqRel);
                error!("[DISPATCH] Sink panicked while handling {}, event dropped", name);
            }
        }
    }
    info!("[DISPATCH] Queue closed, worker exiting");
}
