use super::{poll_all, SensorFrame, SensorSource};
use crate::lock_or_recover;
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Latest published frame plus a counter bumped on every publish.
#[derive(Debug, Default)]
pub struct SharedFrame {
    frame: Mutex<SensorFrame>,
    generation: AtomicU64,
}

impl SharedFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last writer wins.
    pub fn publish(&self, frame: SensorFrame) {
        *lock_or_recover(&self.frame, "sensor frame publish") = frame;
        self.generation.fetch_add(1, Ordering::Release);
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn latest(&self) -> SensorFrame {
        lock_or_recover(&self.frame, "sensor frame read").clone()
    }
}

/// Per-consumer view that only hands out frames it has not seen.
#[derive(Debug, Clone)]
pub struct FrameReader {
    shared: Arc<SharedFrame>,
    seen: u64,
}

impl FrameReader {
    pub fn new(shared: Arc<SharedFrame>) -> Self {
        Self { shared, seen: 0 }
    }

    pub fn poll(&mut self) -> Option<SensorFrame> {
        let generation = self.shared.generation();
        if generation == self.seen {
            return None;
        }
        self.seen = generation;
        Some(self.shared.latest())
    }
}

/// Background thread that polls a source at a fixed period.
pub struct SensorPoller {
    shared: Arc<SharedFrame>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl SensorPoller {
    pub fn spawn(mut source: Box<dyn SensorSource>, keys: Vec<String>, period: Duration) -> Self {
        let shared = Arc::new(SharedFrame::new());
        let publish_to = Arc::clone(&shared);
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = thread::spawn(move || {
            tracing::debug!(
                keys = keys.len(),
                period_ms = period.as_millis() as u64,
                "sensor poller started"
            );
            loop {
                publish_to.publish(poll_all(source.as_mut(), &keys));
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            tracing::debug!("sensor poller stopped");
        });

        Self {
            shared,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn reader(&self) -> FrameReader {
        FrameReader::new(Arc::clone(&self.shared))
    }

    pub fn shared(&self) -> Arc<SharedFrame> {
        Arc::clone(&self.shared)
    }

    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.try_send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                crate::log_debug("sensor poller thread panicked");
            }
        }
    }
}

impl Drop for SensorPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
