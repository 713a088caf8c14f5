//! Waiting capability used for every simulated hardware delay.
//!
//! The machine never sleeps directly. It asks its `Clock` to wait, so
//! tests can swap in [`InstantClock`] and run without real delays.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Something that can suspend the caller for a duration.
pub trait Clock: Send + Sync {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real timer backed by `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Returns immediately and keeps a running total of requested waits.
///
/// Clones share the same total.
#[derive(Clone, Debug, Default)]
pub struct InstantClock {
    waited_ms: Arc<AtomicU64>,
    waits: Arc<AtomicU64>,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of every duration passed to `wait`.
    pub fn waited(&self) -> Duration {
        Duration::from_millis(self.waited_ms.load(Ordering::SeqCst))
    }

    /// Number of times `wait` was called.
    pub fn waits(&self) -> u64 {
        self.waits.load(Ordering::SeqCst)
    }
}

impl Clock for InstantClock {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.waited_ms.fetch_add(millis, Ordering::SeqCst);
        self.waits.fetch_add(1, Ordering::SeqCst);
        std::future::ready(())
    }
}
