//! Cancellation signals polled between extraction phases.
//!
//! Extraction is CPU-bound and never blocks, so cancellation is cooperative:
//! the engine asks the signal after each phase and aborts with
//! [`Error::Cancelled`](crate::Error::Cancelled) when it has fired.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A source of cancellation checked between phases.
pub trait CancelSignal: Send + Sync {
    /// Returns true once the caller wants the extraction abandoned.
    fn is_cancelled(&self) -> bool;
}

/// Signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl CancelSignal for Never {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancelSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Signal that fires once a point in time has passed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    /// Deadline `timeout` from now.
    #[must_use]
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    /// Deadline at an absolute instant.
    #[must_use]
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }
}

impl CancelSignal for Deadline {
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.0
    }
}

#[cfg(feature = "tokio")]
impl CancelSignal for tokio_util::sync::CancellationToken {
    fn is_cancelled(&self) -> bool {
        tokio_util::sync::CancellationToken::is_cancelled(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_does_not_fire() {
        assert!(!Never.is_cancelled());
    }

    #[test]
    fn test_atomic_flag_fires_after_store() {
        let flag = Arc::new(AtomicBool::new(false));
        assert!(!flag.is_cancelled());
        flag.store(true, Ordering::Release);
        assert!(flag.is_cancelled());
    }

    #[test]
    fn test_elapsed_deadline_fires() {
        assert!(Deadline::after(Duration::ZERO).is_cancelled());
        assert!(!Deadline::after(Duration::from_secs(3600)).is_cancelled());
    }
}
