use std::sync::atomic::{AtomicBool, Ordering};

/// Monotonic stop flag polled by tasks before each cell.
///
/// Once raised it stays raised; raising it again is a no-op.
#[derive(Debug, Default)]
pub struct CancelSignal {
    raised: AtomicBool,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Returns `true` for the call that actually raised it.
    #[inline]
    pub fn cancel(&self) -> bool {
        !self.raised.swap(true, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::CancelSignal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn starts_unset_and_stays_set() {
        let signal = CancelSignal::new();
        assert!(!signal.is_cancelled());
        assert!(signal.cancel());
        assert!(signal.is_cancelled());
        assert!(!signal.cancel());
        assert!(signal.is_cancelled());
    }

    #[test]
    fn only_one_racer_raises() {
        let signal = CancelSignal::new();
        let winners = AtomicUsize::new(0);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    if signal.cancel() {
                        winners.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });
        assert_eq!(winners.load(Ordering::Relaxed), 1);
        assert!(signal.is_cancelled());
    }
}
