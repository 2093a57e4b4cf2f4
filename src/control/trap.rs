use std::sync::{Mutex, PoisonError};

/// Single-assignment holder for the first error raised by any task.
///
/// Later calls to [`ErrorTrap::set`] are discarded. The trap is meant to be
/// read once, after every task has joined.
#[derive(Debug)]
pub struct ErrorTrap<E> {
    slot: Mutex<Option<E>>,
}

impl<E> Default for ErrorTrap<E> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<E> ErrorTrap<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `err` unless an error is already held. Returns `true` if stored.
    pub fn set(&self, err: E) -> bool {
        // Poisoning leaves the Option intact.
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return false;
        }
        *slot = Some(err);
        true
    }

    pub fn is_set(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Copy of the held error, if any.
    pub fn err(&self) -> Option<E>
    where
        E: Clone,
    {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Consume the trap and return the held error, if any.
    pub fn into_inner(self) -> Option<E> {
        self.slot
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorTrap;

    #[test]
    fn new_trap_is_empty() {
        let trap: ErrorTrap<&str> = ErrorTrap::new();
        assert!(!trap.is_set());
        assert_eq!(trap.err(), None);
        assert_eq!(trap.into_inner(), None);
    }

    #[test]
    fn keeps_first_error() {
        let trap = ErrorTrap::new();
        assert!(trap.set("first error"));
        assert!(!trap.set("second error"));
        assert!(trap.is_set());
        assert_eq!(trap.err(), Some("first error"));
        assert_eq!(trap.into_inner(), Some("first error"));
    }

    #[test]
    fn concurrent_sets_store_exactly_one() {
        let trap = ErrorTrap::new();
        let stored: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let trap = &trap;
                    s.spawn(move || trap.set(i) as usize)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });
        assert_eq!(stored, 1);
        let held = trap.into_inner().expect("one error stored");
        assert!(held < 16);
    }
}
