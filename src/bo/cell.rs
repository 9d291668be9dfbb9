//! One-time initialization for class descriptors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// A lazily built, process-wide value with an observable build counter.
///
/// `ClassCell` runs its factory at most once, even when several threads race
/// on first access; every caller gets a reference to the same fully built
/// value. It can live in a `static`:
///
/// ```rust,ignore
/// static SAMPLE: ClassCell<SampleClass> = ClassCell::new(SampleClass::build);
/// ```
#[derive(Debug)]
pub struct ClassCell<T> {
    value: OnceLock<T>,
    init: fn() -> T,
    builds: AtomicUsize,
}

impl<T> ClassCell<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            value: OnceLock::new(),
            init,
            builds: AtomicUsize::new(0),
        }
    }

    /// Get the value, building it on first access.
    pub fn get(&self) -> &T {
        self.value.get_or_init(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            (self.init)()
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Number of times the factory has run (0 or 1).
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    static FACTORY_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn slow_factory() -> Vec<u32> {
        FACTORY_CALLS.fetch_add(1, Ordering::SeqCst);
        thread::sleep(std::time::Duration::from_millis(20));
        vec![1, 2, 3]
    }

    #[test]
    fn test_not_initialized_until_first_get() {
        let cell = ClassCell::new(|| 42_u32);
        assert!(!cell.is_initialized());
        assert_eq!(cell.build_count(), 0);

        assert_eq!(*cell.get(), 42);
        assert!(cell.is_initialized());
        assert_eq!(cell.build_count(), 1);
    }

    #[test]
    fn test_repeated_get_returns_same_reference() {
        let cell = ClassCell::new(|| String::from("descriptor"));
        let first = cell.get() as *const String;
        let second = cell.get() as *const String;

        assert_eq!(first, second);
        assert_eq!(cell.build_count(), 1);
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        static CELL: ClassCell<Vec<u32>> = ClassCell::new(slow_factory);
        const THREADS: usize = 16;

        let barrier = Arc::new(Barrier::new(THREADS));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    CELL.get() as *const Vec<u32> as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(CELL.build_count(), 1);
        assert_eq!(FACTORY_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(CELL.get(), &vec![1, 2, 3]);
    }
}
