use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives pixel counts while a frame renders; called from worker threads.
pub trait ProgressObserver: Sync {
    fn on_progress(&self, completed: usize, total: usize);
}

pub(crate) struct ProgressCounter {
    completed: AtomicUsize,
    total: usize,
}

impl ProgressCounter {
    #[must_use]
    pub(crate) fn new(total: usize) -> Self {
        Self { completed: AtomicUsize::new(0), total }
    }

    /// Returns the count including `pixels`.
    pub(crate) fn advance(&self, pixels: usize) -> usize {
        self.completed.fetch_add(pixels, Ordering::Relaxed) + pixels
    }

    #[must_use]
    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub(crate) fn total(&self) -> usize {
        self.total
    }
}
