use std::time::{Duration, Instant};

/// Min, max and mean wall time over a sequence of rendered frames.
pub struct FrameTimer {
    min_time: Duration,
    max_time: Duration,
    total_time: Duration,
    frames: u32,

    time_mark: Instant,
}

impl FrameTimer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_time: Duration::MAX,
            max_time: Duration::ZERO,
            total_time: Duration::ZERO,
            frames: 0,
            time_mark: Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.time_mark = Instant::now();
    }

    /// Returns the time since the matching `start`.
    pub fn stop(&mut self) -> Duration {
        let delta = self.time_mark.elapsed();
        self.record(delta);
        delta
    }

    pub(crate) fn record(&mut self, delta: Duration) {
        self.min_time = self.min_time.min(delta);
        self.max_time = self.max_time.max(delta);
        self.total_time += delta;
        self.frames += 1;
    }

    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    #[must_use]
    pub fn min_time(&self) -> Option<Duration> {
        (self.frames > 0).then_some(self.min_time)
    }

    #[must_use]
    pub fn max_time(&self) -> Option<Duration> {
        (self.frames > 0).then_some(self.max_time)
    }

    #[must_use]
    pub fn average_time(&self) -> Option<Duration> {
        (self.frames > 0).then(|| self.total_time / self.frames)
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
