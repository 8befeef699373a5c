use crate::animation::keyframeable::Keyframeable;
use crate::animation::track::Track;
use crate::geometry::alias::Float;
use std::sync::Arc;

/// A property that is either fixed or driven by a (possibly shared) track.
#[derive(Clone, Debug, PartialEq)]
pub enum Animated<T> {
    Fixed(T),
    Keyed(Arc<Track<T>>),
}

/// Closed time interval covered by keyframes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeSpan {
    pub begin: Float,
    pub end: Float,
}

impl TimeSpan {
    #[must_use]
    pub fn new(begin: Float, end: Float) -> Self {
        assert!(begin <= end, "time span must not be reversed");
        Self { begin, end }
    }

    #[must_use]
    pub fn duration(&self) -> Float {
        self.end - self.begin
    }

    #[must_use]
    pub(crate) fn merge(left: Option<TimeSpan>, right: Option<TimeSpan>) -> Option<TimeSpan> {
        match (left, right) {
            (Some(left), Some(right)) => Some(TimeSpan::new(left.begin.min(right.begin), left.end.max(right.end))),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl<T: Keyframeable> Animated<T> {
    #[must_use]
    pub fn keyed(track: Track<T>) -> Self {
        Animated::Keyed(Arc::new(track))
    }

    #[must_use]
    pub fn at(&self, time: Float) -> T {
        match self {
            Animated::Fixed(value) => *value,
            Animated::Keyed(track) => track.sample(time),
        }
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        matches!(self, Animated::Keyed(track) if track.keyframes_count() > 1)
    }

    #[must_use]
    pub fn time_span(&self) -> Option<TimeSpan> {
        match self {
            Animated::Fixed(_) => None,
            Animated::Keyed(track) => Some(TimeSpan::new(track.begin(), track.end())),
        }
    }
}

impl<T> From<T> for Animated<T> {
    fn from(value: T) -> Self {
        Animated::Fixed(value)
    }
}
