use crate::animation::keyframeable::Keyframeable;
use crate::geometry::alias::Float;
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Keyframe<T> {
    pub time: Float,
    pub value: T,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Blending {
    #[default]
    Linear,
    Smooth,
}

/// Keyframes ordered by strictly increasing time. A track always holds at
/// least one key, so sampling never fails.
#[derive(Clone, Debug, PartialEq)]
pub struct Track<T> {
    keyframes: Vec<Keyframe<T>>,
    blending: Blending,
}

impl<T: Keyframeable> Track<T> {
    #[must_use]
    pub fn new(time: Float, value: T, blending: Blending) -> Self {
        assert!(time.is_finite(), "keyframe time must be finite");
        Self {
            keyframes: vec![Keyframe { time, value }],
            blending,
        }
    }

    #[must_use]
    pub fn constant(value: T) -> Self {
        Self::new(0.0, value, Blending::Linear)
    }

    #[must_use]
    pub fn with_keyframe(mut self, time: Float, value: T) -> Self {
        self.insert(time, value);
        self
    }

    /// Inserts keeping the time order; a key already present at exactly
    /// `time` gets its value replaced.
    pub fn insert(&mut self, time: Float, value: T) {
        assert!(time.is_finite(), "keyframe time must be finite");

        let position = self.keyframes.partition_point(|keyframe| keyframe.time < time);
        match self.keyframes.get_mut(position) {
            Some(existing) if existing.time == time => existing.value = value,
            _ => self.keyframes.insert(position, Keyframe { time, value }),
        }
    }

    #[must_use]
    pub fn sample(&self, time: Float) -> T {
        let first = &self.keyframes[0];
        let last = &self.keyframes[self.keyframes.len() - 1];

        if time.is_nan() || time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        let next = self.keyframes.partition_point(|keyframe| keyframe.time <= time);
        let previous = next - 1;
        let from = &self.keyframes[previous];
        if from.time == time {
            return from.value;
        }
        let to = &self.keyframes[next];
        let fraction = (time - from.time) / (to.time - from.time);

        match self.blending {
            Blending::Linear => T::linear(from.value, to.value, fraction),
            Blending::Smooth => {
                let before = self.keyframes[previous.saturating_sub(1)].value;
                let after = self.keyframes[(next + 1).min(self.keyframes.len() - 1)].value;
                T::smooth(before, from.value, to.value, after, fraction)
            }
        }
    }

    #[must_use]
    pub fn begin(&self) -> Float {
        self.keyframes[0].time
    }

    #[must_use]
    pub fn end(&self) -> Float {
        self.keyframes[self.keyframes.len() - 1].time
    }

    #[must_use]
    pub fn keyframes_count(&self) -> usize {
        self.keyframes.len()
    }

    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    #[must_use]
    pub fn blending(&self) -> Blending {
        self.blending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::alias::Vector;
    use crate::utils::tests::assert_utils::tests::assert_vectors_near;
    use more_asserts::{assert_ge, assert_le};
    use rstest::rstest;

    #[must_use]
    fn make_scalar_track(blending: Blending) -> Track<Float> {
        Track::new(0.0, 1.0, blending)
            .with_keyframe(1.0, 3.0)
            .with_keyframe(2.0, -1.0)
            .with_keyframe(4.0, 5.0)
    }

    #[test]
    fn test_insert_keeps_order() {
        let system_under_test = Track::new(2.0, 20.0, Blending::Linear)
            .with_keyframe(-1.0, -10.0)
            .with_keyframe(5.0, 50.0)
            .with_keyframe(0.5, 5.0);

        let times: Vec<Float> = system_under_test.keyframes().iter().map(|keyframe| keyframe.time).collect();
        assert_eq!(times, vec![-1.0, 0.5, 2.0, 5.0]);
        assert_eq!(system_under_test.begin(), -1.0);
        assert_eq!(system_under_test.end(), 5.0);
    }

    #[test]
    fn test_insert_at_existing_time_replaces() {
        let mut system_under_test = make_scalar_track(Blending::Linear);

        system_under_test.insert(1.0, 42.0);

        assert_eq!(system_under_test.keyframes_count(), 4);
        assert_eq!(system_under_test.sample(1.0), 42.0);
    }

    #[rstest]
    #[case(Blending::Linear)]
    #[case(Blending::Smooth)]
    fn test_sample_reproduces_keyframes(#[case] blending: Blending) {
        let system_under_test = make_scalar_track(blending);

        for keyframe in system_under_test.keyframes() {
            assert_eq!(system_under_test.sample(keyframe.time), keyframe.value);
        }
    }

    #[rstest]
    #[case(Blending::Linear)]
    #[case(Blending::Smooth)]
    fn test_sample_clamps_outside_of_keys(#[case] blending: Blending) {
        let system_under_test = make_scalar_track(blending);

        assert_eq!(system_under_test.sample(-100.0), 1.0);
        assert_eq!(system_under_test.sample(-0.001), 1.0);
        assert_eq!(system_under_test.sample(4.001), 5.0);
        assert_eq!(system_under_test.sample(Float::INFINITY), 5.0);
        assert_eq!(system_under_test.sample(Float::NAN), 1.0);
    }

    #[rstest]
    #[case(0.5, 2.0)]
    #[case(1.5, 1.0)]
    #[case(3.0, 2.0)]
    fn test_linear_sample_between_keys(#[case] time: Float, #[case] expected: Float) {
        let system_under_test = make_scalar_track(Blending::Linear);
        assert_eq!(system_under_test.sample(time), expected);
    }

    #[test]
    fn test_smooth_sample_uses_neighbours() {
        let linear = make_scalar_track(Blending::Linear);
        let smooth = make_scalar_track(Blending::Smooth);

        assert_ne!(smooth.sample(1.5), linear.sample(1.5));
    }

    #[test]
    fn test_linear_sample_is_bounded_by_bracketing_keys() {
        let system_under_test = make_scalar_track(Blending::Linear);

        for step in 0..=40 {
            let time = step as Float * 0.1;
            let sample = system_under_test.sample(time);
            assert_ge!(sample, -1.0);
            assert_le!(sample, 5.0);
        }
    }

    #[rstest]
    #[case(Blending::Linear)]
    #[case(Blending::Smooth)]
    fn test_single_keyframe_is_constant(#[case] blending: Blending) {
        let system_under_test = Track::new(3.0, Vector::new(1.0, 2.0, 3.0), blending);

        for time in [-1e9, 0.0, 3.0, 3.5, 1e9] {
            assert_eq!(system_under_test.sample(time), Vector::new(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn test_vector_track() {
        let system_under_test = Track::new(0.0, Vector::new(0.0, 0.0, 0.1), Blending::Linear)
            .with_keyframe(1.0, Vector::new(1.9, 0.0, 2.0));

        assert_vectors_near(system_under_test.sample(0.5), Vector::new(0.95, 0.0, 1.05), 1e-12);
    }

    #[test]
    #[should_panic(expected = "keyframe time must be finite")]
    fn test_non_finite_time_rejected() {
        let _ = Track::new(0.0, 1.0, Blending::Linear).with_keyframe(Float::NAN, 2.0);
    }
}
