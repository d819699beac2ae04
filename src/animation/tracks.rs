use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    #[default]
    Linear,
    Step,
}

/// A time-ordered sequence of sampled values.
///
/// Times are stored in source ticks and are non-decreasing. The track is
/// immutable once built; sampling never mutates it, so a track can be shared
/// by concurrent pose queries.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    times: Vec<f32>,
    values: Vec<T>,
    interpolation: InterpolationMode,
}

impl<T: Interpolatable> Default for KeyframeTrack<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Interpolatable> KeyframeTrack<T> {
    /// A track with no keys. Sampling it yields `None`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            times: Vec::new(),
            values: Vec::new(),
            interpolation: InterpolationMode::Linear,
        }
    }

    /// Builds a track from parallel time/value arrays.
    ///
    /// Keys are sorted by time (stable, so equal timestamps keep their order).
    /// If the arrays differ in length the surplus entries are dropped.
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        if times.len() != values.len() {
            log::warn!(
                "Keyframe track has {} times but {} values; extra entries dropped",
                times.len(),
                values.len()
            );
        }
        Self::from_keys(times.into_iter().zip(values), interpolation)
    }

    /// Builds a track from `(time, value)` pairs in any order.
    pub fn from_keys(
        keys: impl IntoIterator<Item = (f32, T)>,
        interpolation: InterpolationMode,
    ) -> Self {
        let mut keys: Vec<(f32, T)> = keys.into_iter().collect();
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (times, values) = keys.into_iter().unzip();
        Self {
            times,
            values,
            interpolation,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Time of the last key, or zero for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples the track at `time`.
    ///
    /// Returns `None` for an empty track. Times before the first key or after
    /// the last key clamp to the boundary value.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        let last = self.times.len().checked_sub(1)?;

        // partition_point finds the first index where t > time, i.e. next_index
        let next_idx = self.times.partition_point(|&t| t <= time);
        if next_idx == 0 {
            return Some(self.values[0]);
        }
        let index = next_idx - 1;
        if index >= last {
            return Some(self.values[last]);
        }

        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        // Prevent division by zero
        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        Some(match self.interpolation {
            InterpolationMode::Step => self.values[index],
            InterpolationMode::Linear => {
                T::interpolate_linear(self.values[index], self.values[next_idx], t)
            }
        })
    }
}
