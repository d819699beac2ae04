use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct FrameState {
    delta: f32,
    // f64 so that one-frame deltas still register after days of uptime
    total: f64,
    frame_count: u64,
}

/// Shared frame-time source.
///
/// The per-frame driver advances the clock once per frame; every subsystem
/// holding an `Arc<FrameClock>` observes the same `total` time. Total time
/// never decreases.
#[derive(Debug, Default)]
pub struct FrameClock {
    state: RwLock<FrameState>,
}

impl FrameClock {
    /// Creates a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `delta` seconds (negative deltas are treated as zero).
    pub fn advance(&self, delta: f32) {
        let delta = delta.max(0.0);
        let mut state = self.state.write();
        state.delta = delta;
        state.total += f64::from(delta);
        state.frame_count += 1;
    }

    /// Moves the clock to an absolute time, keeping it monotonic.
    ///
    /// Times earlier than the current total are ignored apart from counting the frame.
    pub fn set_total(&self, total: f64) {
        let mut state = self.state.write();
        let delta = (total - state.total).max(0.0);
        state.delta = delta as f32;
        state.total += delta;
        state.frame_count += 1;
    }

    /// Seconds elapsed since the clock was created.
    ///
    /// Kept in double precision; subtract two readings before narrowing to `f32`.
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.state.read().total
    }

    /// Duration of the last frame in seconds.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.state.read().delta
    }

    /// Number of frames the clock has been advanced.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.state.read().frame_count
    }
}
