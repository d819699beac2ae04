use std::sync::Arc;

use glam::Mat4;

use crate::animation::set::AnimationSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    Once,
    #[default]
    Loop,
    PingPong,
}

/// Playback state for one [`AnimationSet`].
///
/// This is the skeletal-animation component of a scene object: the frame
/// driver advances it with [`update`](Self::update) and the renderer reads
/// [`current_pose`](Self::current_pose).
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    set: Arc<AnimationSet>,

    /// Playback position in seconds.
    pub time: f32,
    pub time_scale: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,

    /// +1 while playing forwards through a ping-pong cycle, -1 on the way back.
    direction: f32,
}

impl AnimationPlayer {
    #[must_use]
    pub fn new(set: Arc<AnimationSet>) -> Self {
        Self {
            set,
            time: 0.0,
            time_scale: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            direction: 1.0,
        }
    }

    #[must_use]
    pub fn animation_set(&self) -> &Arc<AnimationSet> {
        &self.set
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Rewinds to the start and pauses.
    pub fn stop(&mut self) {
        self.time = 0.0;
        self.paused = true;
        self.direction = 1.0;
    }

    /// Jumps to `time` seconds, clamped to the clip.
    pub fn seek(&mut self, time: f32) {
        self.time = time.clamp(0.0, self.set.duration_seconds().max(0.0));
    }

    /// True once a `LoopMode::Once` clip has run to either end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        let duration = self.set.duration_seconds();
        self.loop_mode == LoopMode::Once
            && self.paused
            && (self.time >= duration || (self.time <= 0.0 && self.time_scale < 0.0))
    }

    /// Advances playback by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }

        let duration = self.set.duration_seconds();
        if duration <= 0.0 {
            return;
        }

        let delta = dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                self.time += delta;
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                self.time = (self.time + delta).rem_euclid(duration);
            }
            LoopMode::PingPong => {
                // Position within a forward-then-backward cycle of twice the clip length
                let double_duration = duration * 2.0;
                let phase = if self.direction > 0.0 {
                    self.time
                } else {
                    double_duration - self.time
                };
                let t = (phase + delta).rem_euclid(double_duration);
                if t > duration {
                    self.time = double_duration - t;
                    self.direction = -1.0;
                } else {
                    self.time = t;
                    self.direction = 1.0;
                }
            }
        }
    }

    /// Skinning matrices for the current playback position.
    #[must_use]
    pub fn current_pose(&self) -> Vec<Mat4> {
        self.set.evaluate_skinning(self.time)
    }

    /// World-space bone transforms for the current playback position.
    #[must_use]
    pub fn current_world_pose(&self) -> Vec<Mat4> {
        self.set.evaluate(self.time)
    }
}
