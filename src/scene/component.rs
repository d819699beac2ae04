use crate::animation::AnimationPlayer;
use crate::scene::light::Light;
use crate::utils::FrameClock;

/// Per-frame lifecycle shared by everything attached to a scene object.
pub trait Component: Send {
    /// Called once per frame after the clock has been advanced.
    fn update(&mut self, clock: &FrameClock);

    /// Called once when the owning object is torn down.
    fn shutdown(&mut self) {}
}

impl Component for Light {
    fn update(&mut self, _clock: &FrameClock) {}
}

impl Component for AnimationPlayer {
    fn update(&mut self, clock: &FrameClock) {
        AnimationPlayer::update(self, clock.delta());
    }

    fn shutdown(&mut self) {
        self.stop();
    }
}
