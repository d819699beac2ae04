#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod errors;
pub mod utils;
pub mod animation;
pub mod tasks;
pub mod config;
pub mod scene;

pub use errors::{MarrowError, Result};
pub use utils::FrameClock;
pub use animation::{
    AnimationImporter, AnimationPlayer, AnimationSet, BoneNode, ImportOptions, KeyframeTrack,
    LoopMode,
};
pub use tasks::{Scheduler, Task, TimedBody};
pub use config::{Config, FromConfig};
pub use scene::{Component, Light, LightKind, SceneObject};
