//! Skeletal Animation
//!
//! Data flow:
//!
//! ```text
//! SourceScene ──AnimationImporter──▶ AnimationSet (BoneNode tree)
//!                                         │
//!                           evaluate(t) ──┴──▶ Vec<Mat4> (one per bone)
//! ```
//!
//! - [`source`]: the import boundary (hierarchy, bones, channels).
//! - [`importer`]: builds the bone tree, merging decomposition nodes.
//! - [`bone`] / [`tracks`]: the tree and its keyframe data.
//! - [`set`]: the pose evaluator.
//! - [`player`]: playback state used as a scene component.

mod values;
pub mod tracks;
pub mod source;
pub mod bone;
pub mod importer;
pub mod set;
pub mod player;

pub use values::Interpolatable;
pub use tracks::{InterpolationMode, KeyframeTrack};
pub use source::{
    QuatKey, SourceAnimation, SourceBone, SourceChannel, SourceMesh, SourceNode, SourceScene,
    VectorKey,
};
pub use bone::BoneNode;
pub use importer::{AnimationImporter, ChannelPart, ImportOptions};
pub use set::{AnimationSet, DEFAULT_TICKS_PER_SECOND};
pub use player::{AnimationPlayer, LoopMode};
