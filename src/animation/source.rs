//! Import boundary
//!
//! Plain data describing a skinned scene as an external asset importer hands
//! it over: a node hierarchy, meshes with their bone lists, and animations
//! made of per-node channels. The types derive serde so a scene can also be
//! supplied as a JSON document.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A translation or scale sample at `time` (source ticks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorKey {
    pub time: f32,
    pub value: Vec3,
}

/// A rotation sample at `time` (source ticks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuatKey {
    pub time: f32,
    pub value: Quat,
}

impl VectorKey {
    #[must_use]
    pub fn new(time: f32, value: Vec3) -> Self {
        Self { time, value }
    }
}

impl QuatKey {
    #[must_use]
    pub fn new(time: f32, value: Quat) -> Self {
        Self { time, value }
    }
}

/// A named node of the source hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper that appends `child` and returns `self`.
    #[must_use]
    pub fn with_child(mut self, child: SourceNode) -> Self {
        self.children.push(child);
        self
    }
}

/// A bone as listed by a mesh: its name and bind-pose offset matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceBone {
    pub name: String,
    pub offset: Mat4,
}

impl SourceBone {
    #[must_use]
    pub fn new(name: impl Into<String>, offset: Mat4) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMesh {
    #[serde(default)]
    pub name: String,
    pub bones: Vec<SourceBone>,
}

/// Keyframes targeting one node of the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceChannel {
    pub node_name: String,
    #[serde(default)]
    pub position_keys: Vec<VectorKey>,
    #[serde(default)]
    pub rotation_keys: Vec<QuatKey>,
    #[serde(default)]
    pub scaling_keys: Vec<VectorKey>,
}

impl SourceChannel {
    #[must_use]
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceAnimation {
    #[serde(default)]
    pub name: String,
    /// Clip length in ticks.
    pub duration: f32,
    /// Ticks per second; zero when the exporter did not record it.
    #[serde(default)]
    pub ticks_per_second: f32,
    pub channels: Vec<SourceChannel>,
}

/// Everything the importer needs from an external asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceScene {
    pub root: SourceNode,
    #[serde(default)]
    pub meshes: Vec<SourceMesh>,
    #[serde(default)]
    pub animations: Vec<SourceAnimation>,
}
