use glam::{Quat, Vec2, Vec3, Vec4};

/// A value that can be blended between two samples.
///
/// Implemented for the keyframe payloads (`Vec3`, `Quat`) and for the plain
/// property types the task scheduler interpolates (`f32`, `Vec2`, `Vec4`).
pub trait Interpolatable: Copy + Send + Sync + 'static {
    /// Blends `start` towards `end`; `t` is expected in `[0, 1]`.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec2 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Vec4 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    /// Spherical linear interpolation along the shortest arc.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t).normalize()
    }
}
