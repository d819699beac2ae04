use glam::Vec3;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use crate::config::{FromConfig, Value, field, optional_field};
use crate::errors::Result;

crate::config_enum! {
    /// Light kind as written in configuration documents.
    pub enum LightType {
        Ambient,
        Directional,
        Point,
        Spot,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub radius: f32,
    pub falloff: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub direction: Vec3,
    pub range: f32,
    /// Inner cone half-angle in radians.
    pub inner_cone: f32,
    /// Outer cone half-angle in radians.
    pub outer_cone: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

impl LightKind {
    #[must_use]
    pub fn tag(&self) -> LightType {
        match self {
            LightKind::Ambient => LightType::Ambient,
            LightKind::Directional(_) => LightType::Directional,
            LightKind::Point(_) => LightType::Point,
            LightKind::Spot(_) => LightType::Spot,
        }
    }
}

/// Light component of a scene object. Pure data; lighting itself happens in
/// the renderer.
#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub id: u64,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
    pub cast_shadows: bool,
}

impl Light {
    fn generate_id_from_uuid(uuid: &Uuid) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        uuid.hash(&mut hasher);
        hasher.finish()
    }

    #[must_use]
    pub fn new(color: Vec3, intensity: f32, kind: LightKind) -> Self {
        let uuid = Uuid::new_v4();
        Self {
            uuid,
            id: Self::generate_id_from_uuid(&uuid),
            color,
            intensity,
            kind,
            cast_shadows: false,
        }
    }

    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self::new(color, intensity, LightKind::Ambient)
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32, direction: Vec3) -> Self {
        Self::new(
            color,
            intensity,
            LightKind::Directional(DirectionalLight {
                direction: direction.normalize_or_zero(),
            }),
        )
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, radius: f32, falloff: f32) -> Self {
        Self::new(color, intensity, LightKind::Point(PointLight { radius, falloff }))
    }

    #[must_use]
    pub fn new_spot(
        color: Vec3,
        intensity: f32,
        direction: Vec3,
        range: f32,
        inner_cone: f32,
        outer_cone: f32,
    ) -> Self {
        Self::new(
            color,
            intensity,
            LightKind::Spot(SpotLight {
                direction: direction.normalize_or_zero(),
                range,
                inner_cone,
                outer_cone,
            }),
        )
    }

    /// Direction the light shines in, for the kinds that have one.
    #[must_use]
    pub fn direction(&self) -> Option<Vec3> {
        match &self.kind {
            LightKind::Directional(light) => Some(light.direction),
            LightKind::Spot(light) => Some(light.direction),
            LightKind::Ambient | LightKind::Point(_) => None,
        }
    }

    /// Maximum distance the light reaches; `None` for unbounded kinds.
    #[must_use]
    pub fn range(&self) -> Option<f32> {
        match &self.kind {
            LightKind::Point(light) => Some(light.radius),
            LightKind::Spot(light) => Some(light.range),
            LightKind::Ambient | LightKind::Directional(_) => None,
        }
    }
}

/// Reads a light from a mapping such as:
///
/// ```json
/// { "Type": "Point", "Color": "1 0.9 0.8", "Intensity": 2.0, "Radius": 10, "FalloffRate": 1.5 }
/// ```
///
/// `Color` defaults to white, `Intensity` to 1 and `CastShadows` to false.
/// Kind-specific keys are required.
impl FromConfig for Light {
    fn from_config(value: &Value, path: &str) -> Result<Self> {
        let light_type: LightType = field(value, path, "Type")?;
        let color = optional_field(value, path, "Color")?.unwrap_or(Vec3::ONE);
        let intensity = optional_field(value, path, "Intensity")?.unwrap_or(1.0);

        let mut light = match light_type {
            LightType::Ambient => Light::new_ambient(color, intensity),
            LightType::Directional => {
                Light::new_directional(color, intensity, field(value, path, "Direction")?)
            }
            LightType::Point => Light::new_point(
                color,
                intensity,
                field(value, path, "Radius")?,
                field(value, path, "FalloffRate")?,
            ),
            LightType::Spot => Light::new_spot(
                color,
                intensity,
                field(value, path, "Direction")?,
                field(value, path, "Range")?,
                field(value, path, "InnerCone")?,
                field(value, path, "OuterCone")?,
            ),
        };
        light.cast_shadows = optional_field(value, path, "CastShadows")?.unwrap_or(false);
        Ok(light)
    }
}
