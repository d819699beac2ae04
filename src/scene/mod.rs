//! Scene objects and the components attached to them.
//!
//! - `SceneObject`: named object owning its components and children
//! - `Component`: per-frame update/shutdown lifecycle
//! - `Light`: light data, decodable from configuration

pub mod component;
pub mod light;
pub mod object;

pub use component::Component;
pub use light::{DirectionalLight, Light, LightKind, LightType, PointLight, SpotLight};
pub use object::SceneObject;
