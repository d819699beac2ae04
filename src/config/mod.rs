//! Configuration
//!
//! A thin typed layer over a structured document (`serde_json::Value`).
//! Values are addressed with dotted paths and decoded through
//! [`FromConfig`]:
//!
//! ```rust,ignore
//! use glam::Vec3;
//! use marrow::config::Config;
//!
//! let config = Config::from_json_str(r#"{
//!     "Display": { "Width": 1280, "Height": "720" },
//!     "Camera":  { "Position": "0 2.5 -10" }
//! }"#)?;
//!
//! let width: u32 = config.get("Display.Width")?;
//! let eye: Vec3 = config.get("Camera.Position")?;
//! ```
//!
//! A missing segment is an error ([`MarrowError::ConfigPathNotFound`]); no
//! default is ever substituted. Use [`Config::try_get`] when a key is
//! genuinely optional.
//!
//! Enumerations are declared with [`config_enum!`](crate::config_enum) and
//! decode from their variant name.

mod decode;
mod enums;

use std::path::Path;

pub use decode::{FromConfig, field, optional_field};
pub use enums::{ConfigEnum, decode_enum};
pub use serde_json::Value;

use crate::errors::{MarrowError, Result};

/// A loaded configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    root: Value,
}

impl Config {
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(Self::from_value(serde_json::from_str(content)?))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loading config from {}", path.display());
        Self::from_json_str(&content)
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Decodes the value at `path`.
    pub fn get<T: FromConfig>(&self, path: &str) -> Result<T> {
        T::from_config(lookup(&self.root, path)?, path)
    }

    /// Decodes the value at `path` if it exists.
    ///
    /// A missing path yields `Ok(None)`; a value that exists but cannot be
    /// decoded is still an error.
    pub fn try_get<T: FromConfig>(&self, path: &str) -> Result<Option<T>> {
        match lookup(&self.root, path) {
            Ok(value) => T::from_config(value, path).map(Some),
            Err(MarrowError::ConfigPathNotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        lookup(&self.root, path).is_ok()
    }

    /// A sub-document rooted at `path`.
    pub fn section(&self, path: &str) -> Result<Config> {
        lookup(&self.root, path).map(|value| Config::from_value(value.clone()))
    }
}

/// Resolves a dotted path against `root`.
///
/// Segments name mapping keys; a numeric segment indexes into a sequence.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let mut node = root;
    for segment in path.split('.') {
        let next = match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        node = next.ok_or_else(|| MarrowError::ConfigPathNotFound {
            path: path.to_string(),
            segment: segment.to_string(),
        })?;
    }
    Ok(node)
}
