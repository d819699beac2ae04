use serde_json::Value;

use crate::config::decode::describe;
use crate::errors::{MarrowError, Result};

/// A fieldless enum whose variants decode from their names.
///
/// Implemented by [`config_enum!`](crate::config_enum); implementing it by
/// hand only requires the name table.
pub trait ConfigEnum: Sized + Copy + PartialEq + 'static {
    const TYPE_NAME: &'static str;

    fn variants() -> &'static [(&'static str, Self)];

    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .find(|(variant, _)| *variant == name)
            .map(|(_, value)| *value)
    }

    #[must_use]
    fn name(self) -> &'static str {
        Self::variants()
            .iter()
            .find(|(_, value)| *value == self)
            .map_or("", |(variant, _)| *variant)
    }
}

/// Decodes a scalar string naming one of `T`'s variants (exact match).
pub fn decode_enum<T: ConfigEnum>(value: &Value, path: &str) -> Result<T> {
    let Value::String(name) = value else {
        return Err(MarrowError::ConfigTypeMismatch {
            path: path.to_string(),
            expected: T::TYPE_NAME,
            found: describe(value),
        });
    };
    T::from_name(name).ok_or_else(|| MarrowError::UnknownEnumVariant {
        type_name: T::TYPE_NAME,
        value: name.clone(),
        expected: T::variants()
            .iter()
            .map(|(variant, _)| *variant)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Declares a fieldless enum that can be read from configuration by name.
///
/// ```rust,ignore
/// marrow::config_enum! {
///     /// Window presentation.
///     pub enum WindowMode { Windowed, Borderless, Fullscreen }
/// }
///
/// let mode: WindowMode = config.get("Display.Mode")?;
/// ```
#[macro_export]
macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::config::ConfigEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn variants() -> &'static [(&'static str, Self)] {
                &[$( (stringify!($variant), $name::$variant) ),+]
            }
        }

        impl $crate::config::FromConfig for $name {
            fn from_config(
                value: &$crate::config::Value,
                path: &str,
            ) -> $crate::errors::Result<Self> {
                $crate::config::decode_enum(value, path)
            }
        }
    };
}
