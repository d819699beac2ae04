use glam::{Vec2, Vec3, Vec4};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{MarrowError, Result};

/// Types that can be decoded from a configuration value.
///
/// `path` is the dotted path of `value`, used for error messages.
pub trait FromConfig: Sized {
    fn from_config(value: &Value, path: &str) -> Result<Self>;
}

/// Short human-readable description of a value's shape, for error messages.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(items) => format!("sequence of {}", items.len()),
        Value::Object(_) => "mapping".to_string(),
    }
}

fn mismatch(path: &str, expected: &'static str, value: &Value) -> MarrowError {
    MarrowError::ConfigTypeMismatch {
        path: path.to_string(),
        expected,
        found: describe(value),
    }
}

// Scalars accept their native document type, or a string holding the value.
macro_rules! impl_from_config_scalar {
    ($($ty:ty => $expected:literal),* $(,)?) => {$(
        impl FromConfig for $ty {
            fn from_config(value: &Value, path: &str) -> Result<Self> {
                if let Value::String(raw) = value {
                    return raw.trim().parse::<$ty>().map_err(|_| mismatch(path, $expected, value));
                }
                <$ty>::deserialize(value).map_err(|_| mismatch(path, $expected, value))
            }
        }
    )*};
}

impl_from_config_scalar! {
    bool => "bool",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u32 => "u32",
    u64 => "u64",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
}

impl FromConfig for String {
    fn from_config(value: &Value, path: &str) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(mismatch(path, "string", value)),
        }
    }
}

impl FromConfig for Value {
    fn from_config(value: &Value, _path: &str) -> Result<Self> {
        Ok(value.clone())
    }
}

impl<T: FromConfig> FromConfig for Vec<T> {
    fn from_config(value: &Value, path: &str) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(mismatch(path, "sequence", value));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::from_config(item, &format!("{path}.{i}")))
            .collect()
    }
}

const AXES: [&str; 4] = ["x", "y", "z", "w"];

/// Decodes an `N`-component vector.
///
/// Accepted shapes: a scalar string (`"1 2 3"`, `"1, 2, 3"`), a sequence of
/// numbers, or a mapping with `x`/`y`/`z`/`w` keys. The component count must
/// match exactly.
fn decode_vector<const N: usize>(value: &Value, path: &str) -> Result<[f32; N]> {
    let mut out = [0.0; N];
    match value {
        Value::String(raw) => {
            let parts: Vec<&str> = raw
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .collect();
            if parts.len() != N {
                return Err(MarrowError::VectorArity {
                    expected: N,
                    found: parts.len(),
                    raw: raw.clone(),
                });
            }
            for (slot, part) in out.iter_mut().zip(&parts) {
                *slot = part.parse().map_err(|_| MarrowError::InvalidNumber {
                    component: (*part).to_string(),
                    raw: raw.clone(),
                })?;
            }
        }
        Value::Array(items) => {
            if items.len() != N {
                return Err(MarrowError::VectorArity {
                    expected: N,
                    found: items.len(),
                    raw: value.to_string(),
                });
            }
            for (i, (slot, item)) in out.iter_mut().zip(items).enumerate() {
                *slot = f32::from_config(item, &format!("{path}.{i}"))?;
            }
        }
        Value::Object(map) => {
            if map.len() != N {
                return Err(MarrowError::VectorArity {
                    expected: N,
                    found: map.len(),
                    raw: value.to_string(),
                });
            }
            for (slot, axis) in out.iter_mut().zip(AXES) {
                *slot = field(value, path, axis)?;
            }
        }
        _ => return Err(mismatch(path, "vector", value)),
    }
    Ok(out)
}

impl FromConfig for Vec2 {
    fn from_config(value: &Value, path: &str) -> Result<Self> {
        decode_vector::<2>(value, path).map(Vec2::from_array)
    }
}

impl FromConfig for Vec3 {
    fn from_config(value: &Value, path: &str) -> Result<Self> {
        decode_vector::<3>(value, path).map(Vec3::from_array)
    }
}

impl FromConfig for Vec4 {
    fn from_config(value: &Value, path: &str) -> Result<Self> {
        decode_vector::<4>(value, path).map(Vec4::from_array)
    }
}

/// Decodes the required key `key` of the mapping `value` (found at `path`).
pub fn field<T: FromConfig>(value: &Value, path: &str, key: &str) -> Result<T> {
    let full_path = format!("{path}.{key}");
    match value.get(key) {
        Some(child) => T::from_config(child, &full_path),
        None => Err(MarrowError::ConfigPathNotFound {
            path: full_path,
            segment: key.to_string(),
        }),
    }
}

/// Decodes the key `key` of the mapping `value` if present.
pub fn optional_field<T: FromConfig>(value: &Value, path: &str, key: &str) -> Result<Option<T>> {
    value
        .get(key)
        .map(|child| T::from_config(child, &format!("{path}.{key}")))
        .transpose()
}
