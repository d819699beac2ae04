//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`MarrowError`] covers all failure modes including:
//! - Configuration lookups and value decoding
//! - Skeletal animation import from an external scene description
//! - File I/O and document parsing
//!
//! Scheduled tasks never surface errors through this type: a task predicate
//! that fails internally reports through its owning subsystem and signals
//! completion to the scheduler.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, MarrowError>`.
//!
//! ```rust,ignore
//! use marrow::errors::Result;
//!
//! fn window_width(config: &marrow::Config) -> Result<u32> {
//!     config.get("Display.Width")
//! }
//! ```

use thiserror::Error;

/// The main error type for the Marrow engine.
#[derive(Error, Debug)]
pub enum MarrowError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A segment of a dotted lookup path does not exist in the document.
    #[error("Config path '{path}' not found: no entry named '{segment}'")]
    ConfigPathNotFound {
        /// The full dotted path that was requested
        path: String,
        /// The first segment that could not be resolved
        segment: String,
    },

    /// The value at a path has a shape the requested type cannot decode.
    #[error("Config value at '{path}' has the wrong type: expected {expected}, found {found}")]
    ConfigTypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    /// A vector was written with the wrong number of components.
    #[error("Expected {expected} components for vector but found {found} in '{raw}'")]
    VectorArity {
        expected: usize,
        found: usize,
        /// The offending raw text as it appeared in the document
        raw: String,
    },

    /// A vector component could not be parsed as a number.
    #[error("Invalid number '{component}' in vector '{raw}'")]
    InvalidNumber { component: String, raw: String },

    /// A scalar did not name any variant of an enumerated type.
    #[error("'{value}' is not a valid {type_name} (expected one of: {expected})")]
    UnknownEnumVariant {
        type_name: &'static str,
        value: String,
        expected: String,
    },

    // ========================================================================
    // Animation Import Errors
    // ========================================================================
    /// The scene root does not have the child that conventionally holds the skeleton.
    #[error("Scene root has {child_count} children; expected the skeleton at child index {index}")]
    MissingSkeletonRoot { index: usize, child_count: usize },

    /// The requested mesh does not exist in the source scene.
    #[error("Source scene has no mesh at index {0}")]
    MeshNotFound(usize),

    /// The requested animation does not exist in the source scene.
    #[error("Source scene has no animation at index {0}")]
    AnimationNotFound(usize),

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or value conversion error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, MarrowError>`.
pub type Result<T> = std::result::Result<T, MarrowError>;
