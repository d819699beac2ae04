//! Utility Module
//!
//! - [`FrameClock`]: the shared frame-time source consumed by the task
//!   scheduler and by per-frame components.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use marrow::utils::FrameClock;
//!
//! let clock = Arc::new(FrameClock::new());
//! clock.advance(1.0 / 60.0);
//! assert_eq!(clock.frame_count(), 1);
//! ```

pub mod time;

pub use time::FrameClock;
