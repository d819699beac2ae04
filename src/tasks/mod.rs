//! Frame Task Scheduler
//!
//! Time-based behaviours that live outside the skeletal system: fades,
//! delayed callbacks, property tweens. Each task is a predicate polled once
//! per frame until it reports completion.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use marrow::tasks::Scheduler;
//! use marrow::utils::FrameClock;
//!
//! let clock = Arc::new(FrameClock::new());
//! let scheduler = Scheduler::new(Arc::clone(&clock));
//!
//! let alpha = Arc::new(Mutex::new(0.0_f32));
//! scheduler.schedule_interpolate(Arc::clone(&alpha), 0.0, 1.0, 0.5);
//! scheduler.schedule_delayed(2.0, || log::info!("two seconds later"));
//!
//! // per frame
//! clock.advance(1.0 / 60.0);
//! scheduler.tick();
//! ```

pub mod scheduler;
pub mod timed;

pub use scheduler::{Scheduler, Task};
pub use timed::TimedBody;
