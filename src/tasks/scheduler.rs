use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::animation::Interpolatable;
use crate::tasks::timed::TimedBody;
use crate::utils::FrameClock;

/// A pending task: returns `true` once it is complete.
pub type Task = Box<dyn FnMut() -> bool + Send + 'static>;

#[derive(Default)]
struct Registry {
    tasks: Vec<Task>,
    /// Bumped by `reset()` so an in-flight tick drops its snapshot.
    generation: u64,
}

/// Registry of per-frame tasks.
///
/// # Frame contract
///
/// The driver advances the shared [`FrameClock`] and then calls
/// [`tick`](Self::tick) once per frame. A tick evaluates every task that was
/// registered when the tick started exactly once, possibly in parallel, and
/// removes the ones that report completion. Tasks scheduled while a tick is
/// running are first evaluated on the following tick.
///
/// A task that panics is logged and treated as completed; the rest of the
/// pass and every other pending task are unaffected.
///
/// Tasks must not block. Cancellation is done by the task itself (capture a
/// flag and return `true` when it is set) or wholesale with
/// [`reset`](Self::reset).
pub struct Scheduler {
    registry: Mutex<Registry>,
    clock: Arc<FrameClock>,
}

impl Scheduler {
    #[must_use]
    pub fn new(clock: Arc<FrameClock>) -> Self {
        Self {
            registry: Mutex::new(Registry::default()),
            clock,
        }
    }

    #[must_use]
    pub fn clock(&self) -> &Arc<FrameClock> {
        &self.clock
    }

    /// Number of tasks waiting for the next tick.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.registry.lock().tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }

    /// Registers a predicate polled once per tick until it returns `true`.
    pub fn schedule<F>(&self, task: F)
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.registry.lock().tasks.push(Box::new(task));
    }

    /// Runs `body` every tick until `duration` seconds have elapsed.
    ///
    /// Elapsed time is measured from the clock's total time when the task is
    /// scheduled and is clamped to `duration` on the final call.
    pub fn schedule_timed<Args, B>(&self, duration: f32, mut body: B)
    where
        B: TimedBody<Args>,
    {
        let clock = Arc::clone(&self.clock);
        let start = clock.total();
        self.schedule(move || {
            let elapsed = ((clock.total() - start) as f32).min(duration);
            body.call(elapsed, duration);
            elapsed >= duration
        });
    }

    /// Runs `body` once, on the first tick at least `delay` seconds after now.
    pub fn schedule_delayed<F>(&self, delay: f32, body: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let clock = Arc::clone(&self.clock);
        let start = clock.total();
        let mut body = Some(body);
        self.schedule(move || {
            if ((clock.total() - start) as f32) < delay {
                return false;
            }
            if let Some(body) = body.take() {
                body();
            }
            true
        });
    }

    /// Linearly moves `target` from `start` to `end` over `duration` seconds.
    pub fn schedule_interpolate<T>(&self, target: Arc<Mutex<T>>, start: T, end: T, duration: f32)
    where
        T: Interpolatable,
    {
        self.schedule_interpolate_with(target, start, end, duration, T::interpolate_linear);
    }

    /// Like [`schedule_interpolate`](Self::schedule_interpolate) with a custom
    /// blend function `f(start, end, fraction)`.
    ///
    /// The final tick writes `end` itself, so the target lands exactly on it.
    pub fn schedule_interpolate_with<T, F>(
        &self,
        target: Arc<Mutex<T>>,
        start: T,
        end: T,
        duration: f32,
        interpolate: F,
    ) where
        T: Copy + Send + 'static,
        F: Fn(T, T, f32) -> T + Send + 'static,
    {
        self.schedule_timed::<(f32, f32), _>(duration, move |elapsed: f32, duration: f32| {
            let fraction = if duration > 0.0 {
                (elapsed / duration).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let value = if fraction >= 1.0 {
                end
            } else {
                interpolate(start, end, fraction)
            };
            *target.lock() = value;
        });
    }

    /// Evaluates every registered task once and drops the completed ones.
    pub fn tick(&self) {
        let (mut snapshot, generation) = {
            let mut registry = self.registry.lock();
            (std::mem::take(&mut registry.tasks), registry.generation)
        };
        if snapshot.is_empty() {
            return;
        }

        let completed: Vec<bool> = snapshot
            .par_iter_mut()
            .map(|task| {
                catch_unwind(AssertUnwindSafe(|| task())).unwrap_or_else(|_| {
                    log::error!("Scheduled task panicked; removing it");
                    true
                })
            })
            .collect();

        let evaluated = snapshot.len();
        let survivors: Vec<Task> = snapshot
            .into_iter()
            .zip(completed)
            .filter_map(|(task, done)| (!done).then_some(task))
            .collect();
        log::trace!(
            "Scheduler tick: {evaluated} evaluated, {} completed",
            evaluated - survivors.len()
        );

        let mut registry = self.registry.lock();
        if registry.generation != generation {
            // reset() ran during the pass; nothing from it survives
            drop(registry);
            drop(survivors);
            return;
        }
        let scheduled_during_pass = std::mem::replace(&mut registry.tasks, survivors);
        registry.tasks.extend(scheduled_during_pass);
    }

    /// Discards every pending task without invoking it.
    pub fn reset(&self) {
        let discarded = {
            let mut registry = self.registry.lock();
            registry.generation = registry.generation.wrapping_add(1);
            std::mem::take(&mut registry.tasks)
        };
        log::debug!("Scheduler reset: {} pending task(s) discarded", discarded.len());
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.pending())
            .field("clock", &self.clock)
            .finish()
    }
}
