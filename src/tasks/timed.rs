/// Closure shapes accepted by [`Scheduler::schedule_timed`](super::Scheduler::schedule_timed).
///
/// The `Args` marker only exists to keep the three implementations apart; a
/// body may take nothing, the elapsed time, or the elapsed time and the total
/// duration (both in seconds):
///
/// ```rust,ignore
/// scheduler.schedule_timed(1.0, || log::trace!("tick"));
/// scheduler.schedule_timed(1.0, |elapsed: f32| fade.set(elapsed));
/// scheduler.schedule_timed(1.0, |elapsed: f32, total: f32| bar.set(elapsed / total));
/// ```
///
/// Closure parameters must be annotated so the shape can be inferred.
pub trait TimedBody<Args>: Send + 'static {
    fn call(&mut self, elapsed: f32, duration: f32);
}

impl<F> TimedBody<()> for F
where
    F: FnMut() + Send + 'static,
{
    #[inline]
    fn call(&mut self, _elapsed: f32, _duration: f32) {
        self();
    }
}

impl<F> TimedBody<(f32,)> for F
where
    F: FnMut(f32) + Send + 'static,
{
    #[inline]
    fn call(&mut self, elapsed: f32, _duration: f32) {
        self(elapsed);
    }
}

impl<F> TimedBody<(f32, f32)> for F
where
    F: FnMut(f32, f32) + Send + 'static,
{
    #[inline]
    fn call(&mut self, elapsed: f32, duration: f32) {
        self(elapsed, duration);
    }
}
