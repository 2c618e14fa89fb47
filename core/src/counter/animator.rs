//! Frame-driven count-up animator

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, trace, warn};
use trinity_types::CounterConfig;

use super::run::{AnimationRun, RunPhase};
use crate::frame::{FrameId, FrameScheduler};

/// Counts from 0 to a target once triggered, one [`AnimationRun`] per instance.
///
/// Each frame reschedules the next only after it has run, so frames for one
/// animator never overlap. Dropping the animator cancels its pending frame; a
/// callback that races teardown finds the state gone and does nothing.
pub struct CountAnimator<S: FrameScheduler> {
    inner: Rc<AnimatorInner<S>>,
}

struct AnimatorInner<S> {
    scheduler: S,
    run: RefCell<AnimationRun>,
    suffix: String,
    pending: Cell<Option<FrameId>>,
    frames: Cell<u64>,
    disposed: Cell<bool>,
    on_change: Box<dyn Fn(u64)>,
}

impl<S: FrameScheduler> CountAnimator<S> {
    /// `on_change` receives every new displayed value.
    pub fn new(scheduler: S, counter: &CounterConfig, on_change: impl Fn(u64) + 'static) -> Self {
        Self {
            inner: Rc::new(AnimatorInner {
                scheduler,
                run: RefCell::new(AnimationRun::new(counter.end, counter.duration_ms)),
                suffix: counter.suffix.clone(),
                pending: Cell::new(None),
                frames: Cell::new(0),
                disposed: Cell::new(false),
                on_change: Box::new(on_change),
            }),
        }
    }

    /// Feed the trigger signal. Only the first `true` has any effect.
    pub fn set_trigger(&self, trigger: bool) {
        if !trigger || self.inner.disposed.get() {
            return;
        }

        let (started, phase, target) = {
            let mut run = self.inner.run.borrow_mut();
            (run.start(), run.phase(), run.target())
        };
        if !started {
            trace!(end = target, "count animation already triggered");
            return;
        }

        match phase {
            RunPhase::Running => {
                debug!(end = target, "count animation started");
                schedule(&self.inner);
            }
            _ => debug!(end = target, "count animation has nothing to count"),
        }
    }

    pub fn value(&self) -> u64 {
        self.inner.run.borrow().current_value()
    }

    pub fn suffix(&self) -> &str {
        &self.inner.suffix
    }

    /// Value followed by the literal suffix, e.g. `20+`
    pub fn display(&self) -> String {
        format!("{}{}", self.value(), self.inner.suffix)
    }

    pub fn phase(&self) -> RunPhase {
        self.inner.run.borrow().phase()
    }

    /// Snapshot of the run state
    pub fn run(&self) -> AnimationRun {
        self.inner.run.borrow().clone()
    }

    /// Whether a frame is currently scheduled
    pub fn is_animating(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    /// Frames this animator has processed
    pub fn frames_processed(&self) -> u64 {
        self.inner.frames.get()
    }
}

impl<S: FrameScheduler> Drop for CountAnimator<S> {
    fn drop(&mut self) {
        self.inner.disposed.set(true);
        if let Some(id) = self.inner.pending.take() {
            trace!(?id, "cancelling count animation frame");
            self.inner.scheduler.cancel_frame(id);
        }
    }
}

fn schedule<S: FrameScheduler>(inner: &Rc<AnimatorInner<S>>) {
    if inner.disposed.get() {
        return;
    }
    let weak = Rc::downgrade(inner);
    let requested = inner.scheduler.request_frame(Box::new(move |timestamp: f64| {
        if let Some(inner) = weak.upgrade() {
            on_frame(&inner, timestamp);
        }
    }));
    match requested {
        Some(id) => inner.pending.set(Some(id)),
        None => settle_without_frames(inner),
    }
}

/// No frames available: show the final value rather than stall mid-count
fn settle_without_frames<S: FrameScheduler>(inner: &Rc<AnimatorInner<S>>) {
    inner.pending.set(None);
    let (finished, value) = {
        let mut run = inner.run.borrow_mut();
        (run.finish(), run.current_value())
    };
    if finished {
        warn!(value, "no animation frames, count pinned at target");
        (inner.on_change)(value);
    }
}

fn on_frame<S: FrameScheduler>(inner: &Rc<AnimatorInner<S>>, timestamp: f64) {
    inner.pending.set(None);
    if inner.disposed.get() {
        return;
    }
    inner.frames.set(inner.frames.get() + 1);

    let (before, after, more) = {
        let mut run = inner.run.borrow_mut();
        let before = run.current_value();
        let more = run.step(timestamp);
        (before, run.current_value(), more)
    };

    if after != before {
        (inner.on_change)(after);
    }

    if more {
        schedule(inner);
    } else {
        debug!(value = after, frames = inner.frames.get(), "count animation complete");
    }
}

#[cfg(test)]
#[path = "animator_tests.rs"]
mod tests;
