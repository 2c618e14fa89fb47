//! Counter that starts counting when its element scrolls into view

use std::rc::Rc;

use trinity_types::CounterConfig;

use super::animator::CountAnimator;
use super::run::RunPhase;
use crate::frame::FrameScheduler;
use crate::watch::{VisibilityGate, VisibilityWatcher};

/// A [`VisibilityGate`] wired to a [`CountAnimator`].
///
/// Dropping it disconnects the gate first, then cancels any pending frame.
pub struct VisibleCounter<W: VisibilityWatcher, S: FrameScheduler> {
    // Field order is drop order
    gate: VisibilityGate<W>,
    animator: Rc<CountAnimator<S>>,
}

impl<W: VisibilityWatcher, S: FrameScheduler> VisibleCounter<W, S> {
    pub fn new(
        watcher: &W,
        scheduler: S,
        target: &W::Target,
        counter: &CounterConfig,
        threshold: f64,
        on_change: impl Fn(u64) + 'static,
    ) -> Self {
        let animator = Rc::new(CountAnimator::new(scheduler, counter, on_change));
        let trigger = Rc::downgrade(&animator);
        let gate = VisibilityGate::new(watcher, target, threshold, move || {
            if let Some(animator) = trigger.upgrade() {
                animator.set_trigger(true);
            }
        });
        Self { gate, animator }
    }

    pub fn has_become_visible(&self) -> bool {
        self.gate.has_become_visible()
    }

    pub fn value(&self) -> u64 {
        self.animator.value()
    }

    pub fn display(&self) -> String {
        self.animator.display()
    }

    pub fn phase(&self) -> RunPhase {
        self.animator.phase()
    }

    pub fn animator(&self) -> &CountAnimator<S> {
        &self.animator
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::fake::{FakeScheduler, FakeTarget, FakeWatcher};

    #[test]
    fn counts_after_scrolling_into_view() {
        let watcher = FakeWatcher::new();
        let scheduler = FakeScheduler::new();
        let target = FakeTarget(3);
        let counter = VisibleCounter::new(
            &watcher,
            scheduler.clone(),
            &target,
            &CounterConfig::new(20).with_suffix("+"),
            0.5,
            |_| {},
        );

        scheduler.run_until(5000.0, 16.0);
        assert_eq!(counter.display(), "0+");
        assert!(!counter.has_become_visible());

        watcher.set_fraction(target, 0.6);
        assert!(counter.has_become_visible());

        let start = scheduler.now();
        scheduler.run_until(start + 2016.0, 16.0);
        assert_eq!(counter.display(), "20+");
        assert_eq!(counter.phase(), RunPhase::Complete);
    }

    #[test]
    fn unsupported_watcher_still_reaches_target() {
        let watcher = FakeWatcher::unsupported();
        let scheduler = FakeScheduler::new();
        let counter = VisibleCounter::new(
            &watcher,
            scheduler.clone(),
            &FakeTarget(1),
            &CounterConfig::new(100).with_suffix("%"),
            0.5,
            |_| {},
        );

        assert!(counter.has_become_visible());
        assert!(counter.animator().is_animating());

        scheduler.run_until(2100.0, 16.0);
        assert_eq!(counter.display(), "100%");
    }

    #[test]
    fn drop_releases_observer_and_frame() {
        let watcher = FakeWatcher::new();
        let scheduler = FakeScheduler::new();
        let target = FakeTarget(9);
        let changes = Rc::new(Cell::new(0u32));

        let counter = VisibleCounter::new(
            &watcher,
            scheduler.clone(),
            &target,
            &CounterConfig::new(50),
            0.5,
            {
                let changes = changes.clone();
                move |_| changes.set(changes.get() + 1)
            },
        );
        watcher.set_fraction(target, 1.0);
        scheduler.run_until(500.0, 16.0);
        assert!(changes.get() > 0);

        drop(counter);
        assert_eq!(watcher.live_observers(), 0);
        assert_eq!(scheduler.pending(), 0);

        let seen = changes.get();
        scheduler.run_until(5000.0, 16.0);
        assert_eq!(changes.get(), seen);
    }
}
