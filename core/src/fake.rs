//! Deterministic host fakes
//!
//! Stand-ins for the browser capabilities the core depends on:
//! - [`FakeWatcher`]: visibility fractions are set by hand
//! - [`FakeScheduler`]: a manual clock; frames run only when advanced
//! - [`MemoryThemeStore`]: in-memory theme persistence
//!
//! Everything is single-threaded and shares state through `Rc`, so clones of
//! a fake observe the same world.

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;

use crate::error::WatchError;
use crate::frame::{FrameCallback, FrameId, FrameScheduler};
use crate::page::ThemeStore;
use crate::watch::{
    EntriesCallback, Release, VisibilityEntry, VisibilityObserver, VisibilityWatcher,
};

// ─────────────────────────────────────────────────────────────────────────────
// Visibility
// ─────────────────────────────────────────────────────────────────────────────

/// Element handle used with [`FakeWatcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FakeTarget(pub u32);

struct ObserverSlot {
    threshold: f64,
    targets: Vec<FakeTarget>,
    /// Taken out while the callback runs
    callback: Option<EntriesCallback<FakeTarget>>,
}

#[derive(Default)]
struct WatcherState {
    unsupported: bool,
    next_observer: u64,
    observers: HashMap<u64, ObserverSlot>,
    fractions: HashMap<FakeTarget, f64>,
    deliveries: u64,
}

/// Visibility watcher driven by [`set_fraction`](Self::set_fraction).
///
/// Every fraction change is delivered to each observer watching the target,
/// and observing a target with a known fraction delivers it straight away
/// (the browser's initial notification).
#[derive(Clone, Default)]
pub struct FakeWatcher {
    state: Rc<RefCell<WatcherState>>,
}

impl FakeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host without an intersection primitive
    pub fn unsupported() -> Self {
        let watcher = Self::default();
        watcher.state.borrow_mut().unsupported = true;
        watcher
    }

    /// Set how much of `target` is on screen and notify its observers.
    pub fn set_fraction(&self, target: FakeTarget, fraction: f64) {
        let observers: Vec<u64> = {
            let mut state = self.state.borrow_mut();
            state.fractions.insert(target, fraction);
            let mut ids: Vec<u64> = state
                .observers
                .iter()
                .filter(|(_, slot)| slot.targets.contains(&target))
                .map(|(id, _)| *id)
                .collect();
            ids.sort_unstable();
            ids
        };
        for id in observers {
            self.deliver(id, target, fraction);
        }
    }

    /// Observers created and not yet disconnected
    pub fn live_observers(&self) -> usize {
        self.state.borrow().observers.len()
    }

    /// Whether any live observer is watching `target`
    pub fn is_observed(&self, target: FakeTarget) -> bool {
        self.state
            .borrow()
            .observers
            .values()
            .any(|slot| slot.targets.contains(&target))
    }

    /// Threshold of every live observer, in creation order
    pub fn thresholds(&self) -> Vec<f64> {
        let state = self.state.borrow();
        let mut slots: Vec<_> = state.observers.iter().collect();
        slots.sort_unstable_by_key(|(id, _)| **id);
        slots.into_iter().map(|(_, slot)| slot.threshold).collect()
    }

    /// Callback invocations so far
    pub fn deliveries(&self) -> u64 {
        self.state.borrow().deliveries
    }

    fn deliver(&self, id: u64, target: FakeTarget, fraction: f64) {
        let callback = self
            .state
            .borrow_mut()
            .observers
            .get_mut(&id)
            .and_then(|slot| slot.callback.take());
        let Some(mut callback) = callback else {
            return;
        };

        self.state.borrow_mut().deliveries += 1;
        let entry = VisibilityEntry::new(target, fraction);
        let release = callback(std::slice::from_ref(&entry));

        let mut state = self.state.borrow_mut();
        match release {
            Release::All => {
                state.observers.remove(&id);
            }
            Release::Targets(settled) => {
                if let Some(slot) = state.observers.get_mut(&id) {
                    slot.callback = Some(callback);
                    slot.targets.retain(|t| !settled.contains(t));
                }
            }
            Release::Keep => {
                if let Some(slot) = state.observers.get_mut(&id) {
                    slot.callback = Some(callback);
                }
            }
        }
    }
}

impl VisibilityWatcher for FakeWatcher {
    type Target = FakeTarget;
    type Observer = FakeObserver;

    fn create_observer(
        &self,
        threshold: f64,
        on_entries: EntriesCallback<FakeTarget>,
    ) -> Result<FakeObserver, WatchError> {
        let mut state = self.state.borrow_mut();
        if state.unsupported {
            return Err(WatchError::Unsupported {
                reason: "fake host has no intersection observer".to_string(),
            });
        }

        state.next_observer += 1;
        let id = state.next_observer;
        state.observers.insert(
            id,
            ObserverSlot {
                threshold,
                targets: Vec::new(),
                callback: Some(on_entries),
            },
        );
        Ok(FakeObserver {
            id,
            watcher: self.clone(),
        })
    }
}

/// Observer handle returned by [`FakeWatcher`]
pub struct FakeObserver {
    id: u64,
    watcher: FakeWatcher,
}

impl VisibilityObserver for FakeObserver {
    type Target = FakeTarget;

    fn observe(&self, target: &FakeTarget) {
        let known = {
            let mut state = self.watcher.state.borrow_mut();
            let Some(slot) = state.observers.get_mut(&self.id) else {
                return;
            };
            if !slot.targets.contains(target) {
                slot.targets.push(*target);
            }
            state.fractions.get(target).copied()
        };
        if let Some(fraction) = known {
            self.watcher.deliver(self.id, *target, fraction);
        }
    }

    fn unobserve(&self, target: &FakeTarget) {
        if let Some(slot) = self.watcher.state.borrow_mut().observers.get_mut(&self.id) {
            slot.targets.retain(|t| t != target);
        }
    }

    fn disconnect(&self) {
        self.watcher.state.borrow_mut().observers.remove(&self.id);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Frames
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SchedulerState {
    /// Host without frame support: every request is refused
    refusing: bool,
    now_ms: f64,
    next_id: u32,
    queue: Vec<(FrameId, FrameCallback)>,
    delivered: u64,
    cancelled: u64,
}

/// Frame scheduler on a manual clock.
///
/// Time starts at 0 ms and only moves when advanced. Each frame runs the
/// callbacks queued before it began; callbacks they queue wait for the next
/// frame, as with `requestAnimationFrame`.
#[derive(Clone, Default)]
pub struct FakeScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that cannot schedule frames
    pub fn refusing() -> Self {
        let scheduler = Self::default();
        scheduler.state.borrow_mut().refusing = true;
        scheduler
    }

    /// Current clock time (ms)
    pub fn now(&self) -> f64 {
        self.state.borrow().now_ms
    }

    /// Move the clock without running a frame
    pub fn set_time(&self, now_ms: f64) {
        self.state.borrow_mut().now_ms = now_ms;
    }

    /// Run one frame at the current time. Returns the callbacks it ran.
    pub fn run_frame(&self) -> usize {
        let (now, due) = {
            let mut state = self.state.borrow_mut();
            (state.now_ms, std::mem::take(&mut state.queue))
        };
        let count = due.len();
        for (_, callback) in due {
            self.state.borrow_mut().delivered += 1;
            callback(now);
        }
        count
    }

    /// Set the clock to `now_ms` and run one frame there.
    pub fn advance_to(&self, now_ms: f64) -> usize {
        self.set_time(now_ms);
        self.run_frame()
    }

    /// Advance by `delta_ms` and run one frame.
    pub fn advance(&self, delta_ms: f64) -> usize {
        self.advance_to(self.now() + delta_ms)
    }

    /// Step the clock in `frame_ms` increments up to `until_ms`, running a
    /// frame at every step. Returns the total callbacks run.
    pub fn run_until(&self, until_ms: f64, frame_ms: f64) -> usize {
        let step = if frame_ms > 0.0 { frame_ms } else { 16.0 };
        let mut ran = 0;
        while self.now() < until_ms {
            let next = (self.now() + step).min(until_ms);
            ran += self.advance_to(next);
        }
        ran
    }

    /// Callbacks waiting for the next frame
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Callbacks run so far
    pub fn delivered(&self) -> u64 {
        self.state.borrow().delivered
    }

    /// Frames cancelled before running
    pub fn cancelled(&self) -> u64 {
        self.state.borrow().cancelled
    }
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameId> {
        let mut state = self.state.borrow_mut();
        if state.refusing {
            return None;
        }
        state.next_id += 1;
        let id = FrameId(state.next_id);
        state.queue.push((id, callback));
        Some(id)
    }

    fn cancel_frame(&self, id: FrameId) {
        let mut state = self.state.borrow_mut();
        let before = state.queue.len();
        state.queue.retain(|(queued, _)| *queued != id);
        if state.queue.len() < before {
            state.cancelled += 1;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme Store
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory [`ThemeStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(value.into());
        store
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn frames_queued_during_a_frame_wait_for_the_next() {
        let scheduler = FakeScheduler::new();
        let hits = Rc::new(Cell::new(0));

        let chained = scheduler.clone();
        let outer_hits = hits.clone();
        scheduler.request_frame(Box::new(move |_| {
            outer_hits.set(outer_hits.get() + 1);
            let inner_hits = outer_hits.clone();
            chained.request_frame(Box::new(move |_| inner_hits.set(inner_hits.get() + 1)));
        }));

        assert_eq!(scheduler.advance(16.0), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.advance(16.0), 1);
        assert_eq!(hits.get(), 2);
        assert_eq!(scheduler.now(), 32.0);
    }

    #[test]
    fn cancelled_frame_never_runs() {
        let scheduler = FakeScheduler::new();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let id = scheduler
            .request_frame(Box::new(move |_| flag.set(true)))
            .unwrap();

        scheduler.cancel_frame(id);
        scheduler.cancel_frame(id);
        scheduler.run_until(100.0, 16.0);

        assert!(!ran.get());
        assert_eq!(scheduler.cancelled(), 1);
        assert_eq!(scheduler.delivered(), 0);
    }

    #[test]
    fn refusing_scheduler_queues_nothing() {
        let scheduler = FakeScheduler::refusing();
        assert_eq!(scheduler.request_frame(Box::new(|_| {})), None);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.advance(16.0), 0);
    }

    #[test]
    fn run_until_lands_exactly_on_end_time() {
        let scheduler = FakeScheduler::new();
        scheduler.run_until(100.0, 16.0);
        assert_eq!(scheduler.now(), 100.0);
    }

    #[test]
    fn watcher_delivers_to_observers_of_target_only() {
        let watcher = FakeWatcher::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let observer = watcher
            .create_observer(
                0.5,
                Box::new(move |entries: &[VisibilityEntry<FakeTarget>]| -> Release<FakeTarget> {
                    log.borrow_mut().extend(entries.iter().map(|e| e.target));
                    Release::Keep
                }),
            )
            .unwrap();
        observer.observe(&FakeTarget(1));

        watcher.set_fraction(FakeTarget(2), 1.0);
        watcher.set_fraction(FakeTarget(1), 0.2);
        observer.unobserve(&FakeTarget(1));
        watcher.set_fraction(FakeTarget(1), 0.9);

        assert_eq!(*seen.borrow(), vec![FakeTarget(1)]);
        assert_eq!(watcher.thresholds(), vec![0.5]);

        observer.disconnect();
        observer.disconnect();
        assert_eq!(watcher.live_observers(), 0);
    }

    #[test]
    fn memory_theme_store_round_trip() {
        let store = MemoryThemeStore::new();
        assert_eq!(store.load(), None);
        store.save("dark");
        assert_eq!(store.clone().load().as_deref(), Some("dark"));
    }
}
