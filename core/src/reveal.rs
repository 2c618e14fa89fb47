//! Reveal-on-scroll controller
//!
//! One shared observer per page. Sections are registered after the root view
//! mounts; each one flips from pending to revealed the first time it is at
//! least [`DEFAULT_REVEAL_THRESHOLD`] visible and is never observed again.
//! The controller only reports the transition; styling does the fade-in.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use trinity_types::DEFAULT_REVEAL_THRESHOLD;

use crate::watch::{
    Release, VisibilityEntry, VisibilityObserver, VisibilityWatcher, clamp_threshold,
};

/// Reveal status of a registered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Registered elements and their reveal status. Transitions are one-way.
#[derive(Debug, Clone)]
pub struct RevealSet<T> {
    members: Vec<(T, RevealState)>,
}

impl<T> Default for RevealSet<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<T: PartialEq> RevealSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pending member. Returns false if it was already registered.
    pub fn insert(&mut self, target: T) -> bool {
        if self.contains(&target) {
            return false;
        }
        self.members.push((target, RevealState::Pending));
        true
    }

    /// Mark a member revealed. Returns true only on the pending → revealed transition.
    pub fn reveal(&mut self, target: &T) -> bool {
        match self.members.iter_mut().find(|(t, _)| t == target) {
            Some((_, state)) if *state == RevealState::Pending => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, target: &T) -> Option<RevealState> {
        self.members
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, state)| *state)
    }

    pub fn contains(&self, target: &T) -> bool {
        self.state(target).is_some()
    }

    pub fn is_revealed(&self, target: &T) -> bool {
        self.state(target) == Some(RevealState::Revealed)
    }

    pub fn pending_count(&self) -> usize {
        self.count(RevealState::Pending)
    }

    pub fn revealed_count(&self) -> usize {
        self.count(RevealState::Revealed)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn count(&self, state: RevealState) -> usize {
        self.members.iter().filter(|(_, s)| *s == state).count()
    }
}

/// Page-lifetime reveal service.
///
/// Created by the root view on mount ([`mount`](Self::mount)) and disposed on
/// unmount ([`dispose`](Self::dispose) or drop). Each page owns its own
/// controller, so separate pages never share reveal state.
pub struct RevealController<W: VisibilityWatcher> {
    set: Rc<RefCell<RevealSet<W::Target>>>,
    on_reveal: Rc<dyn Fn(&W::Target)>,
    observer: Option<W::Observer>,
}

impl<W: VisibilityWatcher> RevealController<W> {
    /// Create the shared observer. `on_reveal` runs once per element, when it is revealed.
    ///
    /// On a host without intersection support every registered element is
    /// revealed immediately.
    pub fn mount(watcher: &W, threshold: f64, on_reveal: impl Fn(&W::Target) + 'static) -> Self {
        let threshold = clamp_threshold(threshold, DEFAULT_REVEAL_THRESHOLD);
        let set = Rc::new(RefCell::new(RevealSet::new()));
        let on_reveal: Rc<dyn Fn(&W::Target)> = Rc::new(on_reveal);

        let callback = {
            let set = set.clone();
            let on_reveal = on_reveal.clone();
            Box::new(move |entries: &[VisibilityEntry<W::Target>]| -> Release<W::Target> {
                let mut settled = Vec::new();
                for entry in entries.iter().filter(|e| e.meets(threshold)) {
                    let revealed = set.borrow_mut().reveal(&entry.target);
                    if revealed {
                        debug!(fraction = entry.fraction, "section revealed");
                        on_reveal(&entry.target);
                    }
                    if set.borrow().is_revealed(&entry.target) {
                        settled.push(entry.target.clone());
                    }
                }
                Release::targets(settled)
            })
        };

        let observer = match watcher.create_observer(threshold, callback) {
            Ok(observer) => Some(observer),
            Err(err) => {
                warn!(error = %err, "reveal controller revealing everything immediately");
                None
            }
        };

        Self {
            set,
            on_reveal,
            observer,
        }
    }

    /// Register an element for reveal. Duplicates are ignored.
    pub fn register(&self, target: W::Target) {
        let inserted = self.set.borrow_mut().insert(target.clone());
        if !inserted {
            return;
        }

        match &self.observer {
            Some(observer) => observer.observe(&target),
            None => {
                let revealed = self.set.borrow_mut().reveal(&target);
                if revealed {
                    (self.on_reveal)(&target);
                }
            }
        }
    }

    pub fn state(&self, target: &W::Target) -> Option<RevealState> {
        self.set.borrow().state(target)
    }

    pub fn is_revealed(&self, target: &W::Target) -> bool {
        self.set.borrow().is_revealed(target)
    }

    pub fn pending_count(&self) -> usize {
        self.set.borrow().pending_count()
    }

    pub fn revealed_count(&self) -> usize {
        self.set.borrow().revealed_count()
    }

    pub fn registered(&self) -> usize {
        self.set.borrow().len()
    }

    /// Tear down the shared observer (root view unmounted)
    pub fn dispose(self) {
        debug!(
            revealed = self.revealed_count(),
            pending = self.pending_count(),
            "reveal controller disposed"
        );
    }
}

impl<W: VisibilityWatcher> Drop for RevealController<W> {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::fake::{FakeTarget, FakeWatcher};

    fn controller(watcher: &FakeWatcher) -> (RevealController<FakeWatcher>, Rc<RefCell<Vec<FakeTarget>>>) {
        let revealed = Rc::new(RefCell::new(Vec::new()));
        let log = revealed.clone();
        let controller = RevealController::mount(watcher, DEFAULT_REVEAL_THRESHOLD, move |t: &FakeTarget| {
            log.borrow_mut().push(*t)
        });
        (controller, revealed)
    }

    #[test]
    fn reveals_exactly_the_visible_sections() {
        let watcher = FakeWatcher::new();
        let (reveal, log) = controller(&watcher);
        for id in 0..5 {
            reveal.register(FakeTarget(id));
        }
        assert_eq!(watcher.live_observers(), 1);
        assert_eq!(reveal.pending_count(), 5);

        watcher.set_fraction(FakeTarget(4), 0.3);
        watcher.set_fraction(FakeTarget(0), 1.0);
        watcher.set_fraction(FakeTarget(2), 0.1);

        for id in [0, 2, 4] {
            assert_eq!(reveal.state(&FakeTarget(id)), Some(RevealState::Revealed));
        }
        for id in [1, 3] {
            assert_eq!(reveal.state(&FakeTarget(id)), Some(RevealState::Pending));
        }
        assert_eq!(reveal.revealed_count(), 3);
        assert_eq!(reveal.pending_count(), 2);

        let mut order = log.borrow().clone();
        order.sort();
        assert_eq!(order, vec![FakeTarget(0), FakeTarget(2), FakeTarget(4)]);
    }

    #[test]
    fn revealed_sections_never_revert() {
        let watcher = FakeWatcher::new();
        let (reveal, log) = controller(&watcher);
        let section = FakeTarget(1);
        reveal.register(section);

        watcher.set_fraction(section, 0.5);
        assert!(!watcher.is_observed(section));

        watcher.set_fraction(section, 0.0);
        watcher.set_fraction(section, 0.8);
        assert!(reveal.is_revealed(&section));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn below_threshold_stays_pending() {
        let watcher = FakeWatcher::new();
        let (reveal, _) = controller(&watcher);
        reveal.register(FakeTarget(1));

        watcher.set_fraction(FakeTarget(1), 0.05);
        assert!(!reveal.is_revealed(&FakeTarget(1)));
        assert!(watcher.is_observed(FakeTarget(1)));
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let watcher = FakeWatcher::new();
        let (reveal, _) = controller(&watcher);
        reveal.register(FakeTarget(1));
        reveal.register(FakeTarget(1));
        assert_eq!(reveal.registered(), 1);
    }

    #[test]
    fn unsupported_host_reveals_on_register() {
        let watcher = FakeWatcher::unsupported();
        let (reveal, log) = controller(&watcher);
        reveal.register(FakeTarget(1));
        reveal.register(FakeTarget(2));

        assert_eq!(reveal.revealed_count(), 2);
        assert_eq!(*log.borrow(), vec![FakeTarget(1), FakeTarget(2)]);
    }

    #[test]
    fn dispose_disconnects_the_shared_observer() {
        let watcher = FakeWatcher::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let reveal = RevealController::mount(&watcher, 0.1, move |_: &FakeTarget| {
            counter.set(counter.get() + 1)
        });
        reveal.register(FakeTarget(1));

        reveal.dispose();
        assert_eq!(watcher.live_observers(), 0);

        watcher.set_fraction(FakeTarget(1), 1.0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn pages_do_not_share_state() {
        let watcher = FakeWatcher::new();
        let (first, _) = controller(&watcher);
        let (second, _) = controller(&watcher);
        first.register(FakeTarget(1));
        second.register(FakeTarget(2));

        watcher.set_fraction(FakeTarget(1), 1.0);
        assert!(first.is_revealed(&FakeTarget(1)));
        assert_eq!(second.state(&FakeTarget(1)), None);
        assert_eq!(second.revealed_count(), 0);
    }
}
