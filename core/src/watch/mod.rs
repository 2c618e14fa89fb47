//! Viewport visibility observation
//!
//! This module provides:
//! - **Host capability**: [`VisibilityWatcher`] / [`VisibilityObserver`], the
//!   shape of the browser's `IntersectionObserver`, injected so the core can be
//!   driven by a fake
//! - **Gate**: [`VisibilityGate`], a one-shot "became visible" latch for a
//!   single element
//!
//! # Fail-open
//!
//! A watcher returns [`WatchError::Unsupported`] when the host has no
//! intersection primitive. Consumers then treat their targets as visible
//! immediately, so a counter on an old browser still shows its final value
//! instead of staying at zero.

mod gate;

pub use gate::VisibilityGate;

use crate::error::WatchError;

/// One intersection change reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry<T> {
    pub target: T,
    /// Fraction of the target inside the viewport (0.0 - 1.0)
    pub fraction: f64,
    /// Whether any part of the target intersects the viewport
    pub is_intersecting: bool,
}

impl<T> VisibilityEntry<T> {
    pub fn new(target: T, fraction: f64) -> Self {
        Self {
            target,
            fraction,
            is_intersecting: fraction > 0.0,
        }
    }

    /// True when the visible fraction meets or exceeds `threshold`.
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.fraction >= threshold
    }
}

/// What an observer lets go of once an entries callback returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Release<T> {
    /// Keep watching everything
    Keep,
    /// Stop watching these targets
    Targets(Vec<T>),
    /// Disconnect the observer entirely
    All,
}

impl<T> Release<T> {
    /// `Targets`, or `Keep` when there is nothing to release.
    pub fn targets(targets: Vec<T>) -> Self {
        if targets.is_empty() {
            Release::Keep
        } else {
            Release::Targets(targets)
        }
    }
}

/// Called with each batch of entries for one observer.
///
/// The host applies the returned [`Release`] after the callback returns, so a
/// callback never has to reach its own observer while it is running.
pub type EntriesCallback<T> = Box<dyn FnMut(&[VisibilityEntry<T>]) -> Release<T>>;

/// Host capability for creating visibility observers.
pub trait VisibilityWatcher {
    /// Handle to a rendered element. Compared by identity.
    type Target: Clone + PartialEq + 'static;
    type Observer: VisibilityObserver<Target = Self::Target>;

    /// Create an observer reporting crossings of `threshold`.
    fn create_observer(
        &self,
        threshold: f64,
        on_entries: EntriesCallback<Self::Target>,
    ) -> Result<Self::Observer, WatchError>;
}

/// A live observation over any number of targets.
pub trait VisibilityObserver {
    type Target;

    fn observe(&self, target: &Self::Target);

    fn unobserve(&self, target: &Self::Target);

    /// Stop observing everything. Safe to call more than once.
    fn disconnect(&self);
}

/// Clamp a configured threshold into `0.0..=1.0`; NaN becomes `fallback`.
pub fn clamp_threshold(threshold: f64, fallback: f64) -> f64 {
    if threshold.is_nan() {
        fallback
    } else {
        threshold.clamp(0.0, 1.0)
    }
}
