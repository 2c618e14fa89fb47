//! One-shot visibility gate for a single element

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};
use trinity_types::DEFAULT_COUNTER_THRESHOLD;

use super::{Release, VisibilityEntry, VisibilityObserver, VisibilityWatcher, clamp_threshold};

type OnVisible = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Latches true the first time its target is at least `threshold` visible.
///
/// Latching releases the observation: the host disconnects the observer as
/// soon as the delivering callback returns, and further intersection changes
/// are never seen. Dropping the gate disconnects its observer whether or not
/// it ever fired; the handle itself is freed then.
pub struct VisibilityGate<W: VisibilityWatcher> {
    visible: Rc<Cell<bool>>,
    threshold: f64,
    observer: Option<W::Observer>,
}

impl<W: VisibilityWatcher> VisibilityGate<W> {
    /// Start watching `target`. `on_visible` runs at most once, when the gate latches.
    ///
    /// If the watcher is unsupported the gate latches immediately and
    /// `on_visible` runs before this returns.
    pub fn new(
        watcher: &W,
        target: &W::Target,
        threshold: f64,
        on_visible: impl FnOnce() + 'static,
    ) -> Self {
        let threshold = clamp_threshold(threshold, DEFAULT_COUNTER_THRESHOLD);
        let visible = Rc::new(Cell::new(false));
        let on_visible: OnVisible = Rc::new(RefCell::new(Some(Box::new(on_visible))));

        let callback = {
            let visible = visible.clone();
            let on_visible = on_visible.clone();
            Box::new(move |entries: &[VisibilityEntry<W::Target>]| -> Release<W::Target> {
                if !visible.get() && entries.iter().any(|e| e.meets(threshold)) {
                    debug!(threshold, "visibility gate triggered");
                    latch(&visible, &on_visible);
                }
                if visible.get() {
                    Release::All
                } else {
                    Release::Keep
                }
            })
        };

        match watcher.create_observer(threshold, callback) {
            Ok(observer) => {
                observer.observe(target);
                Self {
                    visible,
                    threshold,
                    observer: Some(observer),
                }
            }
            Err(err) => {
                warn!(error = %err, "visibility gate opening immediately");
                latch(&visible, &on_visible);
                Self {
                    visible,
                    threshold,
                    observer: None,
                }
            }
        }
    }

    pub fn has_become_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<W: VisibilityWatcher> Drop for VisibilityGate<W> {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

fn latch(visible: &Cell<bool>, on_visible: &RefCell<Option<Box<dyn FnOnce()>>>) {
    if visible.replace(true) {
        return;
    }
    let callback = on_visible.borrow_mut().take();
    if let Some(callback) = callback {
        callback();
    }
}
