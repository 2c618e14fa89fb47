//! Count-up statistic that starts when scrolled into view.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use trinity_core::VisibleCounter;
use trinity_types::CounterConfig;

use crate::platform::{WebFrameScheduler, WebVisibilityWatcher};

type CounterSlot = Rc<RefCell<Option<VisibleCounter<WebVisibilityWatcher, WebFrameScheduler>>>>;

#[component]
pub fn Counter(counter: CounterConfig, threshold: f64) -> Element {
    let count = use_signal(|| 0u64);
    let slot: CounterSlot = use_hook(|| Rc::new(RefCell::new(None)));

    // Dropping the counter disconnects its observer and cancels any pending frame
    let drop_slot = slot.clone();
    use_drop(move || {
        drop_slot.borrow_mut().take();
    });

    let config = counter.clone();
    let onmounted = move |evt: MountedEvent| {
        let Some(el) = evt.data().downcast::<web_sys::Element>().cloned() else {
            warn!(end = config.end, "counter mounted without a DOM element");
            return;
        };
        let visible = VisibleCounter::new(
            &WebVisibilityWatcher,
            WebFrameScheduler,
            &el,
            &config,
            threshold,
            move |value| {
                let mut count = count;
                let _ = count.try_write().map(|mut w| *w = value);
            },
        );
        *slot.borrow_mut() = Some(visible);
    };

    let suffix = counter.suffix;
    rsx! {
        span { class: "counter", onmounted, "{count}{suffix}" }
    }
}
