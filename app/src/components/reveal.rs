//! Scroll-reveal for page sections.
//!
//! The root registers every `.reveal` element with one shared
//! [`RevealController`]. Revealed section ids land in a signal held in
//! context, so [`RevealSection`] re-renders with the `active` class and the
//! stylesheet runs the fade-in.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use trinity_core::RevealController;
use web_sys::Element as DomElement;

use crate::platform::{WebVisibilityWatcher, query_all};

type ControllerSlot = Rc<RefCell<Option<RevealController<WebVisibilityWatcher>>>>;

/// Ids of sections that have been revealed. Ids are only ever added.
#[derive(Clone, Copy)]
pub struct RevealManager {
    revealed: Signal<HashSet<String>>,
}

impl RevealManager {
    fn new() -> Self {
        Self {
            revealed: Signal::new(HashSet::new()),
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.read().contains(id)
    }
}

/// Mount the page's reveal controller and share its state.
///
/// Call once in the root component. The controller is disposed when the root
/// unmounts.
pub fn use_reveal_provider(threshold: f64) -> RevealManager {
    let manager = use_context_provider(RevealManager::new);
    let slot: ControllerSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let mount_slot = slot.clone();
    use_effect(move || {
        let revealed = manager.revealed;
        let controller =
            RevealController::mount(&WebVisibilityWatcher, threshold, move |el: &DomElement| {
                let id = el.id();
                if id.is_empty() {
                    warn!("revealed section has no id");
                    return;
                }
                // Signal may already be gone if the page is tearing down
                let mut revealed = revealed;
                let _ = revealed.try_write().map(|mut w| w.insert(id));
            });

        for el in query_all(".reveal") {
            controller.register(el);
        }
        debug!(
            sections = controller.registered(),
            revealed = controller.revealed_count(),
            "reveal controller mounted"
        );

        let previous = mount_slot.borrow_mut().replace(controller);
        if let Some(previous) = previous {
            previous.dispose();
        }
    });

    use_drop(move || {
        let controller = slot.borrow_mut().take();
        if let Some(controller) = controller {
            controller.dispose();
        }
    });

    manager
}

/// A page section that fades in the first time it scrolls into view.
#[component]
pub fn RevealSection(id: String, class: String, children: Element) -> Element {
    let manager = use_context::<RevealManager>();
    let class = if manager.is_revealed(&id) {
        format!("{class} reveal active")
    } else {
        format!("{class} reveal")
    };

    rsx! {
        section { id: "{id}", class: "{class}", {children} }
    }
}
