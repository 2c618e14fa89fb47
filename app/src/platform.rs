//! Browser implementations of the core's host capabilities
//!
//! - [`WebVisibilityWatcher`]: `IntersectionObserver`
//! - [`WebFrameScheduler`]: `requestAnimationFrame` / `cancelAnimationFrame`
//! - [`LocalThemeStore`]: `localStorage`

use dioxus_logger::tracing::warn;
use trinity_core::page::{THEME_STORAGE_KEY, ThemeStore};
use trinity_core::watch::{
    EntriesCallback, Release, VisibilityEntry, VisibilityObserver, VisibilityWatcher,
};
use trinity_core::{FrameCallback, FrameId, FrameScheduler, WatchError};
use trinity_types::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// ─────────────────────────────────────────────────────────────────────────────
// Visibility
// ─────────────────────────────────────────────────────────────────────────────

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebVisibilityWatcher;

impl VisibilityWatcher for WebVisibilityWatcher {
    type Target = Element;
    type Observer = WebObserver;

    fn create_observer(
        &self,
        threshold: f64,
        mut on_entries: EntriesCallback<Element>,
    ) -> Result<WebObserver, WatchError> {
        let window = web_sys::window().ok_or_else(|| WatchError::Unsupported {
            reason: "no window".to_string(),
        })?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(WatchError::Unsupported {
                reason: "IntersectionObserver missing".to_string(),
            });
        }

        let closure: ObserverClosure = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let batch: Vec<VisibilityEntry<Element>> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| VisibilityEntry {
                        target: entry.target(),
                        fraction: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();

                match on_entries(&batch) {
                    Release::Keep => {}
                    Release::Targets(settled) => {
                        for target in &settled {
                            observer.unobserve(target);
                        }
                    }
                    // JS side lets go now; the closure is freed with the WebObserver
                    Release::All => observer.disconnect(),
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                .map_err(|err| WatchError::Unsupported {
                    reason: format!("{err:?}"),
                })?;

        Ok(WebObserver {
            observer,
            _closure: closure,
        })
    }
}

/// Owns the JS observer and the Rust closure it calls.
pub struct WebObserver {
    observer: IntersectionObserver,
    _closure: ObserverClosure,
}

impl VisibilityObserver for WebObserver {
    type Target = Element;

    fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for WebObserver {
    fn drop(&mut self) {
        // Must stop before the closure is freed
        self.observer.disconnect();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Frames
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct WebFrameScheduler;

impl FrameScheduler for WebFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameId> {
        let Some(window) = web_sys::window() else {
            warn!("no window, animation frame refused");
            return None;
        };

        // Freed by wasm-bindgen after the single call
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        match window.request_animation_frame(closure.unchecked_ref()) {
            Ok(id) => Some(FrameId(id as u32)),
            Err(err) => {
                warn!(?err, "requestAnimationFrame failed");
                None
            }
        }
    }

    fn cancel_frame(&self, id: FrameId) {
        if let Some(window) = web_sys::window()
            && let Err(err) = window.cancel_animation_frame(id.0 as i32)
        {
            warn!(?err, "cancelAnimationFrame failed");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = local_storage()
            && let Err(err) = storage.set_item(THEME_STORAGE_KEY, value)
        {
            warn!(?err, "failed to persist theme");
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Write `data-theme` on `<html>` so the stylesheet picks up the palette
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        && let Err(err) = root.set_attribute("data-theme", theme.as_str())
    {
        warn!(?err, "failed to apply theme");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DOM helpers
// ─────────────────────────────────────────────────────────────────────────────

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Year shown in the footer copyright line
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
