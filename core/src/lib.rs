//! Page behaviour for the Trinity School site
//!
//! The browser primitives the page relies on (`IntersectionObserver`,
//! `requestAnimationFrame`, `localStorage`) are injected as traits so the
//! behaviour here runs and tests without a browser.

pub mod config;
pub mod counter;
pub mod error;
pub mod frame;
pub mod page;
pub mod reveal;
pub mod watch;

#[cfg(any(test, feature = "fake"))]
pub mod fake;

// Re-exports for convenience
pub use config::{load_or_default, parse_site_config};
pub use counter::{AnimationRun, CountAnimator, RunPhase, VisibleCounter};
pub use error::{ConfigError, InquiryError, WatchError};
pub use frame::{FrameCallback, FrameId, FrameScheduler};
pub use page::{FaqAccordion, InquiryForm, ThemeState, ThemeStore};
pub use reveal::{RevealController, RevealSet, RevealState};
pub use watch::{Release, VisibilityEntry, VisibilityGate, VisibilityObserver, VisibilityWatcher};
