//! Count-up statistics
//!
//! This module provides:
//! - **Run state**: [`AnimationRun`], the explicit state of one count-up
//! - **Animator**: [`CountAnimator`], drives a run from frame callbacks
//! - **Visible counter**: [`VisibleCounter`], an animator triggered by a
//!   [`VisibilityGate`](crate::watch::VisibilityGate)
//!
//! # Lifecycle
//!
//! 1. Counter mounts → value shows `0{suffix}`
//! 2. Element reaches the visibility threshold → run starts
//! 3. Each frame: `progress = min(elapsed / duration, 1)`, value =
//!    `floor(progress * target)`
//! 4. Progress reaches 1 → value pinned at exactly `target`, no more frames
//!
//! Progress comes from elapsed frame time, not frame count, so a slow or
//! jittery frame rate still finishes on time.

mod animator;
mod run;
mod visible;

pub use animator::CountAnimator;
pub use run::{AnimationRun, MIN_DURATION_MS, RunPhase};
pub use visible::VisibleCounter;
