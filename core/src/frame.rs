//! Per-frame scheduling
//!
//! Mirrors `requestAnimationFrame`: a callback runs once on the next display
//! refresh with the frame timestamp in milliseconds, and must reschedule
//! itself explicitly if more work remains.

/// Handle for a requested frame, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u32);

/// Work to run on the next frame. Receives the frame timestamp (ms).
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Host capability for scheduling frame callbacks.
///
/// Implementations are cheap handles; clones share the same host queue.
pub trait FrameScheduler: Clone + 'static {
    /// Run `callback` once on the next frame.
    ///
    /// Returns `None` if the host cannot schedule frames; the callback is
    /// dropped unrun and the caller must settle without it.
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameId>;

    /// Cancel a frame that has not run yet. Unknown or already-run ids are ignored.
    fn cancel_frame(&self, id: FrameId);
}
