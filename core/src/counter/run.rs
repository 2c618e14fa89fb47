//! Animation run state (one count-up per mount)

/// Smallest duration a run will use. Anything lower (or NaN) is clamped here.
pub const MIN_DURATION_MS: f64 = 1.0;

/// Lifecycle of an [`AnimationRun`]. Strictly forward: Idle → Running → Complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Waiting for the trigger; value is 0
    Idle,
    /// Counting; frames are being scheduled
    Running,
    /// Value pinned at the target; terminal
    Complete,
}

/// Time-based count from 0 to `target`.
///
/// All mutable state of the count-up lives here and is only changed by
/// [`start`](Self::start) and [`step`](Self::step), so the state machine can
/// be driven directly without any scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    target: u64,
    duration_ms: f64,
    /// Timestamp of the first frame after the trigger
    start_timestamp: Option<f64>,
    current_value: u64,
    phase: RunPhase,
}

impl AnimationRun {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms: clamp_duration(duration_ms),
            start_timestamp: None,
            current_value: 0,
            phase: RunPhase::Idle,
        }
    }

    /// Arm the run. Returns false if it was already started.
    ///
    /// A zero target completes immediately and needs no frames.
    pub fn start(&mut self) -> bool {
        if self.phase != RunPhase::Idle {
            return false;
        }
        self.phase = if self.target == 0 {
            RunPhase::Complete
        } else {
            RunPhase::Running
        };
        true
    }

    /// Advance to the frame at `timestamp_ms`. Returns true while more frames are needed.
    pub fn step(&mut self, timestamp_ms: f64) -> bool {
        if self.phase != RunPhase::Running {
            return false;
        }

        let start = *self.start_timestamp.get_or_insert(timestamp_ms);
        let elapsed = (timestamp_ms - start).max(0.0);
        let progress = (elapsed / self.duration_ms).min(1.0);

        if progress >= 1.0 {
            // Final frame sets the exact target, never a floored near-value
            self.current_value = self.target;
            self.phase = RunPhase::Complete;
            return false;
        }

        let value = ((progress * self.target as f64).floor() as u64).min(self.target);
        self.current_value = self.current_value.max(value);
        true
    }

    /// Jump straight to the target, for a run that cannot get frames.
    /// Returns true if this completed a running count.
    pub fn finish(&mut self) -> bool {
        if self.phase != RunPhase::Running {
            return false;
        }
        self.current_value = self.target;
        self.phase = RunPhase::Complete;
        true
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn start_timestamp(&self) -> Option<f64> {
        self.start_timestamp
    }

    pub fn current_value(&self) -> u64 {
        self.current_value
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RunPhase::Complete
    }
}

fn clamp_duration(duration_ms: f64) -> f64 {
    if duration_ms.is_nan() || duration_ms < MIN_DURATION_MS {
        MIN_DURATION_MS
    } else {
        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_pins_target_only_while_running() {
        let mut run = AnimationRun::new(20, 2000.0);
        assert!(!run.finish());
        assert_eq!(run.current_value(), 0);

        run.start();
        run.step(0.0);
        run.step(500.0);
        assert!(run.finish());
        assert_eq!(run.current_value(), 20);
        assert!(run.is_complete());
        assert!(!run.finish());
    }

    #[test]
    fn idle_run_ignores_frames() {
        let mut run = AnimationRun::new(20, 2000.0);
        assert!(!run.step(5000.0));
        assert_eq!(run.current_value(), 0);
        assert_eq!(run.phase(), RunPhase::Idle);
        assert_eq!(run.start_timestamp(), None);
    }

    #[test]
    fn start_is_a_latch() {
        let mut run = AnimationRun::new(20, 2000.0);
        assert!(run.start());
        assert!(!run.start());
        assert_eq!(run.phase(), RunPhase::Running);
    }

    #[test]
    fn first_frame_fixes_start_time() {
        let mut run = AnimationRun::new(20, 2000.0);
        run.start();

        assert!(run.step(350.0));
        assert_eq!(run.start_timestamp(), Some(350.0));
        assert_eq!(run.current_value(), 0);

        assert!(run.step(1350.0));
        assert_eq!(run.current_value(), 10);

        assert!(!run.step(2350.0));
        assert_eq!(run.current_value(), 20);
        assert!(run.is_complete());
    }

    #[test]
    fn overshooting_frame_pins_exact_target() {
        let mut run = AnimationRun::new(7, 3.0);
        run.start();
        run.step(0.0);
        assert!(!run.step(1000.0));
        assert_eq!(run.current_value(), 7);
    }

    #[test]
    fn timestamp_going_backwards_never_decreases_value() {
        let mut run = AnimationRun::new(100, 1000.0);
        run.start();
        run.step(0.0);
        run.step(500.0);
        assert_eq!(run.current_value(), 50);

        run.step(200.0);
        assert_eq!(run.current_value(), 50);
    }

    #[test]
    fn zero_target_completes_on_start() {
        let mut run = AnimationRun::new(0, 2000.0);
        assert!(run.start());
        assert!(run.is_complete());
        assert!(!run.step(10.0));
        assert_eq!(run.current_value(), 0);
    }

    #[test]
    fn bad_durations_are_clamped() {
        assert_eq!(AnimationRun::new(5, -250.0).duration_ms(), MIN_DURATION_MS);
        assert_eq!(AnimationRun::new(5, 0.0).duration_ms(), MIN_DURATION_MS);
        assert_eq!(AnimationRun::new(5, f64::NAN).duration_ms(), MIN_DURATION_MS);
        assert_eq!(AnimationRun::new(5, 1500.0).duration_ms(), 1500.0);

        let mut run = AnimationRun::new(5, -250.0);
        run.start();
        run.step(0.0);
        assert!(!run.step(1.0));
        assert_eq!(run.current_value(), 5);
    }
}
