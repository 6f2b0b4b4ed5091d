#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AnimatorState {
    Idle,    // No frames to animate, nothing scheduled
    Running, // Looping over the frame sequence
    Stopped, // Torn down, terminal
}

/// Drives a continuous value from 0 to N-1 over `item_duration * N` seconds,
/// looping indefinitely, and maps it onto the frame index to display.
///
/// The driver is advanced explicitly via [`update`](Self::update) from the
/// render loop; there is no internal timer to leak, so cancellation is a
/// plain state transition.
pub struct SequenceAnimator {
    frame_count: usize,
    item_duration: f32,
    elapsed: f32,
    state: AnimatorState,
    generation: u64,
}

impl SequenceAnimator {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            item_duration: 0.0,
            elapsed: 0.0,
            state: AnimatorState::Idle,
            generation: 0,
        }
    }

    /// (Re)starts the loop for the given frame count and per-frame duration
    /// in seconds.
    ///
    /// Any change to either parameter cancels the current cycle and restarts
    /// the driver from 0. A `frame_count` of zero (or a non-positive
    /// duration) puts the animator back into `Idle`. Reconfiguring with
    /// identical parameters while running does nothing, and a stopped
    /// animator stays stopped.
    pub fn configure(&mut self, frame_count: usize, item_duration: f32) {
        if self.state == AnimatorState::Stopped {
            return;
        }
        if self.state == AnimatorState::Running
            && frame_count == self.frame_count
            && item_duration == self.item_duration
        {
            return;
        }
        self.frame_count = frame_count;
        self.item_duration = item_duration;
        self.elapsed = 0.0;
        if frame_count == 0 || item_duration <= 0.0 {
            self.state = AnimatorState::Idle;
        } else {
            self.generation += 1;
            self.state = AnimatorState::Running;
        }
    }

    /// Advances the driver by `dt` seconds, wrapping at the cycle boundary.
    pub fn update(&mut self, dt: f32) {
        if self.state != AnimatorState::Running {
            return;
        }
        self.elapsed = (self.elapsed + dt) % self.cycle_duration();
    }

    /// One full traversal of the sequence, in seconds.
    pub fn cycle_duration(&self) -> f32 {
        self.item_duration * self.frame_count as f32
    }

    /// The continuous driver value in [0, N-1).
    pub fn value(&self) -> f32 {
        if self.state != AnimatorState::Running || self.frame_count < 2 {
            return 0.0;
        }
        self.elapsed / self.cycle_duration() * (self.frame_count - 1) as f32
    }

    /// The frame index to display, or `None` while there is nothing to show.
    ///
    /// The cycle is split into N equal dwell segments, so every frame stays
    /// on screen for exactly `item_duration` before the next breakpoint
    /// takes over.
    pub fn current_frame(&self) -> Option<usize> {
        if self.state != AnimatorState::Running {
            return None;
        }
        let phase = self.elapsed / self.cycle_duration();
        Some(((phase * self.frame_count as f32) as usize).min(self.frame_count - 1))
    }

    /// Cancels the loop. Idempotent, and terminal: a stopped animator
    /// ignores further `configure`/`update` calls.
    pub fn stop(&mut self) {
        self.state = AnimatorState::Stopped;
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Number of times a loop has been (re)started. Each parameter change
    /// while running accounts for exactly one increment.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for SequenceAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_animator_is_inert() {
        let mut animator = SequenceAnimator::new();
        animator.update(10.0);
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(animator.current_frame(), None);
        assert_eq!(animator.generation(), 0);
    }

    #[test]
    fn empty_list_keeps_animator_idle() {
        let mut animator = SequenceAnimator::new();
        animator.configure(0, 1.0);
        animator.update(5.0);
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(animator.current_frame(), None);
    }

    #[test]
    fn non_positive_duration_keeps_animator_idle() {
        let mut animator = SequenceAnimator::new();
        animator.configure(3, 0.0);
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(animator.current_frame(), None);
    }

    #[test]
    fn full_cycle_spans_item_duration_times_len() {
        let mut animator = SequenceAnimator::new();
        animator.configure(3, 1.0);
        assert_eq!(animator.cycle_duration(), 3.0);
        assert_eq!(animator.current_frame(), Some(0));

        animator.update(1.0);
        assert_eq!(animator.current_frame(), Some(1));
        animator.update(1.0);
        assert_eq!(animator.current_frame(), Some(2));

        // Cycle boundary wraps straight back to the first frame.
        animator.update(1.0);
        assert_eq!(animator.current_frame(), Some(0));
    }

    #[test]
    fn driver_value_progresses_linearly_to_len_minus_one() {
        let mut animator = SequenceAnimator::new();
        animator.configure(3, 1.0);
        assert_eq!(animator.value(), 0.0);

        animator.update(1.5);
        // Halfway through the cycle the driver sits at (N-1)/2.
        assert!((animator.value() - 1.0).abs() < 1e-6);

        animator.update(1.2);
        assert!((animator.value() - 1.8).abs() < 1e-5);
        assert!(animator.value() < 2.0);
    }

    #[test]
    fn wraps_across_the_cycle_boundary() {
        let mut animator = SequenceAnimator::new();
        animator.configure(2, 1.0);
        animator.update(1.9);
        assert_eq!(animator.current_frame(), Some(1));
        animator.update(0.2);
        assert_eq!(animator.current_frame(), Some(0));
        assert!(animator.value() < 0.2);
    }

    #[test]
    fn parameter_change_restarts_exactly_once() {
        let mut animator = SequenceAnimator::new();
        animator.configure(3, 1.0);
        assert_eq!(animator.generation(), 1);

        animator.update(1.5);
        assert_eq!(animator.current_frame(), Some(1));

        animator.configure(3, 2.0);
        assert_eq!(animator.generation(), 2);
        assert_eq!(animator.current_frame(), Some(0));
        assert_eq!(animator.cycle_duration(), 6.0);

        animator.configure(4, 2.0);
        assert_eq!(animator.generation(), 3);
        assert_eq!(animator.current_frame(), Some(0));
    }

    #[test]
    fn identical_reconfigure_does_not_restart() {
        let mut animator = SequenceAnimator::new();
        animator.configure(3, 1.0);
        animator.update(1.5);
        animator.configure(3, 1.0);
        assert_eq!(animator.generation(), 1);
        assert_eq!(animator.current_frame(), Some(1));
    }

    #[test]
    fn clearing_the_list_returns_to_idle() {
        let mut animator = SequenceAnimator::new();
        animator.configure(3, 1.0);
        animator.update(1.5);
        animator.configure(0, 1.0);
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(animator.current_frame(), None);
    }

    #[test]
    fn restart_preserves_cycle_duration() {
        let mut animator = SequenceAnimator::new();
        animator.configure(4, 0.5);
        let cycle = animator.cycle_duration();

        animator.configure(0, 0.5);
        animator.configure(4, 0.5);
        assert_eq!(animator.cycle_duration(), cycle);
        assert_eq!(animator.current_frame(), Some(0));
    }

    #[test]
    fn stop_is_idempotent_and_terminal() {
        let mut animator = SequenceAnimator::new();
        animator.configure(3, 1.0);
        animator.stop();
        animator.stop();
        assert_eq!(animator.state(), AnimatorState::Stopped);

        animator.configure(3, 1.0);
        animator.update(1.0);
        assert_eq!(animator.state(), AnimatorState::Stopped);
        assert_eq!(animator.current_frame(), None);
    }

    #[test]
    fn single_frame_sequence_holds_frame_zero() {
        let mut animator = SequenceAnimator::new();
        animator.configure(1, 0.5);
        assert_eq!(animator.current_frame(), Some(0));
        assert_eq!(animator.value(), 0.0);
        animator.update(0.3);
        assert_eq!(animator.current_frame(), Some(0));
        animator.update(0.3);
        assert_eq!(animator.current_frame(), Some(0));
    }
}
