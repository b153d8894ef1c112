//! Timer state machine
//!
//! The face is a small finite state machine over run mode and interval
//! kind, advanced one second at a time by host ticks. All methods run
//! to completion and leave the invariants intact: elapsed time never
//! reaches the target between events, and the target always matches
//! the configured duration for the current kind.

use core::num::NonZeroU16;

use super::config::IntervalDurations;

/// Which interval is being timed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntervalKind {
    /// Work period
    Focus,
    /// Rest period
    Break,
}

impl IntervalKind {
    /// The other interval kind
    pub fn toggled(self) -> Self {
        match self {
            IntervalKind::Focus => IntervalKind::Break,
            IntervalKind::Break => IntervalKind::Focus,
        }
    }

    /// Single-letter glyph shown on the display
    pub fn glyph(self) -> char {
        match self {
            IntervalKind::Focus => 'f',
            IntervalKind::Break => 'b',
        }
    }
}

/// Whether elapsed time is accumulating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunMode {
    /// Paused or stopped, awaiting user action
    Ready,
    /// Counting
    Running,
}

/// State for one interval timer face instance
///
/// Owned by the host for the whole watch session and mutated in place
/// by every event. The configured durations are copied in at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    mode: RunMode,
    kind: IntervalKind,
    elapsed_s: u16,
    target_s: NonZeroU16,
    completed: u16,
    durations: IntervalDurations,
}

impl TimerState {
    /// Create a fresh timer: ready, focus, nothing elapsed
    pub fn new(durations: IntervalDurations) -> Self {
        Self {
            mode: RunMode::Ready,
            kind: IntervalKind::Focus,
            elapsed_s: 0,
            target_s: durations.for_kind(IntervalKind::Focus),
            completed: 0,
            durations,
        }
    }

    /// Current run mode
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Current interval kind
    pub fn kind(&self) -> IntervalKind {
        self.kind
    }

    /// Seconds elapsed in the current interval
    pub fn elapsed_s(&self) -> u16 {
        self.elapsed_s
    }

    /// Target length of the current interval in seconds
    pub fn target_s(&self) -> u16 {
        self.target_s.get()
    }

    /// Seconds left in the current interval
    pub fn remaining_s(&self) -> u16 {
        self.target_s.get() - self.elapsed_s
    }

    /// Completed focus intervals since the last full reset
    pub fn completed(&self) -> u16 {
        self.completed
    }

    /// Advance one second of wall time.
    ///
    /// Elapsed time accumulates only while running. Returns `true` when
    /// the current interval completed on this tick; the caller owns the
    /// completion signal.
    pub fn tick(&mut self) -> bool {
        if self.mode == RunMode::Running {
            self.elapsed_s += 1;
        }
        if self.elapsed_s >= self.target_s.get() {
            self.finish_interval();
            return true;
        }
        false
    }

    /// Interval completion. Focus rolls into a break and bumps the
    /// completed counter; a break rolls back into focus.
    fn finish_interval(&mut self) {
        if self.kind == IntervalKind::Focus {
            self.completed += 1;
        }
        self.kind = self.kind.toggled();
        self.rewind();
    }

    /// Restart timing for the current kind: elapsed cleared, target
    /// recomputed, mode back to ready.
    fn rewind(&mut self) {
        self.elapsed_s = 0;
        self.target_s = self.durations.for_kind(self.kind);
        self.mode = RunMode::Ready;
    }

    /// Switch between focus and break. Ignored while running.
    ///
    /// Returns `true` if the kind actually flipped.
    pub fn toggle_kind(&mut self) -> bool {
        if self.mode != RunMode::Ready {
            return false;
        }
        self.kind = self.kind.toggled();
        self.rewind();
        true
    }

    /// Start when ready, pause when running
    pub fn toggle_run(&mut self) {
        self.mode = match self.mode {
            RunMode::Ready => RunMode::Running,
            RunMode::Running => RunMode::Ready,
        };
    }

    /// Drop out of running without touching elapsed time
    pub fn force_ready(&mut self) {
        self.mode = RunMode::Ready;
    }

    /// Full reset: back to a fresh focus interval with the completed
    /// counter cleared
    pub fn reset(&mut self) {
        self.completed = 0;
        self.kind = IntervalKind::Focus;
        self.rewind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> TimerState {
        TimerState::new(IntervalDurations::default())
    }

    /// Run one full interval of the current kind to completion
    fn run_interval(state: &mut TimerState) {
        state.toggle_run();
        let target = state.target_s();
        for _ in 0..target - 1 {
            assert!(!state.tick());
        }
        assert!(state.tick());
    }

    #[test]
    fn test_fresh_state() {
        let state = fresh();
        assert_eq!(state.mode(), RunMode::Ready);
        assert_eq!(state.kind(), IntervalKind::Focus);
        assert_eq!(state.elapsed_s(), 0);
        assert_eq!(state.target_s(), 1500);
        assert_eq!(state.completed(), 0);
    }

    #[test]
    fn test_tick_is_inert_while_ready() {
        let mut state = fresh();
        for _ in 0..10 {
            assert!(!state.tick());
        }
        assert_eq!(state.elapsed_s(), 0);
    }

    #[test]
    fn test_tick_accumulates_while_running() {
        let mut state = fresh();
        state.toggle_run();
        for expected in 1..=5 {
            state.tick();
            assert_eq!(state.elapsed_s(), expected);
        }
    }

    #[test]
    fn test_focus_completion_switches_to_break() {
        let mut state = fresh();
        run_interval(&mut state);

        assert_eq!(state.kind(), IntervalKind::Break);
        assert_eq!(state.completed(), 1);
        assert_eq!(state.elapsed_s(), 0);
        assert_eq!(state.target_s(), 300);
        assert_eq!(state.mode(), RunMode::Ready);
    }

    #[test]
    fn test_break_completion_keeps_count() {
        let mut state = fresh();
        run_interval(&mut state); // focus done, now on break
        run_interval(&mut state); // break done

        assert_eq!(state.kind(), IntervalKind::Focus);
        assert_eq!(state.completed(), 1);
        assert_eq!(state.target_s(), 1500);
    }

    #[test]
    fn test_elapsed_never_reaches_target() {
        let mut state = fresh();
        state.toggle_run();
        for _ in 0..4000 {
            state.tick();
            assert!(state.elapsed_s() < state.target_s());
        }
    }

    #[test]
    fn test_toggle_kind_only_while_ready() {
        let mut state = fresh();
        state.toggle_run();
        assert!(!state.toggle_kind());
        assert_eq!(state.kind(), IntervalKind::Focus);

        state.toggle_run(); // pause
        assert!(state.toggle_kind());
        assert_eq!(state.kind(), IntervalKind::Break);
        assert_eq!(state.target_s(), 300);
        assert_eq!(state.elapsed_s(), 0);
    }

    #[test]
    fn test_toggle_run_touches_only_mode() {
        let mut state = fresh();
        state.toggle_run();
        for _ in 0..30 {
            state.tick();
        }

        state.toggle_run();
        assert_eq!(state.mode(), RunMode::Ready);
        assert_eq!(state.elapsed_s(), 30);
        assert_eq!(state.kind(), IntervalKind::Focus);
        assert_eq!(state.completed(), 0);

        state.toggle_run();
        assert_eq!(state.mode(), RunMode::Running);
        assert_eq!(state.elapsed_s(), 30);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut state = fresh();
        run_interval(&mut state); // one focus completed
        state.toggle_run();
        for _ in 0..17 {
            state.tick();
        }

        state.reset();
        assert_eq!(state.mode(), RunMode::Ready);
        assert_eq!(state.kind(), IntervalKind::Focus);
        assert_eq!(state.elapsed_s(), 0);
        assert_eq!(state.target_s(), 1500);
        assert_eq!(state.completed(), 0);
    }

    #[test]
    fn test_completed_count_is_not_clamped() {
        let mut state = TimerState::new(IntervalDurations::new(2, 1).unwrap());
        for _ in 0..100 {
            run_interval(&mut state); // focus
            state.toggle_kind(); // skip the break
        }
        assert_eq!(state.completed(), 100);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn invariants_hold_for_any_event_sequence(
                ops in prop::collection::vec(0u8..5, 0..3000)
            ) {
                let durations = IntervalDurations::new(90, 30).unwrap();
                let mut state = TimerState::new(durations);
                let mut last_completed = 0u16;

                for op in ops {
                    match op {
                        0 => {
                            state.tick();
                        }
                        1 => state.toggle_run(),
                        2 => {
                            state.toggle_kind();
                        }
                        3 => state.force_ready(),
                        _ => state.reset(),
                    }

                    prop_assert!(state.elapsed_s() < state.target_s());
                    prop_assert_eq!(
                        state.target_s(),
                        durations.for_kind(state.kind()).get()
                    );
                    // Count only moves up, except across an explicit reset
                    prop_assert!(
                        state.completed() >= last_completed || state.completed() == 0
                    );
                    last_completed = state.completed();
                }
            }
        }
    }
}
