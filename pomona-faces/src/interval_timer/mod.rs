//! Pomodoro-style interval timer face
//!
//! Alternates focus and break intervals, counting completed focus
//! intervals on the display. Controls:
//!
//! - Alarm button: start / pause
//! - Light button: switch between focus and break (while paused)
//! - Alarm long press: reset intervals and counter
//! - Mode button: next face
//!
//! The bell indicator is shown while the timer is counting, and the
//! host buzzer plays once whenever an interval completes.

pub mod config;

mod render;
mod state;

pub use config::IntervalDurations;
pub use state::{IntervalKind, RunMode, TimerState};

use pomona_host::{Event, Host, Indicator, WatchFace};

/// Digit position the status line is written to
const STATUS_POSITION: u8 = 0;

/// The interval timer face
pub struct IntervalTimerFace {
    state: TimerState,
}

impl IntervalTimerFace {
    /// Create the face with the given interval durations
    pub fn new(durations: IntervalDurations) -> Self {
        Self {
            state: TimerState::new(durations),
        }
    }

    /// Read-only view of the timer state
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Bring the bell indicator in line with the current run mode
    fn sync_indicator<H: Host>(&self, host: &mut H) {
        match self.state.mode() {
            RunMode::Running => host.set_indicator(Indicator::Bell),
            RunMode::Ready => host.clear_indicator(Indicator::Bell),
        }
    }

    fn draw<H: Host>(&self, host: &mut H) {
        host.display_string(&render::status_line(&self.state), STATUS_POSITION);
    }
}

impl Default for IntervalTimerFace {
    fn default() -> Self {
        Self::new(IntervalDurations::default())
    }
}

impl<H: Host> WatchFace<H> for IntervalTimerFace {
    fn activate(&mut self, host: &mut H) {
        self.state.force_ready();
        host.set_colon();
        self.sync_indicator(host);
    }

    fn on_event(&mut self, event: Event, host: &mut H) -> bool {
        let redraw = match event {
            Event::Activate => true,
            Event::Tick => {
                if self.state.tick() {
                    host.play_signal();
                }
                true
            }
            Event::ModeButtonUp => {
                host.move_to_next_face();
                false
            }
            Event::LightButtonUp => {
                self.state.toggle_kind();
                true
            }
            Event::AlarmButtonUp => {
                self.state.toggle_run();
                true
            }
            Event::AlarmLongPress => {
                self.state.reset();
                // The next tick repaints
                false
            }
            Event::Timeout | Event::LowEnergyUpdate => false,
        };

        self.sync_indicator(host);
        if redraw {
            self.draw(host);
        }
        true
    }
}
