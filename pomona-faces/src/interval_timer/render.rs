//! Status line formatting
//!
//! The face owns one fixed-layout line on the segment display: face
//! tag, kind glyph, minutes and seconds remaining, completed count.

use core::fmt::Write;

use heapless::String;

use super::state::TimerState;

/// Capacity of the formatted status line. The fixed layout is 10
/// characters; the headroom absorbs a completed count past two digits,
/// which the display clips.
pub(super) const STATUS_LEN: usize = 16;

/// Format the status line for the current state.
///
/// Layout is `TO f2500 4`: tag, kind glyph, minutes remaining, seconds
/// remaining, completed count. Minutes and count are space padded to
/// two characters, seconds zero padded.
pub(super) fn status_line(state: &TimerState) -> String<STATUS_LEN> {
    let remaining = state.remaining_s();
    let minutes = remaining / 60;
    let seconds = remaining % 60;

    let mut line = String::new();
    let _ = write!(
        line,
        "TO {}{:2}{:02}{:2}",
        state.kind().glyph(),
        minutes,
        seconds,
        state.completed(),
    );
    line
}
