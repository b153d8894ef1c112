//! Audible completion cue

/// Buzzer/haptic signal primitive
pub trait SignalSink {
    /// Play the completion signal.
    ///
    /// Fire and forget: no return value and no failure reporting.
    fn play_signal(&mut self);
}
