//! Host collaborator traits
//!
//! These traits define what a face may ask of the host hardware. All
//! calls are fire-and-forget: the segment display, indicator glyphs,
//! and buzzer have no failure mode to report back to a face.

pub mod display;
pub mod navigation;
pub mod signal;

pub use display::{DisplaySink, Indicator, IndicatorControl};
pub use navigation::FaceNavigator;
pub use signal::SignalSink;

/// Everything a face needs from the host, in one bound
pub trait Host: DisplaySink + IndicatorControl + SignalSink + FaceNavigator {}

// Blanket implementation for any full host
impl<T: DisplaySink + IndicatorControl + SignalSink + FaceNavigator> Host for T {}
