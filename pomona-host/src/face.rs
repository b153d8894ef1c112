//! Face lifecycle contract

use crate::event::Event;
use crate::traits::Host;

/// A pluggable watch face
///
/// The host constructs each face once per session and keeps the
/// instance across face switches, so all face state lives for the
/// lifetime of the device session. Construction performs the one-time
/// initialization; the lifecycle hooks below are called on top of it.
pub trait WatchFace<H: Host> {
    /// Registration hook, called when the host wires the face in.
    ///
    /// May be called again for an already-registered face; existing
    /// state must be left untouched in that case. The default body
    /// does nothing, which satisfies both calls for faces that fully
    /// initialize in their constructor.
    fn setup(&mut self, _host: &mut H) {}

    /// Face brought to the foreground.
    fn activate(&mut self, host: &mut H);

    /// Process one host event.
    ///
    /// The host serializes these calls; the face runs to completion
    /// before returning. Returns `false` only to request the host shut
    /// the face down early.
    fn on_event(&mut self, event: Event, host: &mut H) -> bool;

    /// Face sent to the background. State is retained verbatim for the
    /// next activation; the default body does nothing.
    fn resign(&mut self, _host: &mut H) {}
}
