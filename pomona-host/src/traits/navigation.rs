//! Face navigation

/// Host-side face switching
pub trait FaceNavigator {
    /// Ask the host to advance to the next registered face.
    ///
    /// Advisory only: the host decides when the switch happens.
    fn move_to_next_face(&mut self);
}
