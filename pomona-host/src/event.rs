//! Events delivered by the host to the active face

/// Events a face can receive from the host
///
/// The set is closed: the host never delivers anything outside this
/// enumeration, and faces ignore the variants they have no use for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Face was just brought to the foreground
    Activate,
    /// Periodic 1 Hz clock tick
    Tick,
    /// Mode button released
    ModeButtonUp,
    /// Light button released
    LightButtonUp,
    /// Alarm button released
    AlarmButtonUp,
    /// Alarm button held past the long-press threshold
    AlarmLongPress,
    /// Host inactivity timeout expired
    Timeout,
    /// Watch dropped into low-energy mode
    LowEnergyUpdate,
}

impl Event {
    /// Check if this event came from a button
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            Event::ModeButtonUp
                | Event::LightButtonUp
                | Event::AlarmButtonUp
                | Event::AlarmLongPress
        )
    }

    /// Check if this event is part of the face lifecycle
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Event::Activate | Event::Timeout | Event::LowEnergyUpdate)
    }
}
