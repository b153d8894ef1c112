//! Interval duration configuration
//!
//! Durations are fixed at build time; the face has no runtime settings
//! surface. Hosts that persist settings can enable the `serde` feature
//! and store a pair themselves.

use core::num::NonZeroU16;

use super::state::IntervalKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default focus interval: 25 minutes
pub const DEFAULT_FOCUS_S: u16 = 25 * 60;

/// Default break interval: 5 minutes
pub const DEFAULT_BREAK_S: u16 = 5 * 60;

/// Configured interval lengths in seconds
///
/// Both lengths are non-zero: a zero-length interval would complete on
/// the same tick that starts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalDurations {
    focus_s: NonZeroU16,
    break_s: NonZeroU16,
}

impl IntervalDurations {
    /// Build-time defaults: 25 minute focus, 5 minute break
    pub const DEFAULT: Self = match Self::new(DEFAULT_FOCUS_S, DEFAULT_BREAK_S) {
        Some(durations) => durations,
        None => panic!("default durations are non-zero"),
    };

    /// Create a duration pair, rejecting zero-length intervals
    pub const fn new(focus_s: u16, break_s: u16) -> Option<Self> {
        match (NonZeroU16::new(focus_s), NonZeroU16::new(break_s)) {
            (Some(focus_s), Some(break_s)) => Some(Self { focus_s, break_s }),
            _ => None,
        }
    }

    /// Target length for one kind of interval
    pub fn for_kind(&self, kind: IntervalKind) -> NonZeroU16 {
        match kind {
            IntervalKind::Focus => self.focus_s,
            IntervalKind::Break => self.break_s,
        }
    }
}

impl Default for IntervalDurations {
    fn default() -> Self {
        Self::DEFAULT
    }
}
