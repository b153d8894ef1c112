//! Watch faces for the Pomona host
//!
//! Each face lives in its own module and implements the
//! `pomona_host::WatchFace` contract. Faces hold their own state for
//! the whole watch session; the host owns the instances and delivers
//! events into them one at a time.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod interval_timer;

pub use interval_timer::IntervalTimerFace;
