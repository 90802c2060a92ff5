//! Reverb Taps Core - delay-line sizing for comb/allpass reverberation networks
//!
//! Converts millisecond delay times into whole frame counts at a fixed sample
//! rate and aggregates them into a [`DelayPlan`] with running frame and byte
//! totals.
//!
//! # Core Abstractions
//!
//! - [`SampleRate`] - Validated, non-zero samples per second
//! - [`ms_to_frames`] / [`convert`] - Round-half-up millisecond to frame conversion
//! - [`DelayPlan`] - Ordered taps (`comb0`, `allp2`, ...) with totals
//! - [`Headroom`] - Buffer sizing for a maximum delay scale factor
//!
//! # Rounding
//!
//! Frame counts are computed as `floor((ms / 1000) * rate + 0.5)`. This is
//! round-half-up, so a value landing exactly on `.5` always rounds upward,
//! never to the nearest even integer.
//!
//! # no_std Support
//!
//! Disable the default `std` feature to use the crate with `alloc` only:
//!
//! ```toml
//! [dependencies]
//! reverb-taps-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use reverb_taps_core::{DelayPlan, SampleRate};
//!
//! let rate = SampleRate::new(48000).unwrap();
//! let plan = DelayPlan::new(rate)
//!     .with_group("comb", &[36.04, 31.12, 40.44, 44.92])
//!     .unwrap()
//!     .with_group("allp", &[5.0, 1.68, 0.48])
//!     .unwrap();
//!
//! assert_eq!(plan.total_frames(), 7665);
//! assert_eq!(plan.total_bytes(), 30660);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod convert;
pub mod error;
pub mod headroom;
pub mod plan;

pub use convert::{BYTES_PER_FRAME, FrameCount, SampleRate, convert, ms_to_frames};
pub use error::ConvertError;
pub use headroom::{DEFAULT_MAX_SCALE, Headroom};
pub use plan::{DelayPlan, Tap};
