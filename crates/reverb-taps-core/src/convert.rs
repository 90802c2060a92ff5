//! Millisecond to frame conversion.
//!
//! A frame is one sample period at the sample rate. Delay lines are sized in
//! whole frames, so every millisecond delay is rounded with round-half-up:
//!
//! ```text
//! frames = floor((ms / 1000) * rate + 0.5)
//! ```
//!
//! The operation order matters for bit-exact results: divide by 1000 first,
//! then multiply by the rate.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use libm::floor;

use crate::ConvertError;

/// Length of a delay line in frames.
pub type FrameCount = u64;

/// Storage per frame for 32-bit samples.
pub const BYTES_PER_FRAME: u64 = 4;

/// Samples per second, guaranteed non-zero.
///
/// # Example
///
/// ```rust
/// use reverb_taps_core::SampleRate;
///
/// let rate = SampleRate::new(48000).unwrap();
/// assert_eq!(rate.hz(), 48000);
/// assert!(SampleRate::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleRate(u32);

impl SampleRate {
    /// Create a sample rate, rejecting zero.
    pub const fn new(hz: u32) -> Result<Self, ConvertError> {
        if hz == 0 {
            return Err(ConvertError::InvalidSampleRate(hz));
        }
        Ok(Self(hz))
    }

    /// Samples per second.
    #[inline]
    pub const fn hz(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = ConvertError;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        Self::new(hz)
    }
}

/// Convert a single delay in milliseconds to a frame count.
///
/// # Example
///
/// ```rust
/// use reverb_taps_core::{SampleRate, ms_to_frames};
///
/// let rate = SampleRate::new(48000).unwrap();
/// assert_eq!(ms_to_frames(36.04, rate), Ok(1730));
/// assert_eq!(ms_to_frames(1.68, rate), Ok(81));
/// ```
pub fn ms_to_frames(delay_ms: f64, rate: SampleRate) -> Result<FrameCount, ConvertError> {
    frames_at(0, delay_ms, rate)
}

/// Convert a sequence of millisecond delays, preserving input order.
///
/// Fails on the first delay that is negative, not finite, or too long to
/// count in frames; the error carries its index.
pub fn convert(rate: SampleRate, delays_ms: &[f64]) -> Result<Vec<FrameCount>, ConvertError> {
    delays_ms
        .iter()
        .enumerate()
        .map(|(index, &delay_ms)| frames_at(index, delay_ms, rate))
        .collect()
}

#[inline]
fn frames_at(index: usize, delay_ms: f64, rate: SampleRate) -> Result<FrameCount, ConvertError> {
    // NaN fails both comparisons, so check finiteness explicitly
    if !delay_ms.is_finite() || delay_ms < 0.0 {
        return Err(ConvertError::InvalidDelay {
            index,
            value: delay_ms,
        });
    }
    let rounded = floor((delay_ms / 1000.0) * f64::from(rate.hz()) + 0.5);
    // 2^64 is the first value the cast would clamp
    if rounded >= FrameCount::MAX as f64 {
        return Err(ConvertError::InvalidDelay {
            index,
            value: delay_ms,
        });
    }
    Ok(rounded as FrameCount)
}
