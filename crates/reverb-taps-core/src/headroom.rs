//! Delay-line headroom sizing.
//!
//! A reverb whose delay times can be stretched by a scale factor needs its
//! buffers allocated at the largest scale up front. Each tap's buffer holds
//! `frames * max_scale` samples and the active loop length for a given scale
//! is a truncated fraction of that buffer.

use libm::trunc;

use crate::{ConvertError, FrameCount};

/// Maximum delay scale used by the factory reverb layout.
pub const DEFAULT_MAX_SCALE: u32 = 2;

/// Buffer sizing for a maximum delay scale factor.
///
/// # Example
///
/// ```rust
/// use reverb_taps_core::Headroom;
///
/// let headroom = Headroom::default();
/// let len = headroom.buffer_len(1730);
/// assert_eq!(len, 3460);
/// assert_eq!(headroom.active_len(len, 1.0), Ok(1730));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headroom {
    max_scale: u32,
}

impl Headroom {
    /// Create headroom for delays stretched by up to `max_scale`.
    pub const fn new(max_scale: u32) -> Result<Self, ConvertError> {
        if max_scale == 0 {
            return Err(ConvertError::InvalidHeadroom(max_scale));
        }
        Ok(Self { max_scale })
    }

    /// Largest supported delay scale.
    #[inline]
    pub const fn max_scale(self) -> u32 {
        self.max_scale
    }

    /// Buffer length needed to hold `frames` at the maximum scale.
    #[inline]
    pub fn buffer_len(self, frames: FrameCount) -> FrameCount {
        frames.saturating_mul(FrameCount::from(self.max_scale))
    }

    /// Active loop length inside a buffer of `buffer_len` for delay `scale`.
    ///
    /// `scale` must be finite and in `(0, max_scale]`. The result is
    /// `scale * buffer_len / max_scale` truncated toward zero. Integer
    /// scales give exact lengths.
    ///
    /// A non-empty buffer must keep a loop of at least one frame; a scale
    /// that truncates it to zero is rejected.
    pub fn active_len(self, buffer_len: FrameCount, scale: f64) -> Result<FrameCount, ConvertError> {
        let invalid = ConvertError::InvalidScale {
            scale,
            max: self.max_scale,
        };
        let max = f64::from(self.max_scale);
        if !scale.is_finite() || scale <= 0.0 || scale > max {
            return Err(invalid);
        }
        let len = trunc(scale * buffer_len as f64 / max) as FrameCount;
        if buffer_len > 0 && len == 0 {
            return Err(invalid);
        }
        Ok(len)
    }
}

impl Default for Headroom {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}
