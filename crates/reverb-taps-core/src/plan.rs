//! Delay plan: labeled taps with running totals.
//!
//! Taps are grouped by label prefix (`comb`, `allp`) and numbered from zero
//! within each group. Groups keep the order they were added in, and the total
//! frame count accumulates across all of them.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use crate::{BYTES_PER_FRAME, ConvertError, FrameCount, Headroom, SampleRate, convert};

/// One delay line: its label, requested delay and size in frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Tap {
    /// Group prefix followed by the index within the group, e.g. `comb0`.
    pub label: String,
    /// Requested delay in milliseconds.
    pub delay_ms: f64,
    /// Delay length in frames.
    pub frames: FrameCount,
}

/// Ordered set of taps at a single sample rate.
///
/// # Example
///
/// ```rust
/// use reverb_taps_core::{DelayPlan, SampleRate};
///
/// let mut plan = DelayPlan::new(SampleRate::new(48000).unwrap());
/// plan.add_group("allp", &[5.0, 1.68]).unwrap();
///
/// assert_eq!(plan.taps()[1].label, "allp1");
/// assert_eq!(plan.total_frames(), 321);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DelayPlan {
    sample_rate: SampleRate,
    taps: Vec<Tap>,
    total_frames: FrameCount,
}

impl DelayPlan {
    /// Create an empty plan.
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            taps: Vec::new(),
            total_frames: 0,
        }
    }

    /// Append a group of taps labeled `<prefix><index>`.
    ///
    /// The whole group is validated before anything is appended, so a failed
    /// call leaves the plan unchanged.
    pub fn add_group(&mut self, prefix: &str, delays_ms: &[f64]) -> Result<&mut Self, ConvertError> {
        let frames = convert(self.sample_rate, delays_ms)?;

        let mut group_frames: FrameCount = 0;
        for (index, (&delay_ms, frames)) in delays_ms.iter().zip(frames).enumerate() {
            group_frames = group_frames.saturating_add(frames);
            self.taps.push(Tap {
                label: format!("{prefix}{index}"),
                delay_ms,
                frames,
            });
        }
        self.total_frames = self.total_frames.saturating_add(group_frames);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            prefix,
            taps = delays_ms.len(),
            group_frames,
            total_frames = self.total_frames,
            "plan_add_group"
        );

        Ok(self)
    }

    /// Builder form of [`add_group`](Self::add_group).
    pub fn with_group(mut self, prefix: &str, delays_ms: &[f64]) -> Result<Self, ConvertError> {
        self.add_group(prefix, delays_ms)?;
        Ok(self)
    }

    /// Sample rate all taps were converted at.
    #[inline]
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Taps in insertion order.
    #[inline]
    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }

    /// Sum of all tap lengths in frames.
    #[inline]
    pub fn total_frames(&self) -> FrameCount {
        self.total_frames
    }

    /// Storage for all taps at [`BYTES_PER_FRAME`].
    #[inline]
    pub fn total_bytes(&self) -> u64 {
        self.total_frames.saturating_mul(BYTES_PER_FRAME)
    }

    /// Sum of buffer lengths when every tap is sized for `headroom`.
    pub fn buffer_frames(&self, headroom: Headroom) -> FrameCount {
        self.taps
            .iter()
            .fold(0, |acc: FrameCount, tap| acc.saturating_add(headroom.buffer_len(tap.frames)))
    }

    /// Storage for all headroom-sized buffers.
    pub fn buffer_bytes(&self, headroom: Headroom) -> u64 {
        self.buffer_frames(headroom).saturating_mul(BYTES_PER_FRAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMB_MS: [f64; 4] = [36.04, 31.12, 40.44, 44.92];
    const ALLP_MS: [f64; 3] = [5.0, 1.68, 0.48];

    fn schroeder() -> DelayPlan {
        DelayPlan::new(SampleRate::new(48000).unwrap())
            .with_group("comb", &COMB_MS)
            .unwrap()
            .with_group("allp", &ALLP_MS)
            .unwrap()
    }

    #[test]
    fn test_totals() {
        let plan = schroeder();
        assert_eq!(plan.total_frames(), 7665);
        assert_eq!(plan.total_bytes(), 30660);
    }

    #[test]
    fn test_labels_and_order() {
        let plan = schroeder();
        let labels: Vec<&str> = plan.taps().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            ["comb0", "comb1", "comb2", "comb3", "allp0", "allp1", "allp2"]
        );
        let frames: Vec<FrameCount> = plan.taps().iter().map(|t| t.frames).collect();
        assert_eq!(frames, [1730, 1494, 1941, 2156, 240, 81, 23]);
    }

    #[test]
    fn test_failed_group_leaves_plan_unchanged() {
        let mut plan = schroeder();
        let before = plan.clone();
        let err = plan.add_group("bad", &[1.0, -2.0]).unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidDelay {
                index: 1,
                value: -2.0
            }
        );
        assert_eq!(plan, before);
    }

    #[test]
    fn test_empty_plan() {
        let plan = DelayPlan::new(SampleRate::new(44100).unwrap());
        assert!(plan.taps().is_empty());
        assert_eq!(plan.total_frames(), 0);
        assert_eq!(plan.total_bytes(), 0);
    }

    #[test]
    fn test_buffer_bytes_at_default_headroom() {
        let plan = schroeder();
        let headroom = Headroom::default();
        assert_eq!(plan.buffer_frames(headroom), 15330);
        assert_eq!(plan.buffer_bytes(headroom), 61320);
    }

    #[test]
    fn test_rebuilding_is_idempotent() {
        assert_eq!(schroeder(), schroeder());
    }
}
