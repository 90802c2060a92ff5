//! Serializable reports of a delay plan.
//!
//! [`PlanReport`] mirrors the text table (per-tap frames plus totals) and
//! [`BufferReport`] adds headroom-sized buffer lengths. Both serialize to
//! JSON and TOML.

use reverb_taps_core::{BYTES_PER_FRAME, DelayPlan, FrameCount, Headroom};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One converted tap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TapReport {
    /// Tap label, e.g. `comb0`.
    pub label: String,
    /// Requested delay in milliseconds.
    pub delay_ms: f64,
    /// Delay length in frames.
    pub frames: FrameCount,
}

/// Per-tap frame counts and running totals.
///
/// Scalar fields come before `taps` so the TOML form keeps all plain keys
/// ahead of the `[[taps]]` tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanReport {
    /// Frame rate in Hz.
    pub sample_rate: u32,
    /// Sum of all tap lengths.
    pub total_frames: FrameCount,
    /// `total_frames` at 4 bytes per frame.
    pub total_bytes: u64,
    /// Taps in processing order.
    pub taps: Vec<TapReport>,
}

impl PlanReport {
    /// Snapshot a plan.
    pub fn from_plan(plan: &DelayPlan) -> Self {
        Self {
            sample_rate: plan.sample_rate().hz(),
            total_frames: plan.total_frames(),
            total_bytes: plan.total_bytes(),
            taps: plan
                .taps()
                .iter()
                .map(|tap| TapReport {
                    label: tap.label.clone(),
                    delay_ms: tap.delay_ms,
                    frames: tap.frames,
                })
                .collect(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Buffer sizing for a single tap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BufferEntry {
    /// Tap label, e.g. `allp1`.
    pub label: String,
    /// Delay length in frames at scale 1.0.
    pub frames: FrameCount,
    /// Allocated length at the maximum delay scale.
    pub buffer_len: FrameCount,
    /// Loop length in use at the requested scale.
    pub active_len: FrameCount,
}

/// Headroom-sized buffers for every tap of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BufferReport {
    /// Largest delay scale the buffers hold.
    pub max_delay_scale: u32,
    /// Delay scale the active lengths were computed for.
    pub scale: f64,
    /// Sum of all buffer lengths.
    pub total_buffer_frames: FrameCount,
    /// `total_buffer_frames` at 4 bytes per frame.
    pub total_buffer_bytes: u64,
    /// Buffers in processing order.
    pub buffers: Vec<BufferEntry>,
}

impl BufferReport {
    /// Size every tap of `plan` for `headroom` and compute active lengths at `scale`.
    pub fn new(plan: &DelayPlan, headroom: Headroom, scale: f64) -> Result<Self, ConfigError> {
        // range check even when the plan has no taps
        headroom.active_len(0, scale)?;

        let buffers = plan
            .taps()
            .iter()
            .map(|tap| {
                let buffer_len = headroom.buffer_len(tap.frames);
                Ok(BufferEntry {
                    label: tap.label.clone(),
                    frames: tap.frames,
                    buffer_len,
                    active_len: headroom.active_len(buffer_len, scale)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let total_buffer_frames = plan.buffer_frames(headroom);
        Ok(Self {
            max_delay_scale: headroom.max_scale(),
            scale,
            total_buffer_frames,
            total_buffer_bytes: total_buffer_frames.saturating_mul(BYTES_PER_FRAME),
            buffers,
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
