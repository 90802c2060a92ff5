//! Reverb layout: sample rate, headroom and labeled delay groups.

use std::collections::HashSet;

use reverb_taps_core::{DEFAULT_MAX_SCALE, DelayPlan, Headroom, SampleRate};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const FACTORY_SCHROEDER: &str = include_str!("../factory/schroeder.toml");

/// A group of delay lines sharing a label prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TapGroup {
    /// Label prefix; taps are named `<prefix><index>`.
    pub prefix: String,

    /// Delays in milliseconds, in tap order.
    #[serde(default)]
    pub delays_ms: Vec<f64>,
}

impl TapGroup {
    /// Create a tap group.
    pub fn new(prefix: impl Into<String>, delays_ms: impl IntoIterator<Item = f64>) -> Self {
        Self {
            prefix: prefix.into(),
            delays_ms: delays_ms.into_iter().collect(),
        }
    }
}

/// Delay layout of a comb/allpass reverb.
///
/// # TOML Format
///
/// ```toml
/// name = "schroeder"
/// sample_rate = 48000
/// max_delay_scale = 2
///
/// [[groups]]
/// prefix = "comb"
/// delays_ms = [36.04, 31.12, 40.44, 44.92]
///
/// [[groups]]
/// prefix = "allp"
/// delays_ms = [5.0, 1.68, 0.48]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    /// Name of the layout.
    pub name: String,

    /// Optional description of the layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Frame rate the delays are converted at (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Largest delay scale the buffers must hold (defaults to 2).
    #[serde(default = "default_max_delay_scale")]
    pub max_delay_scale: u32,

    /// Tap groups, in processing order.
    #[serde(default)]
    pub groups: Vec<TapGroup>,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_max_delay_scale() -> u32 {
    DEFAULT_MAX_SCALE
}

impl Layout {
    /// The built-in Schroeder layout: four combs then three allpasses at 48 kHz.
    pub fn factory() -> Result<Self, ConfigError> {
        let layout = Self::from_toml(FACTORY_SCHROEDER)?;
        tracing::debug!(
            name = %layout.name,
            sample_rate = layout.sample_rate,
            groups = layout.groups.len(),
            "loaded factory layout"
        );
        Ok(layout)
    }

    /// Parse a layout from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the layout to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the layout without building a plan.
    pub fn validate(&self) -> Result<(), ConfigError> {
        SampleRate::new(self.sample_rate)?;
        Headroom::new(self.max_delay_scale)?;

        if self.groups.is_empty() {
            return Err(ConfigError::EmptyLayout(self.name.clone()));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.prefix.as_str()) {
                return Err(ConfigError::DuplicatePrefix(group.prefix.clone()));
            }
        }
        Ok(())
    }

    /// Validated sample rate.
    pub fn sample_rate(&self) -> Result<SampleRate, ConfigError> {
        Ok(SampleRate::new(self.sample_rate)?)
    }

    /// Validated headroom.
    pub fn headroom(&self) -> Result<Headroom, ConfigError> {
        Ok(Headroom::new(self.max_delay_scale)?)
    }

    /// Convert every group, in order, into a delay plan.
    pub fn plan(&self) -> Result<DelayPlan, ConfigError> {
        self.validate()?;
        let mut plan = DelayPlan::new(self.sample_rate()?);
        for group in &self.groups {
            plan.add_group(&group.prefix, &group.delays_ms)?;
        }
        tracing::info!(
            layout = %self.name,
            taps = plan.taps().len(),
            total_frames = plan.total_frames(),
            "built delay plan"
        );
        Ok(plan)
    }
}
