//! Layout and report configuration for reverb-taps.
//!
//! This crate holds the built-in reverb delay layout, converts it into a
//! [`DelayPlan`](reverb_taps_core::DelayPlan), and serializes the results.
//!
//! # Features
//!
//! - **Factory Layout**: The Schroeder comb/allpass layout, embedded as TOML
//! - **Validation**: Sample rate, headroom, empty and duplicate group checks
//! - **Reports**: JSON and TOML snapshots of plans and buffer sizing
//!
//! # Example
//!
//! ```rust
//! use reverb_taps_config::{Layout, PlanReport};
//!
//! let layout = Layout::factory().unwrap();
//! let plan = layout.plan().unwrap();
//! let report = PlanReport::from_plan(&plan);
//!
//! assert_eq!(report.total_frames, 7665);
//! println!("{}", report.to_json().unwrap());
//! ```

mod error;
mod layout;
mod report;

pub use error::ConfigError;
pub use layout::{Layout, TapGroup};
pub use report::{BufferEntry, BufferReport, PlanReport, TapReport};
