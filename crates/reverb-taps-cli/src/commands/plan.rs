//! Delay plan table: frame count per delay line and running total.

use clap::Args;
use reverb_taps_config::{Layout, PlanReport};
use reverb_taps_core::DelayPlan;

use super::common::{OutputFormat, emit};

/// Print the delay plan for the factory layout.
#[derive(Args, Default)]
pub struct PlanArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the plan command.
pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let plan = Layout::factory()?.plan()?;

    let rendered = match args.format {
        OutputFormat::Text => render_text(&plan),
        OutputFormat::Json => PlanReport::from_plan(&plan).to_json()?,
        OutputFormat::Toml => PlanReport::from_plan(&plan).to_toml()?,
    };
    emit(&rendered);

    Ok(())
}

/// Render the plan as the reference table.
///
/// ```text
/// FRAME_RATE = 48000
/// comb0: 36.040ms -> 1730 frames
/// allp0:  5.000ms -> 240 frames
/// total frame count = 1970 or 7880 bytes
/// ```
pub fn render_text(plan: &DelayPlan) -> String {
    let mut out = format!("FRAME_RATE = {}\n", plan.sample_rate().hz());
    for tap in plan.taps() {
        out.push_str(&format!(
            "{}: {:6.3}ms -> {} frames\n",
            tap.label, tap.delay_ms, tap.frames
        ));
    }
    out.push_str(&format!(
        "total frame count = {} or {} bytes\n",
        plan.total_frames(),
        plan.total_bytes()
    ));
    out
}
