//! Headroom buffer sizing for every delay line.

use clap::Args;
use reverb_taps_config::{BufferReport, Layout};

use super::common::{OutputFormat, emit};

/// Print buffer lengths at the factory headroom.
#[derive(Args)]
pub struct BuffersArgs {
    /// Delay scale to compute active loop lengths for, in (0, max]
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the buffers command.
pub fn run(args: BuffersArgs) -> anyhow::Result<()> {
    let layout = Layout::factory()?;
    let plan = layout.plan()?;
    let report = BufferReport::new(&plan, layout.headroom()?, args.scale)?;
    tracing::debug!(
        scale = args.scale,
        total_buffer_frames = report.total_buffer_frames,
        "sized buffers"
    );

    let rendered = match args.format {
        OutputFormat::Text => render_text(plan.sample_rate().hz(), &report),
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Toml => report.to_toml()?,
    };
    emit(&rendered);

    Ok(())
}

/// Render the buffer report as a table.
pub fn render_text(sample_rate: u32, report: &BufferReport) -> String {
    let mut out = format!("FRAME_RATE = {sample_rate}\n");
    out.push_str(&format!(
        "MAX_DELAY = {}, delay scale = {:.3}\n",
        report.max_delay_scale, report.scale
    ));
    for entry in &report.buffers {
        out.push_str(&format!(
            "{}: {} frames -> buffer {}, active {}\n",
            entry.label, entry.frames, entry.buffer_len, entry.active_len
        ));
    }
    out.push_str(&format!(
        "total buffer frames = {} or {} bytes\n",
        report.total_buffer_frames, report.total_buffer_bytes
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory_report(scale: f64) -> BufferReport {
        let layout = Layout::factory().unwrap();
        let plan = layout.plan().unwrap();
        BufferReport::new(&plan, layout.headroom().unwrap(), scale).unwrap()
    }

    #[test]
    fn unit_scale_table() {
        let text = render_text(48000, &factory_report(1.0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "FRAME_RATE = 48000");
        assert_eq!(lines[1], "MAX_DELAY = 2, delay scale = 1.000");
        assert_eq!(lines[2], "comb0: 1730 frames -> buffer 3460, active 1730");
        assert_eq!(lines[8], "allp2: 23 frames -> buffer 46, active 23");
        assert_eq!(lines[9], "total buffer frames = 15330 or 61320 bytes");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn full_scale_uses_whole_buffers() {
        let report = factory_report(2.0);
        assert!(report.buffers.iter().all(|b| b.active_len == b.buffer_len));
    }
}
