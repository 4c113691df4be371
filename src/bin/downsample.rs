use anyhow::{Context, Result};
use seriesviz::data::downsample;
use seriesviz::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::default();
    let report = downsample::run(&settings).with_context(|| {
        format!(
            "downsampling {} into {}",
            settings.downsample_input, settings.downsample_output
        )
    })?;

    if report.clamped > 0 || report.skipped > 0 {
        log::warn!(
            "{} short lines clamped, {} skipped",
            report.clamped,
            report.skipped
        );
    }
    println!(
        "Wrote {} of {} lines to {}",
        report.lines_written, report.lines_read, settings.downsample_output
    );
    Ok(())
}
