use std::path::Path;

use super::loader::{read_sample_lines, write_atomic};
use super::model::{SampleLine, Token};
use crate::error::{Result, SeriesError};
use crate::settings::{Settings, ShortLinePolicy};

// ---------------------------------------------------------------------------
// Stride selection
// ---------------------------------------------------------------------------

/// Step between kept tokens: `token_count / target`.
///
/// Zero whenever the line is shorter than `target`. A `target` of zero
/// keeps every token.
pub fn stride(token_count: usize, target: usize) -> usize {
    token_count.checked_div(target).unwrap_or(1)
}

/// Result of downsampling a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Tokens at the regular stride (an empty line keeps nothing).
    Kept(Vec<Token>),
    /// Line shorter than the target; stride clamped to 1.
    Clamped(Vec<Token>),
    /// Line shorter than the target and left out of the output.
    Skipped,
}

/// Select tokens `0, s, 2s, …` from one line.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn downsample_tokens(
    line_no: usize,
    tokens: &[Token],
    target: usize,
    policy: ShortLinePolicy,
) -> Result<LineOutcome> {
    if tokens.is_empty() {
        return Ok(LineOutcome::Kept(Vec::new()));
    }

    let step = stride(tokens.len(), target);
    if step > 0 {
        return Ok(LineOutcome::Kept(take_every(tokens, step)));
    }

    match policy {
        ShortLinePolicy::Clamp => Ok(LineOutcome::Clamped(tokens.to_vec())),
        ShortLinePolicy::Skip => Ok(LineOutcome::Skipped),
        ShortLinePolicy::Reject => Err(SeriesError::DegenerateInput {
            line: line_no,
            tokens: tokens.len(),
        }),
    }
}

fn take_every(tokens: &[Token], step: usize) -> Vec<Token> {
    tokens.iter().step_by(step).cloned().collect()
}

/// Serialize selected tokens: each followed by a comma, then a newline.
pub fn format_line(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum::<usize>() + 1);
    for tok in tokens {
        out.push_str(tok);
        out.push(',');
    }
    out.push('\n');
    out
}

// ---------------------------------------------------------------------------
// File-level driver
// ---------------------------------------------------------------------------

/// Counters describing one downsampler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownsampleReport {
    pub lines_read: usize,
    pub lines_written: usize,
    pub clamped: usize,
    pub skipped: usize,
}

/// Downsample every line of `lines` into the output text.
pub fn downsample_lines(
    lines: &[SampleLine],
    target: usize,
    policy: ShortLinePolicy,
) -> Result<(String, DownsampleReport)> {
    let mut out = String::new();
    let mut report = DownsampleReport {
        lines_read: lines.len(),
        ..Default::default()
    };

    for (i, line) in lines.iter().enumerate() {
        let line_no = i + 1;
        match downsample_tokens(line_no, &line.tokens, target, policy)? {
            LineOutcome::Kept(selected) => {
                log::debug!("Line {line_no}: kept {} of {} tokens", selected.len(), line.len());
                out.push_str(&format_line(&selected));
                report.lines_written += 1;
            }
            LineOutcome::Clamped(selected) => {
                log::warn!(
                    "Line {line_no}: only {} tokens (< {target}), keeping all of them",
                    line.len()
                );
                out.push_str(&format_line(&selected));
                report.lines_written += 1;
                report.clamped += 1;
            }
            LineOutcome::Skipped => {
                log::warn!("Line {line_no}: only {} tokens (< {target}), skipped", line.len());
                report.skipped += 1;
            }
        }
    }

    Ok((out, report))
}

/// Read `input`, downsample each line and write the result to `output`.
///
/// The input is read in full before the output is created; the output is
/// replaced atomically, so no partial file is left behind on failure.
pub fn downsample_file(
    input: &Path,
    output: &Path,
    target: usize,
    policy: ShortLinePolicy,
) -> Result<DownsampleReport> {
    let lines = read_sample_lines(input)?;
    let (text, report) = downsample_lines(&lines, target, policy)?;
    write_atomic(output, text.as_bytes())?;

    log::info!(
        "Downsampled {} lines from {} into {}",
        report.lines_written,
        input.display(),
        output.display()
    );
    Ok(report)
}

/// Run the downsampler on the file names configured in `settings`.
pub fn run(settings: &Settings) -> Result<DownsampleReport> {
    downsample_file(
        &settings.downsample_input_path(),
        &settings.downsample_output_path(),
        settings.target_samples,
        settings.short_line_policy,
    )
}
