use std::fmt;
use std::path::Path;

use crate::error::{Result, SeriesError};

// ---------------------------------------------------------------------------
// SampleLine – raw tokens of one downsampler input line
// ---------------------------------------------------------------------------

/// A single whitespace-delimited substring of an input line.
pub type Token = String;

/// One line of the downsampler input, kept as opaque tokens so selected
/// samples are written back byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleLine {
    pub tokens: Vec<Token>,
}

impl SampleLine {
    /// Split a raw line on any run of whitespace.
    pub fn parse(line: &str) -> Self {
        SampleLine {
            tokens: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ---------------------------------------------------------------------------
// NamedSeries – one plotter dataset
// ---------------------------------------------------------------------------

/// A dataset identified by a short name, backed by `<name>.txt` and
/// rendered to `<name>.png`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    /// Parsed values in file order (x axis).
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        NamedSeries {
            name: name.into(),
            values,
        }
    }

    /// Parse one line of single-space separated numbers read from `path`.
    ///
    /// The line terminator is stripped first. Every token must parse as an
    /// `f64`; an empty token (doubled space, empty line) is malformed.
    pub fn parse_line(name: &str, line: &str, path: &Path) -> Result<Self> {
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        let values = line
            .split(' ')
            .enumerate()
            .map(|(j, tok)| {
                tok.trim()
                    .parse::<f64>()
                    .map_err(|_| SeriesError::MalformedLine {
                        path: path.to_path_buf(),
                        line: 1,
                        column: j + 1,
                        token: tok.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(NamedSeries::new(name, values))
    }

    /// Rank positions `1..=N` paired with the values (y axis).
    pub fn ranks(&self) -> Vec<u64> {
        (1..=self.values.len() as u64).collect()
    }

    /// `[value, rank]` pairs in plotting order.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .zip(1u64..)
            .map(|(&v, r)| [v, r as f64])
            .collect()
    }

    /// Points split at non-finite values, so each run can be drawn as one
    /// unbroken line.
    pub fn finite_runs(&self) -> Vec<Vec<[f64; 2]>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for p in self.points() {
            if p[0].is_finite() {
                current.push(p);
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }

    /// Smallest and largest finite value, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for NamedSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} values)", self.name, self.values.len())
    }
}
