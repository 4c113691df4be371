use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::model::{NamedSeries, SampleLine};
use crate::error::{Result, SeriesError};

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| SeriesError::from_open(path, e))
}

/// Read every line of a downsampler input as whitespace-separated tokens.
///
/// The whole file is consumed before returning, so callers can fail on a
/// bad input without having touched their output.
pub fn read_sample_lines(path: &Path) -> Result<Vec<SampleLine>> {
    let reader = open(path)?;
    reader
        .lines()
        .map(|line| {
            line.map(|l| SampleLine::parse(&l))
                .map_err(|e| SeriesError::io(path, e))
        })
        .collect()
}

/// Load the series `name` from the first line of `path`.
///
/// Only the first line is read; anything after it is ignored.
pub fn load_series_file(name: &str, path: &Path) -> Result<NamedSeries> {
    let mut reader = open(path)?;
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| SeriesError::io(path, e))?;

    let series = NamedSeries::parse_line(name, &line, path)?;
    log::debug!("Loaded {series} from {}", path.display());
    Ok(series)
}

/// Load `<dir>/<name>.txt`.
pub fn load_series(dir: &Path, name: &str) -> Result<NamedSeries> {
    load_series_file(name, &dir.join(format!("{name}.txt")))
}

/// Derive a series name from a file path (`/a/b/expo.txt` → `expo`).
pub fn series_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("series")
        .to_string()
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Write `bytes` to `path` through a temporary file in the same directory,
/// replacing any existing file only once everything was written.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| SeriesError::io(path, e))?;
    tmp.write_all(bytes).map_err(|e| SeriesError::io(path, e))?;
    tmp.flush().map_err(|e| SeriesError::io(path, e))?;
    tmp.persist(path).map_err(|e| SeriesError::io(path, e.error))?;
    Ok(())
}
