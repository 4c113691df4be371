use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by the downsampler, the series loader and the renderer.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}:{line}: token {column} ('{token}') is not a number", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
    },

    #[error("Line {line} has only {tokens} tokens, fewer than the target sample count")]
    DegenerateInput { line: usize, tokens: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to draw chart: {0}")]
    Plot(String),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Viewer failed: {0}")]
    Viewer(String),
}

pub type Result<T> = core::result::Result<T, SeriesError>;

impl SeriesError {
    /// Classify an I/O error raised while opening `path` for reading.
    pub fn from_open(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            SeriesError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SeriesError::io(path, source)
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        SeriesError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
