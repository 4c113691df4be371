//! Plain-text series tooling: downsample wide sample files, generate
//! synthetic key sets, and plot value/rank curves to PNG with an optional
//! interactive viewer.

pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod generate;
pub mod render;
pub mod settings;
pub mod state;
pub mod ui;

pub use data::model::{NamedSeries, SampleLine};
pub use error::{Result, SeriesError};
pub use settings::{Settings, ShortLinePolicy};
