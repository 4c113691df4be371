use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Run settings
// ---------------------------------------------------------------------------

/// What the downsampler does with a non-empty line shorter than the target
/// sample count, where the computed stride would be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortLinePolicy {
    /// Treat the stride as 1 and keep every token.
    #[default]
    Clamp,
    /// Leave the line out of the output.
    Skip,
    /// Fail with `SeriesError::DegenerateInput`.
    Reject,
}

/// Everything the three binaries need to know, with the defaults they run with.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory all relative input and output file names resolve against.
    pub work_dir: PathBuf,

    // -- downsampler --
    pub downsample_input: String,
    pub downsample_output: String,
    /// Number of tokens the stride aims to keep per line.
    pub target_samples: usize,
    pub short_line_policy: ShortLinePolicy,

    // -- plotter --
    /// Dataset names; each backs `<name>.txt` and `<name>.png`.
    pub series_names: Vec<String>,
    pub image_size: (u32, u32),
    /// Open the viewer once every series has been rendered.
    pub interactive: bool,

    // -- generator --
    pub data_length: usize,
    pub epsilon: usize,
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            downsample_input: "annealing.txt".to_string(),
            downsample_output: "annealing2.txt".to_string(),
            target_samples: 100,
            short_line_policy: ShortLinePolicy::Clamp,
            series_names: ["uniform", "lognormal", "expo"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            image_size: (1200, 800),
            interactive: true,
            data_length: 10_000,
            epsilon: 128,
            seed: 42,
        }
    }
}

impl Settings {
    /// Settings rooted at `dir` with the viewer disabled.
    pub fn headless_in(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: dir.into(),
            interactive: false,
            ..Default::default()
        }
    }

    pub fn downsample_input_path(&self) -> PathBuf {
        self.work_dir.join(&self.downsample_input)
    }

    pub fn downsample_output_path(&self) -> PathBuf {
        self.work_dir.join(&self.downsample_output)
    }

    pub fn series_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(format!("{name}.txt"))
    }

    pub fn image_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(format!("{name}.png"))
    }
}
