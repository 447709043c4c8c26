//! Run configuration, built once at startup and passed down by reference.

use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

/// Default reviews file, used when the input argument is `.`.
pub const DEFAULT_REVIEWS: &str = "reviews_short.json";
/// Default directory for split review files.
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Default persisted model artifact.
pub const DEFAULT_MODEL: &str = "yelp_model.json";
/// Default verbosity (info).
pub const DEFAULT_VERBOSITY: u8 = 2;

/// Immutable run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub reviews_path: PathBuf,
    pub output_dir: PathBuf,
    pub model_path: PathBuf,
    /// 0 = errors only, 1 = warn, 2 = info, 3 = debug, 4+ = trace.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reviews_path: PathBuf::from(DEFAULT_REVIEWS),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            model_path: PathBuf::from(DEFAULT_MODEL),
            verbosity: DEFAULT_VERBOSITY,
        }
    }
}

impl Config {
    pub fn with_reviews_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reviews_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Resolve a command-line input path; `.` means the default reviews file.
    pub fn resolve_input(&self, arg: &Path) -> PathBuf {
        if arg == Path::new(".") {
            self.reviews_path.clone()
        } else {
            arg.to_path_buf()
        }
    }

    /// Maximum log level for the configured verbosity.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::WARN,
            2 => LevelFilter::INFO,
            3 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
