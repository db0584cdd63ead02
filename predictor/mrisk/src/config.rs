use std::path::PathBuf;

use clap::ValueEnum;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Artifact read at startup when neither `--model` nor `MRISK_MODEL` is set
pub const DEFAULT_MODEL_PATH: &str = "best_tuned_model.json";

/// Environment variable that overrides the model path
pub const MODEL_PATH_ENV: &str = "MRISK_MODEL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Process-wide settings, fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model_path: PathBuf,
    pub format: OutputFormat,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            format: OutputFormat::default(),
            verbosity: 0,
        }
    }
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install the global logger. `RUST_LOG` overrides the `-v` level.
    pub fn init_logging(&self) {
        let _ = env_logger::Builder::new()
            .filter_level(self.log_level())
            .parse_default_env()
            .format_timestamp(None)
            .try_init();
    }
}
