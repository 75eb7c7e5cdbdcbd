use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    Result,
    activations::ActFnKind,
    initialization::Init,
    training::{DEFAULT_REPORT_EVERY, TrainerConfig},
};

/// Where to read the examples from.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

/// A full training run, usually loaded from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainConfig {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub activation: ActFnKind,
    #[serde(default)]
    pub init: Init,
    pub learning_rate: f64,
    pub epsilon: f64,
    #[serde(default)]
    pub max_iters: Option<NonZeroUsize>,
    #[serde(default = "default_report_every")]
    pub report_every: NonZeroUsize,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Min-max scale the features before training.
    #[serde(default)]
    pub normalize: bool,
    /// Fraction of the examples kept out of training to measure accuracy on.
    #[serde(default)]
    pub holdout: Option<f64>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_delimiter() -> char {
    ','
}

fn default_report_every() -> NonZeroUsize {
    DEFAULT_REPORT_EVERY
}

fn default_threshold() -> f64 {
    0.5
}

impl TrainConfig {
    /// Loads a `TrainConfig` from a JSON file.
    ///
    /// # Errors
    /// `Io` if the file can't be read, `Config` if it isn't a valid config.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn trainer_config(&self) -> TrainerConfig {
        let config = TrainerConfig::new(self.epsilon).with_report_every(self.report_every);

        match self.max_iters {
            Some(max_iters) => config.with_max_iters(max_iters),
            None => config,
        }
    }
}
