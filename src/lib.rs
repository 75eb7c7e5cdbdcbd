pub mod activations;
pub mod config;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod model;
pub mod optimization;
mod params;
pub mod training;

use log::info;
use rand::{SeedableRng, rngs::StdRng};

pub use error::{FitErr, Result};
pub use params::{Gradient, Params};

use crate::{
    config::{DatasetConfig, TrainConfig},
    cost::BinaryLabelingCost,
    dataset::{Dataset, MinMax},
    initialization::Initializer,
    model::Classifier,
    optimization::GradientDescent,
    training::{Fit, Trainer},
};

/// The outcome of `train`.
#[derive(Debug)]
pub struct Report {
    pub fit: Fit,
    /// The scaler the training features went through, to apply it to new data.
    pub scaler: Option<MinMax>,
    pub train_accuracy: f64,
    pub holdout_accuracy: Option<f64>,
}

/// Loads the dataset a config names and fits a classifier on it.
///
/// # Errors
/// Any error reading the dataset, splitting it, initializing the parameters or descending.
pub fn train(config: &TrainConfig) -> Result<Report> {
    let DatasetConfig { path, delimiter } = &config.dataset;
    let dataset = Dataset::read_from_file(path, *delimiter)?;
    info!(
        "loaded {} example(s) with {} feature(s), {} positive",
        dataset.len(),
        dataset.n_features(),
        dataset.positives()
    );

    let mut rng = generate_rng(config.seed);
    let (train_set, holdout) = match config.holdout {
        Some(fraction) => {
            let (train_set, holdout) = dataset.split(1. - fraction, &mut rng)?;
            (train_set, Some(holdout))
        }
        None => (dataset, None),
    };

    let (scaler, train_set, holdout) = if config.normalize {
        let (scaler, train_set, holdout) = normalize(train_set, holdout)?;
        (Some(scaler), train_set, holdout)
    } else {
        (None, train_set, holdout)
    };

    let params = Initializer::new(rng).params(train_set.n_features(), config.init)?;
    let cost = BinaryLabelingCost::new(train_set, config.activation.build());
    let optimizer = GradientDescent::new(config.learning_rate);
    let fit = Trainer::new(&cost, optimizer, config.trainer_config()).train(params)?;

    let (train_set, act) = cost.into_parts();
    let classifier = Classifier::new(fit.params.clone(), act);
    let train_accuracy = classifier.accuracy(&train_set, config.threshold)?;
    let holdout_accuracy = holdout
        .as_ref()
        .map(|holdout| classifier.accuracy(holdout, config.threshold))
        .transpose()?;

    info!(
        iterations = fit.iterations, cost = fit.cost;
        "training accuracy {:.2}%", train_accuracy * 100.
    );
    if let Some(accuracy) = holdout_accuracy {
        info!("holdout accuracy {:.2}%", accuracy * 100.);
    }

    Ok(Report {
        fit,
        scaler,
        train_accuracy,
        holdout_accuracy,
    })
}

/// Fits a `MinMax` on the training part only and scales both parts with it.
fn normalize(
    train_set: Dataset,
    holdout: Option<Dataset>,
) -> Result<(MinMax, Dataset, Option<Dataset>)> {
    let scaler = MinMax::fit(&train_set);
    let train_set = scaler.transform(&train_set)?;
    let holdout = holdout
        .map(|holdout| scaler.transform(&holdout))
        .transpose()?;

    Ok((scaler, train_set, holdout))
}

fn generate_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
