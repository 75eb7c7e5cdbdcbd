use std::env;

use anyhow::Context;
use log::info;

use binary_labeling::config::TrainConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .context("usage: binary_labeling <config.json>")?;

    let config =
        TrainConfig::load(&path).with_context(|| format!("cannot load config '{path}'"))?;
    info!("training with {config:?}");

    let report = binary_labeling::train(&config)?;
    let fit = &report.fit;

    println!("w          : {}", fit.params.w);
    println!("b          : {}", fit.params.b);
    println!("J          : {:.6}", fit.cost);
    println!("iterations : {} ({:?})", fit.iterations, fit.stop);
    println!("accuracy   : {:.2}%", report.train_accuracy * 100.);
    if let Some(accuracy) = report.holdout_accuracy {
        println!("holdout    : {:.2}%", accuracy * 100.);
    }

    Ok(())
}
