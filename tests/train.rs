use std::{
    env, fs,
    path::PathBuf,
    process,
    sync::atomic::{AtomicUsize, Ordering},
};

use binary_labeling::{
    FitErr, Params,
    activations::{HardSigmoid, Sigmoid},
    config::TrainConfig,
    cost::BinaryLabelingCost,
    dataset::Dataset,
    initialization::{Init, Initializer},
    training::{Stop, gradient_descent},
};
use ndarray::array;

static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);

fn temp_file(name: &str, content: &str) -> PathBuf {
    let id = NEXT_FILE.fetch_add(1, Ordering::Relaxed);
    let path = env::temp_dir().join(format!("binary_labeling_{}_{id}_{name}", process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn reads_one_well_formed_row() {
    let path = temp_file("one_row.csv", "0.5,1.5,1\n2.0,0\n");
    let ds = Dataset::read_from_file(&path, ',').unwrap();

    assert_eq!(ds.len(), 1);
    assert_eq!(ds.n_features(), 2);
    fs::remove_file(path).unwrap();
}

#[test]
fn separable_pair_descends() {
    let ds = Dataset::new(array![[0.], [1.]], array![0., 1.]).unwrap();
    let cost = BinaryLabelingCost::new(ds, Sigmoid::new());
    let start = Params::scalar(3., -1.5);
    let initial = cost.eval(&start).unwrap();

    let fit = gradient_descent(&cost, start, 0.1, 1e-6).unwrap();

    assert_eq!(fit.stop, Stop::Converged);
    assert!(fit.cost < initial);
    assert!(fit.params.w[0] > 0.);
}

#[test]
fn degenerate_activation_aborts_the_run() {
    let ds = Dataset::new(array![[0.], [1.]], array![0., 1.]).unwrap();
    let cost = BinaryLabelingCost::new(ds, HardSigmoid::new());

    let err = gradient_descent(&cost, Params::scalar(-20., 0.), 0.1, 1e-6).unwrap_err();
    assert!(matches!(err, FitErr::NonFiniteCost { .. }));
}

#[test]
fn zero_start_from_initializer() {
    let ds = Dataset::new(array![[0., 1.], [1., 0.], [1., 1.]], array![0., 0., 1.]).unwrap();
    let n = ds.n_features();
    let cost = BinaryLabelingCost::new(ds, Sigmoid::new());

    let params = Initializer::seeded(1).params(n, Init::Zeros).unwrap();
    assert_eq!(params, Params::new(array![0., 0.], 0.));

    let fit = gradient_descent(&cost, params, 0.5, 1e-7).unwrap();
    assert_eq!(fit.stop, Stop::Converged);
    assert!(fit.params.w.iter().all(|&w| w > 0.));
    assert!(fit.params.b < 0.);
}

#[test]
fn end_to_end_from_config() {
    let mut csv = String::from("x1,x2,label\n");
    for i in 0..40 {
        let a = i as f64;
        let label = if i >= 20 { 1 } else { 0 };
        csv.push_str(&format!("{a},{},{label}\n", 100. - a));
    }
    csv.push_str("not,a,row\n");
    let data = temp_file("data.csv", &csv);

    let config = format!(
        r#"{{
            "dataset": {{ "path": {:?} }},
            "activation": "sigmoid",
            "init": "random",
            "learning_rate": 1.0,
            "epsilon": 1e-9,
            "max_iters": 50000,
            "seed": 11,
            "normalize": true,
            "holdout": 0.25
        }}"#,
        data.display().to_string()
    );
    let config_path = temp_file("config.json", &config);

    let config = TrainConfig::load(&config_path).unwrap();
    let report = binary_labeling::train(&config).unwrap();

    assert!(report.fit.iterations >= 1);
    assert!(report.scaler.is_some());
    assert!(report.train_accuracy >= 0.9);
    assert!(report.holdout_accuracy.is_some());

    fs::remove_file(data).unwrap();
    fs::remove_file(config_path).unwrap();
}

#[test]
fn missing_config() {
    let err = TrainConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, FitErr::Io(_)));
}
