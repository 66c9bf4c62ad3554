// End-to-end pipeline tests over a synthetic CSV corpus.
//
// Covers the cross-module properties: split determinism through the whole
// run, prediction/report alignment, and the two-class report shape.

use std::io::Write;
use std::path::PathBuf;

use veracity::config::Config;
use veracity::data::{loader, split};
use veracity::pipeline;

/// Write a labeled corpus where class-specific words make the task easy.
fn write_corpus(name: &str, rows: usize) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "veracity-test-{name}-{}.csv",
        std::process::id()
    ));
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, ",title,text,label").unwrap();
    for i in 0..rows {
        writeln!(
            f,
            "{i},R{i},parliament committee approved the infrastructure report item {i},real"
        )
        .unwrap();
        writeln!(
            f,
            "{},F{},unbelievable secret trick exposed celebrities stunned item {},fake",
            rows + i,
            i,
            i
        )
        .unwrap();
    }
    path
}

fn config_for(path: &PathBuf) -> Config {
    Config {
        data_path: path.display().to_string(),
        seed: 42,
        test_fraction: 0.2,
        max_features: 100,
        min_df: 0.05,
        max_df: 0.95,
        epochs: 100,
        learning_rate: 0.1,
    }
}

#[test]
fn split_is_stable_across_runs() {
    let path = write_corpus("split-stable", 50);
    let records_a = loader::load_records(&path).unwrap();
    let records_b = loader::load_records(&path).unwrap();

    let a = split::train_test_split(records_a, 0.2, 42).unwrap();
    let b = split::train_test_split(records_b, 0.2, 42).unwrap();
    assert_eq!(a.train_texts, b.train_texts);
    assert_eq!(a.test_labels, b.test_labels);

    std::fs::remove_file(path).ok();
}

#[test]
fn report_covers_exactly_the_two_label_classes() {
    let path = write_corpus("two-classes", 40);
    let report = pipeline::evaluate(&config_for(&path)).unwrap();

    let classes: Vec<&String> = report.classes.keys().collect();
    assert_eq!(classes, ["fake", "real"]);
    for metrics in report.classes.values() {
        assert!(metrics.support > 0);
        assert!((0.0..=1.0).contains(&metrics.precision));
        assert!((0.0..=1.0).contains(&metrics.recall));
        assert!((0.0..=1.0).contains(&metrics.f1));
    }

    std::fs::remove_file(path).ok();
}

#[test]
fn supports_sum_to_test_size() {
    let path = write_corpus("supports", 40);
    let report = pipeline::evaluate(&config_for(&path)).unwrap();

    let total_support: usize = report.classes.values().map(|m| m.support).sum();
    assert_eq!(total_support, report.total);
    assert_eq!(report.total, 16); // 20% of 80 records

    std::fs::remove_file(path).ok();
}

#[test]
fn evaluate_is_deterministic() {
    let path = write_corpus("determinism", 40);
    let config = config_for(&path);

    let a = pipeline::evaluate(&config).unwrap();
    let b = pipeline::evaluate(&config).unwrap();
    assert_eq!(a.accuracy, b.accuracy);
    assert_eq!(a.classes, b.classes);

    std::fs::remove_file(path).ok();
}

#[test]
fn three_label_corpus_is_rejected() {
    let path = std::env::temp_dir().join(format!(
        "veracity-test-triple-{}.csv",
        std::process::id()
    ));
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, ",text,label").unwrap();
    for i in 0..30 {
        let label = ["real", "fake", "satire"][i % 3];
        writeln!(f, "{i},some repeated article text number {i},{label}").unwrap();
    }
    drop(f);

    let result = pipeline::evaluate(&config_for(&path));
    assert!(result.is_err());

    std::fs::remove_file(path).ok();
}
