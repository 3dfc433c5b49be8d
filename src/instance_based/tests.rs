//! Tests for the instance-based ranker.

use ndarray::{array, Array2, ArrayView2};

use super::*;
use crate::error::RankError;

/// Two well-separated clusters with opposite label preferences.
fn clustered_training_data() -> (Array2<f64>, Array2<f64>) {
    let x = array![
        [0.0, 0.1],
        [0.1, 0.0],
        [0.0, 0.0],
        [10.0, 10.1],
        [10.1, 10.0],
        [10.0, 10.0],
    ];
    // Cluster A prefers 0 > 1 > 2, cluster B prefers 2 > 1 > 0.
    let y = array![
        [0.0, 1.0, 2.0],
        [0.0, 1.0, 2.0],
        [0.0, 1.0, 2.0],
        [2.0, 1.0, 0.0],
        [2.0, 1.0, 0.0],
        [2.0, 1.0, 0.0],
    ];
    (x, y)
}

fn fitted_ranker(x: &ArrayView2<f64>, y: &ArrayView2<f64>) -> InstanceBasedRanker {
    let config = InstanceBasedConfig {
        n_neighbors: 3,
        ..InstanceBasedConfig::default()
    };
    let mut ranker = InstanceBasedRanker::new(2, config);
    ranker.fit(x, y).unwrap();
    ranker
}

#[test]
fn test_predict_scores_follow_local_preferences() {
    let (x, y) = clustered_training_data();
    let ranker = fitted_ranker(&x.view(), &y.view());

    let queries = array![[0.05, 0.05], [10.05, 10.05]];
    let scores = ranker.predict_scores(&queries.view()).unwrap();

    // Near cluster A: object 0 strongest. Near cluster B: object 2.
    assert!(scores[[0, 0]] > scores[[0, 1]]);
    assert!(scores[[0, 1]] > scores[[0, 2]]);
    assert!(scores[[1, 2]] > scores[[1, 1]]);
    assert!(scores[[1, 1]] > scores[[1, 0]]);
}

#[test]
fn test_predict_returns_rankings() {
    let (x, y) = clustered_training_data();
    let ranker = fitted_ranker(&x.view(), &y.view());

    let queries = array![[0.05, 0.05], [10.05, 10.05]];
    let rankings = ranker.predict(&queries.view()).unwrap();
    assert_eq!(rankings.row(0), array![0.0, 1.0, 2.0].view());
    assert_eq!(rankings.row(1), array![2.0, 1.0, 0.0].view());
}

#[test]
fn test_predict_before_fit_fails() {
    let ranker = InstanceBasedRanker::with_defaults(2);
    let queries = array![[0.0, 0.0]];
    let err = ranker.predict_scores(&queries.view()).unwrap_err();
    assert!(matches!(err, RankError::NotFitted));
}

#[test]
fn test_fit_rejects_feature_mismatch() {
    let mut ranker = InstanceBasedRanker::with_defaults(4);
    let x = array![[0.0, 1.0]];
    let y = array![[0.0, 1.0]];
    let err = ranker.fit(&x.view(), &y.view()).unwrap_err();
    assert!(matches!(err, RankError::ShapeMismatch { .. }));
}

#[test]
fn test_fit_rejects_row_count_mismatch() {
    let mut ranker = InstanceBasedRanker::new(
        2,
        InstanceBasedConfig {
            n_neighbors: 1,
            ..InstanceBasedConfig::default()
        },
    );
    let x = array![[0.0, 1.0], [1.0, 0.0]];
    let y = array![[0.0, 1.0]];
    let err = ranker.fit(&x.view(), &y.view()).unwrap_err();
    assert!(matches!(err, RankError::ShapeMismatch { .. }));
}

#[test]
fn test_fit_rejects_excessive_neighbor_count() {
    let (x, y) = clustered_training_data();
    let config = InstanceBasedConfig {
        n_neighbors: 50,
        ..InstanceBasedConfig::default()
    };
    let mut ranker = InstanceBasedRanker::new(2, config);
    let err = ranker.fit(&x.view(), &y.view()).unwrap_err();
    assert!(matches!(err, RankError::InvalidInput(_)));
}

#[test]
fn test_unstandardized_fit_predict() {
    let (x, y) = clustered_training_data();
    let config = InstanceBasedConfig {
        n_neighbors: 3,
        standardize: false,
        ..InstanceBasedConfig::default()
    };
    let mut ranker = InstanceBasedRanker::new(2, config);
    ranker.fit(&x.view(), &y.view()).unwrap();

    let queries = array![[0.05, 0.05]];
    let rankings = ranker.predict(&queries.view()).unwrap();
    assert_eq!(rankings.row(0), array![0.0, 1.0, 2.0].view());
}

#[test]
fn test_config_serde_roundtrip() {
    let config = InstanceBasedConfig {
        n_neighbors: 7,
        standardize: false,
        ..InstanceBasedConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: InstanceBasedConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.n_neighbors, 7);
    assert!(!back.standardize);
}
