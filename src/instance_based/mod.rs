//! Instance-based label ranking.
//!
//! For a query instance, retrieve the k nearest training instances,
//! convert their stored rankings to orderings, and fit a Plackett-Luce
//! model to that neighborhood; the fitted strengths are the predicted
//! score vector. A lazy, purely local learner: `fit` only standardizes
//! features and builds the neighbor index.

use ndarray::{Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use crate::neighbors::{NearestNeighbors, StandardScaler};
use crate::plackett::{fit_plackett_luce, PlackettLuceConfig};
use crate::rank::{rankings_to_orderings, scores_to_rankings};

#[cfg(test)]
mod tests;

/// Configuration for [`InstanceBasedRanker`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstanceBasedConfig {
    /// Neighborhood size consulted per query.
    pub n_neighbors: usize,
    /// Standardize features before indexing and querying.
    pub standardize: bool,
    /// Convergence controls for the per-query Plackett-Luce fit.
    pub plackett_luce: PlackettLuceConfig,
}

impl Default for InstanceBasedConfig {
    fn default() -> Self {
        Self {
            n_neighbors: 20,
            standardize: true,
            plackett_luce: PlackettLuceConfig::default(),
        }
    }
}

/// State built by `fit` and consumed by the predict methods.
#[derive(Clone, Debug)]
struct FittedState {
    scaler: Option<StandardScaler>,
    index: NearestNeighbors,
    train_rankings: Array2<f64>,
}

/// Nearest-neighbor label ranker with Plackett-Luce aggregation.
#[derive(Clone, Debug)]
pub struct InstanceBasedRanker {
    n_features: usize,
    config: InstanceBasedConfig,
    fitted: Option<FittedState>,
}

impl InstanceBasedRanker {
    /// Create an unfitted ranker for feature vectors of fixed width.
    #[must_use]
    pub fn new(n_features: usize, config: InstanceBasedConfig) -> Self {
        Self {
            n_features,
            config,
            fitted: None,
        }
    }

    /// Create with default configuration.
    #[must_use]
    pub fn with_defaults(n_features: usize) -> Self {
        Self::new(n_features, InstanceBasedConfig::default())
    }

    /// Neighborhood size.
    #[must_use]
    pub fn n_neighbors(&self) -> usize {
        self.config.n_neighbors
    }

    /// Store the training data: standardize features (if configured),
    /// build the neighbor index, and retain the raw rankings.
    ///
    /// `x` is (instances, features), `y` is (instances, objects) holding
    /// one strict ranking per row (0 = most preferred).
    pub fn fit(&mut self, x: &ArrayView2<f64>, y: &ArrayView2<f64>) -> Result<()> {
        let (n_rows, n_features) = x.dim();
        if n_features != self.n_features {
            return Err(RankError::ShapeMismatch {
                expected: format!("{} features", self.n_features),
                actual: format!("{n_features} features"),
            });
        }
        if n_rows != y.nrows() {
            return Err(RankError::ShapeMismatch {
                expected: format!("{n_rows} ranking rows"),
                actual: format!("{} ranking rows", y.nrows()),
            });
        }
        if self.config.n_neighbors == 0 || self.config.n_neighbors > n_rows {
            return Err(RankError::InvalidInput(format!(
                "n_neighbors = {} must be in 1..={} (training instances)",
                self.config.n_neighbors, n_rows
            )));
        }

        let (scaler, features) = if self.config.standardize {
            let (scaler, transformed) = StandardScaler::fit_transform(x)?;
            (Some(scaler), transformed)
        } else {
            (None, x.to_owned())
        };

        let index = NearestNeighbors::fit(&features.view())?;
        self.fitted = Some(FittedState {
            scaler,
            index,
            train_rankings: y.to_owned(),
        });
        Ok(())
    }

    /// Predict a score vector per query row.
    ///
    /// Scores are the Plackett-Luce strengths fitted to the neighborhood's
    /// orderings; higher = more preferred.
    pub fn predict_scores(&self, x: &ArrayView2<f64>) -> Result<Array2<f64>> {
        let state = self.fitted.as_ref().ok_or(RankError::NotFitted)?;

        let features = match &state.scaler {
            Some(scaler) => scaler.transform(x)?,
            None => x.to_owned(),
        };
        let (_, neighbor_indices) = state
            .index
            .kneighbors(&features.view(), self.config.n_neighbors)?;

        let n_objects = state.train_rankings.ncols();
        let mut scores = Array2::zeros((x.nrows(), n_objects));
        for (q, neighbors) in neighbor_indices.axis_iter(Axis(0)).enumerate() {
            let mut neighborhood = Array2::zeros((neighbors.len(), n_objects));
            for (slot, &idx) in neighbors.iter().enumerate() {
                neighborhood.row_mut(slot).assign(&state.train_rankings.row(idx));
            }
            let orderings = rankings_to_orderings(&neighborhood.view())?;
            let params = fit_plackett_luce(&orderings.view(), &self.config.plackett_luce)?;
            scores.row_mut(q).assign(&params);
        }
        Ok(scores)
    }

    /// Predict a ranking per query row: `predict_scores` followed by
    /// score-to-ranking conversion.
    pub fn predict(&self, x: &ArrayView2<f64>) -> Result<Array2<f64>> {
        let scores = self.predict_scores(x)?;
        scores_to_rankings(&scores.view())
    }
}
