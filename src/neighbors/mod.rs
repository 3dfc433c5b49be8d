//! Feature standardization and brute-force nearest-neighbor search.
//!
//! In-process stand-ins for the collaborators the instance-based ranker
//! needs: a per-feature standard scaler and a Euclidean k-nearest-neighbor
//! index over the training features.

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::{RankError, Result};


/// Per-feature standardization to zero mean and unit variance.
///
/// Zero-variance features pass through with unit scale instead of
/// dividing by zero.
#[derive(Clone, Debug)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    /// Learn mean and scale from a (instances, features) matrix.
    pub fn fit(x: &ArrayView2<f64>) -> Result<Self> {
        let (n_rows, n_features) = x.dim();
        if n_rows == 0 || n_features == 0 {
            return Err(RankError::InvalidInput(
                "cannot fit a scaler on an empty matrix".to_string(),
            ));
        }

        let mean = x.mean_axis(Axis(0)).ok_or_else(|| {
            RankError::InvalidInput("cannot fit a scaler on an empty matrix".to_string())
        })?;
        let mut scale = Array1::zeros(n_features);
        for (j, column) in x.axis_iter(Axis(1)).enumerate() {
            let var = column
                .iter()
                .map(|&v| (v - mean[j]).powi(2))
                .sum::<f64>()
                / n_rows as f64;
            let std = var.sqrt();
            scale[j] = if std > 0.0 { std } else { 1.0 };
        }
        Ok(Self { mean, scale })
    }

    /// Standardize a matrix with the learned statistics.
    pub fn transform(&self, x: &ArrayView2<f64>) -> Result<Array2<f64>> {
        let (_, n_features) = x.dim();
        if n_features != self.mean.len() {
            return Err(RankError::ShapeMismatch {
                expected: format!("{} features", self.mean.len()),
                actual: format!("{n_features} features"),
            });
        }
        let mut out = x.to_owned();
        for mut row in out.axis_iter_mut(Axis(0)) {
            row -= &self.mean;
            row /= &self.scale;
        }
        Ok(out)
    }

    /// Fit and transform in one step.
    pub fn fit_transform(x: &ArrayView2<f64>) -> Result<(Self, Array2<f64>)> {
        let scaler = Self::fit(x)?;
        let transformed = scaler.transform(x)?;
        Ok((scaler, transformed))
    }
}

/// Brute-force Euclidean nearest-neighbor index.
#[derive(Clone, Debug)]
pub struct NearestNeighbors {
    data: Array2<f64>,
}

impl NearestNeighbors {
    /// Index a (instances, features) training matrix.
    pub fn fit(x: &ArrayView2<f64>) -> Result<Self> {
        let (n_rows, n_features) = x.dim();
        if n_rows == 0 || n_features == 0 {
            return Err(RankError::InvalidInput(
                "cannot index an empty training matrix".to_string(),
            ));
        }
        Ok(Self { data: x.to_owned() })
    }

    /// Number of indexed instances.
    #[must_use]
    pub fn n_indexed(&self) -> usize {
        self.data.nrows()
    }

    /// For each query row, the `k` nearest training rows.
    ///
    /// Returns `(distances, indices)`, both shaped (queries, k), nearest
    /// first; distance ties are broken by training-row index.
    pub fn kneighbors(
        &self,
        queries: &ArrayView2<f64>,
        k: usize,
    ) -> Result<(Array2<f64>, Array2<usize>)> {
        if k == 0 || k > self.data.nrows() {
            return Err(RankError::InvalidInput(format!(
                "k = {k} must be in 1..={} (number of indexed instances)",
                self.data.nrows()
            )));
        }
        let (n_queries, n_features) = queries.dim();
        if n_features != self.data.ncols() {
            return Err(RankError::ShapeMismatch {
                expected: format!("{} features", self.data.ncols()),
                actual: format!("{n_features} features"),
            });
        }

        let mut distances = Array2::zeros((n_queries, k));
        let mut indices = Array2::zeros((n_queries, k));
        for (q, query) in queries.axis_iter(Axis(0)).enumerate() {
            let mut candidates: Vec<(f64, usize)> = self
                .data
                .axis_iter(Axis(0))
                .enumerate()
                .map(|(i, row)| {
                    let sq = query
                        .iter()
                        .zip(row.iter())
                        .map(|(&a, &b)| (a - b) * (a - b))
                        .sum::<f64>();
                    (sq, i)
                })
                .collect();
            candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            for (slot, &(sq, i)) in candidates.iter().take(k).enumerate() {
                distances[[q, slot]] = sq.sqrt();
                indices[[q, slot]] = i;
            }
        }
        Ok((distances, indices))
    }
}
