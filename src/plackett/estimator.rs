//! MM estimation of Plackett-Luce parameters.

use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Convergence controls for the MM iteration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlackettLuceConfig {
    /// Upper bound on MM iterations.
    pub max_iter: usize,
    /// Stop once the largest absolute parameter change falls below this.
    pub tolerance: f64,
}

impl Default for PlackettLuceConfig {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tolerance: 1e-6,
        }
    }
}

/// Fit Plackett-Luce strength parameters to a set of orderings.
///
/// `orderings` has one row per observed ranking, each row a permutation of
/// `0..n_objects` listing objects from most- to least-preferred. Returns
/// one strength per object, normalized to sum to 1; higher = more
/// preferred. An object placed last in every ordering has zero observed
/// wins and converges to strength 0.
///
/// Update rule (Hunter 2004): with `w_i` the number of times object i is
/// chosen at some stage (appears in a non-final position),
///
/// ```text
/// gamma_i <- w_i / sum over rankings r, stages t with i still unplaced
///                  of 1 / (sum of gamma_j over objects unplaced at t)
/// ```
pub fn fit_plackett_luce(
    orderings: &ArrayView2<usize>,
    config: &PlackettLuceConfig,
) -> Result<Array1<f64>> {
    let (n_rankings, n_objects) = orderings.dim();
    if n_rankings == 0 || n_objects == 0 {
        return Err(RankError::InvalidInput(
            "need at least one ordering over at least one object".to_string(),
        ));
    }
    for (r, row) in orderings.rows().into_iter().enumerate() {
        let mut seen = vec![false; n_objects];
        for &obj in row {
            if obj >= n_objects || seen[obj] {
                return Err(RankError::InvalidInput(format!(
                    "ordering row {r} is not a permutation of 0..{n_objects}"
                )));
            }
            seen[obj] = true;
        }
    }
    if n_objects == 1 {
        return Ok(Array1::ones(1));
    }

    // w_i: how often i was chosen at a stage, i.e. appeared before the
    // final position. The final stage of each ordering is a forced choice
    // and carries no information.
    let mut wins = vec![0.0f64; n_objects];
    for row in orderings.rows() {
        for t in 0..(n_objects - 1) {
            wins[row[t]] += 1.0;
        }
    }

    let mut params = vec![1.0 / n_objects as f64; n_objects];
    for _ in 0..config.max_iter {
        let mut denominators = vec![0.0f64; n_objects];
        for row in orderings.rows() {
            // tail[t] = sum of current strengths over the suffix row[t..].
            let mut tail = vec![0.0f64; n_objects];
            let mut acc = 0.0;
            for t in (0..n_objects).rev() {
                acc += params[row[t]];
                tail[t] = acc;
            }

            // The object at position p participates in stages 0..=p
            // (capped at the last informative stage n-2); accumulate the
            // prefix of inverse tail sums as we sweep.
            let mut inv_prefix = 0.0;
            for (p, &obj) in row.iter().enumerate() {
                if p <= n_objects - 2 {
                    inv_prefix += 1.0 / tail[p];
                }
                denominators[obj] += inv_prefix;
            }
        }

        let mut updated: Vec<f64> = wins
            .iter()
            .zip(&denominators)
            .map(|(&w, &d)| if d > 0.0 { w / d } else { 0.0 })
            .collect();
        let total: f64 = updated.iter().sum();
        for value in &mut updated {
            *value /= total;
        }

        let delta = params
            .iter()
            .zip(&updated)
            .map(|(&old, &new)| (old - new).abs())
            .fold(0.0f64, f64::max);
        params = updated;
        if delta < config.tolerance {
            break;
        }
    }

    Ok(Array1::from(params))
}
