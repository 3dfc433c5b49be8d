//! Random pairwise probability matrices with a non-transitivity guarantee.

use ndarray::Array2;
use rand::Rng;

use crate::error::{RankError, Result};
use crate::pairwise::graph::PreferenceGraph;

/// Default cap on rejection-sampling attempts.
///
/// For n >= 3 a uniform matrix contains an intransitive cycle with
/// probability well above 1/4, so 1000 attempts leaves the failure
/// probability negligible while still bounding the loop.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Generate an `n_objects` x `n_objects` pairwise probability matrix whose
/// preference graph contains at least one SCC of size >= 3.
///
/// Each unordered pair (i, j) receives a uniform draw r in [0, 1) as
/// `P[i, j]` and 1 - r as `P[j, i]`; the diagonal stays zero. Candidates
/// whose preference graph is transitive (no cycle of length >= 3) are
/// rejected and redrawn, up to `max_attempts` times.
///
/// # Errors
///
/// - `InvalidInput` if `n_objects < 3` (no cycle is possible, the
///   rejection loop could never terminate) or `max_attempts == 0`.
/// - `NonTransitiveGenerationFailed` if the attempt cap is exhausted.
pub fn create_pairwise_prob_matrix<R: Rng + ?Sized>(
    n_objects: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Array2<f64>> {
    if n_objects < 3 {
        return Err(RankError::InvalidInput(format!(
            "need at least 3 objects for an intransitive cycle, got {n_objects}"
        )));
    }
    if max_attempts == 0 {
        return Err(RankError::InvalidInput(
            "max_attempts must be at least 1".to_string(),
        ));
    }

    for _ in 0..max_attempts {
        let mut pairwise = Array2::zeros((n_objects, n_objects));
        for i in 0..n_objects {
            for j in (i + 1)..n_objects {
                let r: f64 = rng.random();
                pairwise[[i, j]] = r;
                pairwise[[j, i]] = 1.0 - r;
            }
        }

        let graph = PreferenceGraph::from_pairwise_matrix(&pairwise.view())?;
        if graph.is_non_transitive() {
            return Ok(pairwise);
        }
    }

    Err(RankError::NonTransitiveGenerationFailed {
        attempts: max_attempts,
    })
}
