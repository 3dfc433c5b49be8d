//! Score-to-ranking and ranking-to-ordering conversion.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{RankError, Result};

/// Convert a (instances, objects) score matrix into 0-based rankings,
/// 0 = most preferred.
///
/// Tie handling is a whole-batch decision: if any instance in the batch
/// contains an exact tie, every row is ranked with the fractional
/// (average-rank) path so the output semantics are uniform across rows.
/// Otherwise the fast double-argsort path is used. A row with all-equal
/// scores degenerates to a constant row of `(n - 1) / 2`.
pub fn scores_to_rankings(scores: &ArrayView2<f64>) -> Result<Array2<f64>> {
    let (n_instances, n_objects) = scores.dim();
    if n_objects == 0 {
        return Err(RankError::InvalidInput(
            "score matrix has no objects".to_string(),
        ));
    }

    let has_ties = scores.axis_iter(Axis(0)).any(|row| row_has_tie(&row));

    let mut rankings = Array2::zeros((n_instances, n_objects));
    for (i, row) in scores.axis_iter(Axis(0)).enumerate() {
        let ranks = if has_ties {
            fractional_ranks(&row)
        } else {
            strict_ranks(&row)
        };
        for (j, r) in ranks.into_iter().enumerate() {
            rankings[[i, j]] = r;
        }
    }
    Ok(rankings)
}

/// Recover the ordering (object indices best-to-worst) from each ranking
/// row. Equal rank values are broken by object index, so fractional
/// (tied) rankings still produce a valid permutation per row.
pub fn rankings_to_orderings(rankings: &ArrayView2<f64>) -> Result<Array2<usize>> {
    let (n_instances, n_objects) = rankings.dim();
    if n_objects == 0 {
        return Err(RankError::InvalidInput(
            "ranking matrix has no objects".to_string(),
        ));
    }

    let mut orderings = Array2::zeros((n_instances, n_objects));
    for (i, row) in rankings.axis_iter(Axis(0)).enumerate() {
        let order = argsort(&row);
        for (k, obj) in order.into_iter().enumerate() {
            orderings[[i, k]] = obj;
        }
    }
    Ok(orderings)
}

/// Invert each ordering row back into a ranking: `ranking[ordering[k]] = k`.
///
/// Every row must be a permutation of `0..n_objects`.
pub fn orderings_to_rankings(orderings: &ArrayView2<usize>) -> Result<Array2<usize>> {
    let (n_instances, n_objects) = orderings.dim();
    if n_objects == 0 {
        return Err(RankError::InvalidInput(
            "ordering matrix has no objects".to_string(),
        ));
    }

    let mut rankings = Array2::zeros((n_instances, n_objects));
    for (i, row) in orderings.axis_iter(Axis(0)).enumerate() {
        let mut seen = vec![false; n_objects];
        for (k, &obj) in row.iter().enumerate() {
            if obj >= n_objects || seen[obj] {
                return Err(RankError::InvalidInput(format!(
                    "ordering row {i} is not a permutation of 0..{n_objects}"
                )));
            }
            seen[obj] = true;
            rankings[[i, obj]] = k;
        }
    }
    Ok(rankings)
}

/// True if any two entries of the row are exactly equal.
fn row_has_tie(row: &ArrayView1<f64>) -> bool {
    let mut sorted: Vec<f64> = row.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.windows(2).any(|w| w[0] == w[1])
}

/// Strict descending ranks: argsort descending, then invert the
/// permutation. Only valid for tie-free rows.
fn strict_ranks(row: &ArrayView1<f64>) -> Vec<f64> {
    let mut order: Vec<usize> = (0..row.len()).collect();
    order.sort_by(|&a, &b| row[b].total_cmp(&row[a]));

    let mut ranks = vec![0.0; row.len()];
    for (k, &obj) in order.iter().enumerate() {
        ranks[obj] = k as f64;
    }
    ranks
}

/// Fractional (average) descending ranks: a run of equal scores occupying
/// positions p..p+k-1 of the descending order all receive (2p + k - 1) / 2.
fn fractional_ranks(row: &ArrayView1<f64>) -> Vec<f64> {
    let n = row.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| row[b].total_cmp(&row[a]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && row[order[end]] == row[order[start]] {
            end += 1;
        }
        let avg = (start + end - 1) as f64 / 2.0;
        for &obj in &order[start..end] {
            ranks[obj] = avg;
        }
        start = end;
    }
    ranks
}

/// Stable ascending argsort of a single row.
fn argsort(row: &ArrayView1<f64>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..row.len()).collect();
    order.sort_by(|&a, &b| row[a].total_cmp(&row[b]));
    order
}
