//! Partition sort keyed on a binary pairwise relation.

use ndarray::ArrayView2;

use crate::error::{RankError, Result};

/// Work items for the explicit partition stack: either a segment still to
/// be partitioned, or a pivot ready to emit.
enum Frame {
    Sort(Vec<usize>),
    Emit(usize),
}

/// Reorder `indices` into a ranking consistent with a binary win/loss
/// matrix.
///
/// The comparison predicate is `matrix[pivot, i] == 1.0`: the first
/// element of a segment is the pivot, elements the pivot beats go after
/// it, the rest before it, and both partitions are sorted the same way.
/// Uses an explicit work stack, so deep partitions cannot overflow the
/// call stack.
///
/// Every entry `matrix[a, b]` with a, b distinct members of `indices`
/// must be exactly 0.0 or 1.0; anything else is rejected up front rather
/// than silently dropping elements out of the result.
pub fn pairwise_sort(indices: &[usize], matrix: &ArrayView2<f64>) -> Result<Vec<usize>> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(RankError::ShapeMismatch {
            expected: format!("square matrix ({rows}x{rows})"),
            actual: format!("{rows}x{cols}"),
        });
    }
    for &i in indices {
        if i >= rows {
            return Err(RankError::InvalidInput(format!(
                "index {i} out of range for a {rows}x{rows} matrix"
            )));
        }
    }
    for &i in indices {
        for &j in indices {
            if i == j {
                continue;
            }
            let value = matrix[[i, j]];
            if value != 0.0 && value != 1.0 {
                return Err(RankError::InvalidInput(format!(
                    "matrix[{i}, {j}] = {value} is not binary; partition sort \
                     requires a total 0/1 win relation"
                )));
            }
        }
    }

    let mut sorted = Vec::with_capacity(indices.len());
    let mut work = vec![Frame::Sort(indices.to_vec())];
    while let Some(frame) = work.pop() {
        match frame {
            Frame::Emit(pivot) => sorted.push(pivot),
            Frame::Sort(segment) => {
                if segment.len() < 2 {
                    sorted.extend(segment);
                    continue;
                }
                let pivot = segment[0];
                let (beaten, rest): (Vec<usize>, Vec<usize>) = segment[1..]
                    .iter()
                    .partition(|&&i| matrix[[pivot, i]] == 1.0);
                // Emit order is rest, pivot, beaten; the stack pops in
                // reverse push order.
                work.push(Frame::Sort(beaten));
                work.push(Frame::Emit(pivot));
                work.push(Frame::Sort(rest));
            }
        }
    }
    Ok(sorted)
}
