//! Conversion between score vectors, rankings, and orderings.
//!
//! Representations (one row per query instance throughout):
//!
//! - **Scores**: real values, higher = more preferred, ties permitted.
//! - **Ranking**: `ranking[i]` is the 0-based rank of object `i`
//!   (0 = best). Ties receive fractional (average) ranks, so rankings are
//!   `f64` even though tie-free rows hold integral values.
//! - **Ordering**: permutation of object indices from most- to
//!   least-preferred; `ranking[ordering[k]] == k` for strict rankings.

mod convert;


pub use convert::{orderings_to_rankings, rankings_to_orderings, scores_to_rankings};
