//! Ordenar — pairwise-preference aggregation and ranking reconstruction.
//!
//! Core primitives for label-ranking and choice-function learners:
//!
//! - Score/ranking conversion with fractional tie handling ([`rank`])
//! - Random pairwise probability matrices with a guaranteed intransitive
//!   cycle, for generating "hard" ranking benchmarks ([`pairwise::matrix`])
//! - Preference graphs and strongly connected components, the witness
//!   structure for non-transitive preferences ([`pairwise::graph`])
//! - Partition sort keyed on a binary pairwise relation instead of a
//!   total-order comparator ([`pairwise::sort`])
//! - Plackett-Luce strength estimation over observed orderings ([`plackett`])
//! - An instance-based label ranker composing a nearest-neighbor index with
//!   Plackett-Luce aggregation ([`instance_based`])
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use ordenar::rank::scores_to_rankings;
//!
//! let scores = array![[3.0, 1.0, 2.0]];
//! let rankings = scores_to_rankings(&scores.view()).unwrap();
//! assert_eq!(rankings, array![[0.0, 2.0, 1.0]]);
//! ```

pub mod error;
pub mod instance_based;
pub mod neighbors;
pub mod pairwise;
pub mod plackett;
pub mod rank;

pub use error::{RankError, Result};
pub use instance_based::{InstanceBasedConfig, InstanceBasedRanker};
pub use pairwise::graph::{strongly_connected_components, PreferenceGraph};
pub use pairwise::matrix::{create_pairwise_prob_matrix, DEFAULT_MAX_ATTEMPTS};
pub use pairwise::sort::pairwise_sort;
pub use plackett::{fit_plackett_luce, PlackettLuceConfig};
pub use rank::{orderings_to_rankings, rankings_to_orderings, scores_to_rankings};
