//! Pairwise comparison structures: probability matrices, preference
//! graphs, cycle detection, and partition sorting.
//!
//! A pairwise matrix P holds directional preference strengths: `P[i, j]`
//! is the strength of preference of object i over object j. The generator
//! in [`matrix`] additionally enforces `P[i, j] = 1 - P[j, i]` and rejects
//! candidates until the induced preference graph contains an intransitive
//! cycle (an SCC of size >= 3), which is what makes a ranking instance
//! "hard": no consistent total order exists.

pub mod graph;
pub mod matrix;
pub mod sort;


pub use graph::{strongly_connected_components, PreferenceGraph};
pub use matrix::{create_pairwise_prob_matrix, DEFAULT_MAX_ATTEMPTS};
pub use sort::pairwise_sort;
