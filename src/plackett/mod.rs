//! Plackett-Luce strength estimation over observed orderings.
//!
//! The Plackett-Luce model assigns each object a positive strength
//! parameter; an ordering is generated by repeatedly choosing the next
//! object with probability proportional to its strength among the
//! objects still unplaced. Fitting inverts that: given orderings, recover
//! the strengths via Hunter's MM (minorize-maximize) iteration.

mod estimator;


pub use estimator::{fit_plackett_luce, PlackettLuceConfig};
