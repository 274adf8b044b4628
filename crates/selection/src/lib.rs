//! Challenge item selection engine — recency-weighted affinity scoring,
//! diversity-capped ranking, and weighted promotional sampling.

pub mod affinity;
pub mod diversity;
pub mod partition;
pub mod sampler;
pub mod selector;

pub use selector::{SelectionEngine, SelectionRequest};
