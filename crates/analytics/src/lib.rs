//! Store-wide purchase analytics feeding the selection engine.

pub mod popularity;

pub use popularity::PopularityTracker;
