//! Generic containers for classification of keyed data.

pub mod multiset;

pub use multiset::{MultiSetContainer, SetView};
