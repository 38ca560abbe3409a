//! Query Module
//!
//! Turns optional filter criteria into a single predicate over advocate
//! records. Nothing here touches pagination or executes a read.

mod composer;
mod filter;
mod predicate;

pub use composer::compose;
pub use filter::FilterSpec;
pub use predicate::{Predicate, TextField};
