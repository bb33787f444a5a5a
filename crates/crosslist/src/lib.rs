//! `explorecourses-crosslist`: Cross-listing merge engine.
//!
//! Pure engine crate: receives already-decoded course listings, folds each
//! cross-listed group into one merged course. No CLI or network dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod group;
pub mod merge;
pub mod model;
pub mod summary;
pub mod title;

#[cfg(test)]
mod testutil;

pub use config::{InconsistentPolicy, MergeConfig};
pub use engine::run;
pub use error::MergeError;
pub use merge::merge;
pub use model::{GroupKey, InconsistentGroup, MergeOutput, MergeResult, MergedCourse, SharedField};
