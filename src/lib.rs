//! Line-oriented diff engine and the comparison tooling built on it.
//!
//! - `artifacts`: The pure diff engine and output helpers
//! - `areas`: Comparison state and the file trees being compared
//! - `commands`: Comparison operations writing transcripts

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::algorithm::Algorithm;
pub use artifacts::diff::compute_diff;
pub use artifacts::diff::patch::PatchText;
