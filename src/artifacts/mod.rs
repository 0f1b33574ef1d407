//! Diff data structures and algorithms
//!
//! - `core`: Shared output utilities (pager wrapper, terminal detection)
//! - `diff`: Line splitting, Myers and patience diffing, transcript rendering

pub mod core;
pub mod diff;
