//! Comparison state
//!
//! - `comparison`: Output, algorithm and render options of a comparison run
//! - `workspace`: A directory tree whose files are compared by relative path

pub mod comparison;
pub mod workspace;
