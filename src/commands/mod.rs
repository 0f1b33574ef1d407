//! Command implementations
//!
//! - `compare`: Compare two files or two directory trees

pub mod compare;
