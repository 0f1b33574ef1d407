//! Line-level diffing and transcript rendering
//!
//! This module implements the diff engine:
//!
//! - `line_sequence`: Splitting text blobs into lines
//! - `edit_script`: Ranged edit operations and their coalescing
//! - `algorithm`: The strategy trait and algorithm selection
//! - `myers`: Myers' shortest edit script
//! - `patience`: Patience diff anchored on unique lines
//! - `patch`: Rendering an edit script as a marked transcript
//!
//! [`compute_diff`] ties them together. Every stage is a pure function of its
//! inputs, so concurrent calls need no coordination.

pub mod algorithm;
pub mod edit_script;
pub mod line_sequence;
pub mod myers;
pub mod patch;
pub mod patience;

use crate::artifacts::diff::algorithm::Algorithm;
use crate::artifacts::diff::line_sequence::LineSequence;
use crate::artifacts::diff::patch::{PatchText, render};

/// Diffs two texts line by line and renders the transcript.
///
/// Absent text is treated as empty, so this never fails: two absent texts
/// give an empty transcript and absent vs. present text gives pure additions.
pub fn compute_diff(older: Option<&str>, newer: Option<&str>, algorithm: Algorithm) -> PatchText {
    let older = LineSequence::split(older);
    let newer = LineSequence::split(newer);

    let script = algorithm.diff(older.as_slice(), newer.as_slice());
    log::debug!(
        "{} diff of {} vs {} lines: {} operations, {}",
        algorithm,
        older.len(),
        newer.len(),
        script.len(),
        script.stat()
    );

    render(&older, &newer, &script)
}
