use crate::artifacts::diff::edit_script::{EditScript, LineEdit};
use crate::artifacts::diff::myers::MyersDiff;
use crate::artifacts::diff::patience::PatienceDiff;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("unknown diff algorithm '{0}', expected 'myers' or 'patience'")]
    UnknownAlgorithm(String),
}

/// A line-sequence comparison strategy over the sequences it was built with.
pub trait DiffAlgorithm<'d, T: Eq> {
    /// Single-line edits transforming `a` into `b`, in order.
    fn line_edits(&self) -> Vec<LineEdit>;

    fn diff(&self) -> EditScript {
        EditScript::from_line_edits(self.line_edits())
    }
}

/// The comparison strategy chosen by a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Myers,
    Patience,
}

impl Algorithm {
    pub fn diff<T: Eq + Hash>(self, a: &[T], b: &[T]) -> EditScript {
        match self {
            Algorithm::Myers => MyersDiff::new(a, b).diff(),
            Algorithm::Patience => PatienceDiff::new(a, b).diff(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Myers => "myers",
            Algorithm::Patience => "patience",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "myers" => Ok(Algorithm::Myers),
            "patience" => Ok(Algorithm::Patience),
            _ => Err(DiffError::UnknownAlgorithm(s.to_string())),
        }
    }
}
