use crate::artifacts::diff::algorithm::Algorithm;
use crate::artifacts::diff::edit_script::{DiffStat, EditScript};
use crate::artifacts::diff::line_sequence::LineSequence;
use crate::artifacts::diff::patch::{PatchText, render, render_colored};
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct RenderOptions {
    pub color: bool,
    pub stat_only: bool,
}

/// Drives comparisons and owns the output they are written to.
pub struct Comparison {
    writer: RefCell<Box<dyn std::io::Write>>,
    algorithm: Algorithm,
    options: RenderOptions,
}

impl Comparison {
    pub fn new(
        writer: Box<dyn std::io::Write>,
        algorithm: Algorithm,
        options: RenderOptions,
    ) -> Self {
        Comparison {
            writer: RefCell::new(writer),
            algorithm,
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }
}

/// The diff of one file pair, owning both texts so it can cross threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileComparison {
    pub older_path: PathBuf,
    pub newer_path: PathBuf,
    pub older: Option<String>,
    pub newer: Option<String>,
    pub script: EditScript,
}

impl FileComparison {
    pub fn compute(
        older_path: PathBuf,
        newer_path: PathBuf,
        older: Option<String>,
        newer: Option<String>,
        algorithm: Algorithm,
    ) -> Self {
        let script = if older == newer {
            EditScript::default()
        } else {
            let a = LineSequence::split(older.as_deref());
            let b = LineSequence::split(newer.as_deref());
            algorithm.diff(a.as_slice(), b.as_slice())
        };

        FileComparison {
            older_path,
            newer_path,
            older,
            newer,
            script,
        }
    }

    /// Byte-identical content, including both sides being absent.
    pub fn is_identical(&self) -> bool {
        self.older == self.newer
    }

    pub fn is_added(&self) -> bool {
        self.older.is_none() && self.newer.is_some()
    }

    pub fn is_deleted(&self) -> bool {
        self.older.is_some() && self.newer.is_none()
    }

    pub fn stat(&self) -> DiffStat {
        self.script.stat()
    }

    pub fn patch(&self) -> PatchText {
        let (a, b) = self.sequences();
        render(&a, &b, &self.script)
    }

    pub fn write_colored(&self, writer: &mut dyn std::io::Write) -> std::io::Result<()> {
        let (a, b) = self.sequences();
        render_colored(writer, &a, &b, &self.script)
    }

    fn sequences(&self) -> (LineSequence<'_>, LineSequence<'_>) {
        (
            LineSequence::split(self.older.as_deref()),
            LineSequence::split(self.newer.as_deref()),
        )
    }
}
