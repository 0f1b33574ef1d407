use derive_new::new;
use std::ops::Range;

/// A single-line step produced by a diff algorithm before coalescing.
///
/// Indices point into the older (`a`) and newer (`b`) sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit {
    Equal { a: usize, b: usize },
    Delete { a: usize },
    Insert { b: usize },
}

/// A contiguous run of lines in one or both sequences.
///
/// Ranges are half-open. An empty range records where the operation sits in
/// the sequence it does not touch, e.g. `Insert { old: 3..3, .. }` inserts
/// before old line 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOperation {
    Equal { old: Range<usize>, new: Range<usize> },
    Insert { old: Range<usize>, new: Range<usize> },
    Delete { old: Range<usize>, new: Range<usize> },
    Replace { old: Range<usize>, new: Range<usize> },
}

impl EditOperation {
    pub fn old_range(&self) -> Range<usize> {
        match self {
            Self::Equal { old, .. }
            | Self::Insert { old, .. }
            | Self::Delete { old, .. }
            | Self::Replace { old, .. } => old.clone(),
        }
    }

    pub fn new_range(&self) -> Range<usize> {
        match self {
            Self::Equal { new, .. }
            | Self::Insert { new, .. }
            | Self::Delete { new, .. }
            | Self::Replace { new, .. } => new.clone(),
        }
    }

    pub fn old_len(&self) -> usize {
        self.old_range().len()
    }

    pub fn new_len(&self) -> usize {
        self.new_range().len()
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }

    fn from_ranges(old: Range<usize>, new: Range<usize>) -> Self {
        match (old.is_empty(), new.is_empty()) {
            (true, false) => Self::Insert { old, new },
            (false, true) => Self::Delete { old, new },
            _ => Self::Replace { old, new },
        }
    }
}

/// Line counts of an edit script, per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffStat {
    pub unchanged: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffStat {
    pub fn is_unchanged(&self) -> bool {
        self.insertions == 0 && self.deletions == 0
    }
}

impl std::fmt::Display for DiffStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        write!(
            f,
            "{} insertion{}(+), {} deletion{}(-)",
            self.insertions,
            plural(self.insertions),
            self.deletions,
            plural(self.deletions)
        )
    }
}

/// Ordered operations transforming an older line sequence into a newer one.
///
/// Consecutive operations partition both sequences without gaps or overlaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    operations: Vec<EditOperation>,
}

impl EditScript {
    /// Coalesces single-line edits into ranged operations.
    ///
    /// Runs of equal lines collapse into one `Equal`; every maximal run of
    /// deletions and insertions between two equal runs becomes a `Delete`,
    /// an `Insert` or a `Replace`.
    pub fn from_line_edits(edits: impl IntoIterator<Item = LineEdit>) -> Self {
        let mut operations = Vec::new();
        let (mut a, mut b) = (0usize, 0usize);
        let mut equal_start: Option<(usize, usize)> = None;
        let mut change_start: Option<(usize, usize)> = None;

        for edit in edits {
            match edit {
                LineEdit::Equal { a: x, b: y } => {
                    debug_assert_eq!((x, y), (a, b));
                    if let Some((a0, b0)) = change_start.take() {
                        operations.push(EditOperation::from_ranges(a0..a, b0..b));
                    }
                    equal_start.get_or_insert((a, b));
                    a += 1;
                    b += 1;
                }
                LineEdit::Delete { a: x } => {
                    debug_assert_eq!(x, a);
                    if let Some((a0, b0)) = equal_start.take() {
                        operations.push(EditOperation::Equal { old: a0..a, new: b0..b });
                    }
                    change_start.get_or_insert((a, b));
                    a += 1;
                }
                LineEdit::Insert { b: y } => {
                    debug_assert_eq!(y, b);
                    if let Some((a0, b0)) = equal_start.take() {
                        operations.push(EditOperation::Equal { old: a0..a, new: b0..b });
                    }
                    change_start.get_or_insert((a, b));
                    b += 1;
                }
            }
        }

        if let Some((a0, b0)) = equal_start {
            operations.push(EditOperation::Equal { old: a0..a, new: b0..b });
        }
        if let Some((a0, b0)) = change_start {
            operations.push(EditOperation::from_ranges(a0..a, b0..b));
        }

        Self { operations }
    }

    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOperation> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// True when the script contains no insertions or deletions.
    pub fn is_identity(&self) -> bool {
        self.operations.iter().all(|op| !op.is_change())
    }

    pub fn stat(&self) -> DiffStat {
        self.operations
            .iter()
            .fold(DiffStat::default(), |mut stat, op| {
                match op {
                    EditOperation::Equal { old, .. } => stat.unchanged += old.len(),
                    _ => {
                        stat.deletions += op.old_len();
                        stat.insertions += op.new_len();
                    }
                }
                stat
            })
    }
}

impl<'s> IntoIterator for &'s EditScript {
    type Item = &'s EditOperation;
    type IntoIter = std::slice::Iter<'s, EditOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
