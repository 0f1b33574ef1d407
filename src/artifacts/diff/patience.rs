//! Patience diff
//!
//! Anchors the comparison on elements that occur exactly once on each side
//! and appear in the same relative order, then recurses into the gaps
//! between anchors. Gaps without any unique common element fall back to
//! Myers. On source code this keeps repeated lines such as closing braces or
//! blank lines from pulling unrelated blocks into alignment.

use crate::artifacts::diff::algorithm::DiffAlgorithm;
use crate::artifacts::diff::edit_script::LineEdit;
use crate::artifacts::diff::myers::MyersDiff;
use derive_new::new;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PatienceDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

#[derive(Debug, Default)]
struct Occurrence {
    a_count: usize,
    a_index: usize,
    b_count: usize,
    b_index: usize,
}

impl<T: Eq + Hash> PatienceDiff<'_, T> {
    fn diff_window(&self, a: Range<usize>, b: Range<usize>, edits: &mut Vec<LineEdit>) {
        let (mut a_lo, mut a_hi) = (a.start, a.end);
        let (mut b_lo, mut b_hi) = (b.start, b.end);

        while a_lo < a_hi && b_lo < b_hi && self.a[a_lo] == self.b[b_lo] {
            edits.push(LineEdit::Equal { a: a_lo, b: b_lo });
            a_lo += 1;
            b_lo += 1;
        }

        let mut suffix = 0;
        while a_lo < a_hi && b_lo < b_hi && self.a[a_hi - 1] == self.b[b_hi - 1] {
            a_hi -= 1;
            b_hi -= 1;
            suffix += 1;
        }

        if a_lo == a_hi {
            edits.extend((b_lo..b_hi).map(|b| LineEdit::Insert { b }));
        } else if b_lo == b_hi {
            edits.extend((a_lo..a_hi).map(|a| LineEdit::Delete { a }));
        } else {
            let anchors = self.anchors(a_lo..a_hi, b_lo..b_hi);

            if anchors.is_empty() {
                self.fallback(a_lo..a_hi, b_lo..b_hi, edits);
            } else {
                let (mut a_next, mut b_next) = (a_lo, b_lo);
                for (a_anchor, b_anchor) in anchors {
                    self.diff_window(a_next..a_anchor, b_next..b_anchor, edits);
                    edits.push(LineEdit::Equal {
                        a: a_anchor,
                        b: b_anchor,
                    });
                    a_next = a_anchor + 1;
                    b_next = b_anchor + 1;
                }
                self.diff_window(a_next..a_hi, b_next..b_hi, edits);
            }
        }

        edits.extend((0..suffix).map(|i| LineEdit::Equal {
            a: a_hi + i,
            b: b_hi + i,
        }));
    }

    /// Unique common elements of both windows, as the longest chain whose
    /// positions increase on both sides.
    fn anchors(&self, a: Range<usize>, b: Range<usize>) -> Vec<(usize, usize)> {
        let mut occurrences: HashMap<&T, Occurrence> = HashMap::new();

        for i in a {
            let occurrence = occurrences.entry(&self.a[i]).or_default();
            occurrence.a_count += 1;
            occurrence.a_index = i;
        }
        for j in b {
            if let Some(occurrence) = occurrences.get_mut(&self.b[j]) {
                occurrence.b_count += 1;
                occurrence.b_index = j;
            }
        }

        let mut unique = occurrences
            .into_values()
            .filter(|o| o.a_count == 1 && o.b_count == 1)
            .map(|o| (o.a_index, o.b_index))
            .collect::<Vec<_>>();
        unique.sort_unstable();

        longest_increasing_chain(&unique)
    }

    fn fallback(&self, a: Range<usize>, b: Range<usize>, edits: &mut Vec<LineEdit>) {
        let (a_offset, b_offset) = (a.start, b.start);
        let myers = MyersDiff::new(&self.a[a], &self.b[b]);

        edits.extend(myers.line_edits().into_iter().map(|edit| match edit {
            LineEdit::Equal { a, b } => LineEdit::Equal {
                a: a + a_offset,
                b: b + b_offset,
            },
            LineEdit::Delete { a } => LineEdit::Delete { a: a + a_offset },
            LineEdit::Insert { b } => LineEdit::Insert { b: b + b_offset },
        }));
    }
}

/// Patience sorting over pairs already ordered by their first component:
/// returns the longest subsequence whose second components also increase.
fn longest_increasing_chain(pairs: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut pile_tops: Vec<usize> = Vec::new();
    let mut predecessors: Vec<Option<usize>> = vec![None; pairs.len()];

    for (i, &(_, b)) in pairs.iter().enumerate() {
        let pile = pile_tops.partition_point(|&top| pairs[top].1 < b);
        if pile > 0 {
            predecessors[i] = Some(pile_tops[pile - 1]);
        }
        if pile == pile_tops.len() {
            pile_tops.push(i);
        } else {
            pile_tops[pile] = i;
        }
    }

    let mut chain = Vec::with_capacity(pile_tops.len());
    let mut current = pile_tops.last().copied();
    while let Some(i) = current {
        chain.push(pairs[i]);
        current = predecessors[i];
    }

    chain.reverse();
    chain
}

impl<'d, T: Eq + Hash> DiffAlgorithm<'d, T> for PatienceDiff<'d, T> {
    fn line_edits(&self) -> Vec<LineEdit> {
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));
        self.diff_window(0..self.a.len(), 0..self.b.len(), &mut edits);
        edits
    }
}
