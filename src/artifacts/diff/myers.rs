use crate::artifacts::diff::algorithm::DiffAlgorithm;
use crate::artifacts::diff::edit_script::LineEdit;
use derive_new::new;
use std::ops::{Index, IndexMut, Range};

/// Myers' O(ND) shortest edit script over whole-element tokens.
///
/// Uses the linear-space variant: the greedy search runs from both corners of
/// a window until the two frontiers overlap on a middle snake, and the halves
/// on either side are solved recursively. Memory stays O(N + M) no matter how
/// different the inputs are.
///
/// Within a change, deletions are emitted before insertions.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

/// Furthest-reaching `x` per diagonal `k = x - y`, for `k` in `-max..=max`.
#[derive(Debug)]
struct Frontier {
    offset: isize,
    v: Vec<isize>,
}

impl Frontier {
    fn new(max: usize) -> Self {
        Frontier {
            offset: max as isize,
            v: vec![0; 2 * max + 1],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &isize {
        &self.v[(self.offset + k) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.v[(self.offset + k) as usize]
    }
}

impl<T: Eq> MyersDiff<'_, T> {
    /// Number of deletions plus insertions in the shortest edit script.
    pub fn edit_distance(&self) -> usize {
        self.line_edits()
            .iter()
            .filter(|edit| !matches!(edit, LineEdit::Equal { .. }))
            .count()
    }

    fn conquer(
        &self,
        a: Range<usize>,
        b: Range<usize>,
        frontiers: &mut (Frontier, Frontier),
        edits: &mut Vec<LineEdit>,
    ) {
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
        } else if let Some((x, y)) = self.middle_snake(a_lo..a_hi, b_lo..b_hi, frontiers) {
            self.conquer(a_lo..x, b_lo..y, frontiers, edits);
            self.conquer(x..a_hi, y..b_hi, frontiers, edits);
        } else {
            edits.extend((a_lo..a_hi).map(|a| LineEdit::Delete { a }));
            edits.extend((b_lo..b_hi).map(|b| LineEdit::Insert { b }));
        }

        edits.extend((0..suffix).map(|i| LineEdit::Equal {
            a: a_hi + i,
            b: b_hi + i,
        }));
    }

    /// Finds a point strictly inside the window that lies on a shortest edit
    /// path. Both windows must be non-empty and share no prefix or suffix.
    fn middle_snake(
        &self,
        a: Range<usize>,
        b: Range<usize>,
        (forward, backward): &mut (Frontier, Frontier),
    ) -> Option<(usize, usize)> {
        let (n, m) = (a.len() as isize, b.len() as isize);
        let delta = n - m;
        let odd = delta % 2 != 0;

        forward[1] = 0;
        backward[1] = 0;

        for d in 0..=(n + m + 1) / 2 {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    // insertion, coming down from k+1
                    forward[k + 1]
                } else {
                    // deletion, coming right from k-1
                    forward[k - 1] + 1
                };
                let (x_start, y_start) = (x, x - k);

                let mut y = y_start;
                while x < n
                    && y < m
                    && self.a[a.start + x as usize] == self.b[b.start + y as usize]
                {
                    x += 1;
                    y += 1;
                }
                forward[k] = x;

                // diagonal k meets backward diagonal delta - k from round d - 1
                if odd && (k - delta).abs() < d && x + backward[delta - k] >= n {
                    return Some((a.start + x_start as usize, b.start + y_start as usize));
                }
            }

            // same search over the reversed windows
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                    backward[k + 1]
                } else {
                    backward[k - 1] + 1
                };

                let mut y = x - k;
                while x < n
                    && y < m
                    && self.a[a.end - 1 - x as usize] == self.b[b.end - 1 - y as usize]
                {
                    x += 1;
                    y += 1;
                }
                backward[k] = x;

                if !odd && (delta - k).abs() <= d && x + forward[delta - k] >= n {
                    return Some((a.end - x as usize, b.end - y as usize));
                }
            }
        }

        None
    }
}

impl<'d, T: Eq> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    fn line_edits(&self) -> Vec<LineEdit> {
        let max = (self.a.len() + self.b.len() + 1) / 2 + 1;
        let mut frontiers = (Frontier::new(max), Frontier::new(max));
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));

        self.conquer(0..self.a.len(), 0..self.b.len(), &mut frontiers, &mut edits);

        // halves of one change may interleave; removals go first
        edits
            .split_mut(|edit| matches!(edit, LineEdit::Equal { .. }))
            .for_each(|change| {
                change.sort_by_key(|edit| matches!(edit, LineEdit::Insert { .. }))
            });

        edits
    }
}
