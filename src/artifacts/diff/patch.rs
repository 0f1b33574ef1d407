use crate::artifacts::diff::edit_script::{DiffStat, EditOperation, EditScript};
use crate::artifacts::diff::line_sequence::{LINE_ENDING, LineSequence};
use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

pub const MARKER_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Unchanged,
    Removed,
    Added,
}

impl Marker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Unchanged => "    ",
            Marker::Removed => "-   ",
            Marker::Added => "+   ",
        }
    }

    pub fn parse(line: &str) -> Option<(Self, &str)> {
        [Marker::Unchanged, Marker::Removed, Marker::Added]
            .into_iter()
            .find_map(|marker| line.strip_prefix(marker.as_str()).map(|rest| (marker, rest)))
    }
}

/// A rendered diff transcript, one marked line per source line.
///
/// This is a display format: there are no hunk headers and no line numbers,
/// so the text cannot be applied as a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchText(String);

impl PatchText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Transcript lines without their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split_terminator(LINE_ENDING)
    }

    /// Marker and content of every line.
    pub fn entries(&self) -> impl Iterator<Item = (Marker, &str)> {
        self.lines().filter_map(Marker::parse)
    }

    pub fn stat(&self) -> DiffStat {
        self.entries()
            .fold(DiffStat::default(), |mut stat, (marker, _)| {
                match marker {
                    Marker::Unchanged => stat.unchanged += 1,
                    Marker::Removed => stat.deletions += 1,
                    Marker::Added => stat.insertions += 1,
                }
                stat
            })
    }
}

impl Display for PatchText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PatchText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Walks `script` in order, yielding every covered line with its marker.
///
/// A `Replace` yields all its removed lines before its added ones.
pub fn marked_lines<'s, 'a>(
    older: &'s LineSequence<'a>,
    newer: &'s LineSequence<'a>,
    script: &'s EditScript,
) -> impl Iterator<Item = (Marker, &'a str)> + 's {
    script.iter().flat_map(move |op| {
        let (removed, added, unchanged) = match op {
            EditOperation::Equal { old, .. } => (0..0, 0..0, old.clone()),
            EditOperation::Delete { old, .. } => (old.clone(), 0..0, 0..0),
            EditOperation::Insert { new, .. } => (0..0, new.clone(), 0..0),
            EditOperation::Replace { old, new } => (old.clone(), new.clone(), 0..0),
        };

        unchanged
            .map(move |i| (Marker::Unchanged, older[i]))
            .chain(removed.map(move |i| (Marker::Removed, older[i])))
            .chain(added.map(move |i| (Marker::Added, newer[i])))
    })
}

pub fn render(older: &LineSequence, newer: &LineSequence, script: &EditScript) -> PatchText {
    let mut text = String::new();

    for (marker, line) in marked_lines(older, newer, script) {
        text.push_str(marker.as_str());
        text.push_str(line);
        text.push_str(LINE_ENDING);
    }

    PatchText(text)
}

/// Writes the same transcript as [`render`], with removed lines in red and
/// added lines in green.
pub fn render_colored(
    writer: &mut dyn Write,
    older: &LineSequence,
    newer: &LineSequence,
    script: &EditScript,
) -> std::io::Result<()> {
    for (marker, line) in marked_lines(older, newer, script) {
        let text = format!("{}{}", marker.as_str(), line);
        match marker {
            Marker::Unchanged => write!(writer, "{}", text)?,
            Marker::Removed => write!(writer, "{}", text.red())?,
            Marker::Added => write!(writer, "{}", text.green())?,
        }
        write!(writer, "{}", LINE_ENDING)?;
    }

    Ok(())
}
