use std::ops::{Index, Range};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Ordered, 0-indexed lines of a text blob.
///
/// Lines borrow from the source text and never contain line-break characters.
/// A blob ending in a line break does not produce a trailing empty line, so
/// `"a\nb\n"` and `"a\nb"` split into the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineSequence<'a> {
    /// Splits `text` on `\r\n`, `\n` or a lone `\r`. Absent text is empty.
    pub fn split(text: Option<&'a str>) -> Self {
        let text = text.unwrap_or_default();
        Self {
            lines: SplitLines::new(text).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.lines
    }

    /// Rejoins the lines with the platform line ending.
    pub fn join(&self) -> String {
        self.lines.join(LINE_ENDING)
    }
}

impl<'a> From<Vec<&'a str>> for LineSequence<'a> {
    fn from(lines: Vec<&'a str>) -> Self {
        Self { lines }
    }
}

impl<'a> Index<usize> for LineSequence<'a> {
    type Output = &'a str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl<'a> Index<Range<usize>> for LineSequence<'a> {
    type Output = [&'a str];

    fn index(&self, range: Range<usize>) -> &Self::Output {
        &self.lines[range]
    }
}

struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> SplitLines<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\r', '\n']) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let bytes = self.rest.as_bytes();
                let break_len = if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[pos + break_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
