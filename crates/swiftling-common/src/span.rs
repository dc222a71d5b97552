use serde::Serialize;

/// Byte-offset span into the AST dump text. Start is inclusive, end is
/// exclusive.
///
/// The dump itself only ever gives us line/column locations
/// (`file.swift:LINE:COL`), never byte offsets, so `Span` here tracks
/// lines rather than bytes: `start`/`end` are 1-based source line numbers.
/// This mirrors how the rest of the pipeline only ever needs "which line
/// is this node on" to resolve comment directives (spec §4.2.2) and to
/// render a location in a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start_line: u32,
    pub end_line: u32,
}

impl Span {
    pub fn new(start_line: u32, end_line: u32) -> Self {
        debug_assert!(
            start_line <= end_line,
            "span start ({start_line}) must be <= end ({end_line})"
        );
        Self {
            start_line,
            end_line,
        }
    }

    /// A span covering a single line.
    pub fn single(line: u32) -> Self {
        Self {
            start_line: line,
            end_line: line,
        }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start_line: self.start_line.min(other.start_line),
            end_line: self.end_line.max(other.end_line),
        }
    }
}

/// Pre-computed index of line boundaries for a source file, used to map a
/// byte offset in a `.swift` source file to a 1-based line number when
/// resolving comment directives.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts, len: source.len() as u32 }
    }

    /// Convert a byte offset to a 1-based line number.
    pub fn line(&self, offset: u32) -> u32 {
        let line_idx = self.line_starts.partition_point(|&start| start <= offset);
        line_idx.saturating_sub(1) as u32 + 1
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The byte range of 1-based `line` within the indexed source,
    /// including its trailing newline if any. Used to translate a
    /// `Span`'s line numbers into the byte range ariadne needs to
    /// underline a diagnostic.
    pub fn line_byte_range(&self, line: u32) -> std::ops::Range<usize> {
        let idx = (line.saturating_sub(1)) as usize;
        let start = self.line_starts.get(idx).copied().unwrap_or(0) as usize;
        let end = self
            .line_starts
            .get(idx + 1)
            .copied()
            .map(|n| n as usize)
            .unwrap_or(self.len as usize);
        start..end.max(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_merge_takes_widest_bounds() {
        let a = Span::new(2, 4);
        let b = Span::new(1, 3);
        assert_eq!(a.merge(b), Span::new(1, 4));
    }

    #[test]
    fn line_index_multi_line() {
        let idx = LineIndex::new("a\nb\nc\n");
        assert_eq!(idx.line(0), 1);
        assert_eq!(idx.line(2), 2);
        assert_eq!(idx.line(4), 3);
        assert_eq!(idx.line_count(), 4);
    }

    #[test]
    fn line_byte_range_covers_each_line_including_the_last() {
        let src = "abc\nde\nf";
        let idx = LineIndex::new(src);
        assert_eq!(&src[idx.line_byte_range(1)], "abc\n");
        assert_eq!(&src[idx.line_byte_range(2)], "de\n");
        assert_eq!(&src[idx.line_byte_range(3)], "f");
    }
}
