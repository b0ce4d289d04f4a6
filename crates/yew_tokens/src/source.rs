//! Source buffers with line bookkeeping and windowed excerpts.

use std::fmt::Write as _;

/// A named, immutable piece of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    path: String,
    content: String,
}

impl Source {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.content
    }
}

/// A [`Source`] together with the end offset of each line.
///
/// `end_positions[n]` is the exclusive end offset of line `n + 1`; the last
/// entry covers the synthetic final line (one past the buffer when the text
/// ends with a newline).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCode {
    path: String,
    content: String,
    end_positions: Vec<usize>,
}

fn make_end_positions(content: &str) -> Vec<usize> {
    let mut positions = Vec::with_capacity(content.bytes().filter(|&b| b == b'\n').count() + 1);
    for (i, b) in content.bytes().enumerate() {
        if b == b'\n' {
            positions.push(i + 1);
        }
    }
    positions.push(content.len());
    if content.ends_with('\n') {
        if let Some(last) = positions.last_mut() {
            *last += 1;
        }
    }
    positions
}

fn num_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

impl From<Source> for SourceCode {
    fn from(source: Source) -> Self {
        let end_positions = make_end_positions(&source.content);
        Self {
            path: source.path,
            content: source.content,
            end_positions,
        }
    }
}

struct WindowFrame {
    line_start: usize,
    source_start: usize,
    source_end: usize,
    width: usize,
}

impl SourceCode {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Source::new(path, content).into()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Number of lines, counting the synthetic final line.
    pub fn lines(&self) -> usize {
        self.end_positions.len()
    }

    pub fn end_positions(&self) -> &[usize] {
        &self.end_positions
    }

    /// Extends the buffer (REPL input) and recomputes line ends.
    pub fn append_source(&mut self, addition: &str) {
        self.content.push_str(addition);
        self.end_positions = make_end_positions(&self.content);
    }

    /// The `(start, end)` byte range of a 1-indexed line, newline included.
    pub fn line_pos(&self, line: usize) -> Option<(usize, usize)> {
        if line == 0 || line > self.end_positions.len() {
            return None;
        }
        let start = if line == 1 {
            0
        } else {
            self.end_positions[line - 2]
        };
        Some((start, self.end_positions[line - 1]))
    }

    /// Maps a byte offset to a 1-indexed `(line, column)` location.
    ///
    /// `is_end` selects which side an offset sitting exactly on a line
    /// boundary belongs to: the earlier line for exclusive end offsets, the
    /// later line for start offsets.
    pub fn calc_location(&self, pos: usize, is_end: bool) -> (usize, usize) {
        if self.end_positions.is_empty() {
            return (0, 0);
        }
        let line = 1 + self
            .end_positions
            .partition_point(|&e| if is_end { e < pos } else { e <= pos });
        if line > self.end_positions.len() {
            return (line, 0);
        }
        let line_start = if line == 1 {
            0
        } else {
            self.end_positions[line - 2]
        };
        (line, pos - line_start + 1)
    }

    // windowing works over a copy with a guaranteed final newline so that an
    // empty buffer still has a single (empty) line
    fn prepare_for_windowing(&self) -> SourceCode {
        let mut content = self.content.clone();
        content.push('\n');
        SourceCode::new(self.path.clone(), content)
    }

    fn window_frame(&self, start: usize, end: usize) -> Option<WindowFrame> {
        if self.content.is_empty() || self.end_positions.is_empty() {
            return None;
        }
        // trailing newlines can push the end past the actual buffer
        let end = end.min(self.content.len());
        assert!(start <= end, "illegal arguments: start > end");

        let (line_start, _) = self.calc_location(start, false);
        let (line_end, _) = self.calc_location(end, true);
        if line_start < 1 || line_end < 1 || line_end > self.end_positions.len() {
            return None;
        }

        let source_start = if line_start == 1 {
            0
        } else {
            self.end_positions[line_start - 2]
        };
        Some(WindowFrame {
            line_start,
            source_start,
            source_end: self.end_positions[line_end - 1],
            width: num_digits(self.lines()),
        })
    }

    fn window_write(&self, frame: &WindowFrame) -> String {
        let mut out = String::new();
        let mut line = frame.line_start;
        let width = frame.width;
        let slice = &self.content[frame.source_start..frame.source_end];
        // a final newline ends the window instead of opening a new line
        let slice = slice.strip_suffix('\n').unwrap_or(slice);
        for (i, src_line) in slice.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{line:>width$} | ");
            line += 1;
            out.push_str(src_line);
        }
        out
    }

    fn window_impl(&self, start: usize, end: usize, pointed: bool) -> String {
        let prepared = self.prepare_for_windowing();
        let frame = match prepared.window_frame(start, end) {
            Some(frame) => frame,
            None => return String::new(),
        };
        let window = prepared.window_write(&frame);
        if !pointed || window.contains('\n') {
            return window;
        }

        // width of the "N | " header on the (single) emitted line
        let initial_skip = frame.width + 3;
        let pointer_offset = start - frame.source_start;
        let pointer_length = end - start;
        let mut out = window;
        out.push('\n');
        out.push_str(&" ".repeat(initial_skip + pointer_offset));
        out.push_str(&"^".repeat(pointer_length));
        out
    }

    /// The smallest contiguous line-aligned slice covering `[start, end)`,
    /// each line prefixed with a right-aligned line number and `" | "`.
    pub fn window(&self, start: usize, end: usize) -> String {
        self.window_impl(start, end, false)
    }

    /// Like [`SourceCode::window`], with a caret line appended when the
    /// window is a single line.
    pub fn pointed_window(&self, start: usize, end: usize) -> String {
        self.window_impl(start, end, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(content: &str) -> SourceCode {
        SourceCode::new("/path/to/source", content)
    }

    #[test]
    fn window_newline_sequence() {
        assert_eq!(src("\n\n\n\n").window(0, 5), "1 | \n2 | \n3 | \n4 | \n5 | ");
    }

    #[test]
    fn window_single_line() {
        assert_eq!(
            src("single line content").window(0, 19),
            "1 | single line content"
        );
    }

    #[test]
    fn window_multiple_lines() {
        assert_eq!(
            src("line 1\nline 2\nline 3\n").window(0, 21),
            "1 | line 1\n2 | line 2\n3 | line 3"
        );
    }

    #[test]
    fn window_multiple_lines_full() {
        assert_eq!(
            src("line 1\nline 2\nline 3\n").window(0, 22),
            "1 | line 1\n2 | line 2\n3 | line 3\n4 | "
        );
    }

    #[test]
    fn window_multiple_lines_misaligned() {
        assert_eq!(
            src("line 1\nline 2\nline 3\n").window(3, 20),
            "1 | line 1\n2 | line 2\n3 | line 3"
        );
    }

    #[test]
    fn window_partial_lines() {
        assert_eq!(src("line 1\nline 2\nline 3\n").window(7, 14), "2 | line 2");
    }

    #[test]
    fn window_partial_lines_misaligned() {
        assert_eq!(src("line 1\nline 2\nline 3\n").window(9, 10), "2 | line 2");
    }

    #[test]
    fn window_empty_source() {
        assert_eq!(src("").window(0, 0), "1 | ");
    }

    #[test]
    fn pointed_window_single_line() {
        assert_eq!(
            src("single line content").pointed_window(0, 6),
            "1 | single line content\n    ^^^^^^"
        );
    }

    #[test]
    fn pointed_window_multi_line_is_unpointed() {
        assert_eq!(
            src("line 1\nline 2\n").pointed_window(0, 13),
            "1 | line 1\n2 | line 2"
        );
    }

    #[test]
    fn calc_location_maps_offsets() {
        let s = src("line 1\nline 2\nline 3\n");
        assert_eq!(s.calc_location(0, false), (1, 1));
        assert_eq!(s.calc_location(7, false), (2, 1));
        assert_eq!(s.calc_location(7, true), (1, 8));
        assert_eq!(s.calc_location(9, false), (2, 3));
    }

    #[test]
    fn line_pos_bounds() {
        let s = src("ab\ncd\n");
        assert_eq!(s.line_pos(1), Some((0, 3)));
        assert_eq!(s.line_pos(2), Some((3, 6)));
        assert_eq!(s.line_pos(0), None);
    }

    #[test]
    fn append_source_extends_lines() {
        let mut s = src("a\n");
        let before = s.lines();
        s.append_source("b\nc\n");
        assert!(s.lines() > before);
        assert_eq!(s.text(), "a\nb\nc\n");
    }
}
