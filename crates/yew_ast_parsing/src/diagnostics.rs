//! Human-readable diagnostics with windowed source excerpts.
//!
//! Rendering format: `[line:char] Kind (Sub): message` followed by the
//! line-aligned window covering the attributed byte range.

use std::fmt::{self, Display, Formatter};
use thiserror::Error;
use yew_tokens::SourceCode;

/// Severity bins, in dump order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Log,
    Todo,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Log => "Log",
            Severity::Todo => "Todo",
        };
        write!(f, "{s}")
    }
}

/// The subsystem a diagnostic is attributed to; shown parenthesised after
/// the severity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Lexical,
    Syntax,
    Type,
    System,
}

impl Display for Subsystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Subsystem::Lexical => "Lexical",
            Subsystem::Syntax => "Syntax",
            Subsystem::Type => "Type",
            Subsystem::System => "System",
        };
        write!(f, "{s}")
    }
}

/// A rendered diagnostic. The message text is rendered eagerly so the
/// source buffer does not need to outlive the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{rendered}")]
pub struct Diagnostic {
    severity: Severity,
    subsystem: Option<Subsystem>,
    msg: String,
    start: usize,
    end: usize,
    rendered: String,
}

fn render(
    src: &SourceCode,
    severity: Severity,
    subsystem: Option<Subsystem>,
    msg: &str,
    start: usize,
    end: usize,
) -> String {
    let (line, char) = src.calc_location(start, false);
    let head = match subsystem {
        Some(sub) => format!("[{line}:{char}] {severity} ({sub}): {msg}"),
        None => format!("[{line}:{char}] {severity}: {msg}"),
    };
    let window = src.window(start, end);
    if window.is_empty() {
        head
    } else {
        format!("{head}\n{window}")
    }
}

impl Diagnostic {
    fn new(
        src: &SourceCode,
        severity: Severity,
        subsystem: Option<Subsystem>,
        msg: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        let msg = msg.into();
        let rendered = render(src, severity, subsystem, &msg, start, end);
        Self {
            severity,
            subsystem,
            msg,
            start,
            end,
            rendered,
        }
    }

    pub fn lexical(src: &SourceCode, msg: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(src, Severity::Error, Some(Subsystem::Lexical), msg, start, end)
    }

    pub fn syntax(src: &SourceCode, msg: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(src, Severity::Error, Some(Subsystem::Syntax), msg, start, end)
    }

    pub fn typing(src: &SourceCode, msg: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(src, Severity::Error, Some(Subsystem::Type), msg, start, end)
    }

    pub fn warning(src: &SourceCode, msg: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(src, Severity::Warning, None, msg, start, end)
    }

    pub fn log(src: &SourceCode, msg: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(src, Severity::Log, None, msg, start, end)
    }

    pub fn todo(src: &SourceCode, msg: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(src, Severity::Todo, None, msg, start, end)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn subsystem(&self) -> Option<Subsystem> {
        self.subsystem
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn range(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Returns the diagnostics regrouped into severity bins, each bin keeping
/// insertion order. The plain slice is the insertion-ordered listing.
pub fn bin_ordered(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    let mut out = Vec::with_capacity(diagnostics.len());
    for severity in [Severity::Error, Severity::Warning, Severity::Log, Severity::Todo] {
        out.extend(diagnostics.iter().filter(|d| d.severity == severity));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src() -> SourceCode {
        SourceCode::new("/path/to/source", "x : x\ny = 0\n")
    }

    #[test]
    fn syntax_diagnostic_renders_header_and_window() {
        let d = Diagnostic::syntax(&src(), "expected type", 4, 5);
        assert_eq!(d.to_string(), "[1:5] Error (Syntax): expected type\n1 | x : x");
    }

    #[test]
    fn warning_has_no_subsystem() {
        let d = Diagnostic::warning(&src(), "unused binding", 6, 7);
        assert_eq!(d.to_string(), "[2:1] Warning: unused binding\n2 | y = 0");
    }

    #[test]
    fn bin_ordered_groups_by_severity_keeping_insertion_order() {
        let s = src();
        let ds = vec![
            Diagnostic::warning(&s, "w1", 0, 1),
            Diagnostic::syntax(&s, "e1", 0, 1),
            Diagnostic::warning(&s, "w2", 2, 3),
            Diagnostic::syntax(&s, "e2", 2, 3),
        ];
        let msgs: Vec<&str> = bin_ordered(&ds).into_iter().map(|d| d.msg()).collect();
        assert_eq!(msgs, ["e1", "e2", "w1", "w2"]);
    }
}
