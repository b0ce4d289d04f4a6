//! The Yew front end: the byte-level lexer, the recursive-descent parser,
//! and the windowed diagnostics both report through.

pub mod diagnostics;
pub mod lexer;
pub mod matching;
pub mod parser;

pub use diagnostics::{Diagnostic, Severity, Subsystem};
pub use lexer::{Lexer, Scanner};
pub use parser::{Parser, ReplCommand, ReplStatement};
