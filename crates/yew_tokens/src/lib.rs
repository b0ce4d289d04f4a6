//! Token-level building blocks for the Yew front end: byte-range positions,
//! source buffers with line bookkeeping and windowed excerpts, and the token
//! model shared by the lexer and parser.

pub mod pos;
pub mod repl;
pub mod source;
pub mod token;

pub use pos::{Position, Positioned};
pub use repl::{in_repl_mode, scoped_repl_mode, set_repl_mode, ReplModeGuard};
pub use source::{Source, SourceCode};
pub use token::{Token, TokenType};
