//! The byte-level lexer.
//!
//! Tokens are produced on demand from a [`SourceCode`] buffer. Lexical
//! failures never abort the scan: they surface as [`TokenType::Error`]
//! tokens carrying the failure message, with a windowed [`Diagnostic`]
//! recorded alongside.

use crate::diagnostics::Diagnostic;
use crate::matching;
use yew_tokens::{in_repl_mode, SourceCode, Token, TokenType};

pub mod errors {
    //! Lexical failure messages.

    pub const UNEXPECTED_EOF: &str = "unexpected end of file";
    pub const EXPECTED_CHAR_LITERAL: &str = "expected character literal";
    pub const ILLEGAL_CHAR_LITERAL: &str = "illegal character literal";
    pub const ILLEGAL_ESCAPE_SEQUENCE: &str = "illegal escape sequence";
    pub const ILLEGAL_STRING_LITERAL: &str = "illegal string literal";
    pub const UNEXPECTED_UNDERSCORE: &str = "unexpected underscore";
    pub const UNEXPECTED_UNDERSCORE_IN_ID: &str = "unexpected underscore in identifier";
    pub const INVALID_CHARACTER: &str = "invalid character";
    pub const INVALID_CHARACTER_AT_END_OF_NUM_CONST: &str =
        "invalid character at end of numerical constant";
    pub const ILLEGAL_HOLE_ID: &str = "illegal hole identifier";
    pub const EXPECTED_COMMAND: &str = "expected command";
}

/// The token-source contract the parser drives.
///
/// A scanner can be halted and resumed: while stopped, [`Scanner::scan`]
/// keeps returning the end-of-tokens sentinel, and [`Scanner::restore`]
/// picks the scan back up from where it halted. The REPL uses this to feed
/// one submission at a time through a single growing buffer.
pub trait Scanner {
    /// The next token. Returns the end-of-tokens sentinel at exhaustion
    /// (repeatedly) and while stopped.
    fn scan(&mut self) -> Token;

    /// True once the buffer is exhausted.
    fn eof(&self) -> bool;

    /// Halts the scan at the current offset.
    fn stop(&mut self);

    /// Resumes a halted scan.
    fn restore(&mut self);

    fn src_code(&self) -> &SourceCode;

    /// Extends the underlying buffer with further input.
    fn append_source(&mut self, addition: &str);
}

/// The scanner over a source buffer.
pub struct Lexer {
    src: SourceCode,
    pos: usize,
    keep_comments: bool,
    stopped: bool,
    // start offsets of tokens mid-construction
    saved_char: Vec<usize>,
    messages: Vec<Diagnostic>,
}

fn word_keyword(word: &str) -> Option<TokenType> {
    use TokenType::*;
    Some(match word {
        "alias" => Alias,
        "as" => As,
        "auto" => Auto,
        "case" => Case,
        "deriving" => Deriving,
        "erase" => Erase,
        "forall" => Forall,
        "from" => From,
        "import" => Import,
        "impossible" => Impossible,
        "in" => In,
        "inst" => Inst,
        "let" => Let,
        "module" => Module,
        "of" => Of,
        "once" => Once,
        "open" => Open,
        "pattern" => Pattern,
        "public" => Public,
        "ref" => Ref,
        "requiring" => Requiring,
        "spec" => Spec,
        "syntax" => Syntax,
        "term" => Term,
        "using" => Using,
        "where" => Where,
        "with" => With,
        _ => return None,
    })
}

fn symbol_keyword(run: &str) -> Option<TokenType> {
    use TokenType::*;
    Some(match run {
        "," => Comma,
        "." => Dot,
        ".." => DotDot,
        ":" => Colon,
        ":=" => ColonEqual,
        "=>" => ThickArrow,
        "->" => Arrow,
        "|" => Bar,
        "=" => Equal,
        "\\" => Backslash,
        _ => return None,
    })
}

fn escape_char(c: char) -> Option<char> {
    Some(match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'v' => '\x0B',
        'b' => '\x08',
        'a' => '\x07',
        'f' => '\x0C',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        _ => return None,
    })
}

// a numerical constant must be followed by whitespace, a closer, or a
// symbol character; a letter, underscore, or prime glued on is an error
fn valid_num_end(b: u8) -> bool {
    !(b.is_ascii_alphanumeric() || b == b'_' || b == b'\'')
}

impl Lexer {
    pub fn new(src: impl Into<SourceCode>) -> Self {
        Self {
            src: src.into(),
            pos: 0,
            keep_comments: false,
            stopped: false,
            saved_char: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn from_text(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(SourceCode::new(path, text))
    }

    /// When set, comment tokens are emitted instead of skipped.
    #[must_use]
    pub fn keeping_comments(mut self) -> Self {
        self.keep_comments = true;
        self
    }

    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    pub fn take_messages(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.messages)
    }

    /// Scans the rest of the buffer, ending with the end-of-tokens sentinel.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan();
            let done = token.ty == TokenType::EndOfTokens;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn rest(&self) -> &str {
        &self.src.text()[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.src.text().as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.src.text().as_bytes().get(self.pos + ahead).copied()
    }

    fn mark(&mut self) {
        self.saved_char.push(self.pos);
    }

    fn start(&mut self) -> usize {
        self.saved_char.pop().unwrap_or(self.pos)
    }

    fn add(&mut self, ty: TokenType, value: impl Into<String>) -> Token {
        let start = self.start();
        Token::new(ty, value, start, self.pos)
    }

    fn error(&mut self, msg: &str) -> Token {
        let start = self.start();
        let end = self.pos.max(start);
        self.messages
            .push(Diagnostic::lexical(&self.src, msg, start, end));
        Token::new(TokenType::Error, msg, start, end)
    }

    fn end_of_tokens(&self) -> Token {
        let len = self.src.text().len();
        Token::new(TokenType::EndOfTokens, "", len, len)
    }

    fn scan_word(&mut self) -> Token {
        let word = matching::match_at_start(&matching::ALPHANUMERIC_ID, self.rest())
            .unwrap_or_default()
            .to_string();
        self.pos += word.len();
        match word_keyword(&word) {
            Some(ty) => self.add(ty, word),
            None => self.add(TokenType::Id, word),
        }
    }

    fn scan_number(&mut self) -> Token {
        let rest = self.rest();
        let radix_lit = matching::match_at_start(&matching::HEX_LIT, rest)
            .or_else(|| matching::match_at_start(&matching::OCT_LIT, rest))
            .or_else(|| matching::match_at_start(&matching::BIN_LIT, rest));
        let (raw, ty) = match radix_lit {
            Some(lit) => (lit, TokenType::IntValue),
            None => {
                let lit = matching::match_at_start(&matching::FLOAT_LIT, rest).unwrap_or_default();
                let ty = if lit.contains(['.', 'e', 'E']) {
                    TokenType::FloatValue
                } else {
                    TokenType::IntValue
                };
                (lit, ty)
            }
        };
        let raw = raw.to_string();
        self.pos += raw.len();
        if let Some(b) = self.peek() {
            if !valid_num_end(b) {
                self.pos += 1;
                return self.error(errors::INVALID_CHARACTER_AT_END_OF_NUM_CONST);
            }
        }
        let mut value: String = raw.chars().filter(|&c| c != '_').collect();
        if ty == TokenType::IntValue && !value.starts_with("0x") && !value.starts_with("0X") {
            let no_radix = !value.starts_with("0o")
                && !value.starts_with("0O")
                && !value.starts_with("0b")
                && !value.starts_with("0B");
            if no_radix {
                let trimmed = value.trim_start_matches('0');
                value = if trimmed.is_empty() {
                    "0".to_string()
                } else {
                    trimmed.to_string()
                };
            }
        }
        self.add(ty, value)
    }

    fn scan_char(&mut self) -> Token {
        self.pos += 1;
        let c = match self.rest().chars().next() {
            None => return self.error(errors::UNEXPECTED_EOF),
            Some('\'') => {
                self.pos += 1;
                return self.error(errors::EXPECTED_CHAR_LITERAL);
            }
            Some('\\') => {
                self.pos += 1;
                let Some(escaped) = self.rest().chars().next() else {
                    return self.error(errors::UNEXPECTED_EOF);
                };
                self.pos += escaped.len_utf8();
                match escape_char(escaped) {
                    Some(c) => c,
                    None => return self.error(errors::ILLEGAL_ESCAPE_SEQUENCE),
                }
            }
            Some(c) => {
                self.pos += c.len_utf8();
                c
            }
        };
        match self.peek() {
            Some(b'\'') => {
                self.pos += 1;
                self.add(TokenType::CharValue, c.to_string())
            }
            None => self.error(errors::UNEXPECTED_EOF),
            Some(_) => self.error(errors::ILLEGAL_CHAR_LITERAL),
        }
    }

    fn scan_string(&mut self) -> Token {
        self.pos += 1;
        let mut value = String::new();
        loop {
            let Some(c) = self.rest().chars().next() else {
                return self.error(errors::UNEXPECTED_EOF);
            };
            self.pos += c.len_utf8();
            match c {
                '"' => break,
                '\n' => return self.error(errors::ILLEGAL_STRING_LITERAL),
                '\\' => {
                    let Some(escaped) = self.rest().chars().next() else {
                        return self.error(errors::UNEXPECTED_EOF);
                    };
                    self.pos += escaped.len_utf8();
                    match escape_char(escaped) {
                        Some(c) => value.push(c),
                        None => return self.error(errors::ILLEGAL_ESCAPE_SEQUENCE),
                    }
                }
                c => value.push(c),
            }
        }
        // quoted import paths come through the string form
        if matching::is_import_path(&value) {
            self.add(TokenType::ImportPath, value)
        } else {
            self.add(TokenType::StringValue, value)
        }
    }

    fn scan_raw_string(&mut self) -> Token {
        self.pos += 1;
        match self.rest().find('`') {
            Some(idx) => {
                let value = self.rest()[..idx].to_string();
                self.pos += idx + 1;
                self.add(TokenType::RawStringValue, value)
            }
            None => {
                self.pos = self.src.text().len();
                self.error(errors::UNEXPECTED_EOF)
            }
        }
    }

    fn scan_hole(&mut self) -> Token {
        self.pos += 1;
        let body = matching::match_at_start(&matching::ALPHANUMERIC_ID, self.rest())
            .unwrap_or_default()
            .to_string();
        self.pos += body.len();
        if matching::is_camel_case(&body) {
            self.add(TokenType::Hole, format!("?{body}"))
        } else {
            self.error(errors::ILLEGAL_HOLE_ID)
        }
    }

    // `-- text` is a comment; `--@text` is a flat annotation carrying the
    // text after the `@`
    fn scan_line_comment(&mut self) -> Option<Token> {
        self.pos += 2;
        let body_len = self.rest().find('\n').unwrap_or(self.rest().len());
        let body = self.rest()[..body_len].to_string();
        self.pos += body_len;
        let trimmed = body.trim();
        if let Some(annotation) = trimmed.strip_prefix('@') {
            return Some(self.add(TokenType::FlatAnnotation, annotation.to_string()));
        }
        if self.keep_comments {
            return Some(self.add(TokenType::Comment, trimmed.to_string()));
        }
        self.start();
        None
    }

    fn scan_block_comment(&mut self) -> Option<Token> {
        self.pos += 2;
        let Some(idx) = self.rest().find("*-") else {
            self.pos = self.src.text().len();
            return Some(self.error(errors::UNEXPECTED_EOF));
        };
        let body = self.rest()[..idx].trim().to_string();
        self.pos += idx + 2;
        if self.keep_comments {
            return Some(self.add(TokenType::Comment, body));
        }
        self.start();
        None
    }

    fn scan_left_paren(&mut self) -> Token {
        if self.peek_at(1) == Some(b')') {
            self.pos += 2;
            return self.add(TokenType::EmptyParenEnclosure, "()");
        }
        if let Some(name) = matching::match_at_start(&matching::INFIX_NAME, self.rest()) {
            let name = name.to_string();
            self.pos += name.len();
            let ty = if name.starts_with("(.") {
                TokenType::MethodSymbol
            } else {
                TokenType::Infix
            };
            return self.add(ty, name);
        }
        self.pos += 1;
        self.add(TokenType::LeftParen, "(")
    }

    fn scan_left_bracket(&mut self) -> Token {
        match self.peek_at(1) {
            Some(b'@') => {
                self.pos += 2;
                self.add(TokenType::LeftBracketAt, "[@")
            }
            Some(b']') => {
                self.pos += 2;
                self.add(TokenType::EmptyBracketEnclosure, "[]")
            }
            _ => {
                self.pos += 1;
                self.add(TokenType::LeftBracket, "[")
            }
        }
    }

    fn scan_command(&mut self) -> Token {
        let word = matching::match_at_start(&matching::COMMAND_WORD, self.rest())
            .unwrap_or_default()
            .to_string();
        self.pos += word.len();
        match TokenType::from_command_literal(&word) {
            Some(ty) => self.add(ty, word),
            None => self.error(errors::EXPECTED_COMMAND),
        }
    }

    fn scan_symbol_run(&mut self) -> Token {
        let run = matching::match_at_start(&matching::SYMBOL_ID, self.rest())
            .unwrap_or_default()
            .to_string();
        if run.is_empty() {
            if let Some(c) = self.rest().chars().next() {
                self.pos += c.len_utf8();
            }
            return self.error(errors::INVALID_CHARACTER);
        }
        self.pos += run.len();
        match symbol_keyword(&run) {
            Some(ty) => self.add(ty, run),
            None => self.add(TokenType::Id, run),
        }
    }
}

impl Scanner for Lexer {
    fn scan(&mut self) -> Token {
        loop {
            if self.stopped {
                return self.end_of_tokens();
            }
            while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
                self.pos += 1;
            }
            let Some(b) = self.peek() else {
                return self.end_of_tokens();
            };
            self.mark();
            let token = match b {
                b'\n' => {
                    self.pos += 1;
                    self.add(TokenType::Newline, "\n")
                }
                b'-' if self.peek_at(1) == Some(b'-') => match self.scan_line_comment() {
                    Some(token) => token,
                    None => continue,
                },
                b'-' if self.peek_at(1) == Some(b'*') => match self.scan_block_comment() {
                    Some(token) => token,
                    None => continue,
                },
                b'\'' => self.scan_char(),
                b'"' => self.scan_string(),
                b'`' => self.scan_raw_string(),
                b'(' => self.scan_left_paren(),
                b')' => {
                    self.pos += 1;
                    self.add(TokenType::RightParen, ")")
                }
                b'[' => self.scan_left_bracket(),
                b']' => {
                    self.pos += 1;
                    self.add(TokenType::RightBracket, "]")
                }
                b'{' => {
                    self.pos += 1;
                    self.add(TokenType::LeftBrace, "{")
                }
                b'}' => {
                    self.pos += 1;
                    self.add(TokenType::RightBrace, "}")
                }
                b'_' => {
                    self.pos += 1;
                    match self.peek() {
                        Some(next) if next.is_ascii_alphanumeric() || next == b'_' => {
                            self.pos += 1;
                            self.error(errors::UNEXPECTED_UNDERSCORE_IN_ID)
                        }
                        _ => self.add(TokenType::Underscore, "_"),
                    }
                }
                b'?' if self.peek_at(1).is_some_and(|c| c.is_ascii_alphabetic()) => {
                    self.scan_hole()
                }
                b':' if in_repl_mode()
                    && self
                        .peek_at(1)
                        .is_some_and(|c| c.is_ascii_alphabetic() || c == b'?') =>
                {
                    self.scan_command()
                }
                _ if b.is_ascii_alphabetic() => self.scan_word(),
                _ if b.is_ascii_digit() => self.scan_number(),
                _ => self.scan_symbol_run(),
            };
            return token;
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.src.text().len()
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn restore(&mut self) {
        self.stopped = false;
    }

    fn src_code(&self) -> &SourceCode {
        &self.src
    }

    fn append_source(&mut self, addition: &str) {
        self.src.append_source(addition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_tokens::scoped_repl_mode;

    fn lex(text: &str) -> Vec<Token> {
        let mut tokens = Lexer::from_text("/path/to/source", text).tokenize();
        assert_eq!(tokens.pop().map(|t| t.ty), Some(TokenType::EndOfTokens));
        tokens
    }

    fn types(text: &str) -> Vec<TokenType> {
        lex(text).into_iter().map(|t| t.ty).collect()
    }

    #[test]
    fn keywords_identifiers_and_newlines() {
        use TokenType::*;
        assert_eq!(
            types("module x\nimport \"a/b/c\""),
            [Module, Id, Newline, Import, ImportPath]
        );
        let tokens = lex("let x := x in x");
        assert_eq!(
            tokens.iter().map(|t| t.ty).collect::<Vec<_>>(),
            [Let, Id, ColonEqual, Id, In, Id]
        );
        assert_eq!(tokens[2].value, ":=");
    }

    #[test]
    fn tokens_cover_their_source_slice() {
        let text = "forall a in a -> a";
        for token in lex(text) {
            assert_eq!(&text[token.start..token.end], token.value);
        }
    }

    #[test]
    fn symbol_runs_are_keyworded_or_ids() {
        use TokenType::*;
        assert_eq!(types("x => y -> z | w"), [Id, ThickArrow, Id, Arrow, Id, Bar, Id]);
        let plus = &lex("x + y")[1];
        assert_eq!(plus.ty, Id);
        assert_eq!(plus.value, "+");
    }

    #[test]
    fn enclosures_and_infix_names() {
        use TokenType::*;
        assert_eq!(types("() [] ( ) [@ ["), [
            EmptyParenEnclosure,
            EmptyBracketEnclosure,
            LeftParen,
            RightParen,
            LeftBracketAt,
            LeftBracket,
        ]);
        let tokens = lex("(+) (.fst) (mod)");
        assert_eq!(
            tokens.iter().map(|t| t.ty).collect::<Vec<_>>(),
            [Infix, MethodSymbol, Infix]
        );
        assert_eq!(tokens[0].value, "(+)");
        assert_eq!(tokens[1].value, "(.fst)");
    }

    #[test]
    fn numeric_literals_normalize() {
        let tokens = lex("1_000 007 0x1f 1.5e3");
        assert_eq!(tokens[0].value, "1000");
        assert_eq!(tokens[1].value, "7");
        assert_eq!(tokens[2].value, "0x1f");
        assert_eq!(tokens[2].ty, TokenType::IntValue);
        assert_eq!(tokens[3].ty, TokenType::FloatValue);
        assert_eq!(tokens[3].value, "1.5e3");
    }

    #[test]
    fn letter_glued_to_number_is_an_error() {
        let mut lexer = Lexer::from_text("/path/to/source", "1x");
        let token = lexer.scan();
        assert_eq!(token.ty, TokenType::Error);
        assert_eq!(token.value, errors::INVALID_CHARACTER_AT_END_OF_NUM_CONST);
        assert_eq!(lexer.messages().len(), 1);
    }

    #[test]
    fn char_literals() {
        let tokens = lex(r"'a' '\n' '\\'");
        assert!(tokens.iter().all(|t| t.ty == TokenType::CharValue));
        assert_eq!(tokens[0].value, "a");
        assert_eq!(tokens[1].value, "\n");
        assert_eq!(tokens[2].value, "\\");

        let bad = &lex("'ab'")[0];
        assert_eq!(bad.ty, TokenType::Error);
        assert_eq!(bad.value, errors::ILLEGAL_CHAR_LITERAL);
        let empty = &lex("''")[0];
        assert_eq!(empty.value, errors::EXPECTED_CHAR_LITERAL);
    }

    #[test]
    fn string_literals_and_import_path_reclassification() {
        let tokens = lex("\"hi\\nthere\" \"a/b\" \"Not/path\"");
        assert_eq!(tokens[0].ty, TokenType::StringValue);
        assert_eq!(tokens[0].value, "hi\nthere");
        assert_eq!(tokens[1].ty, TokenType::ImportPath);
        assert_eq!(tokens[2].ty, TokenType::StringValue);
    }

    #[test]
    fn raw_strings_span_lines() {
        let tokens = lex("`line 1\nline 2`");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].ty, TokenType::RawStringValue);
        assert_eq!(tokens[0].value, "line 1\nline 2");
    }

    #[test]
    fn underscore_and_holes() {
        let tokens = lex("_ ?foo");
        assert_eq!(tokens[0].ty, TokenType::Underscore);
        assert_eq!(tokens[1].ty, TokenType::Hole);
        assert_eq!(tokens[1].value, "?foo");

        assert_eq!(lex("_x")[0].value, errors::UNEXPECTED_UNDERSCORE_IN_ID);
        assert_eq!(lex("?Foo")[0].value, errors::ILLEGAL_HOLE_ID);
    }

    #[test]
    fn comments_are_skipped_unless_kept() {
        assert_eq!(types("x -- trailing\ny"), [
            TokenType::Id,
            TokenType::Newline,
            TokenType::Id
        ]);
        let mut lexer =
            Lexer::from_text("/path/to/source", "x -- trailing\n").keeping_comments();
        let tokens = lexer.tokenize();
        assert_eq!(tokens[1].ty, TokenType::Comment);
        assert_eq!(tokens[1].value, "trailing");
    }

    #[test]
    fn flat_annotations_come_from_comment_syntax() {
        let tokens = lex("--@derive Eq\nx");
        assert_eq!(tokens[0].ty, TokenType::FlatAnnotation);
        assert_eq!(tokens[0].value, "derive Eq");
        assert_eq!(tokens[1].ty, TokenType::Newline);
    }

    #[test]
    fn block_comments() {
        assert_eq!(types("x -* inner\nlines *- y"), [TokenType::Id, TokenType::Id]);
        assert_eq!(lex("-* unterminated")[0].value, errors::UNEXPECTED_EOF);
    }

    #[test]
    fn stop_and_restore() {
        let mut lexer = Lexer::from_text("/path/to/source", "x y");
        assert_eq!(lexer.scan().value, "x");
        lexer.stop();
        assert_eq!(lexer.scan().ty, TokenType::EndOfTokens);
        lexer.restore();
        assert_eq!(lexer.scan().value, "y");
    }

    #[test]
    fn append_source_continues_the_scan() {
        let mut lexer = Lexer::from_text("/path/to/source", "x");
        assert_eq!(lexer.scan().value, "x");
        assert_eq!(lexer.scan().ty, TokenType::EndOfTokens);
        lexer.append_source("\ny");
        assert_eq!(lexer.scan().ty, TokenType::Newline);
        assert_eq!(lexer.scan().value, "y");
    }

    #[test]
    fn commands_lex_in_repl_mode_only() {
        {
            let _repl = scoped_repl_mode(false);
            assert_eq!(types(":t x"), [TokenType::Colon, TokenType::Id, TokenType::Id]);
        }
        let _repl = scoped_repl_mode(true);
        let tokens = lex(":t x");
        assert_eq!(tokens[0].ty, TokenType::TypeCommand);
        assert_eq!(tokens[1].ty, TokenType::Id);
    }

    #[test]
    fn unknown_command_is_an_error() {
        let _repl = scoped_repl_mode(true);
        let tokens = lex(":bogus");
        assert_eq!(tokens[0].ty, TokenType::Error);
        assert_eq!(tokens[0].value, errors::EXPECTED_COMMAND);
    }

    #[test]
    fn respaced_token_values_relex_identically() {
        // delimited literals store their inner text, so they are excluded
        for text in [
            "x : N -> N\nx n = plus n 1\n",
            "f = \\a, b => case a of (Zero => b\n_ => a)\n",
            "N : Type where (Zero : N\nSucc : N -> N) deriving (Eq, Ord)\n",
            "g = (+) ?hole 0xFF_AB 1.5 ()\n",
        ] {
            let tokens = lex(text);
            let mut respaced = String::new();
            for token in &tokens {
                if token.ty == TokenType::Newline {
                    respaced.push('\n');
                } else {
                    respaced.push_str(&token.value);
                    respaced.push(' ');
                }
            }
            let keys = |tokens: &[Token]| {
                tokens
                    .iter()
                    .map(|t| (t.ty, t.value.clone()))
                    .collect::<Vec<_>>()
            };
            assert_eq!(keys(&tokens), keys(&lex(&respaced)), "respaced: {respaced:?}");
        }
    }
}
