//! The recursive-descent parser.
//!
//! The parser pulls every token out of a [`Scanner`] up front and walks the
//! buffer with a cursor. Speculative productions save the cursor, parse with
//! diagnostics suppressed, and roll the cursor back on failure, so a failed
//! speculation leaves no trace in either the stream or the reported errors.

use crate::diagnostics::Diagnostic;
use crate::lexer::Scanner;
use itertools::Itertools;
use log::debug;
use yew_ast::ast::{BodyElement, Expr, Name, YewSource};
use yew_tokens::{Position, Positioned, Token, TokenType};

pub mod errors;

mod annotation;
mod body;
mod expr;
mod header;
mod pattern;
mod source;
mod spec;
mod typ;

/// A production failed. The diagnostic (if any) has already been recorded;
/// the marker only unwinds the parse.
#[derive(Debug)]
pub(crate) struct Failure;

pub(crate) type Parse<T> = Result<T, Failure>;

/// Newline-drop mask bits for [`Parser::take_keyword`].
pub(crate) const DROP_NONE: u8 = 0b00;
pub(crate) const DROP_BEFORE: u8 = 0b01;
pub(crate) const DROP_AFTER: u8 = 0b10;
pub(crate) const DROP_BEFORE_AND_AFTER: u8 = 0b11;

/// Token types that begin a literal atom.
pub(crate) const LITERAL_L1S: &[TokenType] = &[
    TokenType::IntValue,
    TokenType::FloatValue,
    TokenType::StringValue,
    TokenType::RawStringValue,
    TokenType::ImportPath,
    TokenType::CharValue,
];

/// The two-token prefix of a typing: a name followed by `:`.
pub(crate) const TYPING_L2: &[(TokenType, TokenType)] = &[
    (TokenType::Id, TokenType::Colon),
    (TokenType::Infix, TokenType::Colon),
];

/// One REPL command line: the command token plus the raw tokens of the rest
/// of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplCommand {
    pub command: Token,
    pub args: Vec<Token>,
}

/// What a single REPL submission parsed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplStatement {
    Command(ReplCommand),
    Element(BodyElement),
    Expr(Expr),
}

/// The parser over a scanned token buffer.
pub struct Parser {
    scanner: Box<dyn Scanner>,
    tokens: Vec<Token>,
    cursor: usize,
    eot: Token,
    errors: Vec<Diagnostic>,
    ast: Option<YewSource>,
    statement: Option<ReplStatement>,
    suppress: usize,
}

impl Parser {
    pub fn new(scanner: impl Scanner + 'static) -> Self {
        Self {
            scanner: Box::new(scanner),
            tokens: Vec::new(),
            cursor: 0,
            eot: Token::new(TokenType::EndOfTokens, "", 0, 0),
            errors: Vec::new(),
            ast: None,
            statement: None,
            suppress: 0,
        }
    }

    /// Parses a whole source file. Returns `true` when no error-severity
    /// diagnostic was recorded.
    pub fn parse(&mut self) -> bool {
        self.load();
        if let Ok(src) = self.parse_yew_source() {
            self.ast = Some(src);
        }
        debug!(
            "parsed {} with {} diagnostics",
            self.scanner.src_code().path(),
            self.errors.len()
        );
        !self.errors.iter().any(Diagnostic::is_error)
    }

    /// Parses one REPL submission: a command line, a body element, or a bare
    /// expression. Returns `true` when no error-severity diagnostic was
    /// recorded.
    pub fn repl_parse(&mut self) -> bool {
        self.statement = None;
        self.load();
        self.drop_newlines();
        if self.current().ty == TokenType::EndOfTokens {
            return true;
        }
        if self.current().ty.is_command() {
            let command = self.next_token();
            let mut args = Vec::new();
            while !matches!(
                self.current().ty,
                TokenType::Newline | TokenType::EndOfTokens
            ) {
                args.push(self.next_token());
            }
            debug!(
                "repl command {} {}",
                command.value,
                args.iter().map(|t| t.value.as_str()).join(" ")
            );
            self.statement = Some(ReplStatement::Command(ReplCommand { command, args }));
        } else if let Some(element) = self.optionally(|p| p.parse_body_element()) {
            self.statement = Some(ReplStatement::Element(element));
        } else if let Ok(expr) = self.parse_expr(false) {
            self.statement = Some(ReplStatement::Expr(expr));
        }
        !self.errors.iter().any(Diagnostic::is_error)
    }

    pub fn ast(&self) -> Option<&YewSource> {
        self.ast.as_ref()
    }

    pub fn take_ast(&mut self) -> Option<YewSource> {
        self.ast.take()
    }

    pub fn statement(&self) -> Option<&ReplStatement> {
        self.statement.as_ref()
    }

    pub fn take_statement(&mut self) -> Option<ReplStatement> {
        self.statement.take()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.errors)
    }

    /// Pushes already-scanned tokens onto the buffer, converting error
    /// tokens into diagnostics and dropping comments.
    pub fn append_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        for token in tokens {
            match token.ty {
                TokenType::EndOfTokens | TokenType::Comment => {}
                TokenType::Error => {
                    let d = Diagnostic::lexical(
                        self.scanner.src_code(),
                        token.value.clone(),
                        token.start,
                        token.end,
                    );
                    self.errors.push(d);
                }
                _ => self.tokens.push(token),
            }
        }
    }

    /// Direct access to the underlying scanner, for callers that feed it
    /// further input between submissions.
    pub fn reference_scanner(&mut self) -> &mut dyn Scanner {
        &mut *self.scanner
    }

    /// Resets the token buffer, diagnostics, and results; the scanner is
    /// kept.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.cursor = 0;
        self.errors.clear();
        self.ast = None;
        self.statement = None;
        self.eot = Token::new(TokenType::EndOfTokens, "", 0, 0);
    }

    /// Drains the scanner into the token buffer. Error tokens become
    /// lexical diagnostics, comments are dropped, newlines are kept.
    fn load(&mut self) {
        loop {
            let token = self.scanner.scan();
            match token.ty {
                TokenType::EndOfTokens => break,
                TokenType::Error => {
                    let d = Diagnostic::lexical(
                        self.scanner.src_code(),
                        token.value.clone(),
                        token.start,
                        token.end,
                    );
                    self.errors.push(d);
                }
                TokenType::Comment => {}
                _ => self.tokens.push(token),
            }
        }
        let len = self.scanner.src_code().text().len();
        self.eot = Token::new(TokenType::EndOfTokens, "", len, len);
    }

    // --- cursor primitives ---

    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.eot)
    }

    pub(crate) fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Clones the current token and advances past it.
    pub(crate) fn next_token(&mut self) -> Token {
        let token = self.current().clone();
        self.advance();
        token
    }

    /// The position of the current token, for `Nothing` placeholders.
    pub(crate) fn here(&self) -> Position {
        self.current().get_pos()
    }

    pub(crate) fn drop_newlines(&mut self) {
        while self.current().ty == TokenType::Newline {
            self.advance();
        }
    }

    /// True when a statement boundary has been crossed: either newlines are
    /// consumed here, or the previously consumed token's trailing newlines
    /// were already dropped by an eager keyword match.
    pub(crate) fn then(&mut self) -> bool {
        let mut crossed = self
            .cursor
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .is_some_and(|t| t.ty == TokenType::Newline);
        while self.current().ty == TokenType::Newline {
            self.advance();
            crossed = true;
        }
        crossed
    }

    /// Consumes the current token when it matches `ty`, dropping newlines
    /// around it per the `drop` mask. On a mismatch the cursor is restored,
    /// undropping any before-newlines.
    pub(crate) fn take_keyword(&mut self, ty: TokenType, drop: u8) -> Option<Token> {
        let saved = self.cursor;
        if drop & DROP_BEFORE != 0 {
            self.drop_newlines();
        }
        if self.current().ty != ty {
            self.cursor = saved;
            return None;
        }
        let token = self.next_token();
        if drop & DROP_AFTER != 0 {
            self.drop_newlines();
        }
        Some(token)
    }

    pub(crate) fn get_keyword(&mut self, ty: TokenType) -> Option<Token> {
        self.take_keyword(ty, DROP_AFTER)
    }

    pub(crate) fn lookahead1(&self, types: &[TokenType]) -> bool {
        types.contains(&self.current().ty)
    }

    /// True when the current token and the one after it (newlines skipped
    /// in between) match any of the given pairs. Never moves the cursor.
    pub(crate) fn lookahead2(&mut self, pairs: &[(TokenType, TokenType)]) -> bool {
        let saved = self.cursor;
        for &(first, second) in pairs {
            let mut found = false;
            if self.current().ty == first {
                self.advance();
                self.drop_newlines();
                found = self.current().ty == second;
            }
            self.cursor = saved;
            if found {
                return true;
            }
        }
        false
    }

    // --- failure and speculation ---

    /// Records a syntax diagnostic at the current token (unless suppressed)
    /// and unwinds.
    pub(crate) fn fail<T>(&mut self, msg: &str) -> Parse<T> {
        let (start, end) = {
            let t = self.current();
            (t.start, t.end)
        };
        if self.suppress == 0 {
            let d = Diagnostic::syntax(self.scanner.src_code(), msg, start, end);
            self.errors.push(d);
        }
        Err(Failure)
    }

    /// Like [`Parser::fail`], but attributed over an already-parsed node.
    pub(crate) fn fail_over<T>(&mut self, msg: &str, at: impl Positioned) -> Parse<T> {
        let pos = at.get_pos();
        if self.suppress == 0 {
            let d = Diagnostic::syntax(self.scanner.src_code(), msg, pos.start(), pos.end());
            self.errors.push(d);
        }
        Err(Failure)
    }

    pub fn mark_optional(&mut self) {
        self.suppress += 1;
    }

    pub fn demark_optional(&mut self) {
        self.suppress = self.suppress.saturating_sub(1);
    }

    /// Runs `f` speculatively: on failure the cursor is rolled back and no
    /// diagnostic survives.
    pub(crate) fn optionally<T>(&mut self, f: impl FnOnce(&mut Self) -> Parse<T>) -> Option<T> {
        let saved = self.cursor;
        self.mark_optional();
        let result = f(self);
        self.demark_optional();
        match result {
            Ok(value) => Some(value),
            Err(Failure) => {
                self.cursor = saved;
                None
            }
        }
    }

    // --- generic sequence forms ---

    /// Keeps applying `f` after `first` until it yields `None`, collecting a
    /// non-empty sequence. The boolean reports whether a second item was
    /// parsed. `drop_each` drops newlines ahead of every iteration.
    pub(crate) fn one_or_more<T: Positioned>(
        &mut self,
        first: T,
        drop_each: bool,
        mut f: impl FnMut(&mut Self) -> Parse<Option<T>>,
    ) -> Parse<(yew_ast::data::NonEmpty<T>, bool)> {
        let mut items = yew_ast::data::NonEmpty::singleton(first);
        let mut extended = false;
        loop {
            if drop_each {
                self.drop_newlines();
            }
            match f(self)? {
                Some(item) => {
                    items = items.snoc(item);
                    extended = true;
                }
                None => return Ok((items, extended)),
            }
        }
    }

    /// A single item, or a parenthesised newline-separated group of items.
    pub(crate) fn parse_group<T: Positioned>(
        &mut self,
        empty_msg: &str,
        mut f: impl FnMut(&mut Self) -> Parse<Option<T>>,
    ) -> Parse<yew_ast::data::NonEmpty<T>> {
        let lparen = self.get_keyword(TokenType::LeftParen);
        let Some(first) = f(self)? else {
            return self.fail(empty_msg);
        };
        match lparen {
            Some(lp) => {
                let (mut items, _) = self.one_or_more(first, true, &mut f)?;
                items.widen(&lp);
                let Some(rp) = self.get_keyword(TokenType::RightParen) else {
                    return self.fail(errors::EXPECTED_RIGHT_PAREN);
                };
                items.widen(&rp);
                Ok(items)
            }
            None => Ok(yew_ast::data::NonEmpty::singleton(first)),
        }
    }

    /// A `sep`-separated sequence where the empty-sequence message depends
    /// on the offending token. A trailing separator is allowed.
    pub(crate) fn sep_sequenced_handled<T: Positioned>(
        &mut self,
        handler: impl FnOnce(&Token) -> String,
        sep: TokenType,
        mut f: impl FnMut(&mut Self) -> Parse<Option<T>>,
    ) -> Parse<yew_ast::data::NonEmpty<T>> {
        let Some(first) = f(self)? else {
            let msg = handler(self.current());
            return self.fail(&msg);
        };
        let mut items = yew_ast::data::NonEmpty::singleton(first);
        loop {
            self.drop_newlines();
            let Some(sep_token) = self.get_keyword(sep) else {
                return Ok(items);
            };
            items.widen(&sep_token);
            match f(self)? {
                Some(item) => items = items.snoc(item),
                None => return Ok(items),
            }
        }
    }

    pub(crate) fn sep_sequenced<T: Positioned>(
        &mut self,
        empty_msg: &str,
        sep: TokenType,
        f: impl FnMut(&mut Self) -> Parse<Option<T>>,
    ) -> Parse<yew_ast::data::NonEmpty<T>> {
        let msg = empty_msg.to_string();
        self.sep_sequenced_handled(move |_| msg, sep, f)
    }

    // --- shared name forms ---

    pub(crate) fn maybe_parse_name(&mut self) -> Option<Name> {
        match self.current().ty {
            TokenType::Id | TokenType::Infix => Some(Name::new(self.next_token())),
            _ => None,
        }
    }

    pub(crate) fn parse_lower_ident(&mut self) -> Option<yew_ast::ast::LowerIdent> {
        if self.current().ty == TokenType::Id && crate::matching::is_camel_case(&self.current().value)
        {
            return Some(yew_ast::ast::LowerIdent::new(self.next_token()));
        }
        None
    }

    pub(crate) fn parse_upper_ident(&mut self) -> Option<yew_ast::ast::UpperIdent> {
        if self.current().ty == TokenType::Id
            && crate::matching::is_pascal_case(&self.current().value)
        {
            return Some(yew_ast::ast::UpperIdent::new(self.next_token()));
        }
        None
    }

    pub(crate) fn parse_ident(&mut self) -> Option<yew_ast::ast::Ident> {
        if let Some(lower) = self.parse_lower_ident() {
            return Some(yew_ast::ast::Ident::Lower(lower));
        }
        self.parse_upper_ident().map(yew_ast::ast::Ident::Upper)
    }

    /// `(` or `{`, paired with the matching closer type.
    pub(crate) fn parse_enclosed_opener(&mut self) -> Option<(Token, TokenType)> {
        if let Some(t) = self.get_keyword(TokenType::LeftParen) {
            return Some((t, TokenType::RightParen));
        }
        if let Some(t) = self.get_keyword(TokenType::LeftBrace) {
            return Some((t, TokenType::RightBrace));
        }
        None
    }

    /// `.name` — the postfix access form shared by expressions and types.
    pub(crate) fn parse_access_name(&mut self) -> Parse<Name> {
        if self.take_keyword(TokenType::Dot, DROP_NONE).is_none() {
            return self.fail(errors::EXPECTED_ACCESS_DOT);
        }
        match self.maybe_parse_name() {
            Some(name) => Ok(name),
            None => self.fail(errors::EXPECTED_NAME),
        }
    }
}
