//! Identifier and literal atoms shared by every grammar layer.

use crate::ast::token_node;
use crate::node::Node;
use yew_tokens::{Position, Positioned, Token, TokenType};

token_node!(
    /// A camelCase identifier.
    LowerIdent,
    "lower identifier"
);
token_node!(
    /// A PascalCase identifier.
    UpperIdent,
    "upper identifier"
);
token_node!(
    /// Any usable name: an identifier, an infix, a method symbol, or the
    /// `[]` / `=` tokens in the positions where they act as names.
    Name,
    "name"
);
token_node!(
    /// A `?camelCase` inference placeholder.
    Hole,
    "hole"
);
token_node!(Wildcard, "wildcard");
token_node!(ImportPathIdent, "import path identifier");

/// Either case of identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ident {
    Lower(LowerIdent),
    Upper(UpperIdent),
}

impl Ident {
    pub fn token(&self) -> &Token {
        match self {
            Ident::Lower(l) => l.token(),
            Ident::Upper(u) => u.token(),
        }
    }

    pub fn text(&self) -> &str {
        &self.token().value
    }
}

impl Positioned for Ident {
    fn get_pos(&self) -> Position {
        self.token().get_pos()
    }
}

impl Node for Ident {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            Ident::Lower(l) => l.describe(),
            Ident::Upper(u) => u.describe(),
        }
    }
}

/// A literal value token: int, float, char, string, or raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    token: Token,
}

impl Literal {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Positioned for Literal {
    fn get_pos(&self) -> Position {
        self.token.get_pos()
    }
}

impl Node for Literal {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let label = match self.token.ty {
            TokenType::CharValue => "char literal",
            TokenType::RawStringValue => "raw string literal",
            _ => "literal",
        };
        (label.to_string(), vec![&self.token])
    }
}
