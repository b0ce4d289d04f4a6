//! The token model: a type tag, the verbatim (or canonical) text, and the
//! byte range the token occupies.

use crate::pos::{Position, Positioned};
use crate::repl::in_repl_mode;
use std::fmt::{self, Display, Formatter};
use strum::EnumIter;

/// Marker string for token types with no proper name.
pub const UNKNOWN_TOKEN_TYPE_STRING: &str = "?UnknownTokenType";

/// The token-type inventory.
///
/// Declaration order partitions the inventory into disjoint ranges:
/// valued variables first, then keywords (word keywords followed by
/// punctuation), then the proper structural types, then REPL commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum TokenType {
    // valued variables
    Error,
    IntValue,
    CharValue,
    FloatValue,
    StringValue,
    RawStringValue,
    ImportPath,
    Id,
    Infix,
    Hole,
    MethodSymbol,
    // word keywords
    Alias,
    Deriving,
    Import,
    In,
    Let,
    Module,
    Using,
    Spec,
    Where,
    As,
    With,
    Of,
    Syntax,
    Case,
    Public,
    Open,
    Auto,
    Inst,
    Erase,
    Once,
    Impossible,
    Requiring,
    From,
    Forall,
    Ref,
    Term,
    Pattern,
    // punctuation keywords
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    DotDot,
    Colon,
    ThickArrow,
    Arrow,
    Bar,
    Equal,
    Backslash,
    ColonEqual,
    FlatAnnotation,
    LeftBracketAt,
    EmptyParenEnclosure,
    EmptyBracketEnclosure,
    // proper structural types
    Comment,
    Underscore,
    Newline,
    EndOfTokens,
    // REPL commands
    ImportCommand,
    InstancesCommand,
    HelpCommand,
    TypeCommand,
    KindCommand,
    MainCommand,
    RunCommand,
    QuitCommand,
    SetCommand,
    ApiCommand,
    ExposeCommand,
    SaveCommand,
    RestoreCommand,
    BeginCommand,
    EndCommand,
    IncludeCommand,
}

impl TokenType {
    pub fn is_variable(self) -> bool {
        (self as u8) <= (TokenType::MethodSymbol as u8)
    }

    /// Range test over the keyword partition (words and punctuation).
    pub fn is_keyword(self) -> bool {
        (self as u8) > (TokenType::MethodSymbol as u8)
            && (self as u8) <= (TokenType::EmptyBracketEnclosure as u8)
    }

    pub fn is_proper(self) -> bool {
        (self as u8) <= (TokenType::EndOfTokens as u8)
    }

    pub fn is_command(self) -> bool {
        (self as u8) > (TokenType::EndOfTokens as u8)
    }

    /// The canonical spelling for constructed tokens; `None` for types whose
    /// value comes from the source.
    pub fn canonical(self) -> Option<&'static str> {
        use TokenType::*;
        Some(match self {
            Alias => "alias",
            Deriving => "deriving",
            Import => "import",
            In => "in",
            Let => "let",
            Module => "module",
            Using => "use",
            Spec => "spec",
            Where => "where",
            As => "as",
            With => "with",
            Of => "of",
            Syntax => "syntax",
            Case => "case",
            Public => "public",
            Open => "open",
            Auto => "auto",
            Inst => "inst",
            Erase => "erase",
            Once => "once",
            Impossible => "impossible",
            Requiring => "requiring",
            From => "from",
            Forall => "forall",
            Ref => "ref",
            Term => "term",
            Pattern => "pattern",
            LeftParen => "(",
            RightParen => ")",
            LeftBracket => "[",
            RightBracket => "]",
            LeftBrace => "{",
            RightBrace => "}",
            Comma => ",",
            Dot => ".",
            DotDot => "..",
            Colon => ":",
            ThickArrow => "=>",
            Arrow => "->",
            Bar => "|",
            Equal => "=",
            Backslash => "\\",
            ColonEqual => ":=",
            LeftBracketAt => "[@",
            EmptyParenEnclosure => "()",
            EmptyBracketEnclosure => "[]",
            Underscore => "_",
            Newline => "\n",
            _ => return None,
        })
    }

    /// The standard form of a command literal, `None` for non-commands.
    pub fn command_literal(self) -> Option<&'static str> {
        use TokenType::*;
        Some(match self {
            ImportCommand => ":import",
            InstancesCommand => ":instances",
            HelpCommand => ":help",
            TypeCommand => ":type",
            KindCommand => ":kind",
            MainCommand => ":main",
            RunCommand => ":run",
            QuitCommand => ":quit",
            SetCommand => ":set",
            ApiCommand => ":api",
            ExposeCommand => ":expose",
            SaveCommand => ":save",
            RestoreCommand => ":restore",
            BeginCommand => ":begin",
            EndCommand => ":end",
            IncludeCommand => ":include",
            _ => return None,
        })
    }

    /// Recognizes a command literal, including the usual short forms.
    pub fn from_command_literal(literal: &str) -> Option<TokenType> {
        use TokenType::*;
        Some(match literal {
            ":import" | ":i" => ImportCommand,
            ":instances" => InstancesCommand,
            ":help" | ":h" | ":?" => HelpCommand,
            ":type" | ":t" => TypeCommand,
            ":kind" | ":k" => KindCommand,
            ":main" => MainCommand,
            ":run" => RunCommand,
            ":quit" | ":q" => QuitCommand,
            ":set" | ":unset" => SetCommand,
            ":api" => ApiCommand,
            ":expose" => ExposeCommand,
            ":save" => SaveCommand,
            ":restore" => RestoreCommand,
            ":begin" => BeginCommand,
            ":end" => EndCommand,
            ":include" => IncludeCommand,
            _ => return None,
        })
    }

    /// The proper name of a non-command token type, or the unknown marker.
    pub fn proper_type_string(self) -> &'static str {
        use TokenType::*;
        match self {
            Error => "Error",
            IntValue => "IntValue",
            CharValue => "CharValue",
            FloatValue => "FloatValue",
            StringValue => "StringValue",
            RawStringValue => "RawStringValue",
            ImportPath => "ImportPath",
            Id => "Id",
            Infix => "Infix",
            Hole => "Hole",
            MethodSymbol => "MethodSymbol",
            Alias => "Alias",
            Deriving => "Deriving",
            Import => "Import",
            In => "In",
            Let => "Let",
            Module => "Module",
            Using => "Using",
            Spec => "Spec",
            Where => "Where",
            As => "As",
            With => "With",
            Of => "Of",
            Syntax => "Syntax",
            Case => "Case",
            Public => "Public",
            Open => "Open",
            Auto => "Auto",
            Inst => "Inst",
            Erase => "Erase",
            Once => "Once",
            Impossible => "Impossible",
            Requiring => "Requiring",
            From => "From",
            Forall => "Forall",
            Ref => "Ref",
            Term => "Term",
            Pattern => "Pattern",
            LeftParen => "LeftParen",
            RightParen => "RightParen",
            LeftBracket => "LeftBracket",
            RightBracket => "RightBracket",
            LeftBrace => "LeftBrace",
            RightBrace => "RightBrace",
            Comma => "Comma",
            Dot => "Dot",
            DotDot => "DotDot",
            Colon => "Colon",
            ThickArrow => "ThickArrow",
            Arrow => "Arrow",
            Bar => "Bar",
            Equal => "Equal",
            Backslash => "Backslash",
            ColonEqual => "ColonEqual",
            FlatAnnotation => "FlatAnnotation",
            LeftBracketAt => "LeftBracketAt",
            EmptyParenEnclosure => "EmptyParenEnclosure",
            EmptyBracketEnclosure => "EmptyBracketEnclosure",
            Comment => "Comment",
            Underscore => "Underscore",
            Newline => "Newline",
            EndOfTokens => "EndOfTokens",
            _ => UNKNOWN_TOKEN_TYPE_STRING,
        }
    }

    /// The display name of a command token type.
    pub fn command_string(self) -> String {
        use TokenType::*;
        let name = match self {
            ImportCommand => "Import",
            InstancesCommand => "Instances",
            HelpCommand => "Help",
            TypeCommand => "Type",
            KindCommand => "Kind",
            MainCommand => "Main",
            RunCommand => "Run",
            QuitCommand => "Quit",
            SetCommand => "Set",
            ApiCommand => "Api",
            ExposeCommand => "Expose",
            SaveCommand => "Save",
            RestoreCommand => "Restore",
            BeginCommand => "Begin",
            EndCommand => "End",
            IncludeCommand => "Include",
            other => return format!("Command({})", other as u8),
        };
        format!("Command({name})")
    }

    /// Constructs a token from a keyword type with its canonical spelling.
    ///
    /// A type whose value comes from the source cannot be constructed this
    /// way; the result is an [`TokenType::Error`] token saying so.
    pub fn make(self) -> Token {
        match self.canonical() {
            Some(value) => Token {
                ty: self,
                value: value.to_string(),
                start: 0,
                end: 0,
            },
            None => Token {
                ty: TokenType::Error,
                value: format!(
                    "token type {} requires a value",
                    self.proper_type_string()
                ),
                start: 0,
                end: 0,
            },
        }
    }

    /// Constructs a command token with its standard literal.
    pub fn make_command(self) -> Token {
        Token {
            ty: self,
            value: self.command_literal().unwrap_or_default().to_string(),
            start: 0,
            end: 0,
        }
    }

    /// Constructs a token carrying a source-derived value.
    pub fn make_valued(self, value: impl Into<String>) -> Token {
        Token {
            ty: self,
            value: value.into(),
            start: 0,
            end: 0,
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = self.proper_type_string();
        if s == UNKNOWN_TOKEN_TYPE_STRING && in_repl_mode() {
            return write!(f, "{}", self.command_string());
        }
        write!(f, "{s}")
    }
}

/// A lexeme: type tag, text, and byte range.
///
/// `value` is the verbatim source slice except for constructed keyword
/// tokens, whose value is the canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub ty: TokenType,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(ty: TokenType, value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            ty,
            value: value.into(),
            start,
            end,
        }
    }

    /// Re-spans a constructed token.
    #[must_use]
    pub fn at(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// The lexical-failure message, if this is an error token.
    pub fn error(&self) -> Option<&str> {
        (self.ty == TokenType::Error).then_some(self.value.as_str())
    }

    /// The `name: value` form used when a token appears as a tree leaf.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.ty, self.value)
    }
}

impl Positioned for Token {
    fn get_pos(&self) -> Position {
        Position::new(self.start, self.end)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn proper_types_have_names() {
        for ty in TokenType::iter().filter(|ty| ty.is_proper()) {
            assert_ne!(
                ty.proper_type_string(),
                UNKNOWN_TOKEN_TYPE_STRING,
                "{ty:?} has no string representation"
            );
            assert!(!ty.proper_type_string().is_empty());
        }
    }

    #[test]
    fn proper_type_names_are_distinct() {
        let names: Vec<_> = TokenType::iter()
            .filter(|ty| ty.is_proper())
            .map(|ty| ty.proper_type_string())
            .collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn keyword_make_uses_canonical_spelling() {
        for ty in TokenType::iter().filter(|ty| ty.is_keyword()) {
            if let Some(canonical) = ty.canonical() {
                assert_eq!(ty.make().value, canonical);
                assert_eq!(ty.make().ty, ty);
            }
        }
    }

    #[test]
    fn make_on_valued_type_is_an_error() {
        let tok = TokenType::Id.make();
        assert_eq!(tok.ty, TokenType::Error);
        assert!(tok.error().is_some());
    }

    #[test]
    fn commands_have_literals() {
        for ty in TokenType::iter().filter(|ty| ty.is_command()) {
            let literal = ty.command_literal().unwrap();
            assert!(literal.starts_with(':'));
            assert_eq!(TokenType::from_command_literal(literal), Some(ty));
        }
    }

    #[test]
    fn command_short_forms() {
        assert_eq!(
            TokenType::from_command_literal(":t"),
            Some(TokenType::TypeCommand)
        );
        assert_eq!(
            TokenType::from_command_literal(":q"),
            Some(TokenType::QuitCommand)
        );
        assert_eq!(
            TokenType::from_command_literal(":?"),
            Some(TokenType::HelpCommand)
        );
    }

    #[test]
    fn keyword_partition_is_a_range() {
        assert!(TokenType::Alias.is_keyword());
        assert!(TokenType::EmptyBracketEnclosure.is_keyword());
        assert!(!TokenType::MethodSymbol.is_keyword());
        assert!(!TokenType::Comment.is_keyword());
        assert!(!TokenType::ImportCommand.is_keyword());
        assert!(TokenType::ImportCommand.is_command());
    }
}
