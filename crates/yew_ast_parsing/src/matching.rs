//! The shared lexical grammar: identifier shapes, literal shapes, and the
//! helpers the lexer and parser use to test them.

use regex::Regex;
use std::sync::LazyLock;

/// Alphanumeric identifiers, `'` allowed after the first character.
pub static ALPHANUMERIC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9']*").unwrap());
/// Alphanumeric identifiers starting lowercase.
pub static CAMEL_CASE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9']*").unwrap());
/// Alphanumeric identifiers starting uppercase.
pub static PASCAL_CASE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9']*").unwrap());
/// Purely symbolic identifier runs.
pub static SYMBOL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[!@#$%^&*\-=+;:\\|~,<.>/?]+").unwrap());
/// Any non-infix name: an alphanumeric identifier or a symbol run.
pub static NON_INFIX_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9']*|[!@#$%^&*\-=+;:\\|~,<.>/?]+)").unwrap());
/// An enclosed infix `(name)` or method symbol `(.name)`.
pub static INFIX_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\.?(?:[a-zA-Z][a-zA-Z0-9']*|[!@#$%^&*\-=+;:<.>/?~|]+)\)").unwrap()
});
/// Import paths: camelCase segments joined by `/`.
pub static IMPORT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9']*(?:/[a-z][a-zA-Z0-9']*)*").unwrap());
/// Decimal integer literals with `_` digit-group separators.
pub static INT_LIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+(?:_[0-9]+)*").unwrap());
/// Hexadecimal literals.
pub static HEX_LIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[xX][0-9a-fA-F]+(?:_[0-9a-fA-F]+)*").unwrap());
/// Octal literals.
pub static OCT_LIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[oO][0-7]+(?:_[0-7]+)*").unwrap());
/// Binary literals.
pub static BIN_LIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[bB][01]+(?:_[01]+)*").unwrap());
/// Decimal literals with optional fraction and exponent; covers the integer
/// form as a degenerate case.
pub static FLOAT_LIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:_[0-9]+)*(?:\.[0-9]+(?:_[0-9]+)*)?(?:[eE][+-]?[0-9]+(?:_[0-9]+)*)?")
        .unwrap()
});
/// REPL command words, `:?` included.
pub static COMMAND_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:(?:[a-zA-Z]+|\?)").unwrap());

/// The longest prefix of `s` matched by `re`, if any.
pub fn match_at_start<'a>(re: &Regex, s: &'a str) -> Option<&'a str> {
    re.find(s).map(|m| m.as_str())
}

/// True when `re` matches all of `s`.
pub fn is_complete_match(re: &Regex, s: &str) -> bool {
    match_at_start(re, s).is_some_and(|m| m.len() == s.len())
}

pub fn is_camel_case(s: &str) -> bool {
    is_complete_match(&CAMEL_CASE_ID, s)
}

pub fn is_pascal_case(s: &str) -> bool {
    is_complete_match(&PASCAL_CASE_ID, s)
}

pub fn is_symbol_run(s: &str) -> bool {
    is_complete_match(&SYMBOL_ID, s)
}

pub fn is_non_infix_name(s: &str) -> bool {
    is_complete_match(&NON_INFIX_NAME, s)
}

pub fn is_import_path(s: &str) -> bool {
    is_complete_match(&IMPORT_PATH, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_and_pascal_are_disjoint() {
        assert!(is_camel_case("fmap2'"));
        assert!(!is_camel_case("Functor"));
        assert!(is_pascal_case("Functor"));
        assert!(!is_pascal_case("fmap"));
    }

    #[test]
    fn import_paths_join_lowercase_segments() {
        assert!(is_import_path("a/b/c"));
        assert!(is_import_path("data/list"));
        assert!(!is_import_path("Data/list"));
        assert!(!is_import_path("a//b"));
    }

    #[test]
    fn infix_names_enclose_identifiers_and_symbol_runs() {
        assert!(is_complete_match(&INFIX_NAME, "(+)"));
        assert!(is_complete_match(&INFIX_NAME, "(mod)"));
        assert!(is_complete_match(&INFIX_NAME, "(.fst)"));
        assert!(!is_complete_match(&INFIX_NAME, "()"));
        assert!(!is_complete_match(&INFIX_NAME, "(a b)"));
    }

    #[test]
    fn numeric_shapes() {
        assert_eq!(match_at_start(&INT_LIT, "1_000_000 x"), Some("1_000_000"));
        assert_eq!(match_at_start(&HEX_LIT, "0xff_ab,"), Some("0xff_ab"));
        assert_eq!(match_at_start(&OCT_LIT, "0o17 "), Some("0o17"));
        assert_eq!(match_at_start(&BIN_LIT, "0b1010"), Some("0b1010"));
        assert!(match_at_start(&INT_LIT, "_1").is_none());
    }

    #[test]
    fn command_words() {
        assert_eq!(match_at_start(&COMMAND_WORD, ":type x"), Some(":type"));
        assert_eq!(match_at_start(&COMMAND_WORD, ":? "), Some(":?"));
        assert!(match_at_start(&COMMAND_WORD, ": x").is_none());
    }
}
