//! Patterns. Application is plain juxtaposition, so a pattern is one term
//! or a head term followed by argument terms on the same line.

use crate::parser::{errors, Parse, Parser, LITERAL_L1S};
use yew_ast::ast::{
    Hole, Literal, Name, Pattern, PatternApp, PatternAtom, PatternEnclosed, Wildcard,
};
use yew_ast::data::List;
use yew_tokens::TokenType;

impl Parser {
    pub(crate) fn parse_pattern(&mut self, enclosed: bool) -> Parse<Pattern> {
        match self.maybe_parse_pattern(enclosed)? {
            Some(pattern) => Ok(pattern),
            None => self.fail(errors::EXPECTED_PATTERN),
        }
    }

    pub(crate) fn maybe_parse_pattern(&mut self, enclosed: bool) -> Parse<Option<Pattern>> {
        let Some(head) = self.maybe_parse_pattern_term(enclosed)? else {
            return Ok(None);
        };
        let mut args: List<Pattern> = List::new();
        while let Some(arg) = self.maybe_parse_pattern_term(enclosed)? {
            args = args.snoc(arg);
        }
        let pattern = match args.strengthen().into_inner() {
            Some(args) => Pattern::App(Box::new(PatternApp::new(head, args))),
            None => head,
        };
        Ok(Some(pattern))
    }

    fn maybe_parse_pattern_term(&mut self, enclosed: bool) -> Parse<Option<Pattern>> {
        // inside an enclosure `=` acts as a name, e.g. `(=) x y`
        if enclosed && self.current().ty == TokenType::Equal {
            let token = self.next_token();
            return Ok(Some(Pattern::Atom(PatternAtom::Name(Name::new(token)))));
        }
        if let Some(atom) = self.maybe_parse_pattern_atom() {
            return Ok(Some(Pattern::Atom(atom)));
        }
        match self.current().ty {
            TokenType::Underscore => {
                let token = self.next_token();
                Ok(Some(Pattern::Wildcard(Wildcard::new(token))))
            }
            TokenType::LeftParen | TokenType::LeftBrace => {
                self.parse_enclosed_pattern().map(Some)
            }
            _ => Ok(None),
        }
    }

    /// The atoms shared by patterns and expressions: a literal, a name, or
    /// a hole.
    pub(crate) fn maybe_parse_pattern_atom(&mut self) -> Option<PatternAtom> {
        let ty = self.current().ty;
        if LITERAL_L1S.contains(&ty) {
            return Some(PatternAtom::Literal(Literal::new(self.next_token())));
        }
        match ty {
            TokenType::Id
            | TokenType::Infix
            | TokenType::MethodSymbol
            | TokenType::EmptyBracketEnclosure => {
                Some(PatternAtom::Name(Name::new(self.next_token())))
            }
            TokenType::Hole => Some(PatternAtom::Hole(Hole::new(self.next_token()))),
            _ => None,
        }
    }

    fn parse_enclosed_pattern(&mut self) -> Parse<Pattern> {
        let Some((opener, closer_ty)) = self.parse_enclosed_opener() else {
            return self.fail(errors::EXPECTED_PATTERN);
        };
        let implicit = closer_ty == TokenType::RightBrace;
        let patterns = self.sep_sequenced(errors::EXPECTED_PATTERN, TokenType::Comma, |p| {
            p.maybe_parse_pattern(true)
        })?;
        self.drop_newlines();
        let Some(closer) = self.get_keyword(closer_ty) else {
            return match closer_ty {
                TokenType::RightBrace => self.fail(errors::EXPECTED_RIGHT_BRACE),
                _ => self.fail(errors::EXPECTED_RIGHT_PAREN),
            };
        };
        let mut enclosed = PatternEnclosed::new(patterns, implicit);
        enclosed.widen(&opener);
        enclosed.widen(&closer);
        Ok(Pattern::Enclosed(Box::new(enclosed)))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::source::testing::parse_ok;
    use yew_ast::ast::{BodyElement, Pattern, PatternAtom};

    fn only_def_pattern(text: &str) -> Pattern {
        let src = parse_ok(text);
        let body = src.body().get().expect("body").clone();
        match body.elements().head().expect("element") {
            BodyElement::Def(def) => def.pattern().clone(),
            other => panic!("expected def, got {other:?}"),
        }
    }

    #[test]
    fn juxtaposed_pattern_application() {
        let pattern = only_def_pattern("f x _ = x\n");
        let Pattern::App(app) = pattern else {
            panic!("expected application");
        };
        assert!(matches!(
            app.head(),
            Pattern::Atom(PatternAtom::Name(n)) if n.text() == "f"
        ));
        assert_eq!(app.args().len(), 2);
        assert!(matches!(app.args().last(), Pattern::Wildcard(_)));
    }

    #[test]
    fn enclosed_pattern_with_commas() {
        let pattern = only_def_pattern("f (Pair a, b) = a\n");
        let Pattern::App(app) = pattern else {
            panic!("expected application");
        };
        let Pattern::Enclosed(enclosed) = app.args().head() else {
            panic!("expected enclosure");
        };
        assert!(!enclosed.is_implicit());
        assert_eq!(enclosed.patterns().len(), 2);
    }

    #[test]
    fn implicit_pattern_uses_braces() {
        let pattern = only_def_pattern("f {n} x = x\n");
        let Pattern::App(app) = pattern else {
            panic!("expected application");
        };
        let Pattern::Enclosed(enclosed) = app.args().head() else {
            panic!("expected enclosure");
        };
        assert!(enclosed.is_implicit());
    }
}
