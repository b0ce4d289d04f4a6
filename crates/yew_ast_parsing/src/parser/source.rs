//! The source root: header, body, and the footer annotations.

use crate::parser::{errors, Parse, Parser};
use yew_ast::ast::YewSource;
use yew_ast::data::Maybe;
use yew_tokens::TokenType;

impl Parser {
    pub(crate) fn parse_yew_source(&mut self) -> Parse<YewSource> {
        self.drop_newlines();
        let header = self.parse_header()?;
        let body = if header.is_nothing() || self.then() {
            self.parse_body()?
        } else {
            Maybe::nothing(self.here())
        };
        self.drop_newlines();
        let footer = self.parse_annotations()?;
        self.assert_eof()?;
        Ok(YewSource::new(header, body, footer))
    }

    fn assert_eof(&mut self) -> Parse<()> {
        self.drop_newlines();
        if self.current().ty == TokenType::EndOfTokens {
            return Ok(());
        }
        self.fail(errors::EXPECTED_END_OF_FILE)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use yew_ast::ast::YewSource;

    pub(crate) fn parser_for(text: &str) -> Parser {
        Parser::new(Lexer::from_text("/test.yew", text))
    }

    pub(crate) fn parse_ok(text: &str) -> YewSource {
        let mut parser = parser_for(text);
        let ok = parser.parse();
        assert!(ok, "unexpected diagnostics: {:?}", parser.errors());
        parser.take_ast().expect("ast")
    }

    pub(crate) fn first_error(text: &str) -> String {
        let mut parser = parser_for(text);
        assert!(!parser.parse(), "expected a failing parse");
        parser
            .errors()
            .first()
            .expect("diagnostic")
            .msg()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{first_error, parse_ok, parser_for};
    use crate::parser::{errors, ReplStatement};
    use yew_ast::ast::{BodyElement, DefBinding, DefBody, Expr};
    use yew_tokens::scoped_repl_mode;

    #[test_log::test]
    fn empty_source_parses_to_nothing_everywhere() {
        let src = parse_ok("");
        assert!(src.header().is_nothing());
        assert!(src.body().is_nothing());
        assert!(src.footer().is_nothing());
    }

    #[test_log::test]
    fn full_source_with_all_three_sections() {
        let src = parse_ok("module m\nimport \"a/b\"\n\nx : T\nx = y\n--@end\n");
        assert!(src.header().is_just());
        assert_eq!(src.body().get().expect("body").elements().len(), 2);
        assert!(src.footer().is_just());
    }

    #[test_log::test]
    fn header_without_body_needs_a_line_break_before_elements() {
        let src = parse_ok("import \"a/b\"\n");
        assert!(src.header().is_just());
        assert!(src.body().is_nothing());
    }

    #[test_log::test]
    fn trailing_garbage_is_reported() {
        let msg = first_error("x : x\n)\n");
        assert_eq!(msg, errors::EXPECTED_END_OF_FILE);
    }

    #[test_log::test]
    fn line_break_placement_does_not_change_the_shape() {
        for text in [
            "f = let x := 1 in x\n",
            "f = let x := 1\nin x\n",
            "f = let (x := 1) in x\n",
        ] {
            let src = parse_ok(text);
            let body = src.body().get().expect("body");
            let BodyElement::Def(def) = body.elements().head().expect("element") else {
                panic!("expected def in {text:?}");
            };
            let DefBody::Rhs {
                binding: DefBinding::Expr(Expr::Let(let_expr)),
                ..
            } = def.body()
            else {
                panic!("expected let body in {text:?}");
            };
            assert_eq!(let_expr.binding().members().len(), 1);
        }
    }

    #[test_log::test]
    fn parsing_is_deterministic() {
        let text = "module m\nN : Type where (Zero : N\nSucc : N -> N)\nf x = case x of (Zero => x\n_ => x)\n";
        let first = parse_ok(text);
        let second = parse_ok(text);
        assert_eq!(first, second);
    }

    #[test_log::test]
    fn failed_speculation_leaves_no_trace() {
        let mut parser = parser_for("x : x\n");
        let outcome: Option<()> = parser.optionally(|p| p.fail(errors::UNEXPECTED_TOKEN));
        assert!(outcome.is_none());
        assert!(parser.errors().is_empty());
        assert!(parser.parse());
    }

    #[test_log::test]
    fn repl_submissions_classify_into_statements() {
        {
            let _repl = scoped_repl_mode(true);
            let mut parser = parser_for(":type plus 1\n");
            assert!(parser.repl_parse());
            match parser.statement() {
                Some(ReplStatement::Command(command)) => {
                    assert_eq!(command.command.value, ":type");
                    assert_eq!(command.args.len(), 2);
                }
                other => panic!("expected command, got {other:?}"),
            }
        }

        let mut parser = parser_for("x : T\n");
        assert!(parser.repl_parse());
        assert!(matches!(
            parser.statement(),
            Some(ReplStatement::Element(BodyElement::Typing(_)))
        ));

        let mut parser = parser_for("plus 1 2\n");
        assert!(parser.repl_parse());
        assert!(matches!(parser.statement(), Some(ReplStatement::Expr(_))));
    }
}
