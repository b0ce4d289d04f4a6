//! Annotation blocks: whole-line `--@…` annotations and bracketed
//! `[@name …]` annotations with balanced raw argument tokens.

use crate::parser::{errors, Parse, Parser};
use yew_ast::ast::{Annotation, Annotations, EnclosedAnnotation, FlatAnnotation};
use yew_ast::data::{List, Maybe};
use yew_tokens::Token;
use yew_tokens::TokenType;

impl Parser {
    /// Zero or more annotations, newline-separated.
    pub(crate) fn parse_annotations(&mut self) -> Parse<Maybe<Annotations>> {
        let mut list: List<Annotation> = List::new();
        loop {
            match self.current().ty {
                TokenType::FlatAnnotation => {
                    let token = self.next_token();
                    list = list.snoc(Annotation::Flat(FlatAnnotation::new(token)));
                    self.drop_newlines();
                }
                TokenType::LeftBracketAt => {
                    let enclosed = self.parse_enclosed_annotation()?;
                    list = list.snoc(Annotation::Enclosed(enclosed));
                    self.drop_newlines();
                }
                _ => break,
            }
        }
        if list.is_empty() {
            return Ok(Maybe::nothing(self.here()));
        }
        Ok(list.strengthen().map(Annotations::new))
    }

    fn parse_enclosed_annotation(&mut self) -> Parse<EnclosedAnnotation> {
        let opener = self.next_token();
        self.drop_newlines();
        let Some(id) = self.parse_ident() else {
            return self.fail(errors::EXPECTED_ID);
        };
        let mut arguments: List<Token> = List::new();
        let mut depth = 1usize;
        // arguments are kept raw; only bracket nesting is tracked
        let closer = loop {
            match self.current().ty {
                TokenType::EndOfTokens => return self.fail(errors::UNEXPECTED_EOF),
                TokenType::Newline => self.advance(),
                TokenType::LeftBracket | TokenType::LeftBracketAt => {
                    depth += 1;
                    arguments = arguments.snoc(self.next_token());
                }
                TokenType::RightBracket => {
                    depth -= 1;
                    if depth == 0 {
                        break self.next_token();
                    }
                    arguments = arguments.snoc(self.next_token());
                }
                _ => arguments = arguments.snoc(self.next_token()),
            }
        };
        let mut annotation = EnclosedAnnotation::new(id, arguments);
        annotation.widen(&opener);
        annotation.widen(&closer);
        Ok(annotation)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::source::testing::parse_ok;
    use yew_ast::ast::{Annotation, BodyElement};

    #[test]
    fn flat_annotation_attaches_to_following_typing() {
        let src = parse_ok("--@inline\nx : x\n");
        let body = src.body().get().expect("body");
        assert_eq!(body.elements().len(), 1);
        assert!(matches!(body.elements().head(), Some(BodyElement::Typing(_))));
    }

    #[test]
    fn enclosed_annotation_collects_balanced_arguments() {
        let src = parse_ok("[@derive [nested] args]\nx : x\n");
        assert!(src.body().is_just());
    }

    #[test]
    fn trailing_annotations_become_the_footer() {
        let src = parse_ok("x : x\n--@footnote\n");
        let footer = src.footer().get().expect("footer");
        assert_eq!(footer.annotations().len(), 1);
        assert!(matches!(*footer.annotations().head(), Annotation::Flat(_)));
    }
}
