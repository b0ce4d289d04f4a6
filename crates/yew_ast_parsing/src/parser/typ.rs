//! Types. A type is a `forall`, or a juxtaposed term sequence optionally
//! continued by `->` or `=>`. Enclosures carry the dependent-typing forms:
//! `(x : t)`, `{x : t := default}`, and the modal `(erase x : t)`.

use crate::parser::{errors, Parse, Parser};
use yew_ast::ast::{
    AppType, ConstrainedType, EnclosedInner, EnclosedType, ForallType, FunctionType,
    ImplicitTyping, InnerTypeTerms, InnerTyping, Modality, Name, PatternAtom, Type, TypeAccess,
    UnitType, Wildcard,
};
use yew_ast::data::{List, Maybe};
use yew_tokens::{Positioned, TokenType};

impl Parser {
    pub(crate) fn parse_type(&mut self, enclosed: bool) -> Parse<Type> {
        match self.maybe_parse_type(enclosed)? {
            Some(typ) => Ok(typ),
            None => self.fail(errors::EXPECTED_TYPE),
        }
    }

    pub(crate) fn maybe_parse_type(&mut self, enclosed: bool) -> Parse<Option<Type>> {
        if self.current().ty == TokenType::Forall {
            return self.parse_forall_type().map(Some);
        }
        self.maybe_parse_type_tail(enclosed)
    }

    fn parse_forall_type(&mut self) -> Parse<Type> {
        let Some(forall_token) = self.get_keyword(TokenType::Forall) else {
            return self.fail(errors::EXPECTED_TYPE);
        };
        let mut binders = List::new();
        while let Some(binder) = self.parse_lower_ident() {
            binders = binders.snoc(binder);
        }
        let Some(binders) = binders.strengthen().into_inner() else {
            return self.fail(errors::EXPECTED_FORALL_BINDER);
        };
        self.drop_newlines();
        let Some(in_token) = self.get_keyword(TokenType::In) else {
            return self.fail(errors::EXPECTED_FORALL_IN);
        };
        let body = match self.maybe_parse_type_tail(false)? {
            Some(body) => body,
            None => return self.fail(errors::EXPECTED_TYPE),
        };
        let mut forall = ForallType::new(binders, body);
        forall.widen(&forall_token);
        forall.widen(&in_token);
        Ok(Type::Forall(Box::new(forall)))
    }

    /// A term sequence and the optional `->` / `=>` continuation.
    fn maybe_parse_type_tail(&mut self, enclosed: bool) -> Parse<Option<Type>> {
        let Some(head) = self.maybe_parse_type_term(enclosed)? else {
            return Ok(None);
        };
        let mut args: List<Type> = List::new();
        while let Some(arg) = self.maybe_parse_type_term(enclosed)? {
            args = args.snoc(arg);
        }
        let lhs = match args.strengthen().into_inner() {
            Some(args) => Type::App(Box::new(AppType::new(head, args))),
            None => head,
        };
        self.drop_newlines();
        if self.get_keyword(TokenType::Arrow).is_some() {
            let rhs = self.parse_type(enclosed)?;
            return Ok(Some(Type::Function(Box::new(FunctionType::new(lhs, rhs)))));
        }
        if self.get_keyword(TokenType::ThickArrow).is_some() {
            let rhs = self.parse_type(enclosed)?;
            return Ok(Some(Type::Constrained(Box::new(ConstrainedType::new(
                lhs, rhs,
            )))));
        }
        Ok(Some(lhs))
    }

    fn maybe_parse_type_term(&mut self, enclosed: bool) -> Parse<Option<Type>> {
        let mut term = match self.current().ty {
            TokenType::Backslash => Type::Lambda(Box::new(self.parse_lambda()?)),
            TokenType::Underscore => Type::Wildcard(Wildcard::new(self.next_token())),
            TokenType::Equal if enclosed => Type::Name(Name::new(self.next_token())),
            TokenType::EmptyParenEnclosure => Type::Unit(UnitType::new(self.next_token())),
            TokenType::LeftParen | TokenType::LeftBrace => self.parse_enclosed_type()?,
            _ => match self.maybe_parse_pattern_atom() {
                Some(PatternAtom::Literal(l)) => Type::Literal(l),
                Some(PatternAtom::Name(n)) => Type::Name(n),
                Some(PatternAtom::Hole(h)) => Type::Hole(h),
                None => return Ok(None),
            },
        };
        while self.current().ty == TokenType::Dot {
            let name = self.parse_access_name()?;
            term = Type::Access(Box::new(TypeAccess::new(term, name)));
        }
        Ok(Some(term))
    }

    fn parse_enclosed_type(&mut self) -> Parse<Type> {
        let Some((opener, closer_ty)) = self.parse_enclosed_opener() else {
            return self.fail(errors::EXPECTED_TYPE);
        };
        let implicit = closer_ty == TokenType::RightBrace;
        let modality = match self
            .get_keyword(TokenType::Erase)
            .or_else(|| self.get_keyword(TokenType::Once))
        {
            Some(token) => Maybe::just(Modality::new(token)),
            None => Maybe::nothing(self.here()),
        };
        let terms = self.sep_sequenced(errors::EXPECTED_TYPE, TokenType::Comma, |p| {
            p.maybe_parse_type(true)
        })?;
        if modality.is_just() && !(terms.len() == 1 && matches!(terms.head(), Type::Name(_))) {
            return self.fail_over(errors::EXPECTED_MODAL_ID, terms.get_pos());
        }
        let terms = InnerTypeTerms::new(terms);
        let inner = match self.get_keyword(TokenType::Colon) {
            Some(_) => {
                let annotation = self.parse_type(true)?;
                let typing = InnerTyping::new(modality, terms, annotation);
                match self.get_keyword(TokenType::ColonEqual) {
                    Some(colon_equal) if implicit => {
                        let expr = self.parse_expr(true)?;
                        let mut default_expr = Maybe::just(expr);
                        default_expr.widen(&colon_equal);
                        EnclosedInner::Implicit(ImplicitTyping::new(typing, default_expr))
                    }
                    _ => EnclosedInner::Typing(typing),
                }
            }
            None if modality.is_just() => return self.fail(errors::EXPECTED_TYPE_SIG),
            None => EnclosedInner::Terms(terms),
        };
        self.drop_newlines();
        let Some(closer) = self.get_keyword(closer_ty) else {
            return match closer_ty {
                TokenType::RightBrace => self.fail(errors::EXPECTED_RIGHT_BRACE),
                _ => self.fail(errors::EXPECTED_RIGHT_PAREN),
            };
        };
        if let EnclosedInner::Terms(terms) = &inner {
            if terms.terms().len() == 1 {
                if let Type::Enclosed(nested) = terms.terms().head() {
                    let pos = nested.get_pos();
                    return self.fail_over(errors::ILLEGAL_MULTIPLE_ENCLOSURE, pos);
                }
            }
        }
        let mut enclosed_type = EnclosedType::new(implicit, inner);
        enclosed_type.widen(&opener);
        enclosed_type.widen(&closer);
        Ok(Type::Enclosed(Box::new(enclosed_type)))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::source::testing::{first_error, parse_ok};
    use yew_ast::ast::{BodyElement, EnclosedInner, Type};

    fn only_typing_type(text: &str) -> Type {
        let src = parse_ok(text);
        let body = src.body().get().expect("body").clone();
        match body.elements().head().expect("element") {
            BodyElement::Typing(typing) => typing.typ().clone(),
            other => panic!("expected typing, got {other:?}"),
        }
    }

    #[test]
    fn arrows_nest_to_the_right() {
        let typ = only_typing_type("x : a -> b -> c\n");
        let Type::Function(outer) = typ else {
            panic!("expected function type");
        };
        assert!(matches!(outer.lhs(), Type::Name(_)));
        assert!(matches!(outer.rhs(), Type::Function(_)));
    }

    #[test]
    fn juxtaposed_type_application() {
        let typ = only_typing_type("x : List a\n");
        let Type::App(app) = typ else {
            panic!("expected type application");
        };
        assert!(matches!(app.head(), Type::Name(n) if n.text() == "List"));
        assert_eq!(app.args().len(), 1);
    }

    #[test]
    fn dependent_function_binds_its_argument() {
        let typ = only_typing_type("x : (n : N) -> Vect n\n");
        let Type::Function(arrow) = typ else {
            panic!("expected function type");
        };
        let Type::Enclosed(enclosed) = arrow.lhs() else {
            panic!("expected enclosed lhs");
        };
        let EnclosedInner::Typing(typing) = enclosed.inner() else {
            panic!("expected inner typing");
        };
        assert!(typing.modality().is_nothing());
        assert_eq!(typing.terms().terms().len(), 1);
    }

    #[test]
    fn forall_collects_binders() {
        let typ = only_typing_type("x : forall a b in a -> b\n");
        let Type::Forall(forall) = typ else {
            panic!("expected forall");
        };
        assert_eq!(forall.binders().len(), 2);
        assert!(matches!(forall.body(), Type::Function(_)));
    }

    #[test]
    fn implicit_typing_with_default() {
        let typ = only_typing_type("x : {n : N := 1} -> Vect n\n");
        let Type::Function(arrow) = typ else {
            panic!("expected function type");
        };
        let Type::Enclosed(enclosed) = arrow.lhs() else {
            panic!("expected enclosed lhs");
        };
        assert!(enclosed.is_implicit());
        let EnclosedInner::Implicit(implicit) = enclosed.inner() else {
            panic!("expected implicit typing");
        };
        assert!(implicit.default_expr().is_just());
    }

    #[test]
    fn modal_binder_requires_a_single_name() {
        let typ = only_typing_type("x : (erase n : N) -> b\n");
        let Type::Function(arrow) = typ else {
            panic!("expected function type");
        };
        let Type::Enclosed(enclosed) = arrow.lhs() else {
            panic!("expected enclosed lhs");
        };
        let EnclosedInner::Typing(typing) = enclosed.inner() else {
            panic!("expected inner typing");
        };
        assert!(typing.modality().is_just());

        let msg = first_error("x : (erase a b : N) -> b\n");
        assert_eq!(msg, super::super::errors::EXPECTED_MODAL_ID);
    }

    #[test]
    fn constraint_arrow_wraps_the_rhs() {
        let typ = only_typing_type("x : Eq a => a\n");
        assert!(matches!(typ, Type::Constrained(_)));
    }

    #[test]
    fn doubly_enclosed_terms_are_rejected() {
        let msg = first_error("x : ((a b))\n");
        assert_eq!(msg, super::super::errors::ILLEGAL_MULTIPLE_ENCLOSURE);
    }

    #[test]
    fn parenthesised_infix_name_is_a_single_enclosure() {
        // `(a)` is one infix-name token, so only one enclosure is open
        let typ = only_typing_type("x : ((a))\n");
        let Type::Enclosed(enclosed) = typ else {
            panic!("expected enclosed type");
        };
        let EnclosedInner::Terms(terms) = enclosed.inner() else {
            panic!("expected terms");
        };
        let Type::Name(name) = terms.terms().head() else {
            panic!("expected name");
        };
        assert_eq!(name.text(), "(a)");
    }

    #[test]
    fn unit_and_access_terms() {
        let typ = only_typing_type("x : () -> m.T\n");
        let Type::Function(arrow) = typ else {
            panic!("expected function type");
        };
        assert!(matches!(arrow.lhs(), Type::Unit(_)));
        assert!(matches!(arrow.rhs(), Type::Access(_)));
    }
}
