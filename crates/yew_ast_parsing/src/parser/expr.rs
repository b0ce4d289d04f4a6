//! Expressions. A term is an atom, a lambda, a `let`, a `case`, or a
//! parenthesised expression; juxtaposed terms form an application and `.`
//! after any term forms a member access.

use crate::parser::{errors, Parse, Parser, TYPING_L2};
use yew_ast::ast::{
    Access, CaseArm, CaseExpr, Expr, ExprApp, LambdaAbstraction, LambdaBinder, LambdaBinders,
    LetBinding, LetBindingMember, LetExpr, Name, Pattern, PatternAtom, Wildcard,
};
use yew_ast::data::{List, Maybe};
use yew_tokens::TokenType;

impl Parser {
    pub(crate) fn parse_expr(&mut self, enclosed: bool) -> Parse<Expr> {
        match self.maybe_parse_expr(enclosed)? {
            Some(expr) => Ok(expr),
            None => self.fail(errors::EXPECTED_EXPR),
        }
    }

    pub(crate) fn maybe_parse_expr(&mut self, enclosed: bool) -> Parse<Option<Expr>> {
        let Some(head) = self.maybe_parse_expr_term(enclosed)? else {
            return Ok(None);
        };
        let mut args: List<Expr> = List::new();
        while let Some(arg) = self.maybe_parse_expr_term(enclosed)? {
            args = args.snoc(arg);
        }
        let expr = match args.strengthen().into_inner() {
            Some(args) => Expr::App(Box::new(ExprApp::new(head, args))),
            None => head,
        };
        Ok(Some(expr))
    }

    fn maybe_parse_expr_term(&mut self, enclosed: bool) -> Parse<Option<Expr>> {
        let mut term = match self.current().ty {
            TokenType::Backslash => Expr::Lambda(Box::new(self.parse_lambda()?)),
            TokenType::Let => self.parse_let_expr()?,
            TokenType::Case => self.parse_case_expr()?,
            TokenType::LeftParen => self.parse_paren_expr()?,
            TokenType::Equal if enclosed => {
                Expr::Atom(PatternAtom::Name(Name::new(self.next_token())))
            }
            _ => match self.maybe_parse_pattern_atom() {
                Some(atom) => Expr::Atom(atom),
                None => return Ok(None),
            },
        };
        while self.current().ty == TokenType::Dot {
            let name = self.parse_access_name()?;
            term = Expr::Access(Box::new(Access::new(term, name)));
        }
        Ok(Some(term))
    }

    /// `\ binders => body`; also reused for type-level lambdas.
    pub(crate) fn parse_lambda(&mut self) -> Parse<LambdaAbstraction> {
        let Some(backslash) = self.get_keyword(TokenType::Backslash) else {
            return self.fail(errors::EXPECTED_LAMBDA_ABSTRACTION);
        };
        let binders = self.sep_sequenced(
            errors::EXPECTED_LAMBDA_ABSTRACTION,
            TokenType::Comma,
            |p| p.maybe_parse_lambda_binder(),
        )?;
        self.drop_newlines();
        if self.get_keyword(TokenType::ThickArrow).is_none() {
            return self.fail(errors::EXPECTED_LAMBDA_THICK_ARROW);
        }
        let body = self.parse_expr(false)?;
        let mut lambda = LambdaAbstraction::new(LambdaBinders::new(binders), body);
        lambda.widen(&backslash);
        Ok(lambda)
    }

    fn maybe_parse_lambda_binder(&mut self) -> Parse<Option<LambdaBinder>> {
        match self.current().ty {
            TokenType::Underscore => {
                let token = self.next_token();
                Ok(Some(LambdaBinder::Wildcard(Wildcard::new(token))))
            }
            TokenType::LeftParen | TokenType::LeftBrace => {
                let pattern = self.parse_pattern(false)?;
                Ok(Some(LambdaBinder::Enclosed(pattern)))
            }
            _ => Ok(self.parse_ident().map(LambdaBinder::Ident)),
        }
    }

    fn parse_let_expr(&mut self) -> Parse<Expr> {
        let Some(let_token) = self.get_keyword(TokenType::Let) else {
            return self.fail(errors::EXPECTED_LET_EXPR);
        };
        let members = self.parse_group(errors::EXPECTED_BINDING_TERM, |p| {
            p.maybe_parse_let_binding_member()
        })?;
        let mut binding = LetBinding::new(members);
        binding.widen(&let_token);
        self.drop_newlines();
        let Some(in_token) = self.get_keyword(TokenType::In) else {
            return self.fail(errors::EXPECTED_IN);
        };
        let body = self.parse_expr(false)?;
        let mut let_expr = LetExpr::new(binding, body);
        let_expr.widen(&let_token);
        let_expr.widen(&in_token);
        Ok(Expr::Let(Box::new(let_expr)))
    }

    fn maybe_parse_let_binding_member(&mut self) -> Parse<Option<LetBindingMember>> {
        if self.lookahead2(TYPING_L2) {
            let typing = self.parse_type_sig()?;
            self.drop_newlines();
            let bound = match self.get_keyword(TokenType::ColonEqual) {
                Some(colon_equal) => {
                    let expr = self.parse_expr(false)?;
                    let mut bound = Maybe::just(expr);
                    bound.widen(&colon_equal);
                    bound
                }
                None => Maybe::nothing(self.here()),
            };
            return Ok(Some(LetBindingMember::typed(typing, bound)));
        }
        let binder = match self.current().ty {
            TokenType::LeftParen => self.parse_pattern(false)?,
            _ => match self.maybe_parse_name() {
                Some(name) => Pattern::Atom(PatternAtom::Name(name)),
                None => return Ok(None),
            },
        };
        self.drop_newlines();
        if self.get_keyword(TokenType::ColonEqual).is_none() {
            return self.fail(errors::EXPECTED_COLON_EQUAL);
        }
        let Some(expr) = self.maybe_parse_expr(false)? else {
            return self.fail(errors::EXPECTED_BOUND_EXPR);
        };
        Ok(Some(LetBindingMember::bound(binder, expr)))
    }

    fn parse_case_expr(&mut self) -> Parse<Expr> {
        let Some(case_token) = self.get_keyword(TokenType::Case) else {
            return self.fail(errors::EXPECTED_EXPR);
        };
        let scrutinee = self.parse_pattern(false)?;
        self.drop_newlines();
        if self.get_keyword(TokenType::Of).is_none() {
            return self.fail(errors::EXPECTED_OF);
        }
        let arms = self.parse_group(errors::EXPECTED_CASE_ARM, |p| p.maybe_parse_case_arm())?;
        let mut case = CaseExpr::new(scrutinee, arms);
        case.widen(&case_token);
        Ok(Expr::Case(Box::new(case)))
    }

    fn maybe_parse_case_arm(&mut self) -> Parse<Option<CaseArm>> {
        let Some(pattern) = self.maybe_parse_pattern(false)? else {
            return Ok(None);
        };
        self.drop_newlines();
        if self.get_keyword(TokenType::ThickArrow).is_none() {
            return self.fail(errors::EXPECTED_CASE_ARM_THICK_ARROW);
        }
        let body = self.parse_expr(false)?;
        Ok(Some(CaseArm::new(pattern, body)))
    }

    fn parse_paren_expr(&mut self) -> Parse<Expr> {
        let Some(_lparen) = self.get_keyword(TokenType::LeftParen) else {
            return self.fail(errors::EXPECTED_EXPR);
        };
        let expr = self.parse_expr(true)?;
        self.drop_newlines();
        if self.get_keyword(TokenType::RightParen).is_none() {
            return self.fail(errors::EXPECTED_RIGHT_PAREN);
        }
        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::source::testing::parse_ok;
    use yew_ast::ast::{
        BodyElement, DefBinding, DefBody, Expr, LambdaBinder, LetBindingMember, PatternAtom,
    };

    fn only_def_expr(text: &str) -> Expr {
        let src = parse_ok(text);
        let body = src.body().get().expect("body").clone();
        match body.elements().head().expect("element") {
            BodyElement::Def(def) => match def.body() {
                DefBody::Rhs {
                    binding: DefBinding::Expr(expr),
                    ..
                } => expr.clone(),
                other => panic!("expected expression body, got {other:?}"),
            },
            other => panic!("expected def, got {other:?}"),
        }
    }

    #[test]
    fn juxtaposed_application() {
        let expr = only_def_expr("f = g x 1\n");
        let Expr::App(app) = expr else {
            panic!("expected application");
        };
        assert!(matches!(
            app.head(),
            Expr::Atom(PatternAtom::Name(n)) if n.text() == "g"
        ));
        assert_eq!(app.args().len(), 2);
    }

    #[test]
    fn lambda_with_mixed_binders() {
        let expr = only_def_expr("f = \\x, _, (Pair a, b) => x\n");
        let Expr::Lambda(lambda) = expr else {
            panic!("expected lambda");
        };
        let binders = lambda.binders().binders();
        assert_eq!(binders.len(), 3);
        assert!(matches!(binders.head(), LambdaBinder::Ident(_)));
        assert!(matches!(binders.last(), LambdaBinder::Enclosed(_)));
    }

    #[test]
    fn let_with_bound_and_typed_members() {
        let expr = only_def_expr("f = let (x := 1\ny : N := 2) in x\n");
        let Expr::Let(let_expr) = expr else {
            panic!("expected let");
        };
        let members = let_expr.binding().members();
        assert_eq!(members.len(), 2);
        assert!(matches!(members.head(), LetBindingMember::Bound { .. }));
        match members.last() {
            LetBindingMember::Typed { typing, bound, .. } => {
                assert_eq!(typing.name().text(), "y");
                assert!(bound.is_just());
            }
            other => panic!("expected typed member, got {other:?}"),
        }
    }

    #[test]
    fn case_with_grouped_arms() {
        let expr = only_def_expr("f = case x of (Zero => a\nSucc n => b)\n");
        let Expr::Case(case) = expr else {
            panic!("expected case");
        };
        assert_eq!(case.arms().len(), 2);
    }

    #[test]
    fn postfix_access_chains() {
        let expr = only_def_expr("f = x.fst.snd\n");
        let Expr::Access(outer) = expr else {
            panic!("expected access");
        };
        assert_eq!(outer.name().text(), "snd");
        let Expr::Access(inner) = outer.lhs() else {
            panic!("expected nested access");
        };
        assert_eq!(inner.name().text(), "fst");
    }

    #[test]
    fn infix_enclosure_heads_an_application() {
        let expr = only_def_expr("f = (+) a b\n");
        let Expr::App(app) = expr else {
            panic!("expected application");
        };
        assert!(matches!(
            app.head(),
            Expr::Atom(PatternAtom::Name(n)) if n.text() == "(+)"
        ));
    }

    #[test]
    fn enclosed_equal_acts_as_a_name() {
        let expr = only_def_expr("f = ( = ) a b\n");
        let Expr::App(app) = expr else {
            panic!("expected application");
        };
        assert!(matches!(
            app.head(),
            Expr::Atom(PatternAtom::Name(n)) if n.text() == "="
        ));
    }
}
