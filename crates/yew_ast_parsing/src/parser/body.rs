//! Body elements: typings, definitions, data type definitions, aliases,
//! syntax rules, and the visibility rules that govern them.

use crate::matching;
use crate::parser::{
    errors, Parse, Parser, DROP_BEFORE, DROP_BEFORE_AND_AFTER, DROP_NONE, TYPING_L2,
};
use yew_ast::ast::{
    Annotate, Body, BodyElement, Def, DefBinding, DefBody, Deriving, Name, Syntax, SyntaxRule,
    SyntaxSymbol, TypeAlias, TypeConstructor, TypeDef, TypeDefBody, Typing, Visibility,
    WhereClause, WithClause, WithClauseArm,
};
use yew_ast::data::{List, Maybe, NonEmpty};
use yew_tokens::{Positioned, Token, TokenType};

impl Parser {
    /// The body section: newline-separated elements. Trailing annotations
    /// are left unconsumed so the caller can take them as the footer.
    pub(crate) fn parse_body(&mut self) -> Parse<Maybe<Body>> {
        self.drop_newlines();
        let mut elements: List<BodyElement> = List::new();
        loop {
            let origin = self.cursor;
            let annotations = self.parse_annotations()?;
            if self.current().ty == TokenType::EndOfTokens {
                self.cursor = origin;
                break;
            }
            let Some(mut element) = self.maybe_parse_body_element()? else {
                self.cursor = origin;
                break;
            };
            element.annotate(annotations);
            elements = elements.snoc(element);
            if !self.then() {
                break;
            }
        }
        if elements.is_empty() {
            return Ok(Maybe::nothing(self.here()));
        }
        Ok(Maybe::just(Body::new(elements)))
    }

    pub(crate) fn parse_body_element(&mut self) -> Parse<BodyElement> {
        match self.maybe_parse_body_element()? {
            Some(element) => Ok(element),
            None => self.fail(errors::EXPECTED_BODY_ELEMENT),
        }
    }

    fn maybe_parse_body_element(&mut self) -> Parse<Option<BodyElement>> {
        let visibility = self.parse_optional_visibility();
        let ty = self.current().ty;
        let element = match ty {
            TokenType::Alias => Some(BodyElement::TypeAlias(self.parse_type_alias()?)),
            TokenType::Syntax => Some(BodyElement::Syntax(self.parse_syntax()?)),
            TokenType::Spec => Some(BodyElement::SpecDef(self.parse_spec_def()?)),
            TokenType::Inst => Some(BodyElement::SpecInst(self.parse_spec_inst()?)),
            TokenType::Auto => Some(BodyElement::Typing(self.parse_auto_typing()?)),
            _ if self.lookahead2(TYPING_L2) => Some(self.parse_type_def_or_typing()?),
            _ => self.maybe_parse_def()?.map(BodyElement::Def),
        };
        let Some(mut element) = element else {
            if visibility.is_just() {
                return self.fail(errors::ILLEGAL_VISIBILITY_TARGET);
            }
            return Ok(None);
        };
        self.attach_visibility(&mut element, visibility)?;
        Ok(Some(element))
    }

    fn parse_optional_visibility(&mut self) -> Maybe<Visibility> {
        match self
            .get_keyword(TokenType::Public)
            .or_else(|| self.get_keyword(TokenType::Open))
        {
            Some(token) => Maybe::just(Visibility::new(token)),
            None => Maybe::nothing(self.here()),
        }
    }

    /// `open` may only target data type definitions; `public` everything
    /// but bare definitions.
    fn attach_visibility(
        &mut self,
        element: &mut BodyElement,
        visibility: Maybe<Visibility>,
    ) -> Parse<()> {
        let Some(modifier) = visibility.get() else {
            return Ok(());
        };
        let open = modifier.is_open();
        let pos = modifier.get_pos();
        match element {
            BodyElement::Def(_) => return self.fail_over(errors::ILLEGAL_VISIBLE_DEF, pos),
            BodyElement::Typing(typing) => {
                if open {
                    return self.fail_over(errors::ILLEGAL_OPEN_MODIFIER_TYPING, pos);
                }
                typing.set_visibility(visibility);
            }
            BodyElement::TypeDef(type_def) => type_def.set_visibility(visibility),
            BodyElement::TypeAlias(alias) => {
                if open {
                    return self.fail_over(errors::ILLEGAL_OPEN_MODIFIER, pos);
                }
                alias.set_visibility(visibility);
            }
            BodyElement::SpecDef(spec) => {
                if open {
                    return self.fail_over(errors::ILLEGAL_OPEN_MODIFIER, pos);
                }
                spec.set_visibility(visibility);
            }
            BodyElement::SpecInst(inst) => {
                if open {
                    return self.fail_over(errors::ILLEGAL_OPEN_MODIFIER, pos);
                }
                inst.set_visibility(visibility);
            }
            BodyElement::Syntax(syntax) => {
                if open {
                    return self.fail_over(errors::ILLEGAL_OPEN_MODIFIER, pos);
                }
                syntax.set_visibility(visibility);
            }
        }
        Ok(())
    }

    /// `name : type`, shared by typings, let members, and spec members.
    pub(crate) fn parse_type_sig(&mut self) -> Parse<Typing> {
        let Some(name) = self.maybe_parse_name() else {
            return self.fail(errors::EXPECTED_TYPING);
        };
        if self
            .take_keyword(TokenType::Colon, DROP_BEFORE_AND_AFTER)
            .is_none()
        {
            let pos = name.get_pos();
            return self.fail_over(errors::EXPECTED_TYPE_JUDGMENT, pos);
        }
        let typ = self.parse_type(false)?;
        Ok(Typing::new(name, typ))
    }

    fn parse_auto_typing(&mut self) -> Parse<Typing> {
        let Some(auto_token) = self.get_keyword(TokenType::Auto) else {
            return self.fail(errors::EXPECTED_TYPING);
        };
        let mut typing = self.parse_type_sig()?;
        typing.set_automatic(&auto_token);
        Ok(typing)
    }

    /// A typing, promoted to a data type definition when `where` follows.
    fn parse_type_def_or_typing(&mut self) -> Parse<BodyElement> {
        let typing = self.parse_type_sig()?;
        let Some(where_token) = self.take_keyword(TokenType::Where, DROP_BEFORE_AND_AFTER) else {
            return Ok(BodyElement::Typing(typing));
        };
        let body = self.parse_type_def_body()?;
        let deriving = self.parse_optional_deriving()?;
        let mut type_def = TypeDef::new(typing, body, deriving);
        type_def.widen(&where_token);
        Ok(BodyElement::TypeDef(type_def))
    }

    fn parse_type_def_body(&mut self) -> Parse<TypeDefBody> {
        if let Some(token) = self.take_keyword(TokenType::Impossible, DROP_NONE) {
            return Ok(TypeDefBody::Impossible(token));
        }
        if let Some(lp) = self.get_keyword(TokenType::LeftParen) {
            let first = self.parse_type_constructor()?;
            let (mut constructors, _) = self.one_or_more(first, true, |p| {
                Ok(p.optionally(|q| q.parse_type_constructor()))
            })?;
            constructors.widen(&lp);
            let Some(rp) = self.get_keyword(TokenType::RightParen) else {
                return self.fail(errors::EXPECTED_RIGHT_PAREN);
            };
            constructors.widen(&rp);
            return Ok(TypeDefBody::Constructors(constructors));
        }
        let first = self.parse_type_constructor()?;
        let mut constructors = NonEmpty::singleton(first);
        loop {
            let origin = self.cursor;
            if !self.then() {
                break;
            }
            match self.optionally(|p| p.parse_type_constructor()) {
                Some(constructor) => constructors = constructors.snoc(constructor),
                None => {
                    self.cursor = origin;
                    break;
                }
            }
        }
        Ok(TypeDefBody::Constructors(constructors))
    }

    fn parse_type_constructor(&mut self) -> Parse<TypeConstructor> {
        let names = self.sep_sequenced_handled(
            constructor_name_error,
            TokenType::Comma,
            |p| Ok(p.maybe_parse_constructor_name()),
        )?;
        if self
            .take_keyword(TokenType::Colon, DROP_BEFORE_AND_AFTER)
            .is_none()
        {
            return self.fail(errors::EXPECTED_TYPE_JUDGMENT);
        }
        let typ = self.parse_type(false)?;
        Ok(TypeConstructor::new(names, typ))
    }

    fn maybe_parse_constructor_name(&mut self) -> Option<Name> {
        match self.current().ty {
            TokenType::Id if matching::is_pascal_case(&self.current().value) => {
                Some(Name::new(self.next_token()))
            }
            TokenType::Infix => Some(Name::new(self.next_token())),
            _ => None,
        }
    }

    fn parse_optional_deriving(&mut self) -> Parse<Maybe<Deriving>> {
        let origin = self.cursor;
        self.drop_newlines();
        let Some(deriving_token) = self.get_keyword(TokenType::Deriving) else {
            self.cursor = origin;
            return Ok(Maybe::nothing(self.here()));
        };
        let lparen = self.get_keyword(TokenType::LeftParen);
        let mut constrainers =
            self.sep_sequenced(errors::EXPECTED_DERIVING_BODY, TokenType::Comma, |p| {
                p.maybe_parse_constrainer()
            })?;
        if let Some(lp) = lparen {
            constrainers.widen(&lp);
            self.drop_newlines();
            let Some(rp) = self.get_keyword(TokenType::RightParen) else {
                return self.fail(errors::EXPECTED_RIGHT_PAREN);
            };
            constrainers.widen(&rp);
        }
        let mut deriving = Deriving::new(constrainers);
        deriving.widen(&deriving_token);
        Ok(Maybe::just(deriving))
    }

    pub(crate) fn maybe_parse_def(&mut self) -> Parse<Option<Def>> {
        let Some(pattern) = self.optionally(|p| p.parse_pattern(false)) else {
            return Ok(None);
        };
        self.drop_newlines();
        let body = self.parse_def_body(errors::EXPECTED_DEF)?;
        Ok(Some(Def::new(pattern, body)))
    }

    fn parse_def_body(&mut self, missing_msg: &str) -> Parse<DefBody> {
        if let Some(token) = self.take_keyword(TokenType::Impossible, DROP_NONE) {
            return Ok(DefBody::Impossible(token));
        }
        let binding = if self.get_keyword(TokenType::Equal).is_some() {
            DefBinding::Expr(self.parse_expr(false)?)
        } else if self.current().ty == TokenType::With {
            DefBinding::With(self.parse_with_clause()?)
        } else {
            return self.fail(missing_msg);
        };
        let where_clause = self.parse_optional_where_clause()?;
        Ok(DefBody::rhs(binding, where_clause))
    }

    fn parse_optional_where_clause(&mut self) -> Parse<Maybe<WhereClause>> {
        let Some(where_token) = self.take_keyword(TokenType::Where, DROP_BEFORE_AND_AFTER) else {
            return Ok(Maybe::nothing(self.here()));
        };
        let elements = self.parse_group(errors::EXPECTED_MAIN_ELEMENT, |p| {
            Ok(p.optionally(|q| q.parse_body_element()))
        })?;
        let mut clause = WhereClause::new(elements);
        clause.widen(&where_token);
        Ok(Maybe::just(clause))
    }

    fn parse_with_clause(&mut self) -> Parse<WithClause> {
        let Some(with_token) = self.get_keyword(TokenType::With) else {
            return self.fail(errors::EXPECTED_WITH_CLAUSE);
        };
        let scrutinee = self.parse_pattern(false)?;
        self.drop_newlines();
        if self.get_keyword(TokenType::Of).is_none() {
            return self.fail(errors::EXPECTED_OF);
        }
        let arms = self.parse_group(errors::EXPECTED_WITH_CLAUSE_ARM, |p| {
            p.maybe_parse_with_arm()
        })?;
        let mut clause = WithClause::new(scrutinee, arms);
        clause.widen(&with_token);
        Ok(clause)
    }

    fn maybe_parse_with_arm(&mut self) -> Parse<Option<WithClauseArm>> {
        let Some(first) = self.maybe_parse_pattern(false)? else {
            return Ok(None);
        };
        let (refinement, pattern) = match self.take_keyword(TokenType::Bar, DROP_BEFORE_AND_AFTER)
        {
            Some(bar) => {
                let mut refinement = Maybe::just(first);
                refinement.widen(&bar);
                let pattern = self.parse_pattern(false)?;
                (refinement, pattern)
            }
            None => (Maybe::nothing(first.get_pos()), first),
        };
        self.drop_newlines();
        if self.get_keyword(TokenType::ThickArrow).is_none() {
            return self.fail(errors::EXPECTED_WITH_ARM_THICK_ARROW);
        }
        let body = self.parse_expr(false)?;
        Ok(Some(WithClauseArm::new(refinement, pattern, body)))
    }

    fn parse_type_alias(&mut self) -> Parse<TypeAlias> {
        let Some(alias_token) = self.get_keyword(TokenType::Alias) else {
            return self.fail(errors::EXPECTED_TYPE_ALIAS);
        };
        let Some(name) = self.maybe_parse_name() else {
            return self.fail(errors::EXPECTED_TYPE_ALIAS_NAME);
        };
        if self
            .take_keyword(TokenType::Equal, DROP_BEFORE_AND_AFTER)
            .is_none()
        {
            return self.fail(errors::EXPECTED_ALIAS_BINDING);
        }
        let typ = self.parse_type(false)?;
        let mut alias = TypeAlias::new(name, typ);
        alias.widen(&alias_token);
        Ok(alias)
    }

    fn parse_syntax(&mut self) -> Parse<Syntax> {
        let Some(syntax_token) = self.get_keyword(TokenType::Syntax) else {
            return self.fail(errors::EXPECTED_SYNTAX);
        };
        let mut symbols: List<SyntaxSymbol> = List::new();
        while let Some(symbol) = self.maybe_parse_syntax_symbol()? {
            symbols = symbols.snoc(symbol);
        }
        let Some(symbols) = symbols.strengthen().into_inner() else {
            return self.fail(errors::EXPECTED_SYNTAX_RULE);
        };
        let rule = SyntaxRule::new(symbols);
        if !rule.has_raw_keyword() {
            let pos = rule.get_pos();
            return self.fail_over(errors::EXPECTED_RAW_KEYWORD, pos);
        }
        if self
            .take_keyword(TokenType::Equal, DROP_BEFORE_AND_AFTER)
            .is_none()
        {
            return self.fail(errors::EXPECTED_SYNTAX_BINDING);
        }
        let expr = self.parse_expr(false)?;
        let mut syntax = Syntax::new(rule, expr);
        syntax.widen(&syntax_token);
        Ok(syntax)
    }

    fn maybe_parse_syntax_symbol(&mut self) -> Parse<Option<SyntaxSymbol>> {
        let ty = self.current().ty;
        match ty {
            TokenType::RawStringValue if matching::is_non_infix_name(&self.current().value) => {
                Ok(Some(SyntaxSymbol::RawKeyword(self.next_token())))
            }
            TokenType::LeftBrace
                if self.lookahead2(&[(TokenType::LeftBrace, TokenType::Id)]) =>
            {
                self.advance();
                self.drop_newlines();
                let Some(id) = self.parse_ident() else {
                    return self.fail(errors::EXPECTED_SYNTAX_BINDING_ID);
                };
                if self
                    .take_keyword(TokenType::RightBrace, DROP_BEFORE)
                    .is_none()
                {
                    return self.fail(errors::EXPECTED_RIGHT_BRACE);
                }
                Ok(Some(SyntaxSymbol::Binder(id)))
            }
            _ => Ok(self.parse_ident().map(SyntaxSymbol::Ident)),
        }
    }
}

fn constructor_name_error(token: &Token) -> String {
    let msg = match token.ty {
        TokenType::MethodSymbol => errors::ILLEGAL_METHOD_TYPE_CONSTRUCTOR,
        TokenType::Id if matching::is_camel_case(&token.value) => {
            errors::ILLEGAL_LOWERCASE_CONSTRUCTOR_NAME
        }
        _ => errors::EXPECTED_TYPE_CONSTRUCTOR_NAME,
    };
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use crate::parser::errors;
    use crate::parser::source::testing::{first_error, parse_ok};
    use yew_ast::ast::{BodyElement, DefBinding, DefBody, SyntaxSymbol, TypeDefBody};

    fn only_element(text: &str) -> BodyElement {
        let src = parse_ok(text);
        let body = src.body().get().expect("body").clone();
        assert_eq!(body.elements().len(), 1, "expected a single element");
        body.elements().head().expect("element").clone()
    }

    #[test]
    fn typing_and_def_pair() {
        let src = parse_ok("id : a -> a\nid x = x\n");
        let body = src.body().get().expect("body");
        assert_eq!(body.elements().len(), 2);
        assert!(matches!(
            body.elements().head(),
            Some(BodyElement::Typing(_))
        ));
    }

    #[test]
    fn where_promotes_a_typing_to_a_type_def() {
        let element = only_element("N : Type where (Zero : N\nSucc : N -> N)\n");
        let BodyElement::TypeDef(type_def) = element else {
            panic!("expected type def");
        };
        assert_eq!(type_def.typing().name().text(), "N");
        let TypeDefBody::Constructors(constructors) = type_def.body() else {
            panic!("expected constructors");
        };
        assert_eq!(constructors.len(), 2);
    }

    #[test]
    fn unparenthesised_constructors_stack_by_line() {
        let element = only_element("N : Type where Zero : N\nSucc : N -> N\n");
        let BodyElement::TypeDef(type_def) = element else {
            panic!("expected type def");
        };
        let TypeDefBody::Constructors(constructors) = type_def.body() else {
            panic!("expected constructors");
        };
        assert_eq!(constructors.len(), 2);
    }

    #[test]
    fn impossible_type_def_body() {
        let element = only_element("Empty : Type where impossible\n");
        let BodyElement::TypeDef(type_def) = element else {
            panic!("expected type def");
        };
        assert!(matches!(type_def.body(), TypeDefBody::Impossible(_)));
    }

    #[test]
    fn deriving_clause_attaches_to_the_type_def() {
        let element = only_element("B : Type where (T : B\nF : B) deriving (Eq x, Show y)\n");
        let BodyElement::TypeDef(type_def) = element else {
            panic!("expected type def");
        };
        let deriving = type_def.deriving().get().expect("deriving");
        assert_eq!(deriving.constrainers().len(), 2);
    }

    #[test]
    fn lowercase_constructor_names_are_rejected() {
        let msg = first_error("N : Type where zero : N\n");
        assert_eq!(msg, errors::ILLEGAL_LOWERCASE_CONSTRUCTOR_NAME);
    }

    #[test]
    fn visibility_rules() {
        let msg = first_error("open f = y\n");
        assert_eq!(msg, errors::ILLEGAL_VISIBLE_DEF);

        let msg = first_error("open x : T\n");
        assert_eq!(msg, errors::ILLEGAL_OPEN_MODIFIER_TYPING);

        let msg = first_error("open alias x = T\n");
        assert_eq!(msg, errors::ILLEGAL_OPEN_MODIFIER);

        let element = only_element("public x : T\n");
        let BodyElement::Typing(typing) = element else {
            panic!("expected typing");
        };
        assert!(typing.visibility().is_just());

        let element = only_element("open N : Type where Zero : N\n");
        assert!(matches!(element, BodyElement::TypeDef(_)));
    }

    #[test]
    fn auto_marks_the_typing() {
        let element = only_element("auto x : T\n");
        let BodyElement::Typing(typing) = element else {
            panic!("expected typing");
        };
        assert!(typing.is_automatic());
    }

    #[test]
    fn def_with_where_clause() {
        let element = only_element("f = g where (g : T\ng = 1)\n");
        let BodyElement::Def(def) = element else {
            panic!("expected def");
        };
        let DefBody::Rhs { where_clause, .. } = def.body() else {
            panic!("expected rhs");
        };
        assert_eq!(where_clause.get().expect("where").elements().len(), 2);
    }

    #[test]
    fn where_clauses_nest() {
        let element = only_element("f = g where (g = h where (h = 1))\n");
        let BodyElement::Def(def) = element else {
            panic!("expected def");
        };
        let DefBody::Rhs { where_clause, .. } = def.body() else {
            panic!("expected rhs");
        };
        let BodyElement::Def(inner) = where_clause.get().expect("where").elements().head() else {
            panic!("expected inner def");
        };
        let DefBody::Rhs { where_clause, .. } = inner.body() else {
            panic!("expected inner rhs");
        };
        assert!(where_clause.is_just());
    }

    #[test]
    fn def_with_with_clause_and_refinement() {
        let element = only_element("f x with g x of (True | Pair a b => a\nFalse => x)\n");
        let BodyElement::Def(def) = element else {
            panic!("expected def");
        };
        let DefBody::Rhs {
            binding: DefBinding::With(with_clause),
            ..
        } = def.body()
        else {
            panic!("expected with clause");
        };
        assert_eq!(with_clause.arms().len(), 2);
        assert!(with_clause.arms().head().refinement().is_just());
        assert!(with_clause.arms().last().refinement().is_nothing());
    }

    #[test]
    fn impossible_def_body() {
        let element = only_element("f Empty impossible\n");
        let BodyElement::Def(def) = element else {
            panic!("expected def");
        };
        assert!(matches!(def.body(), DefBody::Impossible(_)));
    }

    #[test]
    fn alias_binds_a_name_to_a_type() {
        let element = only_element("alias Str = List Char\n");
        let BodyElement::TypeAlias(alias) = element else {
            panic!("expected alias");
        };
        assert_eq!(alias.name().text(), "Str");
    }

    #[test]
    fn syntax_rule_requires_a_raw_keyword() {
        let element = only_element("syntax `when` {c} `then` {e} = ite c e unit\n");
        let BodyElement::Syntax(syntax) = element else {
            panic!("expected syntax");
        };
        assert_eq!(syntax.rule().symbols().len(), 4);
        assert!(matches!(
            syntax.rule().symbols().head(),
            SyntaxSymbol::RawKeyword(_)
        ));

        let msg = first_error("syntax {c} = c\n");
        assert_eq!(msg, errors::EXPECTED_RAW_KEYWORD);
    }
}
