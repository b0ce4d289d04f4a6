//! Spec definitions and instances, and the constraint grammar they share
//! with `deriving` clauses.
//!
//! A constraint element is `{Upper ,}* constrainer`; the upper-ident prefix
//! is speculative, so `(Eq a, Ord a)` splits into two elements while
//! `(F, G h)` is one element with prefix `F`.

use crate::parser::{errors, Parse, Parser, DROP_BEFORE_AND_AFTER, TYPING_L2};
use yew_ast::ast::{
    Annotate, Constrainer, Constraint, ConstraintElem, SpecBody, SpecDef, SpecHead, SpecInst,
    SpecMember, UpperIdent,
};
use yew_ast::data::{List, Maybe, NonEmpty};
use yew_tokens::{Positioned, TokenType};

impl Parser {
    pub(crate) fn maybe_parse_constrainer(&mut self) -> Parse<Option<Constrainer>> {
        let Some(lp) = self.get_keyword(TokenType::LeftParen) else {
            return self.maybe_parse_bare_constrainer();
        };
        if self.current().ty == TokenType::LeftParen {
            return self.fail(errors::ILLEGAL_MULTIPLE_ENCLOSURE);
        }
        let Some(mut constrainer) = self.maybe_parse_bare_constrainer()? else {
            return self.fail(errors::EXPECTED_CONSTRAINER);
        };
        self.drop_newlines();
        let Some(rp) = self.get_keyword(TokenType::RightParen) else {
            return self.fail(errors::EXPECTED_RIGHT_PAREN);
        };
        constrainer.widen(&lp);
        constrainer.widen(&rp);
        Ok(Some(constrainer))
    }

    fn maybe_parse_bare_constrainer(&mut self) -> Parse<Option<Constrainer>> {
        let Some(name) = self.parse_upper_ident() else {
            return Ok(None);
        };
        let pattern = self.parse_pattern(false)?;
        Ok(Some(Constrainer::new(name, pattern)))
    }

    fn maybe_parse_constraint_elem(&mut self) -> Parse<Option<ConstraintElem>> {
        let mut uppers: List<UpperIdent> = List::new();
        while let Some(upper) = self.optionally(|p| {
            let Some(upper) = p.parse_upper_ident() else {
                return p.fail(errors::EXPECTED_UPPER_ID);
            };
            if p.get_keyword(TokenType::Comma).is_none() {
                return p.fail(errors::EXPECTED_CONSTRAINT_ELEM);
            }
            Ok(upper)
        }) {
            uppers = uppers.snoc(upper);
        }
        match self.maybe_parse_constrainer()? {
            Some(constrainer) => Ok(Some(ConstraintElem::new(uppers, constrainer))),
            None if uppers.is_empty() => Ok(None),
            None => self.fail(errors::EXPECTED_CONSTRAINT_ELEM),
        }
    }

    fn parse_constraint(&mut self) -> Parse<Constraint> {
        if let Some(lp) = self.get_keyword(TokenType::LeftParen) {
            let mut elems =
                self.sep_sequenced(errors::EXPECTED_CONSTRAINT, TokenType::Comma, |p| {
                    p.maybe_parse_constraint_elem()
                })?;
            elems.widen(&lp);
            self.drop_newlines();
            let Some(rp) = self.get_keyword(TokenType::RightParen) else {
                return self.fail(errors::EXPECTED_RIGHT_PAREN);
            };
            elems.widen(&rp);
            return Ok(Constraint::new(elems));
        }
        match self.maybe_parse_constraint_elem()? {
            Some(elem) => Ok(Constraint::new(NonEmpty::singleton(elem))),
            None => self.fail(errors::EXPECTED_CONSTRAINT),
        }
    }

    /// `[constraint =>] constrainer`. Without `=>` the constraint itself
    /// must be a bare constrainer, which becomes the head.
    fn parse_spec_head(&mut self) -> Parse<SpecHead> {
        let constraint = self.parse_constraint()?;
        match self.take_keyword(TokenType::ThickArrow, DROP_BEFORE_AND_AFTER) {
            Some(arrow) => {
                let Some(constrainer) = self.maybe_parse_constrainer()? else {
                    return self.fail(errors::EXPECTED_CONSTRAINER);
                };
                let mut head = SpecHead::new(Maybe::just(constraint), constrainer);
                head.widen(&arrow);
                Ok(head)
            }
            None => {
                if !constraint.is_bare_constrainer() {
                    let pos = constraint.get_pos();
                    return self.fail_over(errors::EXPECTED_CONSTRAINER, pos);
                }
                let constrainer = constraint.into_head_constrainer();
                let nothing = Maybe::nothing(constrainer.get_pos());
                Ok(SpecHead::new(nothing, constrainer))
            }
        }
    }

    pub(crate) fn parse_spec_def(&mut self) -> Parse<SpecDef> {
        let Some(spec_token) = self.get_keyword(TokenType::Spec) else {
            return self.fail(errors::EXPECTED_SPEC_DEF);
        };
        let head = self.parse_spec_head()?;
        let dependency = match self.get_keyword(TokenType::From) {
            Some(from_token) => {
                let pattern = self.parse_pattern(false)?;
                let mut dependency = Maybe::just(pattern);
                dependency.widen(&from_token);
                dependency
            }
            None => Maybe::nothing(self.here()),
        };
        if self
            .take_keyword(TokenType::Where, DROP_BEFORE_AND_AFTER)
            .is_none()
        {
            return self.fail(errors::EXPECTED_SPEC_WHERE);
        }
        let body = self.parse_spec_body()?;
        let requiring = self.parse_optional_requiring()?;
        let mut def = SpecDef::new(head, dependency, body, requiring);
        def.widen(&spec_token);
        Ok(def)
    }

    pub(crate) fn parse_spec_inst(&mut self) -> Parse<SpecInst> {
        let Some(inst_token) = self.get_keyword(TokenType::Inst) else {
            return self.fail(errors::EXPECTED_SPEC_INST);
        };
        let head = self.parse_spec_head()?;
        let target = match self.get_keyword(TokenType::Equal) {
            Some(equal_token) => {
                let Some(constrainer) = self.maybe_parse_constrainer()? else {
                    return self.fail(errors::EXPECTED_CONSTRAINER);
                };
                let mut target = Maybe::just(constrainer);
                target.widen(&equal_token);
                target
            }
            None => Maybe::nothing(self.here()),
        };
        if self
            .take_keyword(TokenType::Where, DROP_BEFORE_AND_AFTER)
            .is_none()
        {
            return self.fail(errors::EXPECTED_INST_WHERE);
        }
        let body = self.parse_spec_body()?;
        let mut inst = SpecInst::new(head, target, body);
        inst.widen(&inst_token);
        Ok(inst)
    }

    fn parse_spec_body(&mut self) -> Parse<SpecBody> {
        let members = self.parse_group(errors::EXPECTED_TYPING_OR_DEF, |p| {
            p.maybe_parse_spec_member()
        })?;
        Ok(SpecBody::new(members))
    }

    fn maybe_parse_spec_member(&mut self) -> Parse<Option<SpecMember>> {
        let annotations = self.parse_annotations()?;
        let member = if self.lookahead2(TYPING_L2) {
            Some(SpecMember::Typing(self.parse_type_sig()?))
        } else {
            self.maybe_parse_def()?.map(SpecMember::Def)
        };
        match member {
            Some(mut member) => {
                match &mut member {
                    SpecMember::Def(def) => def.annotate(annotations),
                    SpecMember::Typing(typing) => typing.annotate(annotations),
                }
                Ok(Some(member))
            }
            None if annotations.is_just() => self.fail(errors::INVALID_ANNOTATION_TARGET),
            None => Ok(None),
        }
    }

    fn parse_optional_requiring(&mut self) -> Parse<Maybe<NonEmpty<yew_ast::ast::Def>>> {
        let origin = self.cursor;
        self.drop_newlines();
        let Some(requiring_token) = self.get_keyword(TokenType::Requiring) else {
            self.cursor = origin;
            return Ok(Maybe::nothing(self.here()));
        };
        let defs = self.parse_group(errors::EXPECTED_DEF, |p| p.maybe_parse_def())?;
        let mut requiring = Maybe::just(defs);
        requiring.widen(&requiring_token);
        Ok(requiring)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::errors;
    use crate::parser::source::testing::{first_error, parse_ok};
    use yew_ast::ast::BodyElement;

    fn only_element(text: &str) -> BodyElement {
        let src = parse_ok(text);
        let body = src.body().get().expect("body").clone();
        assert_eq!(body.elements().len(), 1, "expected a single element");
        body.elements().head().expect("element").clone()
    }

    #[test]
    fn bare_spec_head_has_no_constraint() {
        let element = only_element("spec Eq a where (eq : a -> a -> B)\n");
        let BodyElement::SpecDef(spec) = element else {
            panic!("expected spec def");
        };
        assert!(spec.head().constraint().is_nothing());
        assert_eq!(spec.head().constrainer().name().text(), "Eq");
        assert_eq!(spec.body().members().len(), 1);
    }

    #[test]
    fn constrained_spec_head() {
        let element = only_element("spec Functor m => Monad m where (bind : a\npure : b)\n");
        let BodyElement::SpecDef(spec) = element else {
            panic!("expected spec def");
        };
        let constraint = spec.head().constraint().get().expect("constraint");
        assert_eq!(constraint.elems().len(), 1);
        assert_eq!(spec.head().constrainer().name().text(), "Monad");
        assert_eq!(spec.body().members().len(), 2);
    }

    #[test]
    fn constraint_groups_split_on_commas_but_keep_prefixes() {
        let element = only_element("spec (Eq a, Ord a) => Num a where (plus : T)\n");
        let BodyElement::SpecDef(spec) = element else {
            panic!("expected spec def");
        };
        let constraint = spec.head().constraint().get().expect("constraint");
        assert_eq!(constraint.elems().len(), 2);

        let element = only_element("spec (F, G h) => K a where (m : T)\n");
        let BodyElement::SpecDef(spec) = element else {
            panic!("expected spec def");
        };
        let constraint = spec.head().constraint().get().expect("constraint");
        assert_eq!(constraint.elems().len(), 1);
        assert_eq!(constraint.elems().head().uppers().len(), 1);
    }

    #[test]
    fn dependency_and_requiring_clauses() {
        let element =
            only_element("spec Ord a from Eq a where (cmp : a -> a -> O) requiring (f = 1)\n");
        let BodyElement::SpecDef(spec) = element else {
            panic!("expected spec def");
        };
        assert!(spec.dependency().is_just());
        assert_eq!(spec.requiring().get().expect("requiring").len(), 1);
    }

    #[test]
    fn inst_with_and_without_target() {
        let element = only_element("inst Monad List where (bind = b)\n");
        let BodyElement::SpecInst(inst) = element else {
            panic!("expected inst");
        };
        assert!(inst.target().is_nothing());

        let element = only_element("inst Eq N = Prim p where (eq = e)\n");
        let BodyElement::SpecInst(inst) = element else {
            panic!("expected inst");
        };
        assert!(inst.target().is_just());
    }

    #[test]
    fn stray_member_annotations_are_rejected() {
        let msg = first_error("spec Eq a where (--@note\n)\n");
        assert_eq!(msg, errors::INVALID_ANNOTATION_TARGET);
    }

    #[test]
    fn doubly_enclosed_constrainers_are_rejected() {
        let msg = first_error("spec F f => ((M m)) where (x : T)\n");
        assert_eq!(msg, errors::ILLEGAL_MULTIPLE_ENCLOSURE);
    }
}
