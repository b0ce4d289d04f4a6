//! Body elements: typings, definitions, data type definitions, aliases,
//! spec definitions and instances, and syntax rules.

use crate::ast::annotation::{Annotate, Annotations};
use crate::ast::expr::Expr;
use crate::ast::names::{Ident, Name, UpperIdent};
use crate::ast::pattern::Pattern;
use crate::ast::token_node;
use crate::ast::typ::Type;
use crate::data::{List, Maybe, NonEmpty};
use crate::node::{extend_list, extend_maybe, extend_non_empty, Node};
use yew_tokens::{Position, Positioned, Token, TokenType};

token_node!(
    /// The `public` or `open` modifier.
    Visibility,
    "visibility"
);

impl Visibility {
    pub fn is_open(&self) -> bool {
        self.token().ty == TokenType::Open
    }
}

/// `name : type`, optionally prefixed by `auto`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typing {
    annotations: Maybe<Annotations>,
    visibility: Maybe<Visibility>,
    automatic: bool,
    name: Name,
    typ: Type,
    pos: Position,
}

impl Typing {
    pub fn new(name: Name, typ: Type) -> Self {
        let pos = name.get_pos().update(typ.get_pos());
        Self {
            annotations: Maybe::nothing(Position::zero()),
            visibility: Maybe::nothing(Position::zero()),
            automatic: false,
            name,
            typ,
            pos,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn typ(&self) -> &Type {
        &self.typ
    }

    pub fn is_automatic(&self) -> bool {
        self.automatic
    }

    pub fn visibility(&self) -> &Maybe<Visibility> {
        &self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Maybe<Visibility>) {
        self.pos = self.pos.update(visibility.get_pos());
        self.visibility = visibility;
    }

    pub fn set_automatic(&mut self, marker: &Token) {
        self.automatic = true;
        self.pos = self.pos.update(marker.get_pos());
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Annotate for Typing {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for Typing {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for Typing {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.annotations);
        extend_maybe(&mut children, &self.visibility);
        children.push(&self.name as &dyn Node);
        children.push(&self.typ as &dyn Node);
        ("typing".to_string(), children)
    }
}

/// One constructor group in a type definition: one or more names sharing a
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConstructor {
    annotations: Maybe<Annotations>,
    names: NonEmpty<Name>,
    typ: Type,
    pos: Position,
}

impl TypeConstructor {
    pub fn new(names: NonEmpty<Name>, typ: Type) -> Self {
        let pos = names.get_pos().update(typ.get_pos());
        Self {
            annotations: Maybe::nothing(Position::zero()),
            names,
            typ,
            pos,
        }
    }

    pub fn names(&self) -> &NonEmpty<Name> {
        &self.names
    }

    pub fn typ(&self) -> &Type {
        &self.typ
    }
}

impl Annotate for TypeConstructor {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for TypeConstructor {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for TypeConstructor {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.annotations);
        extend_non_empty(&mut children, &self.names);
        children.push(&self.typ as &dyn Node);
        ("type constructor".to_string(), children)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefBody {
    /// The `impossible` marker body.
    Impossible(Token),
    Constructors(NonEmpty<TypeConstructor>),
}

impl Positioned for TypeDefBody {
    fn get_pos(&self) -> Position {
        match self {
            TypeDefBody::Impossible(t) => t.get_pos(),
            TypeDefBody::Constructors(cs) => cs.get_pos(),
        }
    }
}

impl Node for TypeDefBody {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            TypeDefBody::Impossible(_) => ("impossible definition body".to_string(), vec![]),
            TypeDefBody::Constructors(cs) => {
                let mut children = vec![];
                extend_non_empty(&mut children, cs);
                ("type definition".to_string(), children)
            }
        }
    }
}

/// `deriving C` or `deriving (C1, C2, …)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deriving {
    constrainers: NonEmpty<Constrainer>,
    pos: Position,
}

impl Deriving {
    pub fn new(constrainers: NonEmpty<Constrainer>) -> Self {
        let pos = constrainers.get_pos();
        Self { constrainers, pos }
    }

    pub fn constrainers(&self) -> &NonEmpty<Constrainer> {
        &self.constrainers
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for Deriving {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for Deriving {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.constrainers);
        ("deriving clause".to_string(), children)
    }
}

/// `typing where typeDefBody [deriving …]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    annotations: Maybe<Annotations>,
    visibility: Maybe<Visibility>,
    typing: Typing,
    body: TypeDefBody,
    deriving: Maybe<Deriving>,
    pos: Position,
}

impl TypeDef {
    pub fn new(typing: Typing, body: TypeDefBody, deriving: Maybe<Deriving>) -> Self {
        let pos = typing
            .get_pos()
            .update(body.get_pos())
            .update(deriving.get_pos());
        Self {
            annotations: Maybe::nothing(Position::zero()),
            visibility: Maybe::nothing(Position::zero()),
            typing,
            body,
            deriving,
            pos,
        }
    }

    pub fn typing(&self) -> &Typing {
        &self.typing
    }

    pub fn body(&self) -> &TypeDefBody {
        &self.body
    }

    pub fn deriving(&self) -> &Maybe<Deriving> {
        &self.deriving
    }

    pub fn set_visibility(&mut self, visibility: Maybe<Visibility>) {
        self.pos = self.pos.update(visibility.get_pos());
        self.visibility = visibility;
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Annotate for TypeDef {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for TypeDef {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for TypeDef {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.annotations);
        extend_maybe(&mut children, &self.visibility);
        children.push(&self.typing as &dyn Node);
        children.push(&self.body as &dyn Node);
        extend_maybe(&mut children, &self.deriving);
        ("type definition".to_string(), children)
    }
}

/// `alias name = type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    annotations: Maybe<Annotations>,
    visibility: Maybe<Visibility>,
    name: Name,
    typ: Type,
    pos: Position,
}

impl TypeAlias {
    pub fn new(name: Name, typ: Type) -> Self {
        let pos = name.get_pos().update(typ.get_pos());
        Self {
            annotations: Maybe::nothing(Position::zero()),
            visibility: Maybe::nothing(Position::zero()),
            name,
            typ,
            pos,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn typ(&self) -> &Type {
        &self.typ
    }

    pub fn set_visibility(&mut self, visibility: Maybe<Visibility>) {
        self.pos = self.pos.update(visibility.get_pos());
        self.visibility = visibility;
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Annotate for TypeAlias {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for TypeAlias {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for TypeAlias {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.annotations);
        extend_maybe(&mut children, &self.visibility);
        children.push(&self.name as &dyn Node);
        children.push(&self.typ as &dyn Node);
        ("type alias definition".to_string(), children)
    }
}

/// The right-hand side a definition binds: a plain expression or a `with`
/// clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefBinding {
    Expr(Expr),
    With(WithClause),
}

impl Positioned for DefBinding {
    fn get_pos(&self) -> Position {
        match self {
            DefBinding::Expr(e) => e.get_pos(),
            DefBinding::With(w) => w.get_pos(),
        }
    }
}

impl Node for DefBinding {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            DefBinding::Expr(e) => e.describe(),
            DefBinding::With(w) => w.describe(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefBody {
    /// The `impossible` marker body.
    Impossible(Token),
    Rhs {
        binding: DefBinding,
        where_clause: Maybe<WhereClause>,
        pos: Position,
    },
}

impl DefBody {
    pub fn rhs(binding: DefBinding, where_clause: Maybe<WhereClause>) -> Self {
        let pos = binding.get_pos().update(where_clause.get_pos());
        DefBody::Rhs {
            binding,
            where_clause,
            pos,
        }
    }
}

impl Positioned for DefBody {
    fn get_pos(&self) -> Position {
        match self {
            DefBody::Impossible(t) => t.get_pos(),
            DefBody::Rhs { pos, .. } => *pos,
        }
    }
}

impl Node for DefBody {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            DefBody::Impossible(_) => ("impossible definition body".to_string(), vec![]),
            DefBody::Rhs {
                binding,
                where_clause,
                ..
            } => {
                let mut children: Vec<&dyn Node> = vec![binding];
                extend_maybe(&mut children, where_clause);
                ("definition body".to_string(), children)
            }
        }
    }
}

/// `pattern defBody`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Def {
    annotations: Maybe<Annotations>,
    pattern: Pattern,
    // boxed: `DefBody` reaches back to `BodyElement` through where-clauses
    body: Box<DefBody>,
    pos: Position,
}

impl Def {
    pub fn new(pattern: Pattern, body: DefBody) -> Self {
        let pos = pattern.get_pos().update(body.get_pos());
        Self {
            annotations: Maybe::nothing(Position::zero()),
            pattern,
            body: Box::new(body),
            pos,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn body(&self) -> &DefBody {
        &self.body
    }
}

impl Annotate for Def {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for Def {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for Def {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.annotations);
        children.push(&self.pattern as &dyn Node);
        children.push(self.body.as_ref() as &dyn Node);
        ("definition".to_string(), children)
    }
}

/// `where elem` or `where (elem; …)` attached to a definition body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    elements: NonEmpty<BodyElement>,
    pos: Position,
}

impl WhereClause {
    pub fn new(elements: NonEmpty<BodyElement>) -> Self {
        let pos = elements.get_pos();
        Self { elements, pos }
    }

    pub fn elements(&self) -> &NonEmpty<BodyElement> {
        &self.elements
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for WhereClause {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for WhereClause {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.elements);
        ("where clause".to_string(), children)
    }
}

/// `[refinement |] pattern => body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithClauseArm {
    refinement: Maybe<Pattern>,
    pattern: Pattern,
    body: Expr,
    pos: Position,
}

impl WithClauseArm {
    pub fn new(refinement: Maybe<Pattern>, pattern: Pattern, body: Expr) -> Self {
        let pos = refinement
            .get_pos()
            .update(pattern.get_pos())
            .update(body.get_pos());
        Self {
            refinement,
            pattern,
            body,
            pos,
        }
    }

    pub fn refinement(&self) -> &Maybe<Pattern> {
        &self.refinement
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }
}

impl Positioned for WithClauseArm {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for WithClauseArm {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.refinement);
        children.push(&self.pattern as &dyn Node);
        children.push(&self.body as &dyn Node);
        ("with clause arm".to_string(), children)
    }
}

/// `with scrutinee of arms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithClause {
    scrutinee: Pattern,
    arms: NonEmpty<WithClauseArm>,
    pos: Position,
}

impl WithClause {
    pub fn new(scrutinee: Pattern, arms: NonEmpty<WithClauseArm>) -> Self {
        let pos = scrutinee.get_pos().update(arms.get_pos());
        Self {
            scrutinee,
            arms,
            pos,
        }
    }

    pub fn scrutinee(&self) -> &Pattern {
        &self.scrutinee
    }

    pub fn arms(&self) -> &NonEmpty<WithClauseArm> {
        &self.arms
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for WithClause {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for WithClause {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![&self.scrutinee];
        extend_non_empty(&mut children, &self.arms);
        ("with clause".to_string(), children)
    }
}

/// `UpperIdent pattern`, e.g. `Eq a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constrainer {
    name: UpperIdent,
    pattern: Pattern,
    pos: Position,
}

impl Constrainer {
    pub fn new(name: UpperIdent, pattern: Pattern) -> Self {
        let pos = name.get_pos().update(pattern.get_pos());
        Self { name, pattern, pos }
    }

    pub fn name(&self) -> &UpperIdent {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for Constrainer {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for Constrainer {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        ("constrainer".to_string(), vec![&self.name, &self.pattern])
    }
}

/// `{Upper ,}* constrainer` — the element shape of a constraint group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintElem {
    uppers: List<UpperIdent>,
    constrainer: Constrainer,
    pos: Position,
}

impl ConstraintElem {
    pub fn new(uppers: List<UpperIdent>, constrainer: Constrainer) -> Self {
        let pos = uppers.get_pos().update(constrainer.get_pos());
        Self {
            uppers,
            constrainer,
            pos,
        }
    }

    pub fn uppers(&self) -> &List<UpperIdent> {
        &self.uppers
    }

    pub fn constrainer(&self) -> &Constrainer {
        &self.constrainer
    }
}

impl Positioned for ConstraintElem {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for ConstraintElem {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_list(&mut children, &self.uppers);
        children.push(&self.constrainer as &dyn Node);
        ("constraint".to_string(), children)
    }
}

/// A verified constraint group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    elems: NonEmpty<ConstraintElem>,
}

impl Constraint {
    pub fn new(elems: NonEmpty<ConstraintElem>) -> Self {
        Self { elems }
    }

    pub fn elems(&self) -> &NonEmpty<ConstraintElem> {
        &self.elems
    }

    /// True when the group is a bare constrainer with no upper-ident
    /// prefix; such a head may stand alone without `=>`.
    pub fn is_bare_constrainer(&self) -> bool {
        self.elems.len() == 1 && self.elems.head().uppers().is_empty()
    }

    pub fn into_head_constrainer(self) -> Constrainer {
        let (head, _) = self.elems.split_first();
        let ConstraintElem { constrainer, .. } = head;
        constrainer
    }
}

impl Positioned for Constraint {
    fn get_pos(&self) -> Position {
        self.elems.get_pos()
    }
}

impl Node for Constraint {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.elems);
        ("constraint".to_string(), children)
    }
}

/// `[constraint =>] constrainer` heading a spec definition or instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecHead {
    constraint: Maybe<Constraint>,
    constrainer: Constrainer,
    pos: Position,
}

impl SpecHead {
    pub fn new(constraint: Maybe<Constraint>, constrainer: Constrainer) -> Self {
        let pos = constraint.get_pos().update(constrainer.get_pos());
        Self {
            constraint,
            constrainer,
            pos,
        }
    }

    pub fn constraint(&self) -> &Maybe<Constraint> {
        &self.constraint
    }

    pub fn constrainer(&self) -> &Constrainer {
        &self.constrainer
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for SpecHead {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for SpecHead {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.constraint);
        children.push(&self.constrainer as &dyn Node);
        ("spec head".to_string(), children)
    }
}

/// A spec member: a method typing or a default definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecMember {
    Def(Def),
    Typing(Typing),
}

impl Positioned for SpecMember {
    fn get_pos(&self) -> Position {
        match self {
            SpecMember::Def(d) => d.get_pos(),
            SpecMember::Typing(t) => t.get_pos(),
        }
    }
}

impl Node for SpecMember {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            SpecMember::Def(d) => d.describe(),
            SpecMember::Typing(t) => t.describe(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecBody {
    members: NonEmpty<SpecMember>,
    pos: Position,
}

impl SpecBody {
    pub fn new(members: NonEmpty<SpecMember>) -> Self {
        let pos = members.get_pos();
        Self { members, pos }
    }

    pub fn members(&self) -> &NonEmpty<SpecMember> {
        &self.members
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for SpecBody {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for SpecBody {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.members);
        ("spec body".to_string(), children)
    }
}

/// `spec head [from pattern] where body [requiring defs]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDef {
    annotations: Maybe<Annotations>,
    visibility: Maybe<Visibility>,
    head: SpecHead,
    dependency: Maybe<Pattern>,
    body: SpecBody,
    requiring: Maybe<NonEmpty<Def>>,
    pos: Position,
}

impl SpecDef {
    pub fn new(
        head: SpecHead,
        dependency: Maybe<Pattern>,
        body: SpecBody,
        requiring: Maybe<NonEmpty<Def>>,
    ) -> Self {
        let pos = head
            .get_pos()
            .update(dependency.get_pos())
            .update(body.get_pos())
            .update(requiring.get_pos());
        Self {
            annotations: Maybe::nothing(Position::zero()),
            visibility: Maybe::nothing(Position::zero()),
            head,
            dependency,
            body,
            requiring,
            pos,
        }
    }

    pub fn head(&self) -> &SpecHead {
        &self.head
    }

    pub fn dependency(&self) -> &Maybe<Pattern> {
        &self.dependency
    }

    pub fn body(&self) -> &SpecBody {
        &self.body
    }

    pub fn requiring(&self) -> &Maybe<NonEmpty<Def>> {
        &self.requiring
    }

    pub fn set_visibility(&mut self, visibility: Maybe<Visibility>) {
        self.pos = self.pos.update(visibility.get_pos());
        self.visibility = visibility;
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Annotate for SpecDef {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for SpecDef {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for SpecDef {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.annotations);
        extend_maybe(&mut children, &self.visibility);
        children.push(&self.head as &dyn Node);
        extend_maybe(&mut children, &self.dependency);
        children.push(&self.body as &dyn Node);
        extend_maybe(&mut children, &self.requiring);
        ("spec definition".to_string(), children)
    }
}

/// `inst head [= constrainer] where body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecInst {
    annotations: Maybe<Annotations>,
    visibility: Maybe<Visibility>,
    head: SpecHead,
    target: Maybe<Constrainer>,
    body: SpecBody,
    pos: Position,
}

impl SpecInst {
    pub fn new(head: SpecHead, target: Maybe<Constrainer>, body: SpecBody) -> Self {
        let pos = head
            .get_pos()
            .update(target.get_pos())
            .update(body.get_pos());
        Self {
            annotations: Maybe::nothing(Position::zero()),
            visibility: Maybe::nothing(Position::zero()),
            head,
            target,
            body,
            pos,
        }
    }

    pub fn head(&self) -> &SpecHead {
        &self.head
    }

    pub fn target(&self) -> &Maybe<Constrainer> {
        &self.target
    }

    pub fn body(&self) -> &SpecBody {
        &self.body
    }

    pub fn set_visibility(&mut self, visibility: Maybe<Visibility>) {
        self.pos = self.pos.update(visibility.get_pos());
        self.visibility = visibility;
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Annotate for SpecInst {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for SpecInst {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for SpecInst {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.annotations);
        extend_maybe(&mut children, &self.visibility);
        children.push(&self.head as &dyn Node);
        extend_maybe(&mut children, &self.target);
        children.push(&self.body as &dyn Node);
        ("inst definition".to_string(), children)
    }
}

/// One symbol of a syntax rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxSymbol {
    /// A raw-string keyword compared structurally during expansion.
    RawKeyword(Token),
    /// `{name}` — a binder for the rule's right-hand side.
    Binder(Ident),
    /// A bare identifier referring to the surrounding scope.
    Ident(Ident),
}

impl Positioned for SyntaxSymbol {
    fn get_pos(&self) -> Position {
        match self {
            SyntaxSymbol::RawKeyword(t) => t.get_pos(),
            SyntaxSymbol::Binder(i) | SyntaxSymbol::Ident(i) => i.get_pos(),
        }
    }
}

impl Node for SyntaxSymbol {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            SyntaxSymbol::RawKeyword(t) => ("syntax keyword".to_string(), vec![t as &dyn Node]),
            SyntaxSymbol::Binder(i) => ("syntax rule ident".to_string(), vec![i.token()]),
            SyntaxSymbol::Ident(i) => i.describe(),
        }
    }
}

/// The symbol sequence of a `syntax` declaration; at least one symbol is a
/// raw keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxRule {
    symbols: NonEmpty<SyntaxSymbol>,
}

impl SyntaxRule {
    pub fn new(symbols: NonEmpty<SyntaxSymbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &NonEmpty<SyntaxSymbol> {
        &self.symbols
    }

    pub fn has_raw_keyword(&self) -> bool {
        self.symbols
            .iter()
            .any(|s| matches!(s, SyntaxSymbol::RawKeyword(_)))
    }
}

impl Positioned for SyntaxRule {
    fn get_pos(&self) -> Position {
        self.symbols.get_pos()
    }
}

impl Node for SyntaxRule {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.symbols);
        ("syntax rule".to_string(), children)
    }
}

/// `syntax rule = expr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    annotations: Maybe<Annotations>,
    visibility: Maybe<Visibility>,
    rule: SyntaxRule,
    expr: Expr,
    pos: Position,
}

impl Syntax {
    pub fn new(rule: SyntaxRule, expr: Expr) -> Self {
        let pos = rule.get_pos().update(expr.get_pos());
        Self {
            annotations: Maybe::nothing(Position::zero()),
            visibility: Maybe::nothing(Position::zero()),
            rule,
            expr,
            pos,
        }
    }

    pub fn rule(&self) -> &SyntaxRule {
        &self.rule
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn set_visibility(&mut self, visibility: Maybe<Visibility>) {
        self.pos = self.pos.update(visibility.get_pos());
        self.visibility = visibility;
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Annotate for Syntax {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        self.pos = self.pos.update(annotations.get_pos());
        self.annotations = annotations;
    }
}

impl Positioned for Syntax {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for Syntax {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.annotations);
        extend_maybe(&mut children, &self.visibility);
        children.push(&self.rule as &dyn Node);
        children.push(&self.expr as &dyn Node);
        ("syntax definition".to_string(), children)
    }
}

/// A top-level element of the source body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyElement {
    Def(Def),
    Typing(Typing),
    TypeDef(TypeDef),
    TypeAlias(TypeAlias),
    SpecDef(SpecDef),
    SpecInst(SpecInst),
    Syntax(Syntax),
}

impl Annotate for BodyElement {
    fn annotate(&mut self, annotations: Maybe<Annotations>) {
        match self {
            BodyElement::Def(d) => d.annotate(annotations),
            BodyElement::Typing(t) => t.annotate(annotations),
            BodyElement::TypeDef(t) => t.annotate(annotations),
            BodyElement::TypeAlias(t) => t.annotate(annotations),
            BodyElement::SpecDef(s) => s.annotate(annotations),
            BodyElement::SpecInst(s) => s.annotate(annotations),
            BodyElement::Syntax(s) => s.annotate(annotations),
        }
    }
}

impl Positioned for BodyElement {
    fn get_pos(&self) -> Position {
        match self {
            BodyElement::Def(d) => d.get_pos(),
            BodyElement::Typing(t) => t.get_pos(),
            BodyElement::TypeDef(t) => t.get_pos(),
            BodyElement::TypeAlias(t) => t.get_pos(),
            BodyElement::SpecDef(s) => s.get_pos(),
            BodyElement::SpecInst(s) => s.get_pos(),
            BodyElement::Syntax(s) => s.get_pos(),
        }
    }
}

impl Node for BodyElement {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            BodyElement::Def(d) => d.describe(),
            BodyElement::Typing(t) => t.describe(),
            BodyElement::TypeDef(t) => t.describe(),
            BodyElement::TypeAlias(t) => t.describe(),
            BodyElement::SpecDef(s) => s.describe(),
            BodyElement::SpecInst(s) => s.describe(),
            BodyElement::Syntax(s) => s.describe(),
        }
    }
}

/// The body section of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    elements: List<BodyElement>,
}

impl Body {
    pub fn new(elements: List<BodyElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &List<BodyElement> {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Positioned for Body {
    fn get_pos(&self) -> Position {
        self.elements.get_pos()
    }
}

impl Node for Body {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_list(&mut children, &self.elements);
        ("body".to_string(), children)
    }
}
