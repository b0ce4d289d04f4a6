//! Types. Types inhabit the term language: the atoms are the same as the
//! expression atoms, plus function arrows, constraints, `forall`, and the
//! enclosed-typing forms used for implicit and modal parameters.

use crate::ast::expr::{Expr, LambdaAbstraction};
use crate::ast::names::{Hole, Literal, LowerIdent, Name, Wildcard};
use crate::ast::token_node;
use crate::data::{Maybe, NonEmpty};
use crate::node::{extend_maybe, extend_non_empty, Node};
use yew_tokens::{Position, Positioned};

token_node!(
    /// The unit type `()`.
    UnitType,
    "unit type"
);
token_node!(
    /// A multiplicity modality on a binder: `erase` or `once`.
    Modality,
    "modality"
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Name(Name),
    Hole(Hole),
    Literal(Literal),
    Wildcard(Wildcard),
    Unit(UnitType),
    App(Box<AppType>),
    Function(Box<FunctionType>),
    Constrained(Box<ConstrainedType>),
    Forall(Box<ForallType>),
    Enclosed(Box<EnclosedType>),
    Access(Box<TypeAccess>),
    Lambda(Box<LambdaAbstraction>),
}

impl Positioned for Type {
    fn get_pos(&self) -> Position {
        match self {
            Type::Name(n) => n.get_pos(),
            Type::Hole(h) => h.get_pos(),
            Type::Literal(l) => l.get_pos(),
            Type::Wildcard(w) => w.get_pos(),
            Type::Unit(u) => u.get_pos(),
            Type::App(a) => a.get_pos(),
            Type::Function(f) => f.get_pos(),
            Type::Constrained(c) => c.get_pos(),
            Type::Forall(f) => f.get_pos(),
            Type::Enclosed(e) => e.get_pos(),
            Type::Access(a) => a.get_pos(),
            Type::Lambda(l) => l.get_pos(),
        }
    }
}

impl Node for Type {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            Type::Name(n) => n.describe(),
            Type::Hole(h) => h.describe(),
            Type::Literal(l) => l.describe(),
            Type::Wildcard(w) => w.describe(),
            Type::Unit(u) => u.describe(),
            Type::App(a) => a.describe(),
            Type::Function(f) => f.describe(),
            Type::Constrained(c) => c.describe(),
            Type::Forall(f) => f.describe(),
            Type::Enclosed(e) => e.describe(),
            Type::Access(a) => a.describe(),
            Type::Lambda(l) => l.describe(),
        }
    }
}

/// Juxtaposed type application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppType {
    head: Type,
    args: NonEmpty<Type>,
    pos: Position,
}

impl AppType {
    pub fn new(head: Type, args: NonEmpty<Type>) -> Self {
        let pos = head.get_pos().update(args.get_pos());
        Self { head, args, pos }
    }

    pub fn head(&self) -> &Type {
        &self.head
    }

    pub fn args(&self) -> &NonEmpty<Type> {
        &self.args
    }
}

impl Positioned for AppType {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for AppType {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![&self.head];
        extend_non_empty(&mut children, &self.args);
        ("type application".to_string(), children)
    }
}

/// `lhs -> rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionType {
    lhs: Type,
    rhs: Type,
    pos: Position,
}

impl FunctionType {
    pub fn new(lhs: Type, rhs: Type) -> Self {
        let pos = lhs.get_pos().update(rhs.get_pos());
        Self { lhs, rhs, pos }
    }

    pub fn lhs(&self) -> &Type {
        &self.lhs
    }

    pub fn rhs(&self) -> &Type {
        &self.rhs
    }
}

impl Positioned for FunctionType {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for FunctionType {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        ("function type".to_string(), vec![&self.lhs, &self.rhs])
    }
}

/// `constraint => rhs`; the left side is held unverified until
/// elaboration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstrainedType {
    constraint: Type,
    rhs: Type,
    pos: Position,
}

impl ConstrainedType {
    pub fn new(constraint: Type, rhs: Type) -> Self {
        let pos = constraint.get_pos().update(rhs.get_pos());
        Self {
            constraint,
            rhs,
            pos,
        }
    }

    pub fn constraint(&self) -> &Type {
        &self.constraint
    }

    pub fn rhs(&self) -> &Type {
        &self.rhs
    }
}

impl Positioned for ConstrainedType {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for ConstrainedType {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        (
            "constrained type".to_string(),
            vec![&self.constraint, &self.rhs],
        )
    }
}

/// `forall x y z in body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForallType {
    binders: NonEmpty<LowerIdent>,
    body: Type,
    pos: Position,
}

impl ForallType {
    pub fn new(binders: NonEmpty<LowerIdent>, body: Type) -> Self {
        let pos = binders.get_pos().update(body.get_pos());
        Self { binders, body, pos }
    }

    pub fn binders(&self) -> &NonEmpty<LowerIdent> {
        &self.binders
    }

    pub fn body(&self) -> &Type {
        &self.body
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for ForallType {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for ForallType {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.binders);
        children.push(&self.body as &dyn Node);
        ("forall type".to_string(), children)
    }
}

/// The comma-separated terms inside an enclosed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerTypeTerms {
    terms: NonEmpty<Type>,
}

impl InnerTypeTerms {
    pub fn new(terms: NonEmpty<Type>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &NonEmpty<Type> {
        &self.terms
    }
}

impl Positioned for InnerTypeTerms {
    fn get_pos(&self) -> Position {
        self.terms.get_pos()
    }
}

impl Node for InnerTypeTerms {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.terms);
        ("inner type terms".to_string(), children)
    }
}

/// An enclosed typing `[modality] terms : type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerTyping {
    modality: Maybe<Modality>,
    terms: InnerTypeTerms,
    annotation: Type,
    pos: Position,
}

impl InnerTyping {
    pub fn new(modality: Maybe<Modality>, terms: InnerTypeTerms, annotation: Type) -> Self {
        let pos = modality
            .get_pos()
            .update(terms.get_pos())
            .update(annotation.get_pos());
        Self {
            modality,
            terms,
            annotation,
            pos,
        }
    }

    pub fn modality(&self) -> &Maybe<Modality> {
        &self.modality
    }

    pub fn terms(&self) -> &InnerTypeTerms {
        &self.terms
    }

    pub fn annotation(&self) -> &Type {
        &self.annotation
    }
}

impl Positioned for InnerTyping {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for InnerTyping {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![];
        extend_maybe(&mut children, &self.modality);
        children.push(&self.terms);
        children.push(&self.annotation);
        ("inner typing".to_string(), children)
    }
}

/// An implicit typing `{x : t := default}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicitTyping {
    typing: InnerTyping,
    default_expr: Maybe<Expr>,
    pos: Position,
}

impl ImplicitTyping {
    pub fn new(typing: InnerTyping, default_expr: Maybe<Expr>) -> Self {
        let pos = typing.get_pos().update(default_expr.get_pos());
        Self {
            typing,
            default_expr,
            pos,
        }
    }

    pub fn typing(&self) -> &InnerTyping {
        &self.typing
    }

    pub fn default_expr(&self) -> &Maybe<Expr> {
        &self.default_expr
    }
}

impl Positioned for ImplicitTyping {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for ImplicitTyping {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![&self.typing];
        extend_maybe(&mut children, &self.default_expr);
        ("implicit typing".to_string(), children)
    }
}

/// The content shapes an enclosed type can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnclosedInner {
    Terms(InnerTypeTerms),
    Typing(InnerTyping),
    Implicit(ImplicitTyping),
}

impl Positioned for EnclosedInner {
    fn get_pos(&self) -> Position {
        match self {
            EnclosedInner::Terms(t) => t.get_pos(),
            EnclosedInner::Typing(t) => t.get_pos(),
            EnclosedInner::Implicit(t) => t.get_pos(),
        }
    }
}

impl Node for EnclosedInner {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            EnclosedInner::Terms(t) => t.describe(),
            EnclosedInner::Typing(t) => t.describe(),
            EnclosedInner::Implicit(t) => t.describe(),
        }
    }
}

/// `( … )` or `{ … }` at the type level; braces mark the implicit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosedType {
    implicit: bool,
    inner: EnclosedInner,
    pos: Position,
}

impl EnclosedType {
    pub fn new(implicit: bool, inner: EnclosedInner) -> Self {
        let pos = inner.get_pos();
        Self {
            implicit,
            inner,
            pos,
        }
    }

    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    pub fn inner(&self) -> &EnclosedInner {
        &self.inner
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for EnclosedType {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for EnclosedType {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let label = if self.implicit {
            "implicit type"
        } else {
            "enclosed type"
        };
        (label.to_string(), vec![&self.inner])
    }
}

/// Member access at the type level: `lhs.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAccess {
    lhs: Type,
    name: Name,
    pos: Position,
}

impl TypeAccess {
    pub fn new(lhs: Type, name: Name) -> Self {
        let pos = lhs.get_pos().update(name.get_pos());
        Self { lhs, name, pos }
    }

    pub fn lhs(&self) -> &Type {
        &self.lhs
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl Positioned for TypeAccess {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for TypeAccess {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        ("access".to_string(), vec![&self.lhs, &self.name])
    }
}
