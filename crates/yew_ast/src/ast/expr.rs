//! Expressions: atoms joined by juxtaposition, lambda abstractions, `let`,
//! `case`, and member access.

use crate::ast::body::Typing;
use crate::ast::names::{Ident, Name, Wildcard};
use crate::ast::pattern::{Pattern, PatternAtom};
use crate::data::{Maybe, NonEmpty};
use crate::node::{extend_maybe, extend_non_empty, Node};
use yew_tokens::{Position, Positioned};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Atom(PatternAtom),
    App(Box<ExprApp>),
    Lambda(Box<LambdaAbstraction>),
    Let(Box<LetExpr>),
    Case(Box<CaseExpr>),
    Access(Box<Access>),
}

impl Positioned for Expr {
    fn get_pos(&self) -> Position {
        match self {
            Expr::Atom(a) => a.get_pos(),
            Expr::App(a) => a.get_pos(),
            Expr::Lambda(l) => l.get_pos(),
            Expr::Let(l) => l.get_pos(),
            Expr::Case(c) => c.get_pos(),
            Expr::Access(a) => a.get_pos(),
        }
    }
}

impl Node for Expr {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            Expr::Atom(a) => a.describe(),
            Expr::App(a) => a.describe(),
            Expr::Lambda(l) => l.describe(),
            Expr::Let(l) => l.describe(),
            Expr::Case(c) => c.describe(),
            Expr::Access(a) => a.describe(),
        }
    }
}

/// Juxtaposed application: a head expression and at least one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprApp {
    head: Expr,
    args: NonEmpty<Expr>,
    pos: Position,
}

impl ExprApp {
    pub fn new(head: Expr, args: NonEmpty<Expr>) -> Self {
        let pos = head.get_pos().update(args.get_pos());
        Self { head, args, pos }
    }

    pub fn head(&self) -> &Expr {
        &self.head
    }

    pub fn args(&self) -> &NonEmpty<Expr> {
        &self.args
    }
}

impl Positioned for ExprApp {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for ExprApp {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![&self.head];
        extend_non_empty(&mut children, &self.args);
        ("expression application".to_string(), children)
    }
}

/// One formal of a lambda abstraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LambdaBinder {
    Ident(Ident),
    Wildcard(Wildcard),
    Enclosed(Pattern),
}

impl Positioned for LambdaBinder {
    fn get_pos(&self) -> Position {
        match self {
            LambdaBinder::Ident(i) => i.get_pos(),
            LambdaBinder::Wildcard(w) => w.get_pos(),
            LambdaBinder::Enclosed(p) => p.get_pos(),
        }
    }
}

impl Node for LambdaBinder {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            LambdaBinder::Ident(i) => i.describe(),
            LambdaBinder::Wildcard(w) => w.describe(),
            LambdaBinder::Enclosed(p) => p.describe(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaBinders {
    binders: NonEmpty<LambdaBinder>,
}

impl LambdaBinders {
    pub fn new(binders: NonEmpty<LambdaBinder>) -> Self {
        Self { binders }
    }

    pub fn binders(&self) -> &NonEmpty<LambdaBinder> {
        &self.binders
    }
}

impl Positioned for LambdaBinders {
    fn get_pos(&self) -> Position {
        self.binders.get_pos()
    }
}

impl Node for LambdaBinders {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.binders);
        ("lambda binders".to_string(), children)
    }
}

/// `\ b1, b2, … => body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaAbstraction {
    binders: LambdaBinders,
    body: Expr,
    pos: Position,
}

impl LambdaAbstraction {
    pub fn new(binders: LambdaBinders, body: Expr) -> Self {
        let pos = binders.get_pos().update(body.get_pos());
        Self { binders, body, pos }
    }

    pub fn binders(&self) -> &LambdaBinders {
        &self.binders
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for LambdaAbstraction {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for LambdaAbstraction {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        (
            "lambda abstraction".to_string(),
            vec![&self.binders, &self.body],
        )
    }
}

/// One member of a `let` binding group: `binder := e`, `name : t`, or
/// `name : t := e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetBindingMember {
    Bound {
        binder: Pattern,
        expr: Expr,
        pos: Position,
    },
    Typed {
        typing: Typing,
        bound: Maybe<Expr>,
        pos: Position,
    },
}

impl LetBindingMember {
    pub fn bound(binder: Pattern, expr: Expr) -> Self {
        let pos = binder.get_pos().update(expr.get_pos());
        LetBindingMember::Bound { binder, expr, pos }
    }

    pub fn typed(typing: Typing, bound: Maybe<Expr>) -> Self {
        let pos = typing.get_pos().update(bound.get_pos());
        LetBindingMember::Typed { typing, bound, pos }
    }
}

impl Positioned for LetBindingMember {
    fn get_pos(&self) -> Position {
        match self {
            LetBindingMember::Bound { pos, .. } | LetBindingMember::Typed { pos, .. } => *pos,
        }
    }
}

impl Node for LetBindingMember {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            LetBindingMember::Bound { binder, expr, .. } => (
                "let bindings".to_string(),
                vec![binder as &dyn Node, expr as &dyn Node],
            ),
            LetBindingMember::Typed { typing, bound, .. } => {
                let mut children: Vec<&dyn Node> = vec![typing];
                extend_maybe(&mut children, bound);
                ("let bindings".to_string(), children)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetBinding {
    members: NonEmpty<LetBindingMember>,
    pos: Position,
}

impl LetBinding {
    pub fn new(members: NonEmpty<LetBindingMember>) -> Self {
        let pos = members.get_pos();
        Self { members, pos }
    }

    pub fn members(&self) -> &NonEmpty<LetBindingMember> {
        &self.members
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for LetBinding {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for LetBinding {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.members);
        ("let bindings".to_string(), children)
    }
}

/// `let bindings in body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetExpr {
    binding: LetBinding,
    body: Expr,
    pos: Position,
}

impl LetExpr {
    pub fn new(binding: LetBinding, body: Expr) -> Self {
        let pos = binding.get_pos().update(body.get_pos());
        Self { binding, body, pos }
    }

    pub fn binding(&self) -> &LetBinding {
        &self.binding
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for LetExpr {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for LetExpr {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        ("let expression".to_string(), vec![&self.binding, &self.body])
    }
}

/// `pattern => body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseArm {
    pattern: Pattern,
    body: Expr,
    pos: Position,
}

impl CaseArm {
    pub fn new(pattern: Pattern, body: Expr) -> Self {
        let pos = pattern.get_pos().update(body.get_pos());
        Self { pattern, body, pos }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }
}

impl Positioned for CaseArm {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for CaseArm {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        ("case arm".to_string(), vec![&self.pattern, &self.body])
    }
}

/// `case scrutinee of arms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseExpr {
    scrutinee: Pattern,
    arms: NonEmpty<CaseArm>,
    pos: Position,
}

impl CaseExpr {
    pub fn new(scrutinee: Pattern, arms: NonEmpty<CaseArm>) -> Self {
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

    pub fn arms(&self) -> &NonEmpty<CaseArm> {
        &self.arms
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for CaseExpr {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for CaseExpr {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![&self.scrutinee];
        extend_non_empty(&mut children, &self.arms);
        ("case expression".to_string(), children)
    }
}

/// Member access `lhs.name`; only legal in an RHS position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Access {
    lhs: Expr,
    name: Name,
    pos: Position,
}

impl Access {
    pub fn new(lhs: Expr, name: Name) -> Self {
        let pos = lhs.get_pos().update(name.get_pos());
        Self { lhs, name, pos }
    }

    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl Positioned for Access {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for Access {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        ("access".to_string(), vec![&self.lhs, &self.name])
    }
}

impl From<PatternAtom> for Expr {
    fn from(atom: PatternAtom) -> Self {
        Expr::Atom(atom)
    }
}
