//! Patterns: atoms, wildcards, juxtaposed application, and enclosure.

use crate::ast::names::{Hole, Literal, Name, Wildcard};
use crate::data::NonEmpty;
use crate::node::{extend_non_empty, Node};
use yew_tokens::{Position, Positioned};

/// The indivisible pattern forms; also the atom layer of expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternAtom {
    Literal(Literal),
    Name(Name),
    Hole(Hole),
}

impl Positioned for PatternAtom {
    fn get_pos(&self) -> Position {
        match self {
            PatternAtom::Literal(l) => l.get_pos(),
            PatternAtom::Name(n) => n.get_pos(),
            PatternAtom::Hole(h) => h.get_pos(),
        }
    }
}

impl Node for PatternAtom {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            PatternAtom::Literal(l) => l.describe(),
            PatternAtom::Name(n) => n.describe(),
            PatternAtom::Hole(h) => h.describe(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Atom(PatternAtom),
    Wildcard(Wildcard),
    App(Box<PatternApp>),
    Enclosed(Box<PatternEnclosed>),
}

impl Positioned for Pattern {
    fn get_pos(&self) -> Position {
        match self {
            Pattern::Atom(a) => a.get_pos(),
            Pattern::Wildcard(w) => w.get_pos(),
            Pattern::App(a) => a.get_pos(),
            Pattern::Enclosed(e) => e.get_pos(),
        }
    }
}

impl Node for Pattern {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            Pattern::Atom(a) => a.describe(),
            Pattern::Wildcard(w) => w.describe(),
            Pattern::App(a) => a.describe(),
            Pattern::Enclosed(e) => e.describe(),
        }
    }
}

/// Juxtaposed pattern application: a head followed by at least one
/// argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternApp {
    head: Pattern,
    args: NonEmpty<Pattern>,
    pos: Position,
}

impl PatternApp {
    pub fn new(head: Pattern, args: NonEmpty<Pattern>) -> Self {
        let pos = head.get_pos().update(args.get_pos());
        Self { head, args, pos }
    }

    pub fn head(&self) -> &Pattern {
        &self.head
    }

    pub fn args(&self) -> &NonEmpty<Pattern> {
        &self.args
    }
}

impl Positioned for PatternApp {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for PatternApp {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![&self.head];
        extend_non_empty(&mut children, &self.args);
        ("pattern application".to_string(), children)
    }
}

/// A parenthesised or braced pattern sequence; `implicit` marks the braced
/// form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEnclosed {
    patterns: NonEmpty<Pattern>,
    implicit: bool,
    pos: Position,
}

impl PatternEnclosed {
    pub fn new(patterns: NonEmpty<Pattern>, implicit: bool) -> Self {
        let pos = patterns.get_pos();
        Self {
            patterns,
            implicit,
            pos,
        }
    }

    pub fn patterns(&self) -> &NonEmpty<Pattern> {
        &self.patterns
    }

    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for PatternEnclosed {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for PatternEnclosed {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let label = if self.implicit {
            "implicit argument pattern"
        } else {
            "enclosed pattern"
        };
        let mut children = vec![];
        extend_non_empty(&mut children, &self.patterns);
        (label.to_string(), children)
    }
}

impl From<PatternAtom> for Pattern {
    fn from(atom: PatternAtom) -> Self {
        Pattern::Atom(atom)
    }
}
