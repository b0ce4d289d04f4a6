//! Annotations: `--@name …` flat form and `[@name …]` enclosed form.

use crate::ast::names::Ident;
use crate::ast::token_node;
use crate::data::{List, Maybe, NonEmpty};
use crate::node::{extend_list, extend_non_empty, Node};
use yew_tokens::{Position, Positioned, Token};

token_node!(
    /// A whole-line annotation pulled out of a comment.
    FlatAnnotation,
    "flat annotation"
);

/// A bracketed annotation: an identifier followed by its raw argument
/// tokens, brackets balanced but not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosedAnnotation {
    id: Ident,
    arguments: List<Token>,
    pos: Position,
}

impl EnclosedAnnotation {
    pub fn new(id: Ident, arguments: List<Token>) -> Self {
        let pos = id.get_pos().update(arguments.get_pos());
        Self {
            id,
            arguments,
            pos,
        }
    }

    pub fn id(&self) -> &Ident {
        &self.id
    }

    pub fn arguments(&self) -> &List<Token> {
        &self.arguments
    }

    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for EnclosedAnnotation {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for EnclosedAnnotation {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children: Vec<&dyn Node> = vec![&self.id];
        extend_list(&mut children, &self.arguments);
        ("enclosed annotation".to_string(), children)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Flat(FlatAnnotation),
    Enclosed(EnclosedAnnotation),
}

impl Positioned for Annotation {
    fn get_pos(&self) -> Position {
        match self {
            Annotation::Flat(a) => a.get_pos(),
            Annotation::Enclosed(a) => a.get_pos(),
        }
    }
}

impl Node for Annotation {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        match self {
            Annotation::Flat(a) => a.describe(),
            Annotation::Enclosed(a) => a.describe(),
        }
    }
}

/// A block of one or more annotations attached to a following node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotations {
    annotations: NonEmpty<Annotation>,
}

impl Annotations {
    pub fn new(annotations: NonEmpty<Annotation>) -> Self {
        Self { annotations }
    }

    pub fn annotations(&self) -> &NonEmpty<Annotation> {
        &self.annotations
    }
}

impl Positioned for Annotations {
    fn get_pos(&self) -> Position {
        self.annotations.get_pos()
    }
}

impl Node for Annotations {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_non_empty(&mut children, &self.annotations);
        ("annotations".to_string(), children)
    }
}

/// A node that can receive a preceding annotation block.
pub trait Annotate {
    fn annotate(&mut self, annotations: Maybe<Annotations>);
}
