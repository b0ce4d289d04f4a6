//! The root node of a parsed source file.

use crate::ast::annotation::Annotations;
use crate::ast::body::Body;
use crate::ast::header::Header;
use crate::data::Maybe;
use crate::node::{extend_maybe, Node};
use yew_tokens::{Position, Positioned};

/// `{header} {body} {footer annotations}` — all three optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YewSource {
    header: Maybe<Header>,
    body: Maybe<Body>,
    footer: Maybe<Annotations>,
    pos: Position,
}

impl YewSource {
    pub fn new(header: Maybe<Header>, body: Maybe<Body>, footer: Maybe<Annotations>) -> Self {
        let pos = header
            .get_pos()
            .update(body.get_pos())
            .update(footer.get_pos());
        Self {
            header,
            body,
            footer,
            pos,
        }
    }

    pub fn header(&self) -> &Maybe<Header> {
        &self.header
    }

    pub fn body(&self) -> &Maybe<Body> {
        &self.body
    }

    pub fn footer(&self) -> &Maybe<Annotations> {
        &self.footer
    }
}

impl Positioned for YewSource {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Node for YewSource {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let mut children = vec![];
        extend_maybe(&mut children, &self.header);
        extend_maybe(&mut children, &self.body);
        extend_maybe(&mut children, &self.footer);
        ("yew source".to_string(), children)
    }
}
