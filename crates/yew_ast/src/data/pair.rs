use crate::node::Node;
use yew_tokens::{Position, Positioned};

/// Two values whose position is the hull of both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<A, B> {
    first: A,
    second: B,
    pos: Position,
}

impl<A: Positioned, B: Positioned> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        let pos = first.get_pos().update(second.get_pos());
        Self { first, second, pos }
    }

    pub fn fst(&self) -> &A {
        &self.first
    }

    pub fn snd(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Widens this container's position to also cover `p`.
    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl<A, B> Positioned for Pair<A, B> {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl<A: Node, B: Node> Node for Pair<A, B> {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        ("pair".to_string(), vec![&self.first, &self.second])
    }
}
