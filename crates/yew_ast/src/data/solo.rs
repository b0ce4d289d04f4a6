use crate::node::Node;
use yew_tokens::{Position, Positioned};

/// A single value lifted into the positioned-container protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solo<A> {
    item: A,
    pos: Position,
}

impl<A: Positioned> Solo<A> {
    pub fn new(item: A) -> Self {
        let pos = item.get_pos();
        Self { item, pos }
    }

    pub fn get(&self) -> &A {
        &self.item
    }

    pub fn into_inner(self) -> A {
        self.item
    }

    /// Widens this container's position to also cover `p`.
    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl<A> Positioned for Solo<A> {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl<A: Node> Node for Solo<A> {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        ("solo".to_string(), vec![&self.item])
    }
}
