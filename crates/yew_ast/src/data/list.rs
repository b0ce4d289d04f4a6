use crate::data::{Maybe, NonEmpty};
use crate::node::Node;
use yew_tokens::{Position, Positioned};

/// An ordered sequence of zero or more positioned values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<A> {
    elements: Vec<A>,
    pos: Position,
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            pos: Position::zero(),
        }
    }
}

impl<A: Positioned> List<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element, widening the list position over it.
    #[must_use]
    pub fn snoc(mut self, item: A) -> Self {
        self.pos = self.pos.update(item.get_pos());
        self.elements.push(item);
        self
    }

    /// Concatenates two lists, widening over the argument.
    #[must_use]
    pub fn append(mut self, other: List<A>) -> Self {
        self.pos = self.pos.update(other.pos);
        self.elements.extend(other.elements);
        self
    }

    /// A non-empty view of this list, or `Nothing` when it has no elements.
    pub fn strengthen(self) -> Maybe<NonEmpty<A>> {
        let pos = self.pos;
        let mut it = self.elements.into_iter();
        match it.next() {
            None => Maybe::nothing(pos),
            Some(first) => {
                let mut ne = NonEmpty::singleton(first);
                for a in it {
                    ne = ne.snoc(a);
                }
                Maybe::just(ne)
            }
        }
    }

    /// Widens this container's position to also cover `p`.
    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl<A> List<A> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn head(&self) -> Option<&A> {
        self.elements.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[A] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<A> {
        self.elements
    }
}

impl<A> Positioned for List<A> {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl<A: Node> Node for List<A> {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        (
            "list".to_string(),
            self.elements.iter().map(|a| a as &dyn Node).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snoc_widens_position() {
        let l = List::new()
            .snoc(Position::new(3, 5))
            .snoc(Position::new(9, 12));
        assert_eq!(l.get_pos(), Position::new(3, 12));
        assert_eq!(l.len(), 2);
    }

    #[test]
    fn strengthen_empty_is_nothing() {
        let l: List<Position> = List::new();
        assert!(l.strengthen().is_nothing());
    }

    #[test]
    fn strengthen_keeps_order() {
        let l = List::new()
            .snoc(Position::new(1, 2))
            .snoc(Position::new(3, 4));
        let ne = l.strengthen().into_inner().unwrap();
        assert_eq!(*ne.head(), Position::new(1, 2));
        assert_eq!(ne.len(), 2);
    }
}
