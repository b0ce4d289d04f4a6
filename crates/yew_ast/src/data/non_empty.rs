use crate::node::Node;
use yew_tokens::{Position, Positioned};

/// A sequence guaranteed to hold at least one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmpty<A> {
    first: A,
    rest: Vec<A>,
    pos: Position,
}

impl<A: Positioned> NonEmpty<A> {
    pub fn singleton(first: A) -> Self {
        let pos = first.get_pos();
        Self {
            first,
            rest: Vec::new(),
            pos,
        }
    }

    /// Appends an element, widening the position over it.
    #[must_use]
    pub fn snoc(mut self, item: A) -> Self {
        self.pos = self.pos.update(item.get_pos());
        self.rest.push(item);
        self
    }

    /// Splits off the head; the remainder is `None` for a singleton.
    pub fn split_first(self) -> (A, Option<NonEmpty<A>>) {
        let mut it = self.rest.into_iter();
        match it.next() {
            None => (self.first, None),
            Some(second) => {
                let mut tail = NonEmpty::singleton(second);
                for a in it {
                    tail = tail.snoc(a);
                }
                (self.first, Some(tail))
            }
        }
    }

    /// Widens this container's position to also cover `p`.
    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl<A> NonEmpty<A> {
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn head(&self) -> &A {
        &self.first
    }

    pub fn last(&self) -> &A {
        self.rest.last().unwrap_or(&self.first)
    }

    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }
}

impl<A> Positioned for NonEmpty<A> {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl<A: Node> Node for NonEmpty<A> {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        (
            "non-empty list".to_string(),
            self.iter().map(|a| a as &dyn Node).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_split_has_no_tail() {
        let ne = NonEmpty::singleton(Position::new(1, 2));
        let (head, tail) = ne.split_first();
        assert_eq!(head, Position::new(1, 2));
        assert!(tail.is_none());
    }

    #[test]
    fn split_first_preserves_tail_order() {
        let ne = NonEmpty::singleton(Position::new(1, 2))
            .snoc(Position::new(3, 4))
            .snoc(Position::new(5, 6));
        let (head, tail) = ne.split_first();
        let tail = tail.unwrap();
        assert_eq!(head, Position::new(1, 2));
        assert_eq!(*tail.head(), Position::new(3, 4));
        assert_eq!(tail.len(), 2);
    }

    #[test]
    fn position_covers_all_elements() {
        let ne = NonEmpty::singleton(Position::new(4, 6)).snoc(Position::new(10, 12));
        assert_eq!(ne.get_pos(), Position::new(4, 12));
    }
}
