use crate::node::Node;
use yew_tokens::{Position, Positioned};

/// An optional positioned value.
///
/// Unlike a bare `Option`, a `Nothing` still carries a position so a
/// surrounding node can widen over where the value would have been.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maybe<A> {
    value: Option<A>,
    pos: Position,
}

impl<A: Positioned> Maybe<A> {
    pub fn just(value: A) -> Self {
        let pos = value.get_pos();
        Self {
            value: Some(value),
            pos,
        }
    }

    pub fn map<B: Positioned>(self, f: impl FnOnce(A) -> B) -> Maybe<B> {
        match self.value {
            Some(a) => Maybe::just(f(a)),
            None => Maybe::nothing(self.pos),
        }
    }

    pub fn bind<B: Positioned>(self, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
        match self.value {
            Some(a) => f(a),
            None => Maybe::nothing(self.pos),
        }
    }

    /// Widens this container's position to also cover `p`.
    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl<A> Maybe<A> {
    pub fn nothing(pos: impl Positioned) -> Self {
        Self {
            value: None,
            pos: pos.get_pos(),
        }
    }

    pub fn is_nothing(&self) -> bool {
        self.value.is_none()
    }

    pub fn is_just(&self) -> bool {
        self.value.is_some()
    }

    pub fn get(&self) -> Option<&A> {
        self.value.as_ref()
    }

    pub fn into_inner(self) -> Option<A> {
        self.value
    }
}

impl<A> Positioned for Maybe<A> {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl<A: Node> Node for Maybe<A> {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let children = match &self.value {
            Some(a) => vec![a as &dyn Node],
            None => vec![],
        };
        ("maybe".to_string(), children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_carries_a_position() {
        let m: Maybe<Position> = Maybe::nothing(Position::new(4, 7));
        assert!(m.is_nothing());
        assert_eq!(m.get_pos(), Position::new(4, 7));
    }

    #[test]
    fn just_takes_the_value_position() {
        let m = Maybe::just(Position::new(2, 9));
        assert_eq!(m.get_pos(), Position::new(2, 9));
        assert_eq!(m.into_inner(), Some(Position::new(2, 9)));
    }

    #[test]
    fn map_preserves_nothing() {
        let m: Maybe<Position> = Maybe::nothing(Position::zero());
        assert!(m.map(|p| p).is_nothing());
    }
}
