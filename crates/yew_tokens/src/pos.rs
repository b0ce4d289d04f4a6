//! Byte-range positions.
//!
//! A [`Position`] is a closed-open `(start, end)` byte range into a source
//! buffer. The zero position (`start == end == 0`) means "no location"; a
//! component equal to zero is treated as unset when two ranges are merged,
//! so widening with the zero position is the identity.

use std::fmt::{self, Display, Formatter};

/// A closed-open byte range into a source buffer.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    start: usize,
    end: usize,
}

/// Anything that occupies a byte range of the source.
pub trait Positioned {
    fn get_pos(&self) -> Position;

    /// The `(start, end)` pair of this value's position.
    fn pos(&self) -> (usize, usize) {
        let p = self.get_pos();
        (p.start, p.end)
    }
}

impl Positioned for Position {
    fn get_pos(&self) -> Position {
        *self
    }
}

impl<P: Positioned + ?Sized> Positioned for &P {
    fn get_pos(&self) -> Position {
        (**self).get_pos()
    }
}

fn min_positive(a: usize, b: usize) -> usize {
    if a == 0 {
        b
    } else if b == 0 {
        a
    } else {
        a.min(b)
    }
}

fn max_positive(a: usize, b: usize) -> usize {
    if a == 0 {
        b
    } else if b == 0 {
        a
    } else {
        a.max(b)
    }
}

impl Position {
    /// A position with explicit endpoints.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The "no location" position.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_zero(&self) -> bool {
        self.start == 0 && self.end == 0
    }

    /// Widens the receiver to cover both ranges, biased to non-zero
    /// components. `p.update(zero) == p` and `p.update(p) == p`.
    #[must_use]
    pub fn update(self, other: impl Positioned) -> Position {
        let q = other.get_pos();
        let (a, b) = ascend(self);
        let (c, d) = ascend(q);
        Position {
            start: min_positive(a, c),
            end: max_positive(b, d),
        }
    }
}

fn ascend(p: Position) -> (usize, usize) {
    if p.start > p.end {
        (p.end, p.start)
    } else {
        (p.start, p.end)
    }
}

/// The weakest range covering every given position, ignoring zero components
/// where possible.
pub fn range_over<P: Positioned>(first: &P, rest: &[P]) -> Position {
    let mut acc = first.get_pos();
    for p in rest {
        acc = acc.update(p.get_pos());
    }
    acc
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_with_zero_is_identity() {
        let p = Position::new(3, 9);
        assert_eq!(p.update(Position::zero()), p);
    }

    #[test]
    fn update_is_idempotent() {
        let p = Position::new(3, 9);
        assert_eq!(p.update(p), p);
    }

    #[test]
    fn update_widens() {
        let p = Position::new(3, 9);
        let q = Position::new(12, 20);
        assert_eq!(p.update(q), Position::new(3, 20));
        assert_eq!(q.update(p), Position::new(3, 20));
    }

    #[test]
    fn range_over_covers_all() {
        let ps = [Position::new(5, 6), Position::zero(), Position::new(1, 2)];
        assert_eq!(range_over(&ps[0], &ps[1..]), Position::new(1, 6));
    }
}
