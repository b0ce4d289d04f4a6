use crate::node::Node;
use yew_tokens::{Position, Positioned};

/// A positioned sum of two alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<A, B> {
    Inl(A),
    Inr(B),
}

impl<A, B> Either<A, B> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Inl(_))
    }

    pub fn cases<R>(self, f: impl FnOnce(A) -> R, g: impl FnOnce(B) -> R) -> R {
        match self {
            Either::Inl(a) => f(a),
            Either::Inr(b) => g(b),
        }
    }

    pub fn as_ref(&self) -> Either<&A, &B> {
        match self {
            Either::Inl(a) => Either::Inl(a),
            Either::Inr(b) => Either::Inr(b),
        }
    }
}

impl<A: Positioned, B: Positioned> Positioned for Either<A, B> {
    fn get_pos(&self) -> Position {
        match self {
            Either::Inl(a) => a.get_pos(),
            Either::Inr(b) => b.get_pos(),
        }
    }
}

impl<A: Node, B: Node> Node for Either<A, B> {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        let child: &dyn Node = match self {
            Either::Inl(a) => a,
            Either::Inr(b) => b,
        };
        ("either".to_string(), vec![child])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cases_applies_the_matching_arm() {
        let l: Either<u8, &str> = Either::Inl(3);
        let r: Either<u8, &str> = Either::Inr("x");
        assert_eq!(l.cases(|a| a as usize, |s| s.len()), 3);
        assert_eq!(r.cases(|a| a as usize, |s| s.len()), 1);
    }

    #[test]
    fn is_left_discriminates() {
        assert!(Either::<u8, u8>::Inl(0).is_left());
        assert!(!Either::<u8, u8>::Inr(0).is_left());
    }
}
