//! The uniform node description protocol.
//!
//! Every syntax value answers `describe` with a display name and its direct
//! children, which is all the tree printer and diagnostics need to walk an
//! arbitrary structure.

use crate::data::{List, Maybe, NonEmpty};
use yew_tokens::{Positioned, Token};

/// A positioned value that can name itself and enumerate its children.
pub trait Node: Positioned {
    fn describe(&self) -> (String, Vec<&dyn Node>);
}

impl Node for Token {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        (Token::describe(self), vec![])
    }
}

/// Pushes the content of a `Maybe` field, flattening `Nothing` away.
pub fn extend_maybe<'a, A: Node>(children: &mut Vec<&'a dyn Node>, m: &'a Maybe<A>) {
    if let Some(a) = m.get() {
        children.push(a);
    }
}

/// Pushes every element of a list field.
pub fn extend_list<'a, A: Node>(children: &mut Vec<&'a dyn Node>, l: &'a List<A>) {
    for a in l.iter() {
        children.push(a);
    }
}

/// Pushes every element of a non-empty field.
pub fn extend_non_empty<'a, A: Node>(children: &mut Vec<&'a dyn Node>, ne: &'a NonEmpty<A>) {
    for a in ne.iter() {
        children.push(a);
    }
}
