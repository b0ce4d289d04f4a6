//! Generic positioned containers.
//!
//! Every container carries the convex hull of its elements' positions and
//! participates in the node description protocol, so grammar nodes can be
//! assembled and rendered uniformly.

mod either;
mod err;
mod list;
mod maybe;
mod non_empty;
mod pair;
mod solo;

pub use either::Either;
pub use err::{Err, Ers};
pub use list::List;
pub use maybe::Maybe;
pub use non_empty::NonEmpty;
pub use pair::Pair;
pub use solo::Solo;
