use crate::data::List;
use crate::node::Node;
use std::fmt::{self, Display, Formatter};
use yew_tokens::{Position, Positioned};

/// A single positioned diagnostic; `fatal` distinguishes errors from
/// warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Err {
    msg: String,
    fatal: bool,
    pos: Position,
}

/// The accumulated diagnostics of a failed parse.
pub type Ers = List<Err>;

impl Err {
    pub fn error(msg: impl Into<String>, at: impl Positioned) -> Self {
        Self {
            msg: msg.into(),
            fatal: true,
            pos: at.get_pos(),
        }
    }

    pub fn warning(msg: impl Into<String>, at: impl Positioned) -> Self {
        Self {
            msg: msg.into(),
            fatal: false,
            pos: at.get_pos(),
        }
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Lifts this diagnostic into a one-element error list.
    pub fn into_ers(self) -> Ers {
        List::new().snoc(self)
    }

    /// Widens the attributed range to also cover `p`.
    pub fn widen(&mut self, p: impl Positioned) {
        self.pos = self.pos.update(p);
    }
}

impl Positioned for Err {
    fn get_pos(&self) -> Position {
        self.pos
    }
}

impl Display for Err {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let kind = if self.fatal { "error" } else { "warning" };
        write!(f, "{kind}: {}", self.msg)
    }
}

impl Node for Err {
    fn describe(&self) -> (String, Vec<&dyn Node>) {
        (self.to_string(), vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_with_severity_prefix() {
        let e = Err::error("expected type", Position::new(1, 4));
        let w = Err::warning("unused import", Position::new(5, 9));
        assert_eq!(e.to_string(), "error: expected type");
        assert_eq!(w.to_string(), "warning: unused import");
    }

    #[test]
    fn into_ers_holds_the_position() {
        let ers = Err::error("expected pattern", Position::new(2, 6)).into_ers();
        assert_eq!(ers.len(), 1);
        assert_eq!(ers.get_pos(), Position::new(2, 6));
    }
}
