//! Renders a node and its descendants as a box-drawing tree.

use crate::node::Node;
use std::fmt::{self, Write};

const PADDING: &str = "    ";
const BRANCH: &str = "│   ";
const CHILD_BRANCH: &str = "├── ";
const FINAL_CHILD: &str = "└── ";

fn write_tree_at<W: Write>(w: &mut W, n: &dyn Node, lhs: &str) -> fmt::Result {
    let (name, children) = n.describe();
    w.write_str(&name)?;

    let Some((last, init)) = children.split_last() else {
        return Ok(());
    };

    for child in init {
        write!(w, "\n{lhs}{CHILD_BRANCH}")?;
        write_tree_at(w, *child, &format!("{lhs}{BRANCH}"))?;
    }
    write!(w, "\n{lhs}{FINAL_CHILD}")?;
    write_tree_at(w, *last, &format!("{lhs}{PADDING}"))
}

pub fn write_tree<W: Write>(w: &mut W, n: &dyn Node) -> fmt::Result {
    write_tree_at(w, n, "")
}

pub fn render_tree(n: &dyn Node) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_tree(&mut out, n);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_tokens::{Position, Positioned};

    struct Mock {
        name: &'static str,
        children: Vec<Mock>,
    }

    fn mk(name: &'static str, children: Vec<Mock>) -> Mock {
        Mock { name, children }
    }

    impl Positioned for Mock {
        fn get_pos(&self) -> Position {
            Position::zero()
        }
    }

    impl Node for Mock {
        fn describe(&self) -> (String, Vec<&dyn Node>) {
            (
                self.name.to_string(),
                self.children.iter().map(|c| c as &dyn Node).collect(),
            )
        }
    }

    #[test]
    fn renders_leaf() {
        assert_eq!(render_tree(&mk("root", vec![])), "root");
    }

    #[test]
    fn renders_two_level_tree() {
        let tree = mk(
            "root",
            vec![
                mk("child1", vec![mk("child1.1", vec![]), mk("child1.2", vec![])]),
                mk("child2", vec![mk("child2.1", vec![]), mk("child2.2", vec![])]),
            ],
        );
        assert_eq!(
            render_tree(&tree),
            "root\n\
             ├── child1\n\
             │   ├── child1.1\n\
             │   └── child1.2\n\
             └── child2\n    \
                 ├── child2.1\n    \
                 └── child2.2"
        );
    }

    #[test]
    fn renders_deep_single_child_chain_with_sibling() {
        let tree = mk(
            "root",
            vec![mk(
                "child1",
                vec![mk(
                    "child1.1",
                    vec![
                        mk(
                            "child1.1.x2",
                            vec![mk("child1.1.x3", vec![mk("child1.1.x4", vec![])])],
                        ),
                        mk("child1.1.2", vec![mk("child1.1.2.1", vec![])]),
                    ],
                )],
            )],
        );
        let want = "root\n\
            └── child1\n    \
                └── child1.1\n        \
                    ├── child1.1.x2\n        \
                    │   └── child1.1.x3\n        \
                    │       └── child1.1.x4\n        \
                    └── child1.1.2\n            \
                        └── child1.1.2.1";
        assert_eq!(render_tree(&tree), want);
    }
}
