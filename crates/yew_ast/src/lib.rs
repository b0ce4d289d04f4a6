//! The Yew abstract syntax tree: generic positioned containers, the node
//! description protocol used for tree rendering, and the concrete grammar
//! nodes produced by the parser.

pub mod ast;
pub mod data;
pub mod node;
pub mod tree;

pub use node::Node;
pub use tree::{render_tree, write_tree};
