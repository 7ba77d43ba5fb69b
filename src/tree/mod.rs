//! Path tree construction and traversal
//!
//! Raw path strings are normalized into segments (`path`), inserted into a
//! prefix-compressed tree (`node`), and fed in by source adapters through the
//! `PathSink` trait (`builder`).

mod builder;
mod node;
mod path;

pub use builder::{PathSink, TreeBuilder};
pub use node::{PathTree, TreeNode, Visit};
pub use path::segments;
