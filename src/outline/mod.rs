//! Document outline (bookmark) tree.
//!
//! The outline is stored as an arena: [`Outline`] owns every
//! [`BookmarkNode`], nodes refer to each other through [`NodeId`] handles, and
//! a hidden root sentinel sits above the top-level entries.
//!
//! - [`node`]: the node type, its [`Level`] and handle types
//! - [`seq`]: validation of dotted sequence labels ("1.2.5")
//! - [`tree`]: attach, detach and reorder operations plus parent lookup
//! - [`traversal`]: pre-order walk in document order
//! - [`text`]: tab-indented text rendering
//! - [`builder`]: cursor-style construction of a whole outline

pub mod builder;
pub mod node;
pub mod seq;
pub mod text;
pub mod traversal;
pub mod tree;

pub use builder::OutlineBuilder;
pub use node::{BookmarkNode, Level, NodeId};
pub use seq::is_valid_seq;
pub use text::write_line;
pub use traversal::Preorder;
pub use tree::Outline;
