//! Error types for the outline library.
//!
//! This module defines all error types that can occur while building, editing
//! and rendering a bookmark tree.

use crate::outline::NodeId;

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parent access on a node that was never attached to a tree
    #[error("Bookmark '{title}' has no parent")]
    UnattachedNode {
        /// Title of the orphaned node
        title: String,
    },

    /// Node id does not belong to this outline
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Node already has a parent
    #[error("Bookmark '{title}' is already attached")]
    AlreadyAttached {
        /// Title of the attached node
        title: String,
    },

    /// The root sentinel cannot be placed below another node
    #[error("The root bookmark cannot be attached as a child")]
    RootNotAttachable,

    /// Title and sequence label of the root sentinel are fixed
    #[error("The root bookmark cannot be edited")]
    RootNotEditable,

    /// Attaching would place a bookmark below the configured depth limit
    #[error("Bookmark '{title}' would reach level {level}, beyond the depth limit of {max_depth}")]
    DepthLimitExceeded {
        /// Title of the node being attached
        title: String,
        /// Deepest level the attached subtree would reach
        level: u32,
        /// Configured `OutlineOptions::max_depth`
        max_depth: u32,
    },

    /// Attaching would make a node its own ancestor
    #[error("Circular reference detected: bookmark '{title}' would become its own ancestor")]
    CircularReference {
        /// Title of the node being attached
        title: String,
    },

    /// Child level does not sit one below its parent
    #[error("Level mismatch for bookmark '{title}': expected {expected}, found {found}")]
    LevelMismatch {
        /// Title of the node being attached
        title: String,
        /// Level required under the chosen parent
        expected: i32,
        /// Level the node was created with
        found: i32,
    },

    /// Insert position past the end of a child list
    #[error("Index {index} out of range for child list of length {len}")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Current list length
        len: usize,
    },

    /// New child order is not a permutation of the current one
    #[error("Invalid reorder: {0}")]
    InvalidReorder(String),

    /// Traversal depth limit exceeded
    #[error("Recursion depth limit exceeded (max: {0})")]
    RecursionLimitExceeded(u32),
}
