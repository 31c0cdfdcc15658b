//! Cursor-style outline construction.
//!
//! # Example
//!
//! ```
//! use pdf_outline::OutlineBuilder;
//!
//! # fn main() -> pdf_outline::Result<()> {
//! let mut builder = OutlineBuilder::new();
//! builder.item("Chapter 1", Some(1))?;
//! builder.child("Section 1.1", Some(2))?.with_seq("1.1");
//! builder.pop(); // Back to Chapter 1
//! builder.child("Section 1.2", Some(4))?;
//! builder.root();
//! builder.item("Chapter 2", Some(9))?;
//!
//! let outline = builder.build();
//! assert_eq!(outline.children(outline.root())?.len(), 2);
//! # Ok(())
//! # }
//! ```

use super::node::NodeId;
use super::tree::Outline;
use crate::config::OutlineOptions;
use crate::error::Result;

/// Builder for outlines.
///
/// Keeps a path from the top level down to the most recently added entry;
/// new children go under the end of that path. Every entry is linked with
/// [`Outline::attach_child`], so levels and parent links are always
/// consistent.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    outline: Outline,
    /// Stack of ids from a top-level entry down to the current entry
    current_path: Vec<NodeId>,
}

impl OutlineBuilder {
    /// Create a new outline builder.
    pub fn new() -> Self {
        Self::with_options(OutlineOptions::default())
    }

    /// Create a builder whose outline uses the given options.
    pub fn with_options(options: OutlineOptions) -> Self {
        Self {
            outline: Outline::with_options(options),
            current_path: Vec::new(),
        }
    }

    /// Add a top-level entry and make it current.
    pub fn item(&mut self, title: impl Into<String>, page_num: Option<i32>) -> Result<&mut Self> {
        self.current_path.clear();
        let root = self.outline.root();
        let id = self.outline.create_node(title, page_num, 0);
        self.outline.attach_child(root, id)?;
        self.current_path.push(id);
        Ok(self)
    }

    /// Add a child below the current entry and make it current.
    ///
    /// With no current entry this adds a top-level entry.
    pub fn child(&mut self, title: impl Into<String>, page_num: Option<i32>) -> Result<&mut Self> {
        let parent = match self.current() {
            Some(parent) => parent,
            None => return self.item(title, page_num),
        };

        let depth = self.current_path.len() as u32;
        let id = self.outline.create_node(title, page_num, depth);
        self.outline.attach_child(parent, id)?;
        self.current_path.push(id);
        Ok(self)
    }

    /// Go back up one level in the hierarchy.
    pub fn pop(&mut self) -> &mut Self {
        self.current_path.pop();
        self
    }

    /// Go back to the top level.
    pub fn root(&mut self) -> &mut Self {
        self.current_path.clear();
        self
    }

    /// Set the sequence label of the current entry.
    ///
    /// Malformed labels are dropped, as with
    /// [`BookmarkNode::set_seq`](super::BookmarkNode::set_seq).
    pub fn with_seq(&mut self, seq: &str) -> &mut Self {
        if let Some(node) = self.current().and_then(|id| self.outline.node_mut(id).ok()) {
            node.set_seq(Some(seq));
        }
        self
    }

    /// Record the source line of the current entry.
    pub fn with_index(&mut self, index: usize) -> &mut Self {
        if let Some(node) = self.current().and_then(|id| self.outline.node_mut(id).ok()) {
            node.set_index(index);
        }
        self
    }

    /// The most recently added entry on the current path.
    pub fn current(&self) -> Option<NodeId> {
        self.current_path.last().copied()
    }

    /// Check if no entry has been added.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Get the number of top-level entries.
    pub fn len(&self) -> usize {
        self.outline.node(self.outline.root()).map_or(0, |root| root.children().len())
    }

    /// Finish building.
    pub fn build(self) -> Outline {
        self.outline
    }
}
