//! Outline traversal in document order.
//!
//! Implements pre-order traversal: a node is visited before its children and
//! children are visited in list order. The root sentinel is never visited but
//! its children are walked.

use super::node::{BookmarkNode, NodeId};
use super::tree::Outline;
use crate::error::{Error, Result};

impl Outline {
    /// Walk the subtree at `start` in pre-order, calling `visit` on every
    /// non-root node.
    ///
    /// A node whose level reaches `OutlineOptions::max_depth` aborts the walk
    /// with [`Error::RecursionLimitExceeded`]. Attaching already enforces the
    /// limit, so this only trips on an outline built outside that check.
    pub fn traverse<F>(&self, start: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(NodeId, &BookmarkNode),
    {
        self.traverse_node(start, &mut visit)
    }

    /// Recursively traverse a node.
    ///
    /// 1. Visit the node itself unless it is the root
    /// 2. Recursively process children in order
    fn traverse_node<F>(&self, id: NodeId, visit: &mut F) -> Result<()>
    where
        F: FnMut(NodeId, &BookmarkNode),
    {
        let node = self.node(id)?;
        let max_depth = self.options.max_depth;
        if node.level().depth().is_some_and(|depth| depth >= max_depth) {
            log::warn!("Traversal stopped at {}: level exceeds {}", id, max_depth);
            return Err(Error::RecursionLimitExceeded(max_depth));
        }

        if !node.is_root() {
            visit(id, node);
        }

        for &child in node.children() {
            self.traverse_node(child, visit)?;
        }

        Ok(())
    }

    /// Iterate the subtree at `start` in the same order as [`Outline::traverse`].
    ///
    /// Uses an explicit stack rather than recursion.
    pub fn preorder(&self, start: NodeId) -> Result<Preorder<'_>> {
        self.node(start)?;
        Ok(Preorder {
            outline: self,
            stack: vec![start],
        })
    }

    /// Number of bookmarks below `id`, not counting `id` itself.
    pub fn descendant_count(&self, id: NodeId) -> Result<usize> {
        let node = self.node(id)?;
        let mut count = 0;
        for &child in node.children() {
            count += self.preorder(child)?.count();
        }
        Ok(count)
    }
}

/// Pre-order iterator over an outline subtree.
///
/// Created by [`Outline::preorder`].
#[derive(Debug)]
pub struct Preorder<'a> {
    outline: &'a Outline,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a BookmarkNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.outline.node(id).ok()?;
            self.stack.extend(node.children().iter().rev());
            if !node.is_root() {
                return Some((id, node));
            }
        }
        None
    }
}
