//! Outline arena and structural operations.
//!
//! All structural edits go through [`Outline`], which keeps both halves of a
//! parent/child link in step: a node is either fully attached (listed in its
//! parent's children and pointing back at that parent) or fully detached.

use super::node::{BookmarkNode, NodeId};
use crate::config::OutlineOptions;
use crate::error::{Error, Result};

/// A bookmark tree rooted at a hidden sentinel node.
///
/// # Example
///
/// ```
/// use pdf_outline::Outline;
///
/// # fn main() -> pdf_outline::Result<()> {
/// let mut outline = Outline::new();
/// let chapter = outline.create_node("Chapter 1", Some(5), 0);
/// outline.attach_child(outline.root(), chapter)?;
///
/// let section = outline.create_node("Section 1.1", Some(6), 1);
/// outline.attach_child(chapter, section)?;
///
/// assert_eq!(outline.parent(section)?, chapter);
/// assert_eq!(outline.owner_list(chapter)?, &[chapter]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Outline {
    nodes: Vec<BookmarkNode>,
    root: NodeId,
    pub(crate) options: OutlineOptions,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    /// Create an empty outline with default options.
    pub fn new() -> Self {
        Self::with_options(OutlineOptions::default())
    }

    /// Create an empty outline with the given options.
    pub fn with_options(options: OutlineOptions) -> Self {
        Self {
            nodes: vec![BookmarkNode::root()],
            root: NodeId::from_raw(0),
            options,
        }
    }

    /// Configuration in effect for this outline.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// The hidden root sentinel.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of bookmarks stored, attached or not, excluding the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root.index()].children.is_empty()
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Result<&BookmarkNode> {
        self.nodes.get(id.index()).ok_or(Error::NodeNotFound(id))
    }

    /// Look up a node for editing its title, sequence label or index.
    ///
    /// The root sentinel is not editable.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut BookmarkNode> {
        if id == self.root {
            return Err(Error::RootNotEditable);
        }
        self.nodes.get_mut(id.index()).ok_or(Error::NodeNotFound(id))
    }

    /// Deepest level reached in the subtree at `id`.
    fn deepest_level(&self, id: NodeId) -> Result<Option<u32>> {
        Ok(self
            .preorder(id)?
            .filter_map(|(_, node)| node.level().depth())
            .max())
    }

    /// Create an unattached bookmark at the given depth.
    pub fn create_node(
        &mut self,
        title: impl Into<String>,
        page_num: Option<i32>,
        depth: u32,
    ) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len());
        let node = BookmarkNode::new(title, page_num, depth);
        log::trace!("Created bookmark {} '{}' at depth {}", id, node.title(), depth);
        self.nodes.push(node);
        id
    }

    /// Children of a node in document order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    /// Parent of a node.
    ///
    /// Fails with [`Error::UnattachedNode`] for a node that has not been
    /// attached (including the root).
    pub fn parent(&self, id: NodeId) -> Result<NodeId> {
        let node = self.node(id)?;
        node.parent.ok_or_else(|| Error::UnattachedNode {
            title: node.title().to_string(),
        })
    }

    /// The sibling list a node belongs to, i.e. its parent's children.
    pub fn owner_list(&self, id: NodeId) -> Result<&[NodeId]> {
        let parent = self.parent(id)?;
        self.children(parent)
    }

    /// Whether `ancestor` is `id` itself or lies on the path from `id` up to the root.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> Result<bool> {
        self.node(ancestor)?;
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return Ok(true);
            }
            current = self.node(cur)?.parent;
        }
        Ok(false)
    }

    /// Append `child` to the end of `parent`'s children.
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let position = self.children(parent)?.len();
        self.insert_child(parent, position, child)
    }

    /// Insert `child` into `parent`'s children at `position`.
    ///
    /// The child must be unattached, must not be the root or an ancestor of
    /// `parent`, must sit exactly one level below `parent`, and its subtree
    /// must stay within `OutlineOptions::max_depth` levels.
    pub fn insert_child(&mut self, parent: NodeId, position: usize, child: NodeId) -> Result<()> {
        let parent_node = self.node(parent)?;
        let expected = parent_node.level().child();
        let len = parent_node.children.len();

        let child_node = self.node(child)?;
        if child_node.is_root() {
            return Err(Error::RootNotAttachable);
        }
        if child_node.is_attached() {
            return Err(Error::AlreadyAttached {
                title: child_node.title().to_string(),
            });
        }
        if self.is_ancestor(child, parent)? {
            return Err(Error::CircularReference {
                title: child_node.title().to_string(),
            });
        }
        if child_node.level() != expected {
            return Err(Error::LevelMismatch {
                title: child_node.title().to_string(),
                expected: expected.as_i32(),
                found: child_node.level().as_i32(),
            });
        }
        if let Some(level) = self.deepest_level(child)? {
            let max_depth = self.options.max_depth;
            if level >= max_depth {
                return Err(Error::DepthLimitExceeded {
                    title: child_node.title().to_string(),
                    level,
                    max_depth,
                });
            }
        }
        if position > len {
            return Err(Error::IndexOutOfRange { index: position, len });
        }

        log::debug!("Attaching bookmark {} under {} at position {}", child, parent, position);
        self.nodes[parent.index()].children.insert(position, child);
        self.nodes[child.index()].parent = Some(parent);
        Ok(())
    }

    /// Remove a node from its parent, returning its former position.
    ///
    /// The node keeps its own subtree and can be attached again elsewhere at
    /// the same level.
    pub fn detach(&mut self, id: NodeId) -> Result<usize> {
        let parent = self.parent(id)?;
        let siblings = &mut self.nodes[parent.index()].children;
        let position = siblings
            .iter()
            .position(|&sibling| sibling == id)
            .ok_or(Error::NodeNotFound(id))?;
        siblings.remove(position);
        self.nodes[id.index()].parent = None;

        log::debug!("Detached bookmark {} from {} (position {})", id, parent, position);
        Ok(position)
    }

    /// Replace the order of `parent`'s children.
    ///
    /// `order` must be a permutation of the current children.
    pub fn reorder_children(&mut self, parent: NodeId, order: &[NodeId]) -> Result<()> {
        let current = self.children(parent)?;
        if current.len() != order.len() {
            return Err(Error::InvalidReorder(format!(
                "expected {} children, got {}",
                current.len(),
                order.len()
            )));
        }

        let mut expected = current.to_vec();
        let mut proposed = order.to_vec();
        expected.sort_unstable();
        proposed.sort_unstable();
        if expected != proposed {
            return Err(Error::InvalidReorder(format!(
                "{:?} is not a permutation of the children of {}",
                order, parent
            )));
        }

        log::debug!("Reordered children of {}", parent);
        self.nodes[parent.index()].children = order.to_vec();
        Ok(())
    }
}
