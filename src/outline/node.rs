//! Bookmark node types.

use std::fmt;

use super::seq;

/// Title carried by the hidden root sentinel.
pub const ROOT_TITLE: &str = "root";

/// Handle to a node stored in an [`Outline`](super::Outline).
///
/// Handles are only meaningful for the outline that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn from_raw(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the outline's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Nesting depth of a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// The hidden root sentinel, never rendered
    Root,
    /// A visible entry; `Depth(0)` is top-level
    Depth(u32),
}

impl Level {
    /// Numeric form used in interchange: `-1` for the root, otherwise the depth.
    pub fn as_i32(self) -> i32 {
        match self {
            Level::Root => -1,
            Level::Depth(depth) => i32::try_from(depth).unwrap_or(i32::MAX),
        }
    }

    /// Depth of a visible entry, `None` for the root.
    pub fn depth(self) -> Option<u32> {
        match self {
            Level::Root => None,
            Level::Depth(depth) => Some(depth),
        }
    }

    /// Level of a direct child.
    pub fn child(self) -> Level {
        match self {
            Level::Root => Level::Depth(0),
            Level::Depth(depth) => Level::Depth(depth.saturating_add(1)),
        }
    }

    /// Whether this is the root sentinel level.
    pub fn is_root(self) -> bool {
        matches!(self, Level::Root)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// A single entry in the outline.
///
/// Nodes are created through [`Outline::create_node`](super::Outline::create_node)
/// and linked with [`Outline::attach_child`](super::Outline::attach_child);
/// structural fields are only changed by the outline so the parent link and
/// the child list never disagree.
#[derive(Debug, PartialEq, Eq)]
pub struct BookmarkNode {
    title: String,
    page_num: Option<i32>,
    seq: Option<String>,
    level: Level,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    index: Option<usize>,
}

impl BookmarkNode {
    pub(crate) fn new(title: impl Into<String>, page_num: Option<i32>, depth: u32) -> Self {
        Self {
            title: title.into(),
            page_num,
            seq: None,
            level: Level::Depth(depth),
            children: Vec::new(),
            parent: None,
            index: None,
        }
    }

    pub(crate) fn root() -> Self {
        Self {
            title: ROOT_TITLE.to_string(),
            page_num: None,
            seq: None,
            level: Level::Root,
            children: Vec::new(),
            parent: None,
            index: None,
        }
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the display title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Target page in the destination document, if any.
    pub fn page_num(&self) -> Option<i32> {
        self.page_num
    }

    /// Dotted sequence label, present only when well-formed.
    pub fn seq(&self) -> Option<&str> {
        self.seq.as_deref()
    }

    /// Set the sequence label.
    ///
    /// Malformed labels are stored as `None`; this never fails.
    pub fn set_seq(&mut self, candidate: Option<&str>) {
        self.seq = seq::normalize(candidate);
    }

    /// Nesting level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether this node is the hidden root sentinel.
    pub fn is_root(&self) -> bool {
        self.level.is_root()
    }

    /// Children in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node currently has a parent.
    pub fn is_attached(&self) -> bool {
        self.parent.is_some()
    }

    /// Source line this node was derived from.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Record the source line this node was derived from.
    pub fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }
}
