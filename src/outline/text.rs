//! Tab-indented text rendering of an outline.
//!
//! Every visible bookmark becomes exactly one line:
//!
//! ```text
//! <TAB x depth><title><separator><page>\n
//! ```
//!
//! The title is written verbatim, the separator is always present, and a
//! missing page number renders as an empty field. This is the interchange
//! form consumed by outline writers and read back by the text parser.

use std::fmt;

use super::node::{BookmarkNode, Level, NodeId};
use super::tree::Outline;
use crate::config::DEFAULT_SEPARATOR;
use crate::error::Result;

/// Single-line rendering of the root sentinel.
pub const ROOT_LINE: &str = "root\n";

/// Append one formatted line to `out`.
///
/// ```
/// use pdf_outline::write_line;
///
/// let mut text = String::new();
/// write_line(&mut text, 2, "Scope", "14", "  ");
/// assert_eq!(text, "\t\tScope  14\n");
/// ```
pub fn write_line(out: &mut String, depth: u32, title: &str, page: &str, separator: &str) {
    for _ in 0..depth {
        out.push('\t');
    }
    out.push_str(title);
    out.push_str(separator);
    out.push_str(page);
    out.push('\n');
}

fn page_field(page_num: Option<i32>) -> String {
    page_num.map(|p| p.to_string()).unwrap_or_default()
}

fn render_node(out: &mut String, node: &BookmarkNode, separator: &str) {
    match node.level() {
        Level::Root => out.push_str(ROOT_LINE),
        Level::Depth(depth) => {
            write_line(out, depth, node.title(), &page_field(node.page_num()), separator)
        },
    }
}

impl Outline {
    /// Render a single node (without its children).
    ///
    /// The root renders as `"root\n"`.
    pub fn render_line(&self, id: NodeId) -> Result<String> {
        let mut text = String::new();
        render_node(&mut text, self.node(id)?, &self.options.separator);
        Ok(text)
    }

    /// Render the subtree at `id` in document order, one line per bookmark.
    ///
    /// The root sentinel itself never produces a line.
    pub fn subtree_text(&self, id: NodeId) -> Result<String> {
        let separator = self.options.separator.as_str();
        let mut text = String::new();
        self.traverse(id, |_, node| render_node(&mut text, node, separator))?;
        Ok(text)
    }

    /// Render the whole outline. An empty outline renders as `""`.
    pub fn to_text(&self) -> Result<String> {
        self.subtree_text(self.root())
    }
}

/// Single-line rendering with [`DEFAULT_SEPARATOR`].
///
/// A node does not know the options of the outline it lives in, so under a
/// custom separator this differs from [`Outline::render_line`]; use that to
/// get the line exactly as [`Outline::to_text`] writes it.
impl fmt::Display for BookmarkNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::new();
        render_node(&mut line, self, DEFAULT_SEPARATOR);
        f.write_str(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutlineOptions;

    #[test]
    fn test_write_line_without_page() {
        let mut text = String::new();
        write_line(&mut text, 0, "Preface", "", "  ");
        assert_eq!(text, "Preface  \n");
    }

    #[test]
    fn test_write_line_indents_with_tabs() {
        let mut text = String::new();
        write_line(&mut text, 3, "Deep", "9", "  ");
        assert_eq!(text, "\t\t\tDeep  9\n");
    }

    #[test]
    fn test_page_field() {
        assert_eq!(page_field(None), "");
        assert_eq!(page_field(Some(7)), "7");
        assert_eq!(page_field(Some(1200)), "1200");
        assert_eq!(page_field(Some(-3)), "-3");
    }

    #[test]
    fn test_render_line_of_root() {
        let outline = Outline::new();
        assert_eq!(outline.render_line(outline.root()).unwrap(), "root\n");
        assert_eq!(outline.node(outline.root()).unwrap().to_string(), "root\n");
    }

    #[test]
    fn test_render_line_excludes_children() {
        let mut outline = Outline::new();
        let root = outline.root();
        let chapter = outline.create_node("Chapter 1", Some(5), 0);
        let section = outline.create_node("Section 1.1", Some(6), 1);
        outline.attach_child(root, chapter).unwrap();
        outline.attach_child(chapter, section).unwrap();

        assert_eq!(outline.render_line(chapter).unwrap(), "Chapter 1  5\n");
        assert_eq!(outline.render_line(section).unwrap(), "\tSection 1.1  6\n");
        assert_eq!(outline.node(section).unwrap().to_string(), "\tSection 1.1  6\n");
    }

    #[test]
    fn test_custom_separator() {
        let mut outline = Outline::with_options(OutlineOptions::new().with_separator(" ... "));
        let root = outline.root();
        let entry = outline.create_node("Index", None, 0);
        outline.attach_child(root, entry).unwrap();
        assert_eq!(outline.to_text().unwrap(), "Index ... \n");
    }

    #[test]
    fn test_title_is_verbatim() {
        let mut outline = Outline::new();
        let root = outline.root();
        let entry = outline.create_node("  A\tB  ", Some(1), 0);
        outline.attach_child(root, entry).unwrap();
        assert_eq!(outline.to_text().unwrap(), "  A\tB    1\n");
    }

    #[test]
    fn test_empty_outline() {
        assert_eq!(Outline::new().to_text().unwrap(), "");
    }
}
