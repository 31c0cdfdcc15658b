//! # PDF Outline
//!
//! Data model and text serialization for document outlines (bookmarks).
//!
//! An [`Outline`] is an arena of [`BookmarkNode`]s hanging off a hidden root
//! sentinel. Attached nodes point back at their parent through a non-owning
//! [`NodeId`], and the whole tree renders to a flat, tab-indented text form:
//!
//! ```text
//! Chapter 1  5
//! \tSection 1.1  6
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pdf_outline::OutlineBuilder;
//!
//! # fn main() -> pdf_outline::Result<()> {
//! let mut builder = OutlineBuilder::new();
//! builder.item("Chapter 1", Some(5))?;
//! builder.child("Section 1.1", Some(6))?;
//! let outline = builder.build();
//!
//! assert_eq!(outline.to_text()?, "Chapter 1  5\n\tSection 1.1  6\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Bookmark tree and its text form
pub mod outline;

// Re-exports
pub use config::{OutlineOptions, DEFAULT_SEPARATOR};
pub use error::{Error, Result};
pub use outline::{
    is_valid_seq, write_line, BookmarkNode, Level, NodeId, Outline, OutlineBuilder, Preorder,
};
