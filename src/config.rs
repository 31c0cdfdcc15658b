//! Configuration for outline rendering and traversal.

/// Separator placed between a title and its page number ("two blanks").
pub const DEFAULT_SEPARATOR: &str = "  ";

/// Default limit on traversal nesting.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Outline configuration.
///
/// # Example
///
/// ```
/// use pdf_outline::OutlineOptions;
///
/// let opts = OutlineOptions::new().with_separator("\t").with_max_depth(32);
/// assert_eq!(opts.separator, "\t");
/// assert_eq!(opts.max_depth, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Text placed between title and page number on every rendered line.
    pub separator: String,

    /// Number of visible levels an outline may hold.
    ///
    /// Bookmarks may sit at levels `0..max_depth`. Attaching anything deeper
    /// fails with `Error::DepthLimitExceeded`, which keeps the recursive
    /// traversal bounded.
    pub max_depth: u32,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineOptions {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the title/page separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the traversal depth limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}
