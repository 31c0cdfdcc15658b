//! Sequence labels.
//!
//! A sequence label is the document's own dotted numbering for an entry, such
//! as `"1.2.5"`. Labels are extracted heuristically from titles upstream, so
//! anything that is not a well-formed dotted integer is discarded rather than
//! reported.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whole-string dotted integer: at least two ASCII digit groups.
    static ref RE_SEQ: Regex = Regex::new(r"^([0-9]+\.)+[0-9]+$").unwrap();
}

/// Check whether `candidate` is a well-formed sequence label.
///
/// ```
/// use pdf_outline::is_valid_seq;
///
/// assert!(is_valid_seq("12.3.10"));
/// assert!(!is_valid_seq("12"));
/// assert!(!is_valid_seq("1.2."));
/// ```
pub fn is_valid_seq(candidate: &str) -> bool {
    RE_SEQ.is_match(candidate)
}

/// Keep a valid label, drop anything else.
pub(crate) fn normalize(candidate: Option<&str>) -> Option<String> {
    let candidate = candidate?;
    if is_valid_seq(candidate) {
        Some(candidate.to_string())
    } else {
        log::debug!("Dropping malformed sequence label {:?}", candidate);
        None
    }
}
