//! Connector and prefix helpers for ASCII tree rendering.
//!
//! ```text
//! Network: N
//! +-Host: a        <- connector(false)
//! | \-10.0.0.1     <- child_prefix("", false) + connector(true)
//! \-Host: b        <- connector(true)
//!   \-10.0.0.2     <- child_prefix("", true) + connector(true)
//! ```

/// Glyph for a node that has later siblings.
pub const BRANCH: &str = "+-";

/// Glyph for the last node among its siblings.
pub const TERMINAL: &str = "\\-";

const PIPE_INDENT: &str = "| ";
const BLANK_INDENT: &str = "  ";

/// Branch glyph for a node, depending on whether it is the last sibling.
pub fn connector(is_last: bool) -> &'static str {
    if is_last {
        TERMINAL
    } else {
        BRANCH
    }
}

/// True iff `index` is the final valid index of a sequence of length `count`.
pub fn is_last(index: usize, count: usize) -> bool {
    count > 0 && index == count - 1
}

/// Extend `prefix` for the children of a node.
///
/// Descendants of a last child get blank indentation so no trailing pipe is drawn.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let indent = if is_last { BLANK_INDENT } else { PIPE_INDENT };
    let mut extended = String::with_capacity(prefix.len() + indent.len());
    extended.push_str(prefix);
    extended.push_str(indent);
    extended
}
