//! Rendering capability shared by every entity that appears in the tree.

use std::fmt;

/// An entity that can render itself as part of an ASCII tree.
///
/// `Clone` is a supertrait: all entities own their children by value, so a
/// clone is a fully independent deep copy of the subtree.
pub trait Printable: Clone {
    /// Write this node (and, for composites, its children) to `out`.
    ///
    /// Every line written is `prefix`-indented and newline-terminated. `is_last`
    /// selects the terminal connector for this node and controls how the prefix
    /// is extended for its children.
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result;

    /// Render as a standalone subtree and strip the single trailing newline.
    fn to_display_string(&self) -> String {
        let mut buf = String::new();
        // A String sink never fails; a failing render keeps what it wrote.
        let _ = self.render(&mut buf, "", true);
        if buf.ends_with('\n') {
            buf.pop();
        }
        buf
    }
}

/// Implement `Display` in terms of [`Printable::to_display_string`].
macro_rules! impl_display_via_printable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&$crate::domain::Printable::to_display_string(self))
                }
            }
        )+
    };
}

pub(crate) use impl_display_via_printable;
