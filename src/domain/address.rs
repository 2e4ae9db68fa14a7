//! Network address leaf.

use std::fmt;

use crate::domain::printable::impl_display_via_printable;
use crate::domain::tree_format::connector;
use crate::domain::Printable;

/// A network address attached to a computer. Rendered verbatim, no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    address: String,
}

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

impl Printable for Address {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(out, "{prefix}{}{}", connector(is_last), self.address)
    }
}

impl_display_via_printable!(Address);
