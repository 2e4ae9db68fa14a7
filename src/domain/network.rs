//! Network: the root of the inventory tree.

use std::fmt;

use tracing::trace;

use crate::domain::error::{require_non_blank, DomainResult};
use crate::domain::printable::impl_display_via_printable;
use crate::domain::tree_format;
use crate::domain::{Computer, Printable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    name: String,
    computers: Vec<Computer>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            computers: Vec::new(),
        }
    }

    /// Like [`Network::new`] but rejects a blank network name.
    pub fn try_new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        require_non_blank("network name", &name)?;
        Ok(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> String {
        format!("Network: {}", self.name)
    }

    pub fn computers(&self) -> &[Computer] {
        &self.computers
    }

    pub fn len(&self) -> usize {
        self.computers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }

    pub fn add_computer(&mut self, computer: Computer) -> &mut Self {
        trace!(network = %self.name, host = computer.name(), "add computer");
        self.computers.push(computer);
        self
    }

    pub fn with_computer(mut self, computer: Computer) -> Self {
        self.add_computer(computer);
        self
    }

    /// First computer named `name`, in insertion order.
    ///
    /// Names are not required to be unique; on duplicates the earliest wins.
    pub fn find_computer(&self, name: &str) -> Option<&Computer> {
        self.computers.iter().find(|c| c.name() == name)
    }

    /// Mutable variant of [`Network::find_computer`], same first-match rule.
    pub fn find_computer_mut(&mut self, name: &str) -> Option<&mut Computer> {
        self.computers.iter_mut().find(|c| c.name() == name)
    }
}

impl Printable for Network {
    /// The network header is never prefixed; `prefix` and `is_last` are ignored.
    fn render(&self, out: &mut dyn fmt::Write, _prefix: &str, _is_last: bool) -> fmt::Result {
        writeln!(out, "{}", self.label())?;
        let count = self.computers.len();
        for (index, computer) in self.computers.iter().enumerate() {
            computer.render(out, "", tree_format::is_last(index, count))?;
        }
        Ok(())
    }
}

impl_display_via_printable!(Network);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_duplicate_names_when_finding_then_first_inserted_wins() {
        let mut network = Network::new("n")
            .with_computer(Computer::new("dup").with_address("1.1.1.1"))
            .with_computer(Computer::new("dup").with_address("2.2.2.2"));

        let found = network.find_computer("dup").unwrap();
        assert_eq!(found.addresses()[0].as_str(), "1.1.1.1");

        network.find_computer_mut("dup").unwrap().add_address("1.1.1.2");
        assert_eq!(network.computers()[0].addresses().len(), 2);
        assert_eq!(network.computers()[1].addresses().len(), 1);
    }

    #[test]
    fn given_unknown_name_when_finding_then_none() {
        let network = Network::new("n").with_computer(Computer::new("a"));
        assert!(network.find_computer("b").is_none());
        assert!(network.find_computer("").is_none());
    }

    #[test]
    fn given_prefix_when_rendering_network_then_header_is_unprefixed() {
        let network = Network::new("n").with_computer(Computer::new("a"));
        let mut out = String::new();
        network.render(&mut out, "| ", false).unwrap();
        assert_eq!(out, "Network: n\n\\-Host: a\n");
    }

    #[test]
    fn given_empty_network_when_displaying_then_only_header() {
        let network = Network::new("n");
        assert!(network.is_empty());
        assert_eq!(network.to_string(), "Network: n");
    }

    #[test]
    fn given_blank_name_when_try_new_then_validation_error() {
        assert!(Network::try_new("").is_err());
        assert_eq!(Network::try_new("lan").unwrap().name(), "lan");
    }
}
