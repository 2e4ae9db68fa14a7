//! Computer: a host owning its addresses and hardware components.

use std::fmt;

use tracing::trace;

use crate::domain::error::{require_non_blank, DomainResult};
use crate::domain::printable::impl_display_via_printable;
use crate::domain::tree_format::{self, child_prefix, connector};
use crate::domain::{Address, Component, Printable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    name: String,
    addresses: Vec<Address>,
    components: Vec<Component>,
}

impl Computer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addresses: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Like [`Computer::new`] but rejects a blank host name.
    pub fn try_new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        require_non_blank("host name", &name)?;
        Ok(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> String {
        format!("Host: {}", self.name)
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    pub fn add_address(&mut self, address: impl Into<String>) -> &mut Self {
        let address = Address::new(address);
        trace!(host = %self.name, address = address.as_str(), "add address");
        self.addresses.push(address);
        self
    }

    /// Like [`Computer::add_address`] but rejects blank address text.
    pub fn try_add_address(&mut self, address: impl Into<String>) -> DomainResult<&mut Self> {
        let address = address.into();
        require_non_blank("address", &address)?;
        Ok(self.add_address(address))
    }

    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        let component = component.into();
        trace!(host = %self.name, ?component, "add component");
        self.components.push(component);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.add_address(address);
        self
    }

    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.add_component(component);
        self
    }
}

impl Printable for Computer {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(out, "{prefix}{}{}", connector(is_last), self.label())?;

        let sub_prefix = child_prefix(prefix, is_last);

        // The last address is only terminal when no component follows it.
        let has_components = !self.components.is_empty();
        let address_count = self.addresses.len();
        for (index, address) in self.addresses.iter().enumerate() {
            let last = !has_components && tree_format::is_last(index, address_count);
            address.render(out, &sub_prefix, last)?;
        }

        let component_count = self.components.len();
        for (index, component) in self.components.iter().enumerate() {
            component.render(
                out,
                &sub_prefix,
                tree_format::is_last(index, component_count),
            )?;
        }
        Ok(())
    }
}

impl_display_via_printable!(Computer);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cpu, Disk, Memory, StorageKind};
    use rstest::rstest;

    #[test]
    fn given_addresses_only_when_rendering_then_last_address_is_terminal() {
        let host = Computer::new("h").with_address("10.0.0.1").with_address("10.0.0.2");
        assert_eq!(
            host.to_string(),
            "\\-Host: h\n  +-10.0.0.1\n  \\-10.0.0.2"
        );
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    fn given_components_when_rendering_then_last_address_keeps_branch(#[case] addresses: usize) {
        let mut host = Computer::new("h");
        for i in 0..addresses {
            host.add_address(format!("10.0.0.{i}"));
        }
        host.add_component(Memory::new(1));

        let shown = host.to_string();
        let last_address = format!("10.0.0.{}", addresses - 1);
        assert!(shown.contains(&format!("  +-{last_address}\n")), "{shown}");
        assert!(shown.ends_with("  \\-Memory, 1 MiB"));
    }

    #[test]
    fn given_no_children_when_rendering_then_only_header() {
        assert_eq!(Computer::new("empty").to_string(), "\\-Host: empty");
    }

    #[test]
    fn given_non_last_host_with_disk_when_rendering_then_partitions_nest_under_pipe() {
        let host = Computer::new("h").with_component(
            Disk::new(StorageKind::Ssd, 10).with_partition(10, "root"),
        );
        let mut out = String::new();
        host.render(&mut out, "", false).unwrap();
        assert_eq!(out, "+-Host: h\n| \\-SSD, 10 GiB\n|   \\-[0]: 10 GiB, root\n");
    }

    #[test]
    fn given_chained_borrowed_builders_when_adding_then_order_preserved() {
        let mut host = Computer::new("h");
        host.add_address("a")
            .add_component(Cpu::new(2, 1000))
            .add_address("b")
            .add_component(Memory::new(8));

        let addresses: Vec<&str> = host.addresses().iter().map(Address::as_str).collect();
        assert_eq!(addresses, ["a", "b"]);
        assert_eq!(host.components()[0], Component::Cpu(Cpu::new(2, 1000)));
        assert_eq!(host.components()[1], Component::Memory(Memory::new(8)));
    }

    #[test]
    fn given_blank_inputs_when_validating_then_rejects_without_side_effects() {
        assert!(Computer::try_new(" ").is_err());

        let mut host = Computer::try_new("h").unwrap();
        host.try_add_address("10.0.0.1").unwrap();
        assert!(host.try_add_address("").is_err());
        assert_eq!(host.addresses().len(), 1);
    }

    #[test]
    fn given_clone_when_mutating_nested_disk_then_original_untouched() {
        let original =
            Computer::new("h").with_component(Disk::new(StorageKind::Ssd, 10).with_partition(1, "a"));
        let mut copy = original.clone();
        copy.components_mut()[0]
            .as_disk_mut()
            .unwrap()
            .add_partition(2, "b");
        copy.add_address("10.0.0.9");

        assert_eq!(original.components()[0].as_disk().unwrap().partitions().len(), 1);
        assert!(original.addresses().is_empty());
        assert_eq!(copy.components()[0].as_disk().unwrap().partitions().len(), 2);
    }
}
