//! Reference inventory used by the CLI and the test suite.

use crate::application::ApplicationResult;
use crate::domain::{Computer, Cpu, Disk, Memory, Network, StorageKind};

pub const SERVER1: &str = "server1.misis.ru";
pub const SERVER2: &str = "server2.misis.ru";

/// Two hosts: one with CPU and memory, one with CPU and a partitioned HDD.
///
/// A blank `name` is rejected as a domain validation error.
pub fn sample_network(name: impl Into<String>) -> ApplicationResult<Network> {
    let network = Network::try_new(name)?
        .with_computer(
            Computer::new(SERVER1)
                .with_address("192.168.1.1")
                .with_component(Cpu::new(4, 2500))
                .with_component(Memory::new(16000)),
        )
        .with_computer(
            Computer::new(SERVER2)
                .with_address("10.0.0.1")
                .with_component(Cpu::new(8, 3200))
                .with_component(
                    Disk::new(StorageKind::Magnetic, 2000)
                        .with_partition(500, "system")
                        .with_partition(1500, "data"),
                ),
        );
    Ok(network)
}

/// Disk added to a cloned host when demonstrating copy independence.
pub fn ssd_extension() -> Disk {
    Disk::new(StorageKind::Ssd, 500).with_partition(500, "fast_storage")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;

    #[test]
    fn given_blank_name_when_building_sample_then_domain_error() {
        let err = sample_network(" ").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Validation {
                field: "network name",
                ..
            })
        ));
    }

    #[test]
    fn given_name_when_building_sample_then_two_hosts_in_order() {
        let network = sample_network("N").unwrap();
        assert_eq!(network.name(), "N");
        let names: Vec<_> = network.computers().iter().map(|c| c.name()).collect();
        assert_eq!(names, [SERVER1, SERVER2]);
    }
}
