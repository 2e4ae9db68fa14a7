//! Inventory service
//!
//! Guards one network behind a single exclusive lock so it can be shared
//! between threads. Every mutating sequence runs under that lock.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Computer, Network, Printable};

/// Service owning a network and serialising access to it.
#[derive(Debug)]
pub struct InventoryService {
    network: Mutex<Network>,
}

impl InventoryService {
    /// Create a new inventory service.
    pub fn new(network: Network) -> Self {
        Self {
            network: Mutex::new(network),
        }
    }

    fn lock(&self) -> ApplicationResult<MutexGuard<'_, Network>> {
        self.network
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)
    }

    /// Append a computer to the guarded network.
    #[instrument(level = "debug", skip(self, computer), fields(host = computer.name()))]
    pub fn add_computer(&self, computer: Computer) -> ApplicationResult<()> {
        self.lock()?.add_computer(computer);
        Ok(())
    }

    /// Independent copy of the first computer named `name`.
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, name: &str) -> ApplicationResult<Computer> {
        let network = self.lock()?;
        network
            .find_computer(name)
            .cloned()
            .ok_or_else(|| ApplicationError::HostNotFound(name.to_string()))
    }

    /// Run `f` on the first computer named `name` while holding the lock.
    #[instrument(level = "debug", skip(self, f))]
    pub fn update_computer<R>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Computer) -> R,
    ) -> ApplicationResult<R> {
        let mut network = self.lock()?;
        let computer = network
            .find_computer_mut(name)
            .ok_or_else(|| ApplicationError::HostNotFound(name.to_string()))?;
        let result = f(&mut *computer);
        debug!(
            components = computer.components().len(),
            addresses = computer.addresses().len(),
            "updated"
        );
        Ok(result)
    }

    /// Deep copy of the whole network; later updates do not affect it.
    pub fn snapshot(&self) -> ApplicationResult<Network> {
        Ok(self.lock()?.clone())
    }

    /// Render the network as an ASCII tree, without the trailing newline.
    pub fn render(&self) -> ApplicationResult<String> {
        let network = self.lock()?;
        let mut out = String::new();
        network.render(&mut out, "", true)?;
        if out.ends_with('\n') {
            out.pop();
        }
        Ok(out)
    }

    /// Consume the service and return the network.
    pub fn into_inner(self) -> ApplicationResult<Network> {
        self.network
            .into_inner()
            .map_err(|_| ApplicationError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sample::{sample_network, ssd_extension, SERVER2};

    #[test]
    fn given_missing_host_when_updating_then_host_not_found() {
        let service = InventoryService::new(sample_network("n").unwrap());
        let err = service.update_computer("nope", |_| ()).unwrap_err();
        assert!(matches!(err, ApplicationError::HostNotFound(ref n) if n == "nope"));
    }

    #[test]
    fn given_snapshot_when_updating_service_then_snapshot_unchanged() {
        let service = InventoryService::new(sample_network("n").unwrap());
        let before = service.snapshot().unwrap();

        service
            .update_computer(SERVER2, |c| {
                c.add_component(ssd_extension());
            })
            .unwrap();

        assert_eq!(before.find_computer(SERVER2).unwrap().components().len(), 2);
        assert_eq!(service.find(SERVER2).unwrap().components().len(), 3);
    }

    #[test]
    fn given_render_when_called_then_matches_display() {
        let network = sample_network("n").unwrap();
        let expected = network.to_string();
        let service = InventoryService::new(network);
        assert_eq!(service.render().unwrap(), expected);
    }
}
