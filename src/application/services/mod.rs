//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod inventory;

pub use inventory::InventoryService;
