//! Network inventory modelling and ASCII tree rendering.
//!
//! ```
//! use nettree::domain::{Computer, Cpu, Network};
//!
//! let network = Network::new("lab")
//!     .with_computer(Computer::new("a").with_address("10.0.0.1").with_component(Cpu::new(2, 1800)));
//! assert_eq!(
//!     network.to_string(),
//!     "Network: lab\n\\-Host: a\n  +-10.0.0.1\n  \\-CPU, 2 cores @ 1800MHz"
//! );
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
