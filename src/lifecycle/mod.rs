//! Runtime orchestration and lifecycle management.
//!
//! - [`ClinicSystem`] - starts the six clinic actors, wires their dependencies and shuts
//!   them down
//! - [`ClinicConfig`] - mailbox capacity and the first id of the shared counter
//! - [`seed`] - the deterministic sample data loaded by the demo

pub mod clinic_system;
pub mod config;
pub mod seed;

pub use clinic_system::*;
pub use config::*;
pub use seed::*;
