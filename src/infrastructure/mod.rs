//! Infrastructure layer
//!
//! ESP32 implementations of the greenhouse ports plus the network tasks.

pub(crate) mod config;
pub mod drivers;
pub mod hardware;
pub mod tasks;
pub(crate) mod types;
