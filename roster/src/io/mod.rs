//! Side-effecting operations: store files, audit log, configuration.

pub mod audit;
pub mod config;
pub mod store;
