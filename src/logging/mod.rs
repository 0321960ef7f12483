// file: src/logging/mod.rs
// version: 1.0.0
// guid: 6d3f0b81-a2e5-4c7d-9f14-8b0e7c2a5d39

//! Logging system for the mktcpip agent

pub mod logger;

pub use logger::init_logger;
